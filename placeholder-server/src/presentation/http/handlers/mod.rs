pub(crate) mod comments;
pub(crate) mod posts;
