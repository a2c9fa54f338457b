pub(crate) mod posts_gateway;
pub(crate) mod upstream;
