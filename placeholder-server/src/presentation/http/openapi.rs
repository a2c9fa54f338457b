use utoipa::OpenApi;

use crate::presentation::http::app_error::ErrorBody;
use crate::presentation::http::handlers::comments::CommentDto;
use crate::presentation::http::handlers::posts::PostDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "placeholder-server",
        description = "REST proxy over the JSONPlaceholder posts and comments API"
    ),
    paths(
        crate::presentation::http_handlers::root,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::comments::list_comments
    ),
    components(schemas(PostDto, CommentDto, ErrorBody)),
    tags(
        (name = "posts", description = "Post endpoints"),
        (name = "comments", description = "Comment endpoints")
    )
)]
pub(crate) struct ApiDoc;
