use std::sync::Arc;

use crate::data::posts_gateway::PostsGateway;

pub(crate) mod http;
pub(crate) mod http_handlers;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) gateway: Arc<dyn PostsGateway>,
}

impl AppState {
    pub(crate) fn new(gateway: Arc<dyn PostsGateway>) -> Self {
        Self { gateway }
    }
}
