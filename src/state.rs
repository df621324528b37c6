//! Shared application state for all routes. Built once at startup and injected into handlers.

use crate::service::HbnbFacade;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub facade: Arc<HbnbFacade>,
}

impl AppState {
    pub fn new(facade: HbnbFacade) -> Self {
        AppState {
            facade: Arc::new(facade),
        }
    }
}
