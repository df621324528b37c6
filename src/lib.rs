//! HBnB API: in-memory REST backend for the property-rental domain.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use repository::{Conflict, InMemoryRepository};
pub use routes::{app_router, common_routes, user_routes, API_PREFIX};
pub use service::HbnbFacade;
pub use state::AppState;
