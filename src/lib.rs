pub mod prelude {
    pub use super::app::App;
    pub use super::errors::{AppError, AppResult};
    pub use super::routes::app;
    pub use super::store::{store, VisitCounter, VISIT_KEY};
    pub use axum::response::IntoResponse;
    pub use axum::routing::{delete, get, patch, post, put};
    pub use axum::{Extension, Router};
    pub use tracing::{debug, error, info, trace, warn};
}

pub mod app;
pub mod errors;
pub mod routes;
pub mod store;
