//! HTTP API layer

mod handlers;
mod routes;

pub use routes::{create_router, ApiDoc, AppState};
