//! API route definitions

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, CreateProductRequest, HealthResponse, UpdateProductRequest};
use crate::config::Environment;
use crate::random::RandomSource;
use crate::repo::ProductRepository;
use crate::types::{Category, Product, WeatherForecast};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockcast API",
        version = "0.1.0",
        description = "Minimal product catalog and weather forecast API"
    ),
    tags(
        (name = "products", description = "Product lookup and editing"),
        (name = "forecast", description = "Synthetic weather forecasts"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::weather_forecast,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
    ),
    components(schemas(
        Product,
        Category,
        WeatherForecast,
        CreateProductRequest,
        UpdateProductRequest,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
///
/// The repository and the random source are injected here, never resolved
/// from a global.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>, random: Arc<dyn RandomSource>) -> Self {
        Self { products, random }
    }
}

/// Fallback for unmatched routes: bounce to the interactive docs.
async fn docs_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/docs")])
}

/// Create the API router
///
/// Swagger UI and the OpenAPI document are only mounted in `Development`;
/// the fallback redirect is unconditional.
pub fn create_router(state: AppState, environment: Environment) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Forecast
        .route("/weatherforecast", get(handlers::weather_forecast))
        // Products
        .route("/products", post(handlers::create_product))
        .route("/products/{id}", get(handlers::get_product))
        .route("/products/{id}", put(handlers::update_product))
        // Health
        .route("/health", get(handlers::health));

    if environment.docs_enabled() {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    router
        .fallback(docs_redirect)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
