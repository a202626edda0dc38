//! API request handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::routes::AppState;
use crate::forecast;
use crate::random;
use crate::types::{Category, Product, WeatherForecast};

// Request bodies

/// Payload for creating a product. The server assigns its own id and name;
/// the ones supplied here are accepted but replaced.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProductRequest {
    /// Caller-supplied id (replaced server-side)
    pub id: i32,
    /// Caller-supplied name (replaced server-side)
    pub name: String,
    /// Optional category to attach
    pub category: Option<Category>,
}

impl CreateProductRequest {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
        }
    }
}

/// Payload for updating a product. The body id is overwritten by the path id.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProductRequest {
    /// Id from the body (the path id wins)
    pub id: i32,
    /// Updated name
    pub name: String,
    /// Updated category
    pub category: Option<Category>,
}

impl UpdateProductRequest {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
        }
    }
}

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Five-day synthetic weather forecast
#[utoipa::path(
    get,
    path = "/weatherforecast",
    responses(
        (status = 200, description = "One forecast per day for the next five days", body = [WeatherForecast])
    ),
    tag = "forecast"
)]
pub async fn weather_forecast(State(state): State<AppState>) -> Json<Vec<WeatherForecast>> {
    Json(forecast::five_day_forecast(state.random.as_ref(), Utc::now()))
}

/// Get a single product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, StatusCode> {
    match state.products.get_product(id).await {
        Some(product) => Ok(Json(product)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Create a product with a server-generated identity
///
/// The submitted id and name are discarded; the category passes through.
/// Nothing is written to the catalog.
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product with generated id and name", body = Product)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Json<Product> {
    let random = state.random.as_ref();
    let created = req
        .into_product()
        .with_identity(random::product_id(random), random::first_name(random).to_string());

    match serde_json::to_string(&created) {
        Ok(json) => tracing::info!(product = %json, "product created"),
        Err(e) => tracing::warn!("failed to serialize created product: {}", e),
    }

    Json(created)
}

/// Update a product, taking the id from the path
///
/// Pure transformation of the request payload; nothing is written to the
/// catalog.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product with the path id", body = Product)
    ),
    tag = "products"
)]
pub async fn update_product(
    Path(id): Path<i32>,
    Json(req): Json<UpdateProductRequest>,
) -> Json<Product> {
    Json(req.into_product().with_id(id))
}
