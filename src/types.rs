//! Core types for Stockcast

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: Option<Category>,
}

impl Product {
    /// Copy of this product with the id replaced.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Copy of this product with both identity fields replaced.
    pub fn with_identity(mut self, id: i32, name: String) -> Self {
        self.id = id;
        self.name = name;
        self
    }
}

/// A synthetic weather forecast, generated per request and never persisted.
///
/// `temperature_f` is derived from `temperature_c` at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: DateTime<Utc>,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    pub fn new(date: DateTime<Utc>, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: fahrenheit(temperature_c),
            summary,
        }
    }
}

// Helper functions

/// Fahrenheit equivalent, with the division truncated toward zero.
fn fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}
