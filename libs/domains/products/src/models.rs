use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::repository::Entity;

/// Product entity
///
/// Identifiers are assigned by the caller; the store only guarantees they
/// stay unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct Product {
    /// Product identifier
    pub id: i32,

    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Unit price; optional in storage, required on submission
    #[serde(deserialize_with = "blank_as_none")]
    #[schema(value_type = Option<String>, example = "100")]
    #[validate(required(message = "Price is required"))]
    pub price: Option<Decimal>,

    /// Units in stock; required on submission
    #[serde(deserialize_with = "blank_as_none")]
    #[schema(value_type = Option<i32>, example = 12)]
    #[validate(required(message = "Stock is required"))]
    pub stock: Option<i32>,

    /// Color label
    #[validate(length(min = 1, message = "Color is required"))]
    pub color: String,
}

impl Product {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: Some(price),
            stock: Some(stock),
            color: color.into(),
        }
    }

    /// Empty product carrying only an identifier.
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl Entity for Product {
    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(id: i32) -> Self {
        Product::with_id(id)
    }
}

/// Sample catalog used to seed a fresh store.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Kalem", Decimal::from(100), 12, "Kırmızı"),
        Product::new(2, "Defter", Decimal::from(200), 10, "Mavi"),
    ]
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldInput<T> {
    Text(String),
    Value(T),
}

// Form posts send an empty string for an untouched input.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<FieldInput<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FieldInput::Value(value)) => Ok(Some(value)),
        Some(FieldInput::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(FieldInput::Text(text)) => text
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
