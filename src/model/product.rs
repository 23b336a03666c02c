use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;
use utoipa::ToSchema;

/// Type-safe identifier for Products.
///
/// Serializes as a bare integer, so `Product` renders as `{"id": 1, "name": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strict parse: `"12abc"` and `"-1"` are errors rather than a truncated number.
impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// A product held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = u64, example = 1)]
    pub id: ProductId,
    #[schema(example = "Widget")]
    pub name: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system)
    /// * `name` - Product name
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreate {
    pub name: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_id_as_integer() {
        let product = Product::new(ProductId(3), "Widget");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Widget" }));
    }

    #[test]
    fn test_product_id_parse_is_strict() {
        assert_eq!("12".parse::<ProductId>().unwrap(), ProductId(12));
        assert!("12abc".parse::<ProductId>().is_err());
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
        assert!("1.5".parse::<ProductId>().is_err());
    }
}
