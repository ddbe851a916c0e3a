use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity - the persisted record
///
/// The id is assigned by the store on insert and is never reused within a
/// store instance. A product is immutable once persisted; the only lifecycle
/// transition is deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier, > 0 once persisted
    pub id: i64,
    /// Product name
    pub name: String,
    /// Monetary price, exact decimal semantics
    pub price: Decimal,
}

/// DTO for creating a new product
///
/// Deliberately permissive: empty names and non-positive prices are accepted,
/// matching the documented create contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Output projection of a product - same values, no hidden fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    /// Sort key, "name" or "price" (case-insensitive)
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// Reverse the chosen ordering
    #[serde(default)]
    pub sort_descending: bool,
}

fn default_sort_by() -> String {
    "name".to_string()
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            sort_descending: false,
        }
    }
}
