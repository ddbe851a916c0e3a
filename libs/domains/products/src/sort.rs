//! Sort policy - pure ordering of products by a named key.

use std::str::FromStr;

use strum::{Display, EnumString};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Recognized sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    Name,
    Price,
}

/// Order products by the named key.
///
/// The key is matched case-insensitively against the recognized set; anything
/// else fails with [`ProductError::InvalidSortKey`] carrying the offending
/// string - there is no silent fallback to a default. The sort is stable, so
/// products with equal sort values keep their relative input order, with
/// `descending` reversing the comparison rather than the result.
pub fn order_by(
    mut products: Vec<Product>,
    key: &str,
    descending: bool,
) -> ProductResult<Vec<Product>> {
    let sort_key =
        SortKey::from_str(key).map_err(|_| ProductError::InvalidSortKey(key.to_string()))?;

    match (sort_key, descending) {
        (SortKey::Name, false) => products.sort_by(|a, b| a.name.cmp(&b.name)),
        (SortKey::Name, true) => products.sort_by(|a, b| b.name.cmp(&a.name)),
        (SortKey::Price, false) => products.sort_by(|a, b| a.price.cmp(&b.price)),
        (SortKey::Price, true) => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    Ok(products)
}
