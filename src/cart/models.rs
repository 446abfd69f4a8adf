//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Product line every size variant belongs to
pub const PRODUCT_NAME: &str = "Café ORIGIN Finca Los Robles";

/// Returns the display name for a size variant, e.g. `"Café ORIGIN Finca Los Robles 250g"`
pub fn display_name_for(size_key: &str) -> String {
    format!("{} {}", PRODUCT_NAME, size_key)
}

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for line items
fn default_quantity() -> u32 {
    1
}

/// One cart entry: a size variant, its unit price and how many were added.
///
/// Field names on the wire match the keys the storefront page has always
/// written to local storage (`size`, `price`, `quantity`, `name`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Identifier of the size variant (e.g. `"250g"`)
    #[serde(rename = "size")]
    pub size_key: String,

    /// Price of a single unit, in whole currency units
    #[serde(rename = "price")]
    pub unit_price: u64,

    /// Number of units (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Name shown in the cart and in order messages
    #[serde(rename = "name", default)]
    pub display_name: String,
}

impl LineItem {
    /// Creates a single-unit line item with the derived display name
    pub fn new(size_key: impl Into<String>, unit_price: u64) -> Self {
        let size_key = size_key.into();
        Self {
            display_name: display_name_for(&size_key),
            size_key,
            unit_price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`, saturating at `u64::MAX`
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Input for adding one unit of a size variant
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// Size variant identifier
    pub size: String,

    /// Unit price of the variant
    pub price: u64,
}

/// Input for removing a size variant from the cart
#[derive(Debug, Deserialize)]
pub struct RemoveItemInput {
    /// Size variant identifier
    pub size: String,
}

/// Input for folding a batch of line items into the cart
#[derive(Debug, Deserialize)]
pub struct MergeItemsInput {
    /// Items to merge
    pub items: Vec<LineItem>,
}

/// Current cart contents as returned by every cart endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Line items in insertion order
    pub items: Vec<LineItem>,

    /// Sum of all line totals
    pub total: u64,

    /// Sum of all quantities
    pub item_count: u64,
}
