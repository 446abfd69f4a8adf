//! Cart rendering hooks
//!
//! The page shows three things derived from the cart: the item-count badge,
//! the line-item list and the total. `CartView` is a snapshot of all three;
//! observers registered on the store receive a fresh one after each mutation.

use askama::Template;
use serde::Serialize;

use super::helpers::{cart_total, item_count};
use super::models::LineItem;

/// Text shown in place of the list when the cart has no items
pub const EMPTY_CART_TEXT: &str = "Tu carrito está vacío";

/// One rendered row of the cart list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub size: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

/// Snapshot of everything the page renders from the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Number on the cart badge (sum of quantities). The badge is hidden at 0.
    pub item_count: u64,
    pub lines: Vec<LineView>,
    pub total: u64,
}

impl CartView {
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            item_count: item_count(items),
            lines: items
                .iter()
                .map(|i| LineView {
                    size: i.size_key.clone(),
                    name: i.display_name.clone(),
                    price: i.unit_price,
                    quantity: i.quantity,
                    line_total: i.line_total(),
                })
                .collect(),
            total: cart_total(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the badge should be displayed at all
    pub fn badge_visible(&self) -> bool {
        self.item_count > 0
    }

    /// Formatted total, e.g. `"$800"`
    pub fn total_text(&self) -> String {
        format!("${}", self.total)
    }
}

/// Subscriber notified after every cart mutation.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, view: &CartView);
}

/// Observer that logs each change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CartObserver for TracingObserver {
    fn cart_changed(&self, view: &CartView) {
        tracing::info!(
            item_count = view.item_count,
            lines = view.lines.len(),
            total = view.total,
            "cart updated"
        );
    }
}

/// Cart list fragment (rows and total) for the cart modal.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
    pub empty_text: &'a str,
}

/// Cart count badge fragment, hidden while the cart is empty.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate<'a> {
    pub cart: &'a CartView,
}

/// Renders the cart list fragment the page swaps into its cart modal.
pub fn render_cart_html(view: &CartView) -> askama::Result<String> {
    CartItemsTemplate {
        cart: view,
        empty_text: EMPTY_CART_TEXT,
    }
    .render()
}

/// Renders the item-count badge for the navigation bar.
pub fn render_cart_count(view: &CartView) -> askama::Result<String> {
    CartCountTemplate { cart: view }.render()
}
