//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::{display_name_for, LineItem};

/// Merges `new_items` into `cart_items`, aggregating quantities for existing
/// entries and inserting brand new ones.
///
/// # Behaviour
///
/// * If an item with the same size key already exists, its `quantity` is
///   increased by the incoming quantity. Its unit price and name are kept.
/// * Incoming items with a zero quantity are skipped.
/// * Incoming items without a name get the derived display name.
///
/// This function mutates `cart_items` in-place.
pub fn merge_items(cart_items: &mut Vec<LineItem>, new_items: Vec<LineItem>) {
    for mut incoming in new_items {
        if incoming.quantity == 0 {
            continue;
        }

        if let Some(existing) = cart_items
            .iter_mut()
            .find(|i| i.size_key == incoming.size_key)
        {
            existing.quantity = existing.quantity.saturating_add(incoming.quantity);
        } else {
            if incoming.display_name.is_empty() {
                incoming.display_name = display_name_for(&incoming.size_key);
            }
            cart_items.push(incoming);
        }
    }
}

/// Sum of `unit_price × quantity` over all items; 0 for an empty slice.
pub fn cart_total(items: &[LineItem]) -> u64 {
    items
        .iter()
        .fold(0u64, |total, item| total.saturating_add(item.line_total()))
}

/// Sum of all quantities, the number shown on the cart badge.
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

/// Produces a human-readable one-line summary for a list of line items.
///
/// Example output: `"2x 250g, 1x 1kg"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.size_key))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(size: &str, price: u64, quantity: u32) -> LineItem {
        LineItem {
            quantity,
            ..LineItem::new(size, price)
        }
    }

    #[test]
    fn test_merge_aggregates_existing_sizes() {
        let mut items = vec![item("250g", 150, 2)];
        merge_items(&mut items, vec![item("250g", 150, 3), item("1kg", 500, 1)]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].size_key, "250g");
        assert_eq!(items[0].quantity, 5);
        assert_eq!(items[1].size_key, "1kg");
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_merge_keeps_existing_price() {
        let mut items = vec![item("250g", 150, 1)];
        merge_items(&mut items, vec![item("250g", 999, 1)]);

        assert_eq!(items[0].unit_price, 150);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_merge_skips_zero_quantity_and_fills_names() {
        let mut items = Vec::new();
        let nameless = LineItem {
            display_name: String::new(),
            ..item("500g", 280, 1)
        };
        merge_items(&mut items, vec![item("1kg", 500, 0), nameless]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name, "Café ORIGIN Finca Los Robles 500g");
    }

    #[test]
    fn test_totals() {
        let items = vec![item("250g", 150, 2), item("1kg", 500, 1)];

        assert_eq!(cart_total(&items), 800);
        assert_eq!(item_count(&items), 3);
        assert_eq!(cart_total(&[]), 0);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn test_format_item_summary() {
        let items = vec![item("250g", 150, 2), item("1kg", 500, 1)];
        assert_eq!(format_item_summary(&items), "2x 250g, 1x 1kg");
    }
}
