//! The cart store
//!
//! `CartStore` owns the line items of the one cart this storefront serves.
//! Every mutation persists the cart through the configured `KeyValueStore`
//! and notifies the registered observers. Persistence is best-effort: a
//! failed read or write is logged and the in-memory cart stays authoritative.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::helpers::{cart_total, item_count, merge_items};
use super::models::LineItem;
use super::view::{CartObserver, CartView};
use crate::order::{message::compose_order_text, models::OrderFormat};
use crate::storage::{KeyValueStore, CART_STORAGE_KEY};

pub struct CartStore {
    /// Line items in insertion order, at most one per size key.
    items: Vec<LineItem>,
    storage: Arc<dyn KeyValueStore>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Creates an empty cart backed by `storage`. Nothing is read.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            observers: Vec::new(),
        }
    }

    /// Creates a cart restored from whatever `storage` holds.
    ///
    /// A missing key, an unreadable backend or a corrupt value all give an
    /// empty cart.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(blob)) => Self::restore(&blob),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart storage not available, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(items = items.len(), "cart loaded");

        Self {
            items,
            storage,
            observers: Vec::new(),
        }
    }

    /// Registers a render hook called after every mutation.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `size_key`. An existing line has its quantity bumped
    /// and keeps its original price; otherwise a new line is appended.
    pub fn add(&mut self, size_key: &str, unit_price: u64) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.size_key == size_key) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::new(size_key, unit_price));
        }
        self.changed();
    }

    /// Removes the line for `size_key`. Unknown keys are ignored.
    pub fn remove(&mut self, size_key: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.size_key != size_key);
        if self.items.len() != before {
            self.changed();
        }
    }

    /// Folds `incoming` into the cart, summing quantities per size key.
    pub fn merge(&mut self, incoming: Vec<LineItem>) {
        merge_items(&mut self.items, incoming);
        self.changed();
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.changed();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `unit_price × quantity`; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        cart_total(&self.items)
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        item_count(&self.items)
    }

    pub fn view(&self) -> CartView {
        CartView::from_items(&self.items)
    }

    /// Order message for the current contents.
    pub fn to_order_text(&self, format: OrderFormat, now: NaiveDateTime) -> String {
        compose_order_text(&self.items, format, now)
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// JSON array of the line items.
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize cart");
            "[]".to_string()
        })
    }

    /// Parses a serialized cart. Malformed input yields an empty cart.
    ///
    /// Duplicate size keys are merged and zero quantities dropped so the
    /// result holds at most one line per size.
    pub fn restore(blob: &str) -> Vec<LineItem> {
        match serde_json::from_str::<Vec<LineItem>>(blob) {
            Ok(parsed) => {
                let mut items = Vec::with_capacity(parsed.len());
                merge_items(&mut items, parsed);
                items
            }
            Err(e) => {
                tracing::warn!(error = %e, "error parsing cart data, starting empty");
                Vec::new()
            }
        }
    }

    /// Replaces the contents with a restored cart.
    pub fn replace_from(&mut self, blob: &str) {
        self.items = Self::restore(blob);
        self.changed();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn changed(&self) {
        self.persist();
        if !self.observers.is_empty() {
            let view = self.view();
            for observer in &self.observers {
                observer.cart_changed(&view);
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &self.serialize()) {
            tracing::warn!(error = %e, "cart storage not available, keeping cart in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DisabledStorage, MemoryStorage};
    use std::sync::Mutex;

    fn memory_store() -> (CartStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (CartStore::new(storage.clone()), storage)
    }

    /// Observer that records every view it receives.
    #[derive(Default, Clone)]
    struct Recorder(Arc<Mutex<Vec<CartView>>>);

    impl CartObserver for Recorder {
        fn cart_changed(&self, view: &CartView) {
            self.0.lock().unwrap().push(view.clone());
        }
    }

    #[test]
    fn test_add_same_size_twice_merges() {
        let (mut store, _) = memory_store();
        store.add("250g", 150);
        store.add("250g", 150);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
        assert_eq!(store.total(), 300);
    }

    #[test]
    fn test_worked_example() {
        let (mut store, _) = memory_store();

        store.add("250g", 150);
        assert_eq!(store.total(), 150);

        store.add("250g", 150);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
        assert_eq!(store.total(), 300);

        store.add("1kg", 500);
        assert_eq!(store.total(), 800);

        store.remove("250g");
        assert_eq!(store.total(), 500);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].size_key, "1kg");
    }

    #[test]
    fn test_total_tracks_any_sequence() {
        let (mut store, _) = memory_store();
        let ops: [(&str, u64, bool); 7] = [
            ("250g", 150, true),
            ("500g", 280, true),
            ("250g", 150, true),
            ("1kg", 500, true),
            ("500g", 0, false),
            ("1kg", 500, true),
            ("2kg", 0, false),
        ];

        for (size, price, is_add) in ops {
            if is_add {
                store.add(size, price);
            } else {
                store.remove(size);
            }
            let expected: u64 = store
                .items()
                .iter()
                .map(|i| i.unit_price * u64::from(i.quantity))
                .sum();
            assert_eq!(store.total(), expected);
        }
        assert_eq!(store.total(), 1300);
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_remove_unknown_size_is_noop() {
        let (mut store, storage) = memory_store();
        store.add("250g", 150);
        let recorder = Recorder::default();
        store.subscribe(Box::new(recorder.clone()));
        storage.remove(CART_STORAGE_KEY).unwrap();

        store.remove("5kg");

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total(), 150);
        assert!(recorder.0.lock().unwrap().is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (mut store, _) = memory_store();
        store.add("1kg", 500);
        store.add("250g", 150);
        store.add("1kg", 500);

        let sizes: Vec<_> = store.items().iter().map(|i| i.size_key.as_str()).collect();
        assert_eq!(sizes, ["1kg", "250g"]);
    }

    #[test]
    fn test_serialize_restore_round_trip() {
        let (mut store, _) = memory_store();
        store.add("250g", 150);
        store.add("250g", 150);
        store.add("1kg", 500);

        let restored = CartStore::restore(&store.serialize());
        assert_eq!(restored, store.items());
    }

    #[test]
    fn test_restore_malformed_yields_empty() {
        assert!(CartStore::restore("").is_empty());
        assert!(CartStore::restore("not json {{{").is_empty());
        assert!(CartStore::restore("{\"size\":\"250g\"}").is_empty());
        assert!(CartStore::restore("[{\"size\":\"250g\",\"price\":-1}]").is_empty());
    }

    #[test]
    fn test_restore_legacy_page_format() {
        let blob = r#"[
            {"size":"250g","price":150,"quantity":2,"name":"Café ORIGIN Finca Los Robles 250g"},
            {"size":"250g","price":150,"quantity":1,"name":"Café ORIGIN Finca Los Robles 250g"},
            {"size":"1kg","price":500,"quantity":0,"name":"Café ORIGIN Finca Los Robles 1kg"}
        ]"#;
        let items = CartStore::restore(blob);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[test]
    fn test_every_mutation_persists() {
        let (mut store, storage) = memory_store();
        store.add("250g", 150);
        assert_eq!(
            CartStore::restore(&storage.get(CART_STORAGE_KEY).unwrap().unwrap()),
            store.items()
        );

        store.clear();
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_restores_persisted_cart() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = CartStore::new(storage.clone());
            store.add("1kg", 500);
            store.add("1kg", 500);
        }

        let store = CartStore::load(storage);
        assert_eq!(store.total(), 1000);
        assert_eq!(store.items()[0].quantity, 2);
    }

    #[test]
    fn test_load_corrupt_value_yields_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "corrupt").unwrap();

        let store = CartStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_cart() {
        let mut store = CartStore::load(Arc::new(DisabledStorage));
        store.add("250g", 150);
        store.add("1kg", 500);

        assert_eq!(store.total(), 650);
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_observers_notified_after_mutation() {
        let (mut store, _) = memory_store();
        let recorder = Recorder::default();
        store.subscribe(Box::new(recorder.clone()));

        store.add("250g", 150);
        store.merge(vec![LineItem::new("1kg", 500)]);
        store.clear();

        let views = recorder.0.lock().unwrap();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].item_count, 1);
        assert_eq!(views[1].total, 650);
        assert!(views[2].is_empty());
    }

    #[test]
    fn test_replace_from_blob() {
        let (mut store, _) = memory_store();
        store.add("250g", 150);

        store.replace_from("[{\"size\":\"1kg\",\"price\":500,\"quantity\":3}]");
        assert_eq!(store.total(), 1500);
        assert_eq!(store.items()[0].display_name, "Café ORIGIN Finca Los Robles 1kg");

        store.replace_from("garbage");
        assert!(store.is_empty());
    }

    #[test]
    fn test_order_text_reflects_cart() {
        let (mut store, _) = memory_store();
        store.add("250g", 150);
        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let long = store.to_order_text(OrderFormat::Long, now);
        let short = store.to_order_text(OrderFormat::Short, now);

        assert!(long.contains("2 de enero de 2026, 08:00"));
        assert!(long.contains("💳 *TOTAL: $150*"));
        assert!(short.contains("💳 Total: $150"));
        assert_eq!(store.items().len(), 1);
    }
}
