use crate::dto::{LineItem, NewLineItem};

/// Ordered cart lines. Purely in-memory; persistence is the cart's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsStore {
    items: Vec<LineItem>,
}

impl ProductsStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wraps items exactly as given, order included.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends the candidate with quantity 1, or increments it if already present.
    /// Returns true if a new line was appended.
    pub fn add(&mut self, candidate: NewLineItem) -> bool {
        if self.contains(&candidate.id) {
            self.increment(&candidate.id);
            return false;
        }
        self.items.push(candidate.into_line_item(1));
        true
    }

    /// Adds one to every line with this id. Unknown ids are a no-op.
    pub fn increment(&mut self, id: &str) {
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Removes one from every line with this id, stopping at zero.
    /// Lines at zero stay in the cart.
    pub fn decrement(&mut self, id: &str) {
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.quantity = item.quantity.saturating_sub(1);
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn candidate(id: &str) -> NewLineItem {
        NewLineItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://img.example/{}.png", id),
            price: dec!(10),
        }
    }

    fn line(id: &str, quantity: u32) -> LineItem {
        candidate(id).into_line_item(quantity)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ProductsStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("a"));
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_add_new_appends_with_quantity_one() {
        let mut store = ProductsStore::new();
        assert!(store.add(candidate("a")));
        assert_eq!(store.items(), &[line("a", 1)]);
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut store = ProductsStore::from_items(vec![line("a", 2), line("b", 1)]);
        store.add(candidate("c"));
        let ids: Vec<_> = store.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_existing_is_increment() {
        let mut added = ProductsStore::from_items(vec![line("a", 2), line("b", 1)]);
        let mut incremented = added.clone();

        assert!(!added.add(candidate("a")));
        incremented.increment("a");

        assert_eq!(added, incremented);
        assert_eq!(added.len(), 2);
        assert_eq!(added.get("a").unwrap().quantity, 3);
    }

    #[test]
    fn test_increment_only_touches_matching_id() {
        let mut store = ProductsStore::from_items(vec![line("a", 1), line("b", 5)]);
        store.increment("a");
        assert_eq!(store.get("a").unwrap().quantity, 2);
        assert_eq!(store.get("b").unwrap().quantity, 5);
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        let mut store = ProductsStore::from_items(vec![line("a", 2)]);
        let before = store.clone();
        store.increment("b");
        assert_eq!(store, before);
    }

    #[test]
    fn test_decrement_unknown_id_is_noop() {
        let mut store = ProductsStore::from_items(vec![line("a", 2)]);
        let before = store.clone();
        store.decrement("b");
        assert_eq!(store, before);
    }

    #[test]
    fn test_decrement_clamps_at_zero_and_keeps_line() {
        let mut store = ProductsStore::from_items(vec![line("a", 1)]);
        store.decrement("a");
        store.decrement("a");
        assert_eq!(store.items(), &[line("a", 0)]);
    }

    #[test]
    fn test_mixed_sequence_never_negative() {
        let mut store = ProductsStore::from_items(vec![line("a", 0)]);
        // Deterministic mix of ups and downs, heavier on downs
        for step in 0..200u32 {
            if step % 3 == 0 {
                store.increment("a");
            } else {
                store.decrement("a");
            }
            let quantity = store.get("a").unwrap().quantity;
            assert!(quantity <= step + 1);
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_all_updated() {
        // Loaded payloads are taken verbatim, duplicates included
        let mut store = ProductsStore::from_items(vec![line("a", 1), line("a", 4)]);
        store.increment("a");
        let quantities: Vec<_> = store.items().iter().map(|item| item.quantity).collect();
        assert_eq!(quantities, vec![2, 5]);
    }
}
