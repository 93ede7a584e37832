use crate::model::{Item, ItemId, NewItem, seed_items};
use ihub_kernel::domain::config::IdStrategy;
use parking_lot::RwLock;
use tracing::{debug, info};

/// Ordered in-memory item collection.
///
/// All access goes through one lock: reads share it, `create` and `delete` hold it
/// exclusively, so id assignment and the append it precedes are a single step.
#[derive(Debug)]
pub struct ItemStore {
    strategy: IdStrategy,
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<Item>,
    /// Highest id ever present; drives [`IdStrategy::Monotonic`].
    high_water: ItemId,
}

impl StoreState {
    fn next_id(&self, strategy: IdStrategy) -> ItemId {
        match strategy {
            IdStrategy::Length => self.items.len() as ItemId + 1,
            IdStrategy::Monotonic => self.high_water + 1,
        }
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl ItemStore {
    /// An empty store.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_items(strategy, Vec::new())
    }

    /// A store holding the built-in sample items.
    #[must_use]
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_items(strategy, seed_items())
    }

    /// A store holding `items` in the given order.
    #[must_use]
    pub fn with_items(strategy: IdStrategy, items: Vec<Item>) -> Self {
        let high_water = items.iter().map(|item| item.id).max().unwrap_or_default();
        Self { strategy, state: RwLock::new(StoreState { items, high_water }) }
    }

    #[must_use]
    pub const fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Snapshot of the whole collection in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.state.read().items.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    /// First item with a matching id, in collection order.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.state.read().items.iter().find(|item| item.id == id).cloned()
    }

    /// Assigns an id, applies payload defaults and appends the new item.
    pub fn create(&self, payload: NewItem) -> Item {
        let mut state = self.state.write();
        let item = payload.into_item(state.next_id(self.strategy));

        state.high_water = state.high_water.max(item.id);
        state.items.push(item.clone());

        info!(id = item.id, count = state.items.len(), "Item created");
        item
    }

    /// Removes the first item with a matching id, keeping the order of the rest.
    pub fn delete(&self, id: ItemId) -> Option<Item> {
        let mut state = self.state.write();
        let Some(index) = state.position(id) else {
            debug!(id, "Delete skipped: no matching item");
            return None;
        };

        let removed = state.items.remove(index);
        info!(id, count = state.items.len(), "Item deleted");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ids(store: &ItemStore) -> Vec<ItemId> {
        store.list().iter().map(|item| item.id).collect()
    }

    #[test]
    fn seeded_store_has_three_items() {
        let store = ItemStore::seeded(IdStrategy::Length);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get(2).map(|item| item.name), Some("Docker".to_owned()));
    }

    #[test]
    fn create_appends_with_length_based_id() {
        let store = ItemStore::seeded(IdStrategy::Length);
        let item = store.create(NewItem::new("Foo", "Bar"));

        assert_eq!(item, Item::new(4, "Foo", "Bar"));
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    }

    #[test]
    fn length_strategy_can_repeat_ids_after_delete() {
        let store = ItemStore::seeded(IdStrategy::Length);
        assert!(store.delete(2).is_some());
        assert_eq!(ids(&store), vec![1, 3]);

        let item = store.create(NewItem::default());
        assert_eq!(item.id, 3);
        assert_eq!(ids(&store), vec![1, 3, 3]);

        // Lookups and deletes resolve to the first match.
        assert_eq!(store.get(3).map(|item| item.name), Some("Microservices".to_owned()));
        assert_eq!(store.delete(3).map(|item| item.kind), Some("Architecture Pattern".to_owned()));
        assert_eq!(store.get(3).map(|item| item.name), Some("New Item".to_owned()));
    }

    #[test]
    fn monotonic_strategy_never_reuses_ids() {
        let store = ItemStore::seeded(IdStrategy::Monotonic);
        assert!(store.delete(3).is_some());

        assert_eq!(store.create(NewItem::default()).id, 4);
        assert!(store.delete(4).is_some());
        assert_eq!(store.create(NewItem::default()).id, 5);
    }

    #[test]
    fn delete_missing_id_leaves_collection_untouched() {
        let store = ItemStore::seeded(IdStrategy::Length);
        assert!(store.delete(42).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_store_starts_at_one() {
        for strategy in [IdStrategy::Length, IdStrategy::Monotonic] {
            let store = ItemStore::new(strategy);
            assert!(store.is_empty());
            assert_eq!(store.create(NewItem::default()).id, 1);
        }
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(ItemStore::new(IdStrategy::Length));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25).map(|_| store.create(NewItem::default()).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut issued: Vec<ItemId> =
            handles.into_iter().flat_map(|h| h.join().expect("worker panicked")).collect();
        issued.sort_unstable();

        assert_eq!(issued, (1..=200).collect::<Vec<_>>());
    }
}
