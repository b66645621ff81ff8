use serde::{Deserialize, Serialize};

/// A product record owned by the shop backend.
///
/// `favorite` is toggled through a dedicated endpoint, never through the
/// generic update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Units in stock.
    pub amount: u32,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

/// Derived "favorites only" view over a loaded collection.
///
/// Pure: recomputed from `items` on every render, never cached and never a
/// trigger for a network call.
pub fn favorites(items: &[Product]) -> Vec<&Product> {
    items.iter().filter(|p| p.favorite).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, favorite: bool) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            amount: 3,
            price: 9.99,
            description: None,
            favorite,
        }
    }

    #[test]
    fn favorites_keeps_only_flagged_items() {
        let items = vec![product(1, false), product(2, true), product(3, true)];
        let view = favorites(&items);
        assert_eq!(view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn favorites_of_unflagged_collection_is_empty() {
        let items = vec![product(1, false), product(2, false)];
        assert!(favorites(&items).is_empty());
    }
}
