//! Order builder
//!
//! The in-memory cart for one in-progress order. Lines snapshot the catalog
//! item's name and price at add time, so a later price change on the server
//! never alters what the customer agreed to pay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::models::MenuItem;

/// Cart validation errors: recovered locally, shown inline, never sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// An active line for this item already exists
    #[error("{0} is already in the order")]
    DuplicateItem(String),

    /// Quantity must be a positive integer
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// One selected item with its chosen quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// `None` only for fallback lines restored from a prior order whose item
    /// no longer exists in the catalog
    pub item_id: Option<i64>,
    pub name: String,
    /// Price in cents, snapshotted at add time
    pub price: i64,
    pub quantity: i32,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

/// In-progress order construction, client-local
///
/// Created empty when the order screen opens (or restored when returning
/// from an edit); dropped on successful submission or navigation away.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line for `item` with the given quantity.
    ///
    /// Rejects a second line for an item already in the cart and any
    /// non-positive quantity.
    pub fn add_line(&mut self, item: &MenuItem, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let duplicate = self.lines.iter().any(|line| match (line.item_id, item.id) {
            (Some(a), Some(b)) => a == b,
            _ => line.name == item.name,
        });
        if duplicate {
            return Err(CartError::DuplicateItem(item.name.clone()));
        }
        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: quantity as i32,
        });
        Ok(())
    }

    /// Remove the line for `item_id` if present; absence is not an error.
    pub fn remove_line(&mut self, item_id: i64) {
        self.lines.retain(|line| line.item_id != Some(item_id));
    }

    /// Remove by display position (for fallback lines that carry no id).
    pub fn remove_at(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Lines that count at submission time (quantity > 0).
    pub fn submittable_lines(&self) -> Vec<CartLine> {
        self.lines
            .iter()
            .filter(|line| line.quantity > 0)
            .cloned()
            .collect()
    }

    /// Rebuild a cart from a prior order's line snapshots.
    ///
    /// Each prior line is matched against the current catalog by name; on a
    /// match the catalog's current id and price are taken with the prior
    /// quantity, otherwise the prior snapshot is kept as-is so the customer
    /// can still see what they had. Name matching is ambiguous if the menu
    /// ever carries duplicate names.
    pub fn restore_from_prior(catalog: &[MenuItem], prior: &[CartLine]) -> Self {
        let lines = prior
            .iter()
            .map(|prior_line| {
                match catalog.iter().find(|item| item.name == prior_line.name) {
                    Some(item) => CartLine {
                        item_id: item.id,
                        name: item.name.clone(),
                        price: item.price,
                        quantity: prior_line.quantity,
                    },
                    None => prior_line.clone(),
                }
            })
            .collect();
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: Some(id),
            name: name.to_string(),
            description: None,
            price,
            ingredients: vec![],
        }
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut cart = Cart::new();
        cart.add_line(&item(1, "Latte", 450), 2).unwrap();
        let before = cart.lines().to_vec();

        cart.add_line(&item(2, "Scone", 325), 1).unwrap();
        cart.remove_line(2);

        assert_eq!(cart.lines(), &before[..]);
    }

    #[test]
    fn test_add_rejects_duplicate_item() {
        let mut cart = Cart::new();
        cart.add_line(&item(1, "Latte", 450), 1).unwrap();
        assert_eq!(
            cart.add_line(&item(1, "Latte", 450), 3),
            Err(CartError::DuplicateItem("Latte".to_string()))
        );
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_line(&item(1, "Latte", 450), 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_line(&item(1, "Latte", 450), -4),
            Err(CartError::InvalidQuantity(-4))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_line(&item(1, "Latte", 450), 1).unwrap();
        cart.remove_line(99);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_restore_takes_current_catalog_price() {
        let catalog = vec![item(7, "Latte", 475)];
        let prior = vec![CartLine {
            item_id: Some(1),
            name: "Latte".to_string(),
            price: 450,
            quantity: 2,
        }];

        let cart = Cart::restore_from_prior(&catalog, &prior);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].item_id, Some(7));
        assert_eq!(cart.lines()[0].price, 475);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_restore_keeps_unmatched_prior_line() {
        let catalog = vec![item(7, "Latte", 475)];
        let prior = vec![CartLine {
            item_id: Some(3),
            name: "Discontinued Mocha".to_string(),
            price: 525,
            quantity: 1,
        }];

        let cart = Cart::restore_from_prior(&catalog, &prior);
        assert_eq!(cart.lines(), &prior[..]);
    }
}
