//! Inventory Model

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Inventory entity: the café's full ingredient stock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: Option<i64>,
    pub ingredients: Vec<Ingredient>,
}

impl Inventory {
    /// Add an ingredient, replacing the quantity of an existing entry with
    /// the same (case-insensitive) name instead of appending a duplicate.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        let name = ingredient.name.to_lowercase();
        if let Some(existing) = self.ingredients.iter_mut().find(|i| i.is_named(&name)) {
            existing.quantity = ingredient.quantity;
            return;
        }
        self.ingredients.push(Ingredient { name, ..ingredient });
    }

    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_duplicate_name() {
        let mut inventory = Inventory::default();
        inventory.add_ingredient(Ingredient::new("milk", Some(10)));
        inventory.add_ingredient(Ingredient::new("Milk", Some(25)));

        assert_eq!(inventory.ingredients.len(), 1);
        assert_eq!(inventory.ingredients[0].quantity, Some(25));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut inventory = Inventory::default();
        inventory.add_ingredient(Ingredient::new("sugar", Some(3)));

        assert!(inventory.ingredient_by_name("Sugar").is_some());
        assert!(inventory.ingredient_by_name("salt").is_none());
    }
}
