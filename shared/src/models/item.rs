//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// An ingredient requirement on a menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIngredient {
    pub id: Option<i64>,
    pub ingredient: Ingredient,
    /// Units consumed per item made
    pub quantity: i64,
    /// Unit of measurement (e.g. grams, ml, tsp)
    pub unit: Option<String>,
    /// The menu item this requirement belongs to
    pub item_id: Option<i64>,
}

impl ItemIngredient {
    pub fn name(&self) -> &str {
        &self.ingredient.name
    }
}

/// Menu item entity (catalog side; the client never mutates prices locally)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in cents
    pub price: i64,
    #[serde(default)]
    pub ingredients: Vec<ItemIngredient>,
}

impl MenuItem {
    /// Add an ingredient requirement, replacing an existing entry with the
    /// same (case-insensitive) ingredient name instead of appending.
    pub fn add_ingredient(&mut self, mut requirement: ItemIngredient) {
        requirement.ingredient.name = requirement.ingredient.name.to_lowercase();
        if let Some(existing) = self
            .ingredients
            .iter_mut()
            .find(|i| i.ingredient.is_named(requirement.name()))
        {
            existing.quantity = requirement.quantity;
            existing.unit = requirement.unit;
            return;
        }
        self.ingredients.push(requirement);
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub ingredients: Vec<ItemIngredient>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub ingredients: Option<Vec<ItemIngredient>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(name: &str, quantity: i64) -> ItemIngredient {
        ItemIngredient {
            id: None,
            ingredient: Ingredient::new(name, None),
            quantity,
            unit: Some("g".to_string()),
            item_id: None,
        }
    }

    #[test]
    fn test_add_ingredient_replaces_same_name() {
        let mut item = MenuItem {
            id: Some(1),
            name: "Latte".to_string(),
            description: None,
            price: 450,
            ingredients: vec![],
        };
        item.add_ingredient(requirement("Espresso", 18));
        item.add_ingredient(requirement("espresso", 20));

        assert_eq!(item.ingredients.len(), 1);
        assert_eq!(item.ingredients[0].quantity, 20);
        assert_eq!(item.ingredients[0].name(), "espresso");
    }
}
