//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Ingredient entity
///
/// Names are stored lowercase; the backend treats ingredient names as
/// case-insensitive identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    /// Units currently in stock (inventory context) or `None` when unset
    pub quantity: Option<i64>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: Option<i64>) -> Self {
        Self {
            id: None,
            name: name.into().to_lowercase(),
            quantity,
        }
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_name() {
        let ing = Ingredient::new("Espresso Beans", Some(40));
        assert_eq!(ing.name, "espresso beans");
    }

    #[test]
    fn test_is_named_ignores_case() {
        let ing = Ingredient::new("milk", Some(12));
        assert!(ing.is_named("MILK"));
        assert!(!ing.is_named("oat milk"));
    }
}
