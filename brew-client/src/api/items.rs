//! Menu item and ingredient endpoints

use shared::models::{Ingredient, ItemCreate, ItemUpdate, MenuItem};

use super::CafeClient;
use crate::error::ClientResult;

impl CafeClient {
    /// GET /api/items
    pub async fn list_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.http().get("/api/items").await
    }

    /// GET /api/items/:id
    pub async fn item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http().get(&format!("/api/items/{}", id)).await
    }

    /// POST /api/items (staff/admin)
    pub async fn create_item(&self, item: &ItemCreate) -> ClientResult<MenuItem> {
        self.http().post("/api/items", item).await
    }

    /// PUT /api/items/:id (staff/admin)
    pub async fn update_item(&self, id: i64, item: &ItemUpdate) -> ClientResult<MenuItem> {
        self.http().put(&format!("/api/items/{}", id), item).await
    }

    /// DELETE /api/items/:id (staff/admin)
    pub async fn delete_item(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/api/items/{}", id)).await
    }

    /// GET /api/ingredients
    pub async fn list_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        self.http().get("/api/ingredients").await
    }
}
