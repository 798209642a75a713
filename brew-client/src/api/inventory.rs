//! Inventory and tax-rate endpoints

use shared::models::Inventory;

use super::CafeClient;
use crate::error::ClientResult;

impl CafeClient {
    /// GET /api/inventory
    pub async fn inventory(&self) -> ClientResult<Inventory> {
        self.http().get("/api/inventory").await
    }

    /// PUT /api/inventory (staff/admin)
    pub async fn update_inventory(&self, inventory: &Inventory) -> ClientResult<Inventory> {
        self.http().put("/api/inventory", inventory).await
    }

    /// GET /api/inventory/tax
    ///
    /// Returns the tax rate as a percentage (e.g. `2.0` for 2%). Divide by
    /// 100 before handing it to the pricing calculator.
    pub async fn tax_rate(&self) -> ClientResult<f64> {
        self.http().get("/api/inventory/tax").await
    }

    /// POST /api/inventory/tax (staff/admin); body is the bare percentage
    pub async fn set_tax_rate(&self, percentage: f64) -> ClientResult<f64> {
        self.http().post("/api/inventory/tax", &percentage).await
    }
}
