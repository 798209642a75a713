//! Order endpoints

use shared::models::{Order, OrderCreate, OrderStatus};

use super::CafeClient;
use crate::error::ClientResult;

impl CafeClient {
    /// GET /api/orders
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http().get("/api/orders").await
    }

    /// GET /api/orders/:id
    pub async fn order(&self, id: i64) -> ClientResult<Order> {
        self.http().get(&format!("/api/orders/{}", id)).await
    }

    /// POST /api/orders (guest allowed)
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        tracing::debug!(total = order.total, items = order.items.len(), "submitting order");
        self.http().post("/api/orders", order).await
    }

    /// POST /api/orders/status/:id
    ///
    /// Plain-text contract: the body is the bare status string, the response
    /// a confirmation message.
    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<String> {
        self.http()
            .post_text(&format!("/api/orders/status/{}", id), status.as_str())
            .await
    }

    /// DELETE /api/orders/:id
    pub async fn delete_order(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/api/orders/{}", id)).await
    }
}
