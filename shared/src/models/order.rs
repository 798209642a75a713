//! Order Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::util::CREATED_FORMAT;

/// Order status lifecycle
///
/// `pending → fulfilled → picked up`, or `pending → canceled` (terminal).
/// The wire strings are fixed by the backend, including the space in
/// `"picked up"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "fulfilled")]
    Fulfilled,
    #[serde(rename = "picked up")]
    PickedUp,
    #[serde(rename = "canceled")]
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::PickedUp => "picked up",
            Self::Canceled => "canceled",
        }
    }

    /// Display label (capitalized first letter, as rendered in order tables).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Fulfilled => "Fulfilled",
            Self::PickedUp => "Picked up",
            Self::Canceled => "Canceled",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fulfilled)
                | (Self::Pending, Self::Canceled)
                | (Self::Fulfilled, Self::PickedUp)
        )
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::PickedUp | Self::Canceled)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "fulfilled" => Ok(Self::Fulfilled),
            "picked up" => Ok(Self::PickedUp),
            "canceled" => Ok(Self::Canceled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line as returned by the backend (price is not echoed on reads;
/// `Order::item_str` preserves the display form)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub item_name: String,
    pub quantity: i32,
}

/// Order entity (server-owned; the client reads and creates, never edits)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    /// `None` denotes a guest/walk-in order
    pub customer_id: Option<i64>,
    /// Local wall-clock creation time, `YYYY-MM-DDTHH:MM:SS`
    pub created: String,
    pub status: OrderStatus,
    /// Subtotal in cents
    pub subtotal: i64,
    /// Tax in cents
    pub tax: i64,
    /// Tip in cents
    pub tip: i64,
    /// Grand total in cents; the backend omits this on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Human-readable line list, e.g. `"2x Latte ($4.50), 1x Scone ($3.25)"`
    #[serde(default)]
    pub item_str: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Grand total, falling back to the component sum when the backend
    /// dropped the `total` field.
    pub fn total_cents(&self) -> i64 {
        self.total.unwrap_or(self.subtotal + self.tax + self.tip)
    }

    pub fn created_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created, CREATED_FORMAT).ok()
    }

    /// Calendar day of creation. Falls back to the date prefix when the
    /// timestamp carries extra precision the strict format rejects.
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_datetime()
            .map(|dt| dt.date())
            .or_else(|| self.created.get(..10)?.parse().ok())
    }

    pub fn is_guest_order(&self) -> bool {
        self.customer_id.is_none()
    }
}

/// Order line snapshot within the creation payload (carries the price the
/// customer saw, so later catalog changes never alter this order)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub id: Option<i64>,
    pub item_name: String,
    /// Price in cents at submission time
    pub price: i64,
    pub quantity: i32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: Option<i64>,
    pub items: Vec<OrderItemCreate>,
    pub subtotal: i64,
    pub tax: i64,
    pub tip: i64,
    pub total: i64,
    pub created: String,
    pub status: OrderStatus,
    pub item_str: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Fulfilled,
            OrderStatus::PickedUp,
            OrderStatus::Canceled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(
            serde_json::to_string(&OrderStatus::PickedUp).unwrap(),
            "\"picked up\""
        );
    }

    #[test]
    fn test_lifecycle_transitions() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Fulfilled));
        assert!(Pending.can_transition_to(Canceled));
        assert!(Fulfilled.can_transition_to(PickedUp));

        assert!(!Fulfilled.can_transition_to(Canceled));
        assert!(!Canceled.can_transition_to(Pending));
        assert!(!PickedUp.can_transition_to(Fulfilled));
        assert!(!Pending.can_transition_to(PickedUp));
    }

    #[test]
    fn test_total_falls_back_to_component_sum() {
        let order = Order {
            id: Some(7),
            customer_id: None,
            created: "2025-11-03T09:30:00".to_string(),
            status: OrderStatus::Pending,
            subtotal: 900,
            tax: 63,
            tip: 135,
            total: None,
            item_str: None,
            items: vec![],
        };
        assert_eq!(order.total_cents(), 1098);
    }

    #[test]
    fn test_created_date_parses_wire_timestamp() {
        let order = Order {
            id: None,
            customer_id: Some(4),
            created: "2025-11-03T09:30:00".to_string(),
            status: OrderStatus::Pending,
            subtotal: 0,
            tax: 0,
            tip: 0,
            total: None,
            item_str: None,
            items: vec![],
        };
        assert_eq!(
            order.created_date(),
            Some(chrono::NaiveDate::from_ymd_opt(2025, 11, 3).unwrap())
        );
    }
}
