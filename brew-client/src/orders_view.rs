//! Order status viewing
//!
//! Read path over the order collection: visibility scoping per viewer,
//! calendar-day filtering for staff, newest-first ordering, the set of
//! status actions each role may see, and daily revenue.

use std::cmp::Reverse;

use chrono::{NaiveDate, NaiveDateTime};

use shared::models::{Order, OrderStatus, Role};
use shared::util::business_today;

use crate::session::Session;

/// The current user context used to scope which orders are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Guest,
    Account { id: i64 },
}

impl Viewer {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(s) => Self::Account { id: s.user_id },
            None => Self::Guest,
        }
    }
}

/// Orders the viewer may see.
///
/// An account sees its own orders regardless of age. A guest sees only
/// today's walk-in orders (no customer id) — never another guest's history
/// from a previous day, and never a customer's order.
pub fn filter_for_viewer(orders: &[Order], viewer: &Viewer, today: NaiveDate) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| match viewer {
            Viewer::Account { id } => order.customer_id == Some(*id),
            Viewer::Guest => order.is_guest_order() && order.created_date() == Some(today),
        })
        .cloned()
        .collect()
}

/// `filter_for_viewer` against the café's current calendar day.
pub fn filter_for_viewer_today(orders: &[Order], viewer: &Viewer) -> Vec<Order> {
    filter_for_viewer(orders, viewer, business_today())
}

/// Staff view: every order created on `date`, regardless of customer.
pub fn filter_by_date(orders: &[Order], date: NaiveDate) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.created_date() == Some(date))
        .cloned()
        .collect()
}

/// Stable sort, newest first. Orders with unparseable timestamps sink to
/// the end.
pub fn sort_by_created_descending(orders: &mut [Order]) {
    orders.sort_by_key(|order| {
        Reverse(
            order
                .created_datetime()
                .unwrap_or(NaiveDateTime::MIN),
        )
    });
}

/// A status action the UI may expose on an order row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// pending → canceled (guest/customer)
    Cancel,
    /// fulfilled → picked up (guest/customer)
    PickUp,
    /// pending → fulfilled (staff)
    Complete,
}

impl OrderAction {
    pub fn target_status(&self) -> OrderStatus {
        match self {
            Self::Cancel => OrderStatus::Canceled,
            Self::PickUp => OrderStatus::PickedUp,
            Self::Complete => OrderStatus::Fulfilled,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::PickUp => "Pick Up",
            Self::Complete => "Complete",
        }
    }
}

/// The only actions a role may see for an order in `status`.
///
/// This table is the sole source of status controls in the UI, so a
/// transition outside the lifecycle is unrepresentable rather than merely
/// rejected at request time.
pub fn available_actions(status: OrderStatus, role: Role) -> &'static [OrderAction] {
    match role {
        Role::Guest | Role::Customer => match status {
            OrderStatus::Pending => &[OrderAction::Cancel],
            OrderStatus::Fulfilled => &[OrderAction::PickUp],
            OrderStatus::PickedUp | OrderStatus::Canceled => &[],
        },
        Role::Staff | Role::Admin => match status {
            OrderStatus::Pending => &[OrderAction::Complete],
            OrderStatus::Fulfilled | OrderStatus::PickedUp | OrderStatus::Canceled => &[],
        },
    }
}

/// Revenue across the given orders, excluding canceled ones.
pub fn daily_revenue(orders: &[Order]) -> i64 {
    orders
        .iter()
        .filter(|order| order.status != OrderStatus::Canceled)
        .map(|order| order.total_cents())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(
        id: i64,
        customer_id: Option<i64>,
        created: &str,
        status: OrderStatus,
        subtotal: i64,
    ) -> Order {
        Order {
            id: Some(id),
            customer_id,
            created: created.to_string(),
            status,
            subtotal,
            tax: 0,
            tip: 0,
            total: None,
            item_str: None,
            items: vec![],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    #[test]
    fn test_guest_sees_only_todays_guest_orders() {
        let orders = vec![
            order(1, None, "2025-11-03T09:00:00", OrderStatus::Pending, 500),
            order(2, Some(8), "2025-11-03T09:05:00", OrderStatus::Pending, 300),
            order(3, None, "2025-11-02T17:00:00", OrderStatus::Pending, 400),
        ];

        let visible = filter_for_viewer(&orders, &Viewer::Guest, today());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(1));
    }

    #[test]
    fn test_account_sees_own_orders_only() {
        let orders = vec![
            order(1, Some(8), "2025-11-01T09:00:00", OrderStatus::PickedUp, 500),
            order(2, Some(9), "2025-11-03T09:05:00", OrderStatus::Pending, 300),
            order(3, None, "2025-11-03T10:00:00", OrderStatus::Pending, 400),
        ];

        let visible = filter_for_viewer(&orders, &Viewer::Account { id: 8 }, today());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(1));
    }

    #[test]
    fn test_filter_by_date_ignores_customer() {
        let orders = vec![
            order(1, Some(8), "2025-11-03T09:00:00", OrderStatus::Pending, 500),
            order(2, None, "2025-11-03T12:00:00", OrderStatus::Pending, 300),
            order(3, Some(9), "2025-11-02T09:00:00", OrderStatus::Pending, 400),
        ];

        let filtered = filter_by_date(&orders, today());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_sort_newest_first_and_stable() {
        let mut orders = vec![
            order(1, None, "2025-11-03T08:00:00", OrderStatus::Pending, 0),
            order(2, None, "2025-11-03T12:00:00", OrderStatus::Pending, 0),
            order(3, None, "2025-11-03T12:00:00", OrderStatus::Pending, 0),
        ];
        sort_by_created_descending(&mut orders);

        let ids: Vec<_> = orders.iter().map(|o| o.id.unwrap()).collect();
        // Equal timestamps keep their relative order (stable sort).
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_daily_revenue_excludes_canceled() {
        let orders = vec![
            order(1, None, "2025-11-03T09:00:00", OrderStatus::Pending, 500),
            order(2, None, "2025-11-03T09:30:00", OrderStatus::Canceled, 300),
        ];
        assert_eq!(daily_revenue(&orders), 500);
    }

    #[test]
    fn test_revenue_uses_component_sum_when_total_missing() {
        let mut o = order(1, None, "2025-11-03T09:00:00", OrderStatus::Fulfilled, 900);
        o.tax = 63;
        o.tip = 135;
        assert_eq!(daily_revenue(&[o]), 1098);
    }

    #[test]
    fn test_no_cancel_action_once_fulfilled() {
        for role in [Role::Guest, Role::Customer, Role::Staff, Role::Admin] {
            let actions = available_actions(OrderStatus::Fulfilled, role);
            assert!(
                !actions.contains(&OrderAction::Cancel),
                "{role:?} must not be able to cancel a fulfilled order"
            );
        }
    }

    #[test]
    fn test_action_targets_follow_lifecycle() {
        for role in [Role::Guest, Role::Customer, Role::Staff, Role::Admin] {
            for status in [
                OrderStatus::Pending,
                OrderStatus::Fulfilled,
                OrderStatus::PickedUp,
                OrderStatus::Canceled,
            ] {
                for action in available_actions(status, role) {
                    assert!(
                        status.can_transition_to(action.target_status()),
                        "{role:?} exposed {action:?} on {status:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_terminal_states_offer_no_actions() {
        for role in [Role::Guest, Role::Customer, Role::Staff, Role::Admin] {
            assert!(available_actions(OrderStatus::PickedUp, role).is_empty());
            assert!(available_actions(OrderStatus::Canceled, role).is_empty());
        }
    }
}
