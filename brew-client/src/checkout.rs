//! Checkout submission
//!
//! Validates the finalized cart, assembles the order-creation payload, and
//! checks payment sufficiency. The network POST happens only after
//! `submit_payment` has confirmed the entered amount covers the total; the
//! server remains the authority on the persisted order.

use chrono::NaiveDateTime;
use thiserror::Error;

use shared::models::{OrderCreate, OrderItemCreate, OrderStatus};
use shared::util::{format_cents, format_created};

use crate::cart::{Cart, CartLine};
use crate::pricing::OrderTotals;

/// Checkout validation errors: recovered locally, shown inline, never sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// No line with quantity > 0
    #[error("cannot submit an empty order")]
    EmptyCart,

    /// Resolved tip is negative
    #[error("tip must not be negative (got {0} cents)")]
    NegativeTip(i64),

    /// Entered payment is not a positive amount
    #[error("payment must be a positive amount")]
    InvalidPaymentAmount,

    /// Entered payment does not cover the total
    #[error("insufficient payment: entered {entered} cents, total is {total} cents")]
    InsufficientPayment { entered: i64, total: i64 },
}

/// Reject carts with nothing to submit.
pub fn validate_for_submission(cart: &Cart) -> Result<(), CheckoutError> {
    if cart.submittable_lines().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(())
}

/// Reject a negative resolved tip.
pub fn validate_tip(tip_cents: i64) -> Result<(), CheckoutError> {
    if tip_cents < 0 {
        return Err(CheckoutError::NegativeTip(tip_cents));
    }
    Ok(())
}

/// Human-readable line list for order history,
/// e.g. `"2x Latte ($4.50), 1x Scone ($3.25)"`.
pub fn item_str(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "{}x {} ({})",
                line.quantity,
                line.name,
                format_cents(line.price)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assemble the order-creation request.
///
/// Lines are snapshotted (name and price as shown at checkout), totals come
/// in pre-computed, and the order starts life `pending`. `created` is the
/// café's local wall-clock time.
pub fn build_order_payload(
    cart: &Cart,
    customer_id: Option<i64>,
    totals: &OrderTotals,
    created: NaiveDateTime,
) -> Result<OrderCreate, CheckoutError> {
    validate_for_submission(cart)?;
    validate_tip(totals.tip)?;

    let lines = cart.submittable_lines();
    Ok(OrderCreate {
        customer_id,
        items: lines
            .iter()
            .map(|line| OrderItemCreate {
                id: line.item_id,
                item_name: line.name.clone(),
                price: line.price,
                quantity: line.quantity,
            })
            .collect(),
        subtotal: totals.subtotal,
        tax: totals.tax,
        tip: totals.tip,
        total: totals.total,
        created: format_created(created),
        status: OrderStatus::Pending,
        item_str: item_str(&lines),
    })
}

/// Check payment sufficiency and compute change.
///
/// Never mutates anything: on error the order is untouched and the caller
/// re-prompts. On success the caller persists the order and shows the change.
pub fn submit_payment(total_cents: i64, entered_cents: i64) -> Result<i64, CheckoutError> {
    if entered_cents <= 0 {
        return Err(CheckoutError::InvalidPaymentAmount);
    }
    if entered_cents < total_cents {
        return Err(CheckoutError::InsufficientPayment {
            entered: entered_cents,
            total: total_cents,
        });
    }
    Ok(entered_cents - total_cents)
}
