//! Order lists and status actions

use std::collections::HashMap;

use brew_client::orders_view::{self, OrderAction, Viewer};
use shared::models::{Order, OrderStatus};
use shared::util::{business_today, format_cents};

use crate::app::App;
use crate::input::{confirm, get_input, get_input_with_default, parse_date, parse_selection};

/// Guest / customer view: own orders, newest first, with cancel and pick-up
/// actions where the lifecycle allows them.
pub async fn my_orders(app: &mut App) {
    println!("{}", app.style.title.apply_to("My Orders"));
    if !app.refresh_orders().await {
        return;
    }

    let viewer = Viewer::from_session(app.session.as_ref());
    let mut orders = orders_view::filter_for_viewer_today(&app.cached_orders(), &viewer);
    orders_view::sort_by_created_descending(&mut orders);

    if orders.is_empty() {
        println!("{}", app.style.muted.apply_to("No orders found."));
        return;
    }
    print_order_table(app, &orders, None);
    act_on_orders(app, &mut orders).await;
}

/// Staff / admin view: every order for a chosen calendar day, with customer
/// names resolved and the day's revenue (canceled orders excluded).
pub async fn staff_orders(app: &mut App) {
    println!("{}", app.style.title.apply_to("Orders"));
    let today = business_today();
    let date = loop {
        let entered = get_input_with_default("Date (YYYY-MM-DD)", &today.to_string());
        match parse_date(&entered) {
            Some(date) => break date,
            None => println!("{}", app.style.error.apply_to("Enter a date as YYYY-MM-DD.")),
        }
    };

    if !app.refresh_orders().await {
        return;
    }
    let mut orders = orders_view::filter_by_date(&app.cached_orders(), date);
    orders_view::sort_by_created_descending(&mut orders);

    println!(
        "{} {}",
        app.style.header.apply_to("Daily Revenue:"),
        app.style
            .money
            .apply_to(format_cents(orders_view::daily_revenue(&orders)))
    );

    if orders.is_empty() {
        println!("{}", app.style.muted.apply_to("No orders found."));
        return;
    }

    let names = resolve_customer_names(app, &orders).await;
    print_order_table(app, &orders, Some(&names));
    act_on_orders(app, &mut orders).await;
}

async fn resolve_customer_names(app: &mut App, orders: &[Order]) -> HashMap<i64, String> {
    let mut names = HashMap::new();
    for order in orders {
        let Some(customer_id) = order.customer_id else {
            continue;
        };
        if names.contains_key(&customer_id) {
            continue;
        }
        let name = match app.client.user(customer_id).await {
            Ok(user) => user.display_name().to_string(),
            Err(err) => {
                tracing::warn!(customer_id, error = %err, "failed to fetch customer");
                format!("Customer #{customer_id}")
            }
        };
        names.insert(customer_id, name);
    }
    names
}

fn print_order_table(app: &App, orders: &[Order], names: Option<&HashMap<i64, String>>) {
    println!(
        "{}",
        app.style.header.apply_to(format!(
            "{:<3} {:<20} {:<19} {:<10} {:<10} Contents",
            "#", "Customer", "Created", "Total", "Status"
        ))
    );
    for (i, order) in orders.iter().enumerate() {
        let customer = match (order.customer_id, names) {
            (Some(id), Some(names)) => names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("Customer #{id}")),
            (Some(id), None) => format!("Customer #{id}"),
            (None, _) => "Guest".to_string(),
        };
        let contents = order.item_str.as_deref().unwrap_or("No items");
        println!(
            "{:<3} {:<20} {:<19} {:<10} {:<10} {}",
            i + 1,
            customer,
            order.created,
            format_cents(order.total_cents()),
            order.status.label(),
            app.style.muted.apply_to(contents),
        );
    }
}

/// Offer the permitted status action for a chosen row. The action table is
/// the only source of transitions, so nothing outside the lifecycle is ever
/// presented or sent.
async fn act_on_orders(app: &mut App, orders: &mut [Order]) {
    let role = app.role();
    loop {
        let choice = get_input("Order # to update (Enter to go back): ");
        if choice.is_empty() {
            return;
        }
        let Some(index) = parse_selection(&choice, orders.len()) else {
            println!("{}", app.style.error.apply_to("No such order."));
            continue;
        };
        let order = &orders[index];
        let Some(order_id) = order.id else {
            continue;
        };
        let actions = orders_view::available_actions(order.status, role);
        let Some(action) = actions.first().copied() else {
            println!(
                "{}",
                app.style
                    .muted
                    .apply_to(format!("Nothing to do for a {} order.", order.status.label()))
            );
            continue;
        };
        if !confirm(&prompt_for(action)) {
            continue;
        }
        match app
            .client
            .update_order_status(order_id, action.target_status())
            .await
        {
            Ok(message) => {
                orders[index].status = action.target_status();
                apply_status(app, order_id, action.target_status());
                println!("{}", app.style.success.apply_to(message));
            }
            // Displayed state is untouched on failure.
            Err(err) => app.report_error(err),
        }
    }
}

fn prompt_for(action: OrderAction) -> String {
    match action {
        OrderAction::Cancel => "Are you sure you want to cancel this order?".to_string(),
        OrderAction::PickUp => "Mark this order as picked up?".to_string(),
        OrderAction::Complete => "Are you sure you want to mark this order as complete?".to_string(),
    }
}

fn apply_status(app: &App, order_id: i64, status: OrderStatus) {
    let mut cache = app.orders_cache.lock().unwrap();
    if let Some(order) = cache.iter_mut().find(|o| o.id == Some(order_id)) {
        order.status = status;
    }
}
