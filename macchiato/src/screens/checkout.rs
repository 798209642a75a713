//! Order creation and payment
//!
//! Catalog selection into a cart, live totals with tip selection, then the
//! payment screen. The order is only sent to the backend after the entered
//! payment covers the total; every validation failure stays inline and
//! leaves the cart untouched.

use brew_client::checkout::{
    build_order_payload, submit_payment, validate_for_submission, validate_tip,
};
use brew_client::{Cart, OrderTotals, TipPercent, TipSelection};
use shared::models::MenuItem;
use shared::util::{business_now, format_cents};

use crate::app::App;
use crate::input::{get_input, parse_dollars, parse_integer, parse_selection};

enum BuilderOutcome {
    Pay,
    Cancel,
}

enum PaymentOutcome {
    Paid,
    EditOrder,
    Abandon,
}

pub async fn create_order(app: &mut App) {
    println!("{}", app.style.title.apply_to("Create New Order"));

    let mut catalog = match app.client.list_items().await {
        Ok(items) => items,
        Err(err) => return app.report_error(err),
    };
    if catalog.is_empty() {
        println!("{}", app.style.muted.apply_to("The menu is currently empty."));
        return;
    }
    // The server reports a percentage (2 means 2%).
    let tax_rate = match app.client.tax_rate().await {
        Ok(percentage) => percentage / 100.0,
        Err(err) => return app.report_error(err),
    };

    let mut cart = Cart::new();
    let mut tip = TipSelection::default();

    loop {
        match builder_loop(app, &catalog, tax_rate, &mut cart, &mut tip) {
            BuilderOutcome::Cancel => return,
            BuilderOutcome::Pay => {}
        }

        match payment_screen(app, &cart, tax_rate, &tip).await {
            PaymentOutcome::Paid | PaymentOutcome::Abandon => return,
            PaymentOutcome::EditOrder => {
                // Re-match the cart against a fresh catalog so edited orders
                // pick up current prices; vanished items keep their snapshot.
                if let Ok(items) = app.client.list_items().await {
                    catalog = items;
                }
                cart = Cart::restore_from_prior(&catalog, cart.lines());
            }
        }
    }
}

fn builder_loop(
    app: &App,
    catalog: &[MenuItem],
    tax_rate: f64,
    cart: &mut Cart,
    tip: &mut TipSelection,
) -> BuilderOutcome {
    loop {
        print_catalog(app, catalog);
        print_cart(app, cart, tax_rate, tip);

        println!(
            "{}",
            app.style
                .accent
                .apply_to("a) add item  r) remove item  t) tip  p) proceed to payment  q) cancel")
        );
        match get_input("> ").as_str() {
            "a" => add_item(app, catalog, cart),
            "r" => remove_item(app, cart),
            "t" => select_tip(app, tip),
            "p" => {
                let totals = OrderTotals::compute(cart.lines(), tax_rate, tip);
                if let Err(err) = validate_for_submission(cart) {
                    println!("{}", app.style.error.apply_to(err.to_string()));
                    continue;
                }
                if let Err(err) = validate_tip(totals.tip) {
                    println!("{}", app.style.error.apply_to(err.to_string()));
                    continue;
                }
                return BuilderOutcome::Pay;
            }
            "q" => return BuilderOutcome::Cancel,
            _ => println!("{}", app.style.error.apply_to("Invalid choice")),
        }
    }
}

fn print_catalog(app: &App, catalog: &[MenuItem]) {
    println!("{}", app.style.header.apply_to("Menu"));
    for (i, item) in catalog.iter().enumerate() {
        println!(
            "{:<3} {:<24} {}",
            i + 1,
            item.name,
            app.style.money.apply_to(format_cents(item.price))
        );
    }
}

fn print_cart(app: &App, cart: &Cart, tax_rate: f64, tip: &TipSelection) {
    if cart.is_empty() {
        println!("{}", app.style.muted.apply_to("No items added yet."));
        return;
    }
    println!("{}", app.style.header.apply_to("Items Added"));
    for (i, line) in cart.lines().iter().enumerate() {
        println!(
            "{:<3} {} — {} × {} = {}",
            i + 1,
            line.name,
            line.quantity,
            format_cents(line.price),
            app.style.money.apply_to(format_cents(line.line_total()))
        );
    }
    let totals = OrderTotals::compute(cart.lines(), tax_rate, tip);
    let tip_label = match tip {
        TipSelection::Percent(p) => p.to_string(),
        TipSelection::Custom(_) => "custom".to_string(),
    };
    println!("Subtotal: {}", app.style.money.apply_to(format_cents(totals.subtotal)));
    println!("Tax:      {}", app.style.money.apply_to(format_cents(totals.tax)));
    println!(
        "Tip ({}): {}",
        tip_label,
        app.style.money.apply_to(format_cents(totals.tip))
    );
    println!(
        "Total:    {}",
        app.style.money.apply_to(format_cents(totals.total))
    );
}

fn add_item(app: &App, catalog: &[MenuItem], cart: &mut Cart) {
    let choice = get_input("Item #: ");
    let Some(index) = parse_selection(&choice, catalog.len()) else {
        println!("{}", app.style.error.apply_to("Please select an item."));
        return;
    };
    let quantity = get_input("Quantity: ");
    let Some(quantity) = parse_integer(&quantity) else {
        println!("{}", app.style.error.apply_to("Please specify a quantity."));
        return;
    };
    if let Err(err) = cart.add_line(&catalog[index], quantity) {
        println!("{}", app.style.error.apply_to(err.to_string()));
    }
}

fn remove_item(app: &App, cart: &mut Cart) {
    if cart.is_empty() {
        return;
    }
    let choice = get_input("Line # to remove: ");
    match parse_selection(&choice, cart.lines().len()) {
        Some(index) => cart.remove_at(index),
        None => println!("{}", app.style.error.apply_to("No such line.")),
    }
}

fn select_tip(app: &App, tip: &mut TipSelection) {
    for (i, preset) in TipPercent::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, preset);
    }
    println!("{}. Custom amount", TipPercent::ALL.len() + 1);
    let choice = get_input("> ");
    if let Some(index) = parse_selection(&choice, TipPercent::ALL.len()) {
        *tip = TipSelection::Percent(TipPercent::ALL[index]);
        return;
    }
    if choice == (TipPercent::ALL.len() + 1).to_string() {
        let entered = get_input("Tip (cents): ");
        match parse_integer(&entered) {
            // A negative entry is kept and rejected at submission, matching
            // the validation boundary the backend expects.
            Some(cents) => *tip = TipSelection::Custom(cents),
            None => println!("{}", app.style.error.apply_to("Enter a whole number of cents.")),
        }
        return;
    }
    println!("{}", app.style.error.apply_to("Invalid choice"));
}

async fn payment_screen(
    app: &mut App,
    cart: &Cart,
    tax_rate: f64,
    tip: &TipSelection,
) -> PaymentOutcome {
    let totals = OrderTotals::compute(cart.lines(), tax_rate, tip);
    println!("{}", app.style.title.apply_to("Payment"));
    print_cart(app, cart, tax_rate, tip);

    loop {
        let entered = get_input("Payment amount ($), e) edit order, q) cancel: ");
        match entered.as_str() {
            "e" => return PaymentOutcome::EditOrder,
            "q" => return PaymentOutcome::Abandon,
            raw => {
                let Some(entered_cents) = parse_dollars(raw) else {
                    println!(
                        "{}",
                        app.style
                            .error
                            .apply_to("Please enter a valid payment amount.")
                    );
                    continue;
                };
                let change = match submit_payment(totals.total, entered_cents) {
                    Ok(change) => change,
                    Err(err) => {
                        println!("{}", app.style.error.apply_to(err.to_string()));
                        continue;
                    }
                };

                // Payment is sufficient; persist the order.
                let payload =
                    match build_order_payload(cart, app.customer_id(), &totals, business_now()) {
                        Ok(payload) => payload,
                        Err(err) => {
                            println!("{}", app.style.error.apply_to(err.to_string()));
                            return PaymentOutcome::Abandon;
                        }
                    };
                match app.client.create_order(&payload).await {
                    Ok(_) => {
                        println!("{}", app.style.success.apply_to("Payment Successful!"));
                        println!("Payment submitted: {}", format_cents(entered_cents));
                        println!("Total: {}", format_cents(totals.total));
                        println!(
                            "Change due: {}",
                            app.style.money.apply_to(format_cents(change))
                        );
                        app.spawn_orders_refresh();
                        return PaymentOutcome::Paid;
                    }
                    // The cart stays intact; the customer may retry.
                    Err(err) => app.report_error(err),
                }
            }
        }
    }
}
