//! Inventory and tax-rate administration (staff/admin)

use shared::models::Ingredient;

use crate::app::App;
use crate::input::{get_input, parse_float, parse_integer, parse_selection};

pub async fn manage_inventory(app: &mut App) {
    loop {
        println!("{}", app.style.title.apply_to("Inventory"));
        let inventory = match app.client.inventory().await {
            Ok(inventory) => inventory,
            Err(err) => return app.report_error(err),
        };
        if inventory.ingredients.is_empty() {
            println!("{}", app.style.muted.apply_to("No ingredients in stock."));
        } else {
            println!(
                "{}",
                app.style
                    .header
                    .apply_to(format!("{:<3} {:<24} Quantity", "#", "Ingredient"))
            );
            for (i, ingredient) in inventory.ingredients.iter().enumerate() {
                println!(
                    "{:<3} {:<24} {}",
                    i + 1,
                    ingredient.name,
                    ingredient.quantity.unwrap_or(0)
                );
            }
        }
        match app.client.tax_rate().await {
            Ok(percentage) => println!(
                "{} {}%",
                app.style.header.apply_to("Tax rate:"),
                percentage
            ),
            Err(err) => app.report_error(err),
        }

        println!(
            "{}",
            app.style
                .accent
                .apply_to("u) update quantity  a) add ingredient  t) set tax rate  Enter) back")
        );
        match get_input("> ").as_str() {
            "" => return,
            "u" => update_quantity(app, inventory).await,
            "a" => add_ingredient(app, inventory).await,
            "t" => set_tax_rate(app).await,
            _ => println!("{}", app.style.error.apply_to("Invalid choice")),
        }
    }
}

async fn update_quantity(app: &mut App, mut inventory: shared::models::Inventory) {
    if inventory.ingredients.is_empty() {
        return;
    }
    let Some(index) = parse_selection(&get_input("Ingredient #: "), inventory.ingredients.len())
    else {
        println!("{}", app.style.error.apply_to("No such ingredient."));
        return;
    };
    let Some(quantity) = parse_integer(&get_input("New quantity: ")) else {
        println!("{}", app.style.error.apply_to("Enter a whole number."));
        return;
    };
    if quantity < 0 {
        println!("{}", app.style.error.apply_to("Quantity must not be negative."));
        return;
    }
    let name = inventory.ingredients[index].name.clone();
    inventory.add_ingredient(Ingredient::new(name, Some(quantity)));

    match app.client.update_inventory(&inventory).await {
        Ok(_) => println!("{}", app.style.success.apply_to("Inventory updated.")),
        Err(err) => app.report_error(err),
    }
}

async fn add_ingredient(app: &mut App, mut inventory: shared::models::Inventory) {
    let name = get_input("Ingredient name: ");
    if name.is_empty() {
        return;
    }
    let Some(quantity) = parse_integer(&get_input("Quantity: ")) else {
        println!("{}", app.style.error.apply_to("Enter a whole number."));
        return;
    };
    if quantity < 0 {
        println!("{}", app.style.error.apply_to("Quantity must not be negative."));
        return;
    }
    inventory.add_ingredient(Ingredient::new(name, Some(quantity)));

    match app.client.update_inventory(&inventory).await {
        Ok(_) => println!("{}", app.style.success.apply_to("Inventory updated.")),
        Err(err) => app.report_error(err),
    }
}

async fn set_tax_rate(app: &mut App) {
    let Some(percentage) = parse_float(&get_input("Tax rate (%): ")) else {
        println!("{}", app.style.error.apply_to("Enter a number like 2 or 7.25."));
        return;
    };
    if !(0.0..=100.0).contains(&percentage) {
        println!(
            "{}",
            app.style
                .error
                .apply_to("Tax rate must be between 0 and 100.")
        );
        return;
    }
    match app.client.set_tax_rate(percentage).await {
        Ok(applied) => println!(
            "{}",
            app.style
                .success
                .apply_to(format!("Tax rate set to {applied}%."))
        ),
        Err(err) => app.report_error(err),
    }
}
