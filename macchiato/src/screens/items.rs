//! Menu item administration (staff/admin)

use shared::models::{Ingredient, ItemCreate, ItemIngredient, ItemUpdate, MenuItem};
use shared::util::{cents_to_dollars, format_cents};

use crate::app::App;
use crate::input::{confirm, get_input, get_input_with_default, parse_dollars, parse_integer, parse_selection};

pub async fn manage_items(app: &mut App) {
    loop {
        println!("{}", app.style.title.apply_to("Menu Items"));
        let items = match app.client.list_items().await {
            Ok(items) => items,
            Err(err) => return app.report_error(err),
        };
        print_items(app, &items);

        println!(
            "{}",
            app.style
                .accent
                .apply_to("a) add  e) edit  d) delete  Enter) back")
        );
        match get_input("> ").as_str() {
            "" => return,
            "a" => add_item(app).await,
            "e" => edit_item(app, &items).await,
            "d" => delete_item(app, &items).await,
            _ => println!("{}", app.style.error.apply_to("Invalid choice")),
        }
    }
}

fn print_items(app: &App, items: &[MenuItem]) {
    if items.is_empty() {
        println!("{}", app.style.muted.apply_to("No items on the menu."));
        return;
    }
    for (i, item) in items.iter().enumerate() {
        let ingredients = item
            .ingredients
            .iter()
            .map(|req| {
                format!(
                    "{}: {}{}",
                    req.name(),
                    req.quantity,
                    req.unit.as_deref().unwrap_or("")
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<3} {:<24} {:<10} {}",
            i + 1,
            item.name,
            app.style.money.apply_to(format_cents(item.price)),
            app.style.muted.apply_to(item.description.as_deref().unwrap_or("")),
        );
        if !ingredients.is_empty() {
            println!("    {}", app.style.muted.apply_to(ingredients));
        }
    }
}

fn prompt_ingredients(app: &App) -> Vec<ItemIngredient> {
    let mut requirements: Vec<ItemIngredient> = Vec::new();
    println!(
        "{}",
        app.style
            .muted
            .apply_to("Add ingredients (empty name to finish):")
    );
    loop {
        let name = get_input("Ingredient name: ");
        if name.is_empty() {
            break;
        }
        let Some(quantity) = parse_integer(&get_input("Quantity per item: ")) else {
            println!("{}", app.style.error.apply_to("Enter a whole number."));
            continue;
        };
        let unit = get_input("Unit (e.g. g, ml, tsp; optional): ");
        requirements.push(ItemIngredient {
            id: None,
            ingredient: Ingredient::new(name, None),
            quantity,
            unit: if unit.is_empty() { None } else { Some(unit) },
            item_id: None,
        });
    }
    requirements
}

async fn add_item(app: &mut App) {
    let name = get_input("Name: ");
    if name.is_empty() {
        println!("{}", app.style.error.apply_to("A name is required."));
        return;
    }
    let description = get_input("Description: ");
    let Some(price) = parse_dollars(&get_input("Price ($): ")) else {
        println!("{}", app.style.error.apply_to("Enter a price like 4.50."));
        return;
    };
    let ingredients = prompt_ingredients(app);

    let payload = ItemCreate {
        name,
        description: if description.is_empty() { None } else { Some(description) },
        price,
        ingredients,
    };
    match app.client.create_item(&payload).await {
        Ok(item) => println!(
            "{}",
            app.style.success.apply_to(format!("Added {}.", item.name))
        ),
        Err(err) => app.report_error(err),
    }
}

async fn edit_item(app: &mut App, items: &[MenuItem]) {
    let Some(index) = parse_selection(&get_input("Item #: "), items.len()) else {
        println!("{}", app.style.error.apply_to("No such item."));
        return;
    };
    let item = &items[index];
    let Some(id) = item.id else { return };

    let name = get_input_with_default("Name", &item.name);
    let description = get_input_with_default(
        "Description",
        item.description.as_deref().unwrap_or(""),
    );
    let price_input =
        get_input_with_default("Price ($)", &format!("{:.2}", cents_to_dollars(item.price)));
    let Some(price) = parse_dollars(&price_input) else {
        println!("{}", app.style.error.apply_to("Enter a price like 4.50."));
        return;
    };

    let payload = ItemUpdate {
        name: Some(name),
        description: if description.is_empty() { None } else { Some(description) },
        price: Some(price),
        ingredients: None,
    };
    match app.client.update_item(id, &payload).await {
        Ok(updated) => println!(
            "{}",
            app.style
                .success
                .apply_to(format!("Updated {}.", updated.name))
        ),
        Err(err) => app.report_error(err),
    }
}

async fn delete_item(app: &mut App, items: &[MenuItem]) {
    let Some(index) = parse_selection(&get_input("Item #: "), items.len()) else {
        println!("{}", app.style.error.apply_to("No such item."));
        return;
    };
    let item = &items[index];
    let Some(id) = item.id else { return };
    if !confirm(&format!("Delete {}?", item.name)) {
        return;
    }
    match app.client.delete_item(id).await {
        Ok(()) => println!("{}", app.style.success.apply_to("Item deleted.")),
        Err(err) => app.report_error(err),
    }
}
