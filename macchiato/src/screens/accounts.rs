//! Account administration (admin only)

use brew_client::RegisterRequest;
use shared::models::{Role, User, UserUpdate};

use crate::app::App;
use crate::input::{confirm, get_input, get_input_with_default, parse_selection};

pub async fn manage_accounts(app: &mut App) {
    loop {
        println!("{}", app.style.title.apply_to("Accounts"));
        let mut users = match app.client.all_users().await {
            Ok(users) => users,
            Err(err) => return app.report_error(err),
        };
        sort_users(&mut users);
        print_users(app, &users);

        println!(
            "{}",
            app.style
                .accent
                .apply_to("c) create staff account  e) edit  d) delete  Enter) back")
        );
        match get_input("> ").as_str() {
            "" => return,
            "c" => create_staff(app).await,
            "e" => edit_user(app, &users).await,
            "d" => delete_user(app, &users).await,
            _ => println!("{}", app.style.error.apply_to("Invalid choice")),
        }
    }
}

/// Admins first, then staff, then customers; alphabetical within a tier.
fn sort_users(users: &mut [User]) {
    let priority = |user: &User| match user.primary_role() {
        Role::Admin => 3,
        Role::Staff => 2,
        Role::Customer | Role::Guest => 1,
    };
    users.sort_by(|a, b| {
        priority(b)
            .cmp(&priority(a))
            .then_with(|| a.display_name().to_lowercase().cmp(&b.display_name().to_lowercase()))
    });
}

fn print_users(app: &App, users: &[User]) {
    println!(
        "{}",
        app.style.header.apply_to(format!(
            "{:<3} {:<20} {:<16} {:<28} Role",
            "#", "Name", "Username", "Email"
        ))
    );
    for (i, user) in users.iter().enumerate() {
        println!(
            "{:<3} {:<20} {:<16} {:<28} {}",
            i + 1,
            user.display_name(),
            user.username,
            user.email.as_deref().unwrap_or(""),
            user.primary_role().label(),
        );
    }
}

async fn create_staff(app: &mut App) {
    println!("{}", app.style.title.apply_to("Create Staff Account"));
    let name = get_input("Name: ");
    let username = get_input("Username: ");
    let email = get_input("Email: ");
    let password = get_input("Password: ");
    let password_confirm = get_input("Confirm password: ");
    if name.is_empty() || username.is_empty() || email.is_empty() || password.is_empty() {
        println!("{}", app.style.error.apply_to("All fields are required."));
        return;
    }
    if password != password_confirm {
        println!("{}", app.style.error.apply_to("Passwords do not match."));
        return;
    }

    let request = RegisterRequest {
        name,
        username,
        email,
        password,
        confirm_password: Some(password_confirm),
    };
    match app.client.register_staff(&request).await {
        Ok(_) => println!("{}", app.style.success.apply_to("Staff account created.")),
        Err(err) => app.report_error(err),
    }
}

async fn edit_user(app: &mut App, users: &[User]) {
    let Some(index) = parse_selection(&get_input("Account #: "), users.len()) else {
        println!("{}", app.style.error.apply_to("No such account."));
        return;
    };
    let user = &users[index];

    let name = get_input_with_default("Name", user.name.as_deref().unwrap_or(""));
    let email = get_input_with_default("Email", user.email.as_deref().unwrap_or(""));
    let username = get_input_with_default("Username", &user.username);

    let update = UserUpdate {
        name: if name.is_empty() { None } else { Some(name) },
        email: if email.is_empty() { None } else { Some(email) },
        username: Some(username),
    };
    match app.client.update_user(user.id, &update).await {
        Ok(_) => println!("{}", app.style.success.apply_to("Account updated.")),
        Err(err) => app.report_error(err),
    }
}

async fn delete_user(app: &mut App, users: &[User]) {
    let Some(index) = parse_selection(&get_input("Account #: "), users.len()) else {
        println!("{}", app.style.error.apply_to("No such account."));
        return;
    };
    let user = &users[index];
    if app.customer_id() == Some(user.id) {
        println!(
            "{}",
            app.style
                .error
                .apply_to("You cannot delete the account you are signed in with.")
        );
        return;
    }
    if !confirm(&format!("Delete {}?", user.username)) {
        return;
    }
    match app.client.delete_user(user.id).await {
        Ok(()) => println!("{}", app.style.success.apply_to("Account deleted.")),
        Err(err) => app.report_error(err),
    }
}
