//! Login, registration, logout

use brew_client::{RegisterRequest, Session};

use crate::app::App;
use crate::input::get_input;

pub async fn login(app: &mut App) {
    println!("{}", app.style.title.apply_to("Login"));
    let username = get_input("Username or email: ");
    let password = get_input("Password: ");
    if username.is_empty() || password.is_empty() {
        println!("{}", app.style.error.apply_to("Username and password are required."));
        return;
    }

    match app.client.login(&username, &password).await {
        Ok(response) => {
            let session = Session::from_login(&response, &username);
            app.client.set_token(session.token.clone());
            if let Err(err) = app.store.save(&session) {
                tracing::warn!(error = %err, "failed to persist session");
            }
            println!(
                "{}",
                app.style
                    .success
                    .apply_to(format!("Welcome back, {}!", session.username))
            );
            app.session = Some(session);
        }
        Err(err) => app.report_error(err),
    }
}

pub async fn register(app: &mut App) {
    println!("{}", app.style.title.apply_to("Register"));
    let name = get_input("Name: ");
    let username = get_input("Username: ");
    let email = get_input("Email: ");
    let password = get_input("Password: ");
    if name.is_empty() || username.is_empty() || email.is_empty() || password.is_empty() {
        println!("{}", app.style.error.apply_to("All fields are required."));
        return;
    }

    let request = RegisterRequest {
        name,
        username,
        email,
        password,
        confirm_password: None,
    };
    match app.client.register(&request).await {
        Ok(_) => println!(
            "{}",
            app.style
                .success
                .apply_to("Account created. You can log in now.")
        ),
        Err(err) => app.report_error(err),
    }
}

pub fn logout(app: &mut App) {
    app.end_session();
    println!("{}", app.style.muted.apply_to("Logged out."));
}
