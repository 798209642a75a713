//! Macchiato - terminal client for the café ordering system
//!
//! Guests and customers build and pay for orders; staff manage the menu,
//! inventory, and order fulfillment; admins additionally manage accounts.
//! All data lives behind the café backend REST API.

mod app;
mod input;
mod screens;
mod theme;

use std::path::PathBuf;

use clap::Parser;

use brew_client::{ClientConfig, SessionStore};

use crate::app::App;
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "macchiato")]
#[command(about = "terminal client for the café ordering system", version, long_about = None)]
struct Cli {
    /// Café backend base URL
    #[arg(long, env = "BREW_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Directory for session state
    #[arg(long, env = "MACCHIATO_DATA_DIR", default_value = "./.macchiato")]
    data_dir: PathBuf,

    /// Color theme
    #[arg(long, env = "MACCHIATO_THEME", value_enum, default_value = "light")]
    theme: Theme,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(base_url = %cli.base_url, "starting macchiato");

    let store = SessionStore::new(&cli.data_dir);
    let session = match store.load() {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable session file");
            store.clear().ok();
            None
        }
    };

    let mut config = ClientConfig::new(&cli.base_url);
    if let Some(session) = &session {
        config = config.with_token(session.token.clone());
    }
    let client = config.build()?;

    let mut app = App::new(client, store, session, cli.theme);
    app.run().await;
    Ok(())
}
