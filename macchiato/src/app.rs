//! Application state and the role-scoped menu loop

use std::sync::{Arc, Mutex};

use brew_client::refresh::ListSequencer;
use brew_client::{CafeClient, ClientError, Session, SessionStore};
use shared::models::{Order, Role};

use crate::input::get_input;
use crate::screens;
use crate::theme::{StyleTokens, Theme};

pub struct App {
    pub client: CafeClient,
    pub store: SessionStore,
    pub session: Option<Session>,
    pub style: StyleTokens,
    /// Shared order list; background refreshes write through the sequencer
    pub orders_cache: Arc<Mutex<Vec<Order>>>,
    pub orders_seq: Arc<ListSequencer>,
}

impl App {
    pub fn new(
        client: CafeClient,
        store: SessionStore,
        session: Option<Session>,
        theme: Theme,
    ) -> Self {
        Self {
            client,
            store,
            session,
            style: theme.tokens(),
            orders_cache: Arc::new(Mutex::new(Vec::new())),
            orders_seq: Arc::new(ListSequencer::new()),
        }
    }

    /// Role of the current viewer; no session means guest.
    pub fn role(&self) -> Role {
        self.session.as_ref().map(|s| s.role).unwrap_or(Role::Guest)
    }

    pub fn customer_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }

    /// Show a network failure without disturbing any displayed state. An
    /// expired login additionally drops the session so the guest menu takes
    /// over.
    pub fn report_error(&mut self, err: ClientError) {
        match &err {
            ClientError::Unauthorized => {
                println!(
                    "{}",
                    self.style
                        .error
                        .apply_to("Your session has expired. Please log in again.")
                );
                self.end_session();
            }
            ClientError::Forbidden(_) => {
                println!(
                    "{}",
                    self.style
                        .error
                        .apply_to("You do not have permission for that action.")
                );
            }
            _ => {
                println!("{}", self.style.error.apply_to(format!("Error: {err}")));
            }
        }
        tracing::warn!(error = %err, "request failed");
    }

    /// Clear the session everywhere: memory, client token, disk.
    pub fn end_session(&mut self) {
        self.session = None;
        self.client.clear_token();
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear session file");
        }
    }

    /// Fetch the order list in the foreground. Results go through the
    /// sequencer so they never clobber a newer background refresh.
    pub async fn refresh_orders(&mut self) -> bool {
        let generation = self.orders_seq.begin();
        match self.client.list_orders().await {
            Ok(orders) => {
                if self.orders_seq.try_commit(generation) {
                    *self.orders_cache.lock().unwrap() = orders;
                }
                true
            }
            Err(err) => {
                self.report_error(err);
                false
            }
        }
    }

    /// Kick off an order-list refresh without blocking the menu (used after
    /// payment submission). A stale completion is dropped, not applied.
    pub fn spawn_orders_refresh(&self) {
        let client = self.client.clone();
        let cache = Arc::clone(&self.orders_cache);
        let seq = Arc::clone(&self.orders_seq);
        tokio::spawn(async move {
            let generation = seq.begin();
            match client.list_orders().await {
                Ok(orders) => {
                    if seq.try_commit(generation) {
                        *cache.lock().unwrap() = orders;
                    }
                }
                Err(err) => tracing::warn!(error = %err, "background order refresh failed"),
            }
        });
    }

    pub fn cached_orders(&self) -> Vec<Order> {
        self.orders_cache.lock().unwrap().clone()
    }

    fn print_banner(&self) {
        let who = match &self.session {
            Some(s) => format!("{} ({})", s.username, s.role.label()),
            None => "Guest".to_string(),
        };
        println!();
        println!("{}", self.style.title.apply_to("☕ Macchiato"));
        println!("{}", self.style.muted.apply_to(format!("Signed in as: {who}")));
    }

    pub async fn run(&mut self) {
        loop {
            self.print_banner();
            let stay = match self.role() {
                Role::Guest => self.guest_menu().await,
                Role::Customer => self.customer_menu().await,
                Role::Staff => self.staff_menu().await,
                Role::Admin => self.admin_menu().await,
            };
            if !stay {
                println!("{}", self.style.muted.apply_to("Goodbye!"));
                break;
            }
        }
    }

    async fn guest_menu(&mut self) -> bool {
        println!("1. My Orders");
        println!("2. Create New Order");
        println!("3. Login");
        println!("4. Register");
        println!("0. Exit");
        match get_input("> ").as_str() {
            "1" => screens::orders::my_orders(self).await,
            "2" => screens::checkout::create_order(self).await,
            "3" => screens::auth::login(self).await,
            "4" => screens::auth::register(self).await,
            "0" => return false,
            _ => self.invalid_choice(),
        }
        true
    }

    async fn customer_menu(&mut self) -> bool {
        println!("1. My Orders");
        println!("2. Create New Order");
        println!("3. Logout");
        println!("0. Exit");
        match get_input("> ").as_str() {
            "1" => screens::orders::my_orders(self).await,
            "2" => screens::checkout::create_order(self).await,
            "3" => screens::auth::logout(self),
            "0" => return false,
            _ => self.invalid_choice(),
        }
        true
    }

    async fn staff_menu(&mut self) -> bool {
        println!("1. Orders");
        println!("2. Menu Items");
        println!("3. Inventory");
        println!("4. Logout");
        println!("0. Exit");
        match get_input("> ").as_str() {
            "1" => screens::orders::staff_orders(self).await,
            "2" => screens::items::manage_items(self).await,
            "3" => screens::inventory::manage_inventory(self).await,
            "4" => screens::auth::logout(self),
            "0" => return false,
            _ => self.invalid_choice(),
        }
        true
    }

    async fn admin_menu(&mut self) -> bool {
        println!("1. Orders");
        println!("2. Menu Items");
        println!("3. Inventory");
        println!("4. Accounts");
        println!("5. Logout");
        println!("0. Exit");
        match get_input("> ").as_str() {
            "1" => screens::orders::staff_orders(self).await,
            "2" => screens::items::manage_items(self).await,
            "3" => screens::inventory::manage_inventory(self).await,
            "4" => screens::accounts::manage_accounts(self).await,
            "5" => screens::auth::logout(self),
            "0" => return false,
            _ => self.invalid_choice(),
        }
        true
    }

    fn invalid_choice(&self) {
        println!("{}", self.style.error.apply_to("Invalid choice"));
    }
}
