use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm};
use tabled::{settings::Style, Table, Tabled};
use tracing::{debug, info};

use crate::{
    cart_actor::{CartContext, CartError, CartOutcome},
    checkout::{MessagingSink, StdoutSink},
    cli::args::{row_index, Commands},
    clients::CartClient,
    config::CartConfig,
    lifecycle::CartSystem,
    menu::{FixedPortion, Menu, MenuScanner, PortionSelector, PromptSelector},
    model::{CartId, SessionId},
    storage::{FileSessionStore, SessionStore},
    view::{CartSurface, CartView, HtmlSurface, TerminalSurface},
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");

pub const CLEAR_CONFIRMATION_TEXT: &str = "Are you sure you want to clear your order?";

#[derive(Tabled)]
struct MenuTableRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Where the cart ends up after a command.
enum Output {
    Table(Arc<TerminalSurface>),
    Html(Arc<HtmlSurface>),
}

impl Output {
    fn for_command(command: &Commands) -> Self {
        match command {
            Commands::Show { html: true } => Output::Html(Arc::new(HtmlSurface::new())),
            _ => Output::Table(Arc::new(TerminalSurface::new())),
        }
    }

    fn surface(&self) -> Arc<dyn CartSurface> {
        match self {
            Output::Table(surface) => surface.clone() as Arc<dyn CartSurface>,
            Output::Html(surface) => surface.clone() as Arc<dyn CartSurface>,
        }
    }

    fn print(&self) {
        match self {
            Output::Table(surface) => surface.print(),
            Output::Html(surface) => {
                let document = surface.document();
                println!(r#"<div class="cart-items">{}</div>"#, document.cart_items);
                println!(r#"<span class="cart-count">{}</span>"#, document.cart_count);
                println!(r#"<span class="total-price">{}</span>"#, document.total_price);
                if let Some(notice) = document.notice {
                    println!("{notice}");
                }
            }
        }
    }
}

pub struct CliApp {
    config: CartConfig,
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn MessagingSink>,
}

impl CliApp {
    /// Saves sessions under the configured state directory and prints checkout links.
    pub fn new(config: CartConfig) -> Self {
        let store = Arc::new(FileSessionStore::new(config.state_dir.clone()));
        Self::with_collaborators(config, store, Arc::new(StdoutSink))
    }

    pub fn with_collaborators(
        config: CartConfig,
        store: Arc<dyn SessionStore>,
        sink: Arc<dyn MessagingSink>,
    ) -> Self {
        Self {
            config,
            store,
            sink,
        }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        debug!(?command, session = %self.config.session, "Running command");

        if command == Commands::Menu {
            return self.handle_menu().await;
        }

        let output = Output::for_command(&command);
        let context = CartContext {
            store: self.store.clone(),
            surface: output.surface(),
            sink: self.sink.clone(),
            settings: self.config.settings()?,
        };
        let system = CartSystem::new(context);
        let session = SessionId::from(self.config.session.clone());

        let result = if command == Commands::EndSession {
            self.handle_end_session(&system, &session).await
        } else {
            let client = system.cart_client.clone();
            let cart = client.open(session).await?;
            let result = self.handle_cart_command(&client, cart, command).await;
            client.close(cart).await?;
            if result.is_ok() {
                output.print();
            }
            result
        };

        system.shutdown().await.map_err(anyhow::Error::msg)?;
        result
    }

    async fn handle_cart_command(
        &self,
        client: &CartClient,
        cart: CartId,
        command: Commands,
    ) -> Result<()> {
        match command {
            Commands::Add { item, portion } => {
                self.handle_add(client, cart, &item, portion.map(Into::into))
                    .await
            }
            Commands::Remove { row } => {
                let outcome = match row_index(row) {
                    Some(index) => client.remove(cart, index).await?,
                    None => CartOutcome::Unchanged,
                };
                report(row, &outcome);
                Ok(())
            }
            Commands::Qty { row, quantity } => {
                let outcome = match row_index(row) {
                    Some(index) => client.set_quantity(cart, index, quantity).await?,
                    None => CartOutcome::Unchanged,
                };
                report(row, &outcome);
                Ok(())
            }
            Commands::Inc { row } => self.handle_step(client, cart, row, true).await,
            Commands::Dec { row } => self.handle_step(client, cart, row, false).await,
            Commands::Clear { yes } => self.handle_clear(client, cart, yes).await,
            Commands::Show { .. } => Ok(()),
            Commands::Checkout => self.handle_checkout(client, cart).await,
            Commands::Menu | Commands::EndSession => Ok(()),
        }
    }

    async fn load_menu(&self) -> Result<Menu> {
        Menu::load(&self.config.menu)
            .await
            .with_context(|| format!("Failed to load menu from {}", self.config.menu.display()))
    }

    async fn handle_menu(&self) -> Result<()> {
        let menu = self.load_menu().await?;
        let rows: Vec<MenuTableRow> = menu
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| MenuTableRow {
                number: i + 1,
                name: item.name.clone(),
                price: item.price_text.clone(),
                category: item.category.clone().unwrap_or_default(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }

    async fn handle_add(
        &self,
        client: &CartClient,
        cart: CartId,
        query: &str,
        portion: Option<crate::model::Portion>,
    ) -> Result<()> {
        let scanner = MenuScanner::new(self.load_menu().await?, client.clone());
        let item = scanner.find(query)?.clone();

        let selector: Box<dyn PortionSelector> = match portion {
            Some(portion) => Box::new(FixedPortion(portion)),
            None => Box::new(PromptSelector::new(self.config.currency.clone())),
        };

        match scanner.add_to_cart(cart, &item, selector.as_ref()).await? {
            Some(_) => info!(item = %item.name, "Item added"),
            None => println!("No portion chosen, nothing added"),
        }
        Ok(())
    }

    /// Runs the increment or decrement control of a row.
    async fn handle_step(
        &self,
        client: &CartClient,
        cart: CartId,
        row: usize,
        up: bool,
    ) -> Result<()> {
        let order = client.snapshot(cart).await?;
        let view = CartView::project(&order, &self.config.currency);
        let control = row_index(row).and_then(|index| view.rows.get(index)).map(|r| {
            if up {
                r.controls.increment.clone()
            } else {
                r.controls.decrement.clone()
            }
        });

        let outcome = match control {
            Some(command) => client.dispatch(cart, command).await?,
            None => CartOutcome::Unchanged,
        };
        report(row, &outcome);
        Ok(())
    }

    async fn handle_clear(&self, client: &CartClient, cart: CartId, yes: bool) -> Result<()> {
        let order = client.snapshot(cart).await?;
        if order.is_empty() {
            return Ok(());
        }

        let confirmed = yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(CLEAR_CONFIRMATION_TEXT)
                .default(false)
                .interact()?;
        if !confirmed {
            println!("Order kept");
            return Ok(());
        }

        client.clear(cart, true).await?;
        println!("{} Order cleared", CHECKMARK);
        Ok(())
    }

    async fn handle_checkout(&self, client: &CartClient, cart: CartId) -> Result<()> {
        match client.checkout(cart).await {
            Ok(_) => {
                println!(
                    "{} {}",
                    ROCKET,
                    style("Open the link above to send your order").bold()
                );
                Ok(())
            }
            // The surface has already shown the notice.
            Err(CartError::EmptyOrder) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn handle_end_session(&self, system: &CartSystem, session: &SessionId) -> Result<()> {
        system
            .end_session(session)
            .await
            .with_context(|| format!("Failed to end session {session}"))?;
        println!("{} Session {} ended", CHECKMARK, style(session).cyan());
        Ok(())
    }
}

fn report(row: usize, outcome: &CartOutcome) {
    match outcome {
        CartOutcome::Unchanged => {
            println!("{} No row {} in the order", WARNING, row);
        }
        CartOutcome::Removed(item) => {
            println!("{} Removed {} ({})", CHECKMARK, item.name, item.portion);
        }
        _ => {}
    }
}
