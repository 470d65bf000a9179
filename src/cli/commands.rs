use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{Input, theme::ColorfulTheme};

use tracing::{debug, error, info};

use crate::{
    cli::args::Args,
    models::{CatalogEntry, Order, PizzaBase, PizzaSize},
    services::{OrderService, OrderServiceError},
    utils::{
        formatting::{choice_hint, format_base_table, format_order_summary, format_size_table, format_topping_table},
        Config,
    },
};

static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static PIZZA: Emoji<'_, '_> = Emoji("🍕 ", "");

pub struct CliApp {
    config: Config,
    order_service: OrderService,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            order_service: OrderService::new(),
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        // Setup logging
        let filter = if args.verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.config.log_level))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        info!("Pizza builder started in {} environment", self.config.environment);

        if args.menu {
            self.print_menu();
            return Ok(());
        }

        let order = if args.is_non_interactive() {
            self.order_from_args(&args)?
        } else {
            self.order_from_prompts()?
        };

        self.print_order(&order, args.json)
    }

    /// Build the order from `--base`, `--size` and `--toppings`.
    pub fn order_from_args(&self, args: &Args) -> Result<Order> {
        let base = self.choose::<PizzaBase>(args.base.as_deref().unwrap_or_default(), "base")?;
        let size = self.choose::<PizzaSize>(args.size.as_deref().unwrap_or_default(), "size")?;
        let toppings = self
            .order_service
            .parse_toppings(args.toppings.as_deref().unwrap_or_default());

        Ok(self.order_service.build_order(base, size, &toppings))
    }

    fn order_from_prompts(&self) -> Result<Order> {
        println!("{} {}", PIZZA, style("Welcome to the Pizza Builder!").bold().cyan());

        let theme = ColorfulTheme::default();
        let currency = &self.config.currency;

        println!("\n{}", style("Select your pizza base:").bold());
        println!("{}", format_base_table(currency));
        let input: String = Input::with_theme(&theme)
            .with_prompt(format!("Enter your choice ({})", choice_hint::<PizzaBase>()))
            .interact_text()?;
        let base = self.choose::<PizzaBase>(&input, "base")?;

        println!("\n{}", style("Select your pizza size:").bold());
        println!("{}", format_size_table());
        let input: String = Input::with_theme(&theme)
            .with_prompt(format!("Enter your choice ({})", choice_hint::<PizzaSize>()))
            .interact_text()?;
        let size = self.choose::<PizzaSize>(&input, "size")?;

        println!(
            "\n{}",
            style("Select your toppings (enter numbers separated by commas or leave blank for no toppings):").bold()
        );
        println!("{}", format_topping_table(currency));
        let input: String = Input::with_theme(&theme)
            .with_prompt("Enter your choices (e.g., 1,2)")
            .allow_empty(true)
            .interact_text()?;
        let toppings = self.order_service.parse_toppings(&input);
        debug!("Parsed {} topping(s) from '{}'", toppings.len(), input);

        Ok(self.order_service.build_order(base, size, &toppings))
    }

    // A bad base or size leaves nothing to order, so it ends the session.
    fn choose<T: CatalogEntry>(&self, input: &str, what: &str) -> Result<T> {
        self.order_service
            .select::<T>(input)
            .map_err(|e: OrderServiceError| {
                println!("{} Invalid {} choice: {}", CROSS, what, style(&e).red());
                error!("Invalid {} choice: {}", what, e);
                e
            })
            .with_context(|| format!("No valid {} selected", what))
    }

    fn print_menu(&self) {
        let currency = &self.config.currency;

        println!("{}", style("Bases").bold().cyan());
        println!("{}", format_base_table(currency));
        println!("{}", style("Sizes").bold().cyan());
        println!("{}", format_size_table());
        println!("{}", style("Toppings").bold().cyan());
        println!("{}", format_topping_table(currency));
    }

    fn print_order(&self, order: &Order, json: bool) -> Result<()> {
        let summary = order.summary();

        if json {
            let output = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize order summary")?;
            println!("{}", output);
        } else {
            println!("\n{} {}", INFO, style("Your Pizza Order Summary:").bold().cyan());
            print!("{}", format_order_summary(&summary, &self.config.currency));
        }

        info!(
            "Order complete: {} topping(s), total {:.2}",
            summary.toppings.len(),
            summary.total_price
        );
        Ok(())
    }
}
