use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{CatalogEntry, OrderSummary, PizzaBase, PizzaSize, Topping};

#[derive(Tabled)]
struct PriceTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Option")]
    option: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct MultiplierTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Option")]
    option: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

fn price_rows<T: CatalogEntry>(currency: &str) -> Vec<PriceTableRow> {
    T::all()
        .iter()
        .enumerate()
        .map(|(i, entry)| PriceTableRow {
            index: i + 1,
            option: entry.description().trim_end().to_string(),
            price: format_price(entry.amount(), currency),
        })
        .collect()
}

pub fn format_base_table(currency: &str) -> String {
    render(price_rows::<PizzaBase>(currency))
}

pub fn format_size_table() -> String {
    let rows: Vec<MultiplierTableRow> = PizzaSize::all()
        .iter()
        .enumerate()
        .map(|(i, size)| MultiplierTableRow {
            index: i + 1,
            option: size.description().trim_end().to_string(),
            multiplier: format_multiplier(size.multiplier()),
        })
        .collect();

    render(rows)
}

pub fn format_topping_table(currency: &str) -> String {
    render(price_rows::<Topping>(currency))
}

pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

pub fn format_multiplier(multiplier: f64) -> String {
    format!("x{:.1}", multiplier)
}

/// Hint shown after a single-choice prompt, e.g. `1/2/3`.
pub fn choice_hint<T: CatalogEntry>() -> String {
    (1..=T::all().len())
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn format_order_summary(summary: &OrderSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Description").bold(), style(&summary.description).green()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Total Price").bold(),
        style(format_price(summary.total_price, currency)).yellow()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;

    #[test]
    fn test_format_price_rounds_to_two_decimals() {
        assert_eq!(format_price(13.47, "$"), "$13.47");
        assert_eq!(format_price(5.0, "$"), "$5.00");
        assert_eq!(format_price(0.99, "€"), "€0.99");
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(1.0), "x1.0");
        assert_eq!(format_multiplier(2.5), "x2.5");
    }

    #[test]
    fn test_choice_hint() {
        assert_eq!(choice_hint::<PizzaBase>(), "1/2");
        assert_eq!(choice_hint::<PizzaSize>(), "1/2/3");
    }

    #[test]
    fn test_tables_list_every_option() {
        let bases = format_base_table("$");
        assert!(bases.contains("Thin Crust Pizza"));
        assert!(bases.contains("$7.00"));

        let sizes = format_size_table();
        assert!(sizes.contains("Multiplier"));
        assert!(sizes.contains("x2.5"));

        let toppings = format_topping_table("$");
        assert!(toppings.contains("Fresh Diary Cheese"));
        assert!(toppings.contains("$1.99"));
    }

    #[test]
    fn test_order_summary_contains_price() {
        let order = Order::new(PizzaBase::Thin, PizzaSize::Small);
        let output = format_order_summary(&order.summary(), "$");
        assert!(output.contains("$5.00"));
        assert!(output.contains("no toppings."));
    }
}
