use serde::{Deserialize, Serialize};

use super::{base::PizzaBase, catalog::CatalogEntry, size::PizzaSize, topping::Topping};

/// A pizza being composed: one base, one size and any number of toppings.
///
/// Base and size are fixed once the order exists; toppings can only be added.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    base: PizzaBase,
    size: PizzaSize,
    toppings: Vec<Topping>,
}

// Snapshot handed to the presentation layer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderSummary {
    pub base: PizzaBase,
    pub size: PizzaSize,
    pub toppings: Vec<Topping>,
    pub description: String,
    pub total_price: f64,
}

impl Order {
    pub fn new(base: PizzaBase, size: PizzaSize) -> Self {
        Self {
            base,
            size,
            toppings: Vec::new(),
        }
    }

    /// Duplicates are allowed and counted once per call.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    pub fn base(&self) -> PizzaBase {
        self.base
    }

    pub fn size(&self) -> PizzaSize {
        self.size
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// `(base + toppings) * size multiplier`, unrounded.
    pub fn total_price(&self) -> f64 {
        let topping_price: f64 = self.toppings.iter().map(Topping::price).sum();
        (self.base.price() + topping_price) * self.size.multiplier()
    }

    /// Labels are concatenated as-is: nothing separates the size label from
    /// the topping list or from "no toppings.".
    pub fn description(&self) -> String {
        let mut description = format!(
            "{} pizza of {}",
            self.base.description(),
            self.size.description()
        );

        if self.toppings.is_empty() {
            description.push_str("no toppings.");
        } else {
            let toppings = self
                .toppings
                .iter()
                .map(|topping| topping.description())
                .collect::<Vec<_>>()
                .join(", ");
            description.push_str(&toppings);
        }

        description
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            base: self.base,
            size: self.size,
            toppings: self.toppings.clone(),
            description: self.description(),
            total_price: self.total_price(),
        }
    }
}
