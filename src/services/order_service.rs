use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{CatalogEntry, Order, PizzaBase, PizzaSize, Topping};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderServiceError {
    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("Choice {index} is out of range (expected 1-{max})")]
    OutOfRange { index: usize, max: usize },
}

/// Turns raw menu selections into an [`Order`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a single 1-based menu choice against a catalog.
    pub fn select<T: CatalogEntry>(&self, input: &str) -> Result<T, OrderServiceError> {
        let token = input.trim();
        let index = parse_index(token).ok_or_else(|| OrderServiceError::NotANumber {
            input: token.to_string(),
        })?;

        let max = T::all().len();
        let entry = T::from_index(index).ok_or(OrderServiceError::OutOfRange { index, max })?;

        debug!("Selected '{}' for choice {}", entry.description(), index);
        Ok(entry)
    }

    /// Parse a comma separated list of topping choices.
    ///
    /// Malformed or out of range tokens are skipped; blank input means no
    /// toppings.
    pub fn parse_toppings(&self, input: &str) -> Vec<Topping> {
        input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| match self.select::<Topping>(token) {
                Ok(topping) => Some(topping),
                Err(e) => {
                    warn!("Skipping topping choice: {}", e);
                    None
                }
            })
            .collect()
    }

    pub fn build_order(&self, base: PizzaBase, size: PizzaSize, toppings: &[Topping]) -> Order {
        let mut order = Order::new(base, size);
        for topping in toppings {
            order.add_topping(*topping);
        }

        info!(
            "Built {} {} order with {} topping(s)",
            size,
            base,
            order.toppings().len()
        );
        order
    }
}

// Digits only, so "+1" and "-1" are rejected like any other garbage.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
