use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    /// Factor applied to the base plus toppings sum.
    pub fn multiplier(&self) -> f64 {
        match self {
            PizzaSize::Small => 1.0,
            PizzaSize::Medium => 1.5,
            PizzaSize::Large => 2.5,
        }
    }
}

impl CatalogEntry for PizzaSize {
    fn all() -> &'static [Self] {
        &[PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large]
    }

    // Labels are kept exactly as printed on the menu, punctuation included.
    fn description(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small Size 12\" Pizza.",
            PizzaSize::Medium => "Medium Size 16\" Pizza",
            PizzaSize::Large => "Large Size 20\" Pizza ",
        }
    }

    fn amount(&self) -> f64 {
        self.multiplier()
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PizzaSize::Small => write!(f, "small"),
            PizzaSize::Medium => write!(f, "medium"),
            PizzaSize::Large => write!(f, "large"),
        }
    }
}
