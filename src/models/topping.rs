use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    Tomato,
    Cheese,
    Pepperoni,
}

impl Topping {
    pub fn price(&self) -> f64 {
        match self {
            Topping::Tomato => 0.99,
            Topping::Cheese => 0.99,
            Topping::Pepperoni => 1.99,
        }
    }
}

impl CatalogEntry for Topping {
    fn all() -> &'static [Self] {
        &[Topping::Tomato, Topping::Cheese, Topping::Pepperoni]
    }

    fn description(&self) -> &'static str {
        match self {
            Topping::Tomato => "Sliced fresh tomato",
            Topping::Cheese => "Fresh Diary Cheese",
            Topping::Pepperoni => "Pepperoni",
        }
    }

    fn amount(&self) -> f64 {
        self.price()
    }
}

impl std::fmt::Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topping::Tomato => write!(f, "tomato"),
            Topping::Cheese => write!(f, "cheese"),
            Topping::Pepperoni => write!(f, "pepperoni"),
        }
    }
}
