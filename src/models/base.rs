use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PizzaBase {
    Thin,
    Thick,
}

impl PizzaBase {
    pub fn price(&self) -> f64 {
        match self {
            PizzaBase::Thin => 5.0,
            PizzaBase::Thick => 7.0,
        }
    }
}

impl CatalogEntry for PizzaBase {
    fn all() -> &'static [Self] {
        &[PizzaBase::Thin, PizzaBase::Thick]
    }

    fn description(&self) -> &'static str {
        match self {
            PizzaBase::Thin => "Thin Crust Pizza",
            PizzaBase::Thick => "Thick Crust Pizza",
        }
    }

    fn amount(&self) -> f64 {
        self.price()
    }
}

impl std::fmt::Display for PizzaBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PizzaBase::Thin => write!(f, "thin"),
            PizzaBase::Thick => write!(f, "thick"),
        }
    }
}
