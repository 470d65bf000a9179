pub mod base;
pub mod catalog;
pub mod order;
pub mod size;
pub mod topping;

pub use base::PizzaBase;
pub use catalog::CatalogEntry;
pub use order::{Order, OrderSummary};
pub use size::PizzaSize;
pub use topping::Topping;
