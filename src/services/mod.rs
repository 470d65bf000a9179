pub mod order_service;

// Re-exports
pub use order_service::{OrderService, OrderServiceError};
