//! Order Hand-off Module
//!
//! This module turns the cart into an order message and hands it to an
//! outbound channel:
//! - Models and constants (formats, channels, hand-off result)
//! - Message composition (long and short forms, URL encoding)
//! - Checkout (empty-cart guard, deep links, clearing the cart)
//! - Route handlers

pub mod handlers;
pub mod handoff;
pub mod message;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use handoff::{checkout, OrderError};
pub use models::{Channel, Handoff, OrderFormat};
