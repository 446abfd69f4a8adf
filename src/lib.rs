//! ORIGIN Café Storefront Library
//!
//! This library provides the cart store behind the ORIGIN Café storefront
//! page and the hand-off of finished orders to WhatsApp or Instagram.

// Domain modules
pub mod cart;
pub mod order;
pub mod storage;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
