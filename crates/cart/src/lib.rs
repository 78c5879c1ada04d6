//! Cart domain module.
//!
//! A cart is one row per username holding an ordered list of product ids.
//! This crate owns the encoding of that list, the `Cart` domain object with
//! its ids resolved through the product catalog, and the `CartStore` port.

pub mod cart;
pub mod contents;
pub mod service;
pub mod store;

pub use cart::{Cart, CartRow};
pub use contents::CartContents;
pub use service::CartService;
pub use store::CartStore;
