//! Products domain module.
//!
//! Wraps catalog rows into `Product` domain objects, validates new products
//! and quantity updates, and reports unknown ids as `NotFound`. Persistence is
//! reached only through the `ProductStore` port.

pub mod catalog;
pub mod product;
pub mod store;

pub use catalog::ProductCatalog;
pub use product::{NewProduct, Product, ProductRow};
pub use store::ProductStore;
