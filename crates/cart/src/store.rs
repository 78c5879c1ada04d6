use std::sync::Arc;

use shopcart_core::{DomainResult, ProductId};

use crate::cart::CartRow;

/// Persistence port for the `carts` table.
///
/// A username without a row is a normal state: reads return an empty vec,
/// removals and deletes do nothing. Only `add_to_cart` creates rows.
pub trait CartStore: Send + Sync {
    /// Rows for `username` (zero or one given the unique constraint).
    fn get_cart(&self, username: &str) -> DomainResult<Vec<CartRow>>;
    /// Append `product_id`, creating the row if needed.
    fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()>;
    /// Drop the first occurrence of `product_id`, if any.
    fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()>;
    fn delete_cart(&self, username: &str) -> DomainResult<()>;
}

impl<S> CartStore for Arc<S>
where
    S: CartStore + ?Sized,
{
    fn get_cart(&self, username: &str) -> DomainResult<Vec<CartRow>> {
        (**self).get_cart(username)
    }

    fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        (**self).add_to_cart(username, product_id)
    }

    fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        (**self).remove_from_cart(username, product_id)
    }

    fn delete_cart(&self, username: &str) -> DomainResult<()> {
        (**self).delete_cart(username)
    }
}
