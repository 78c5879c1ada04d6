use std::sync::Arc;

use shopcart_core::{DomainResult, ProductId};

use crate::product::{NewProduct, ProductRow};

/// Persistence port for the `products` table.
///
/// Lookups of unknown ids return `Ok(None)`; updates against unknown ids are
/// silent no-ops. Turning absence into an error is the catalog's job.
pub trait ProductStore: Send + Sync {
    fn list_products(&self) -> DomainResult<Vec<ProductRow>>;
    fn get_product(&self, id: ProductId) -> DomainResult<Option<ProductRow>>;
    /// Insert and return the store-assigned id.
    fn add_product(&self, product: &NewProduct) -> DomainResult<ProductId>;
    fn update_qty(&self, id: ProductId, qty: i64) -> DomainResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list_products(&self) -> DomainResult<Vec<ProductRow>> {
        (**self).list_products()
    }

    fn get_product(&self, id: ProductId) -> DomainResult<Option<ProductRow>> {
        (**self).get_product(id)
    }

    fn add_product(&self, product: &NewProduct) -> DomainResult<ProductId> {
        (**self).add_product(product)
    }

    fn update_qty(&self, id: ProductId, qty: i64) -> DomainResult<()> {
        (**self).update_qty(id, qty)
    }
}
