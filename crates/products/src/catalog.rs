//! Catalog service: the product operations callers use.

use serde_json::Value;

use shopcart_core::{DomainError, DomainResult, ProductId};

use crate::product::{NewProduct, Product};
use crate::store::ProductStore;

/// Product catalog backed by a [`ProductStore`].
#[derive(Debug, Clone)]
pub struct ProductCatalog<S> {
    store: S,
}

impl<S: ProductStore> ProductCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All products, in the order the store returns them.
    pub fn list_products(&self) -> DomainResult<Vec<Product>> {
        let rows = self.store.list_products()?;
        Ok(rows.into_iter().map(Product::load).collect())
    }

    /// One product; `NotFound` if the id is not in the catalog.
    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        match self.store.get_product(id)? {
            Some(row) => Ok(Product::load(row)),
            None => Err(DomainError::not_found(format!("product with id {id}"))),
        }
    }

    /// Validate and insert a product, returning its new id.
    pub fn add_product(&self, product: NewProduct) -> DomainResult<ProductId> {
        product.validate()?;
        let id = self.store.add_product(&product)?;
        tracing::debug!(product_id = %id, name = %product.name, "product added");
        Ok(id)
    }

    /// Like [`add_product`](Self::add_product) for an untyped payload.
    pub fn add_product_fields(&self, fields: &Value) -> DomainResult<ProductId> {
        let product = NewProduct::from_fields(fields)?;
        self.add_product(product)
    }

    /// Set the stock quantity. Unknown ids are not checked.
    pub fn update_qty(&self, id: ProductId, qty: i64) -> DomainResult<()> {
        if qty < 0 {
            return Err(DomainError::invalid_argument("quantity cannot be negative"));
        }
        self.store.update_qty(id, qty)?;
        tracing::debug!(product_id = %id, qty, "product quantity updated");
        Ok(())
    }
}
