use serde::Serialize;

use shopcart_core::{CartId, DomainResult, Entity};
use shopcart_products::{Product, ProductCatalog, ProductStore};

use crate::contents::CartContents;

/// Typed record for one row of the `carts` table.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: CartId,
    pub username: String,
    pub contents: CartContents,
    /// Written as 0 on insert and never recomputed.
    pub cost: f64,
}

/// Cart domain object with its product ids resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    id: CartId,
    username: String,
    contents: Vec<Product>,
    cost: f64,
}

impl Cart {
    /// Build a cart from a stored row, looking up every id in the catalog.
    ///
    /// Fails with `NotFound` as soon as one id is unknown; no partial cart is
    /// returned.
    pub fn load<S: ProductStore>(row: CartRow, catalog: &ProductCatalog<S>) -> DomainResult<Self> {
        let contents = resolve(&row.contents, catalog)?;
        Ok(Self {
            id: row.id,
            username: row.username,
            contents,
            cost: row.cost,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn contents(&self) -> &[Product] {
        &self.contents
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

pub(crate) fn resolve<S: ProductStore>(
    contents: &CartContents,
    catalog: &ProductCatalog<S>,
) -> DomainResult<Vec<Product>> {
    contents.iter().map(|id| catalog.get_product(id)).collect()
}
