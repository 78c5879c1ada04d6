//! In-memory stores for tests/dev.
//!
//! Same observable semantics as [`crate::SqliteStore`]: unique username per
//! cart, ids assigned from 1 upwards, absent rows are not errors.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopcart_cart::{CartContents, CartRow, CartStore};
use shopcart_core::{CartId, DomainError, DomainResult, ProductId};
use shopcart_products::{NewProduct, ProductRow, ProductStore};

fn read<T>(lock: &RwLock<T>) -> DomainResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| DomainError::storage("in-memory store lock poisoned"))
}

fn write<T>(lock: &RwLock<T>) -> DomainResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| DomainError::storage("in-memory store lock poisoned"))
}

#[derive(Debug, Default)]
struct CartTable {
    rows: HashMap<String, CartRow>,
    last_id: i64,
}

/// In-memory `carts` table.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<CartTable>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn get_cart(&self, username: &str) -> DomainResult<Vec<CartRow>> {
        let table = read(&self.inner)?;
        Ok(table.rows.get(username).cloned().into_iter().collect())
    }

    fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        let mut table = write(&self.inner)?;
        if let Some(row) = table.rows.get_mut(username) {
            row.contents.push(product_id);
            return Ok(());
        }

        table.last_id += 1;
        let row = CartRow {
            id: CartId::new(table.last_id),
            username: username.to_string(),
            contents: CartContents::from(vec![product_id]),
            cost: 0.0,
        };
        table.rows.insert(username.to_string(), row);
        Ok(())
    }

    fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        let mut table = write(&self.inner)?;
        if let Some(row) = table.rows.get_mut(username) {
            row.contents.remove_first(product_id);
        }
        Ok(())
    }

    fn delete_cart(&self, username: &str) -> DomainResult<()> {
        write(&self.inner)?.rows.remove(username);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ProductTable {
    rows: BTreeMap<ProductId, ProductRow>,
    last_id: i64,
}

/// In-memory `products` table, listed in id order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<ProductTable>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn list_products(&self) -> DomainResult<Vec<ProductRow>> {
        Ok(read(&self.inner)?.rows.values().cloned().collect())
    }

    fn get_product(&self, id: ProductId) -> DomainResult<Option<ProductRow>> {
        Ok(read(&self.inner)?.rows.get(&id).cloned())
    }

    fn add_product(&self, product: &NewProduct) -> DomainResult<ProductId> {
        let mut table = write(&self.inner)?;
        table.last_id += 1;
        let id = ProductId::new(table.last_id);
        table.rows.insert(id, product.clone().into_row(id));
        Ok(id)
    }

    fn update_qty(&self, id: ProductId, qty: i64) -> DomainResult<()> {
        if let Some(row) = write(&self.inner)?.rows.get_mut(&id) {
            row.qty = qty;
        }
        Ok(())
    }
}
