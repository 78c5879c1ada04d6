//! Cart service: the cart operations callers use.

use shopcart_core::{DomainResult, ProductId};
use shopcart_products::{Product, ProductCatalog, ProductStore};

use crate::cart::{resolve, Cart};
use crate::store::CartStore;

/// Cart operations over a [`CartStore`], resolving ids through a catalog.
#[derive(Debug, Clone)]
pub struct CartService<C, P> {
    carts: C,
    catalog: ProductCatalog<P>,
}

impl<C: CartStore, P: ProductStore> CartService<C, P> {
    pub fn new(carts: C, catalog: ProductCatalog<P>) -> Self {
        Self { carts, catalog }
    }

    pub fn catalog(&self) -> &ProductCatalog<P> {
        &self.catalog
    }

    /// Products in the user's cart, in stored order with duplicates kept.
    ///
    /// Empty when the user has no cart. An id missing from the catalog fails
    /// the whole call with `NotFound`.
    pub fn get_cart(&self, username: &str) -> DomainResult<Vec<Product>> {
        let rows = self.carts.get_cart(username)?;
        let mut products = Vec::new();
        for row in &rows {
            products.extend(resolve(&row.contents, &self.catalog)?);
        }
        tracing::debug!(username, items = products.len(), "cart resolved");
        Ok(products)
    }

    /// The user's cart rows as domain objects.
    pub fn load_carts(&self, username: &str) -> DomainResult<Vec<Cart>> {
        self.carts
            .get_cart(username)?
            .into_iter()
            .map(|row| Cart::load(row, &self.catalog))
            .collect()
    }

    /// Append a product id. The id is not checked against the catalog.
    pub fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        self.carts.add_to_cart(username, product_id)
    }

    pub fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        self.carts.remove_from_cart(username, product_id)
    }

    pub fn delete_cart(&self, username: &str) -> DomainResult<()> {
        self.carts.delete_cart(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartRow;
    use crate::contents::CartContents;
    use shopcart_core::{CartId, DomainError, Entity};
    use shopcart_products::{NewProduct, ProductRow};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeCarts {
        rows: Mutex<BTreeMap<String, CartRow>>,
    }

    impl CartStore for FakeCarts {
        fn get_cart(&self, username: &str) -> DomainResult<Vec<CartRow>> {
            Ok(self.rows.lock().unwrap().get(username).cloned().into_iter().collect())
        }

        fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
            let mut rows = self.rows.lock().unwrap();
            let next_id = CartId::new(rows.len() as i64 + 1);
            rows.entry(username.to_string())
                .or_insert_with(|| CartRow {
                    id: next_id,
                    username: username.to_string(),
                    contents: CartContents::new(),
                    cost: 0.0,
                })
                .contents
                .push(product_id);
            Ok(())
        }

        fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
            if let Some(row) = self.rows.lock().unwrap().get_mut(username) {
                row.contents.remove_first(product_id);
            }
            Ok(())
        }

        fn delete_cart(&self, username: &str) -> DomainResult<()> {
            self.rows.lock().unwrap().remove(username);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeProducts {
        rows: Mutex<Vec<ProductRow>>,
    }

    impl ProductStore for FakeProducts {
        fn list_products(&self) -> DomainResult<Vec<ProductRow>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        fn get_product(&self, id: ProductId) -> DomainResult<Option<ProductRow>> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        fn add_product(&self, product: &NewProduct) -> DomainResult<ProductId> {
            let mut rows = self.rows.lock().unwrap();
            let id = ProductId::new(rows.len() as i64 + 1);
            rows.push(product.clone().into_row(id));
            Ok(id)
        }

        fn update_qty(&self, _id: ProductId, _qty: i64) -> DomainResult<()> {
            Ok(())
        }
    }

    type Service = CartService<Arc<FakeCarts>, Arc<FakeProducts>>;

    fn service() -> Service {
        let catalog = ProductCatalog::new(Arc::new(FakeProducts::default()));
        CartService::new(Arc::new(FakeCarts::default()), catalog)
    }

    fn add_pen(service: &Service) -> ProductId {
        service
            .catalog()
            .add_product(NewProduct::new("Pen", "Blue pen", 1.5, 10))
            .unwrap()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn unknown_user_has_empty_cart() {
        let service = service();
        assert!(service.get_cart("nobody").unwrap().is_empty());
        assert!(service.load_carts("nobody").unwrap().is_empty());
    }

    #[test]
    fn added_product_is_resolved() {
        let service = service();
        let pen = add_pen(&service);

        service.add_to_cart("alice", pen).unwrap();

        let products = service.get_cart("alice").unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(*products[0].id(), pen);
        assert_eq!(products[0].name(), "Pen");
    }

    #[test]
    fn adding_twice_keeps_duplicates_in_order() {
        let service = service();
        let pen = add_pen(&service);
        let pad = service
            .catalog()
            .add_product(NewProduct::new("Pad", "A4 pad", 3.0, 4))
            .unwrap();

        service.add_to_cart("alice", pen).unwrap();
        service.add_to_cart("alice", pad).unwrap();
        service.add_to_cart("alice", pen).unwrap();

        assert_eq!(names(&service.get_cart("alice").unwrap()), vec!["Pen", "Pad", "Pen"]);
    }

    #[test]
    fn remove_takes_one_occurrence() {
        let service = service();
        let pen = add_pen(&service);
        service.add_to_cart("alice", pen).unwrap();
        service.add_to_cart("alice", pen).unwrap();

        service.remove_from_cart("alice", pen).unwrap();
        assert_eq!(service.get_cart("alice").unwrap().len(), 1);

        service.remove_from_cart("alice", ProductId::new(77)).unwrap();
        assert_eq!(service.get_cart("alice").unwrap().len(), 1);
    }

    #[test]
    fn delete_clears_cart_and_tolerates_absence() {
        let service = service();
        let pen = add_pen(&service);
        service.add_to_cart("alice", pen).unwrap();

        service.delete_cart("alice").unwrap();
        assert!(service.get_cart("alice").unwrap().is_empty());

        service.delete_cart("alice").unwrap();
        service.delete_cart("bob").unwrap();
    }

    #[test]
    fn unknown_product_fails_whole_lookup() {
        let service = service();
        let pen = add_pen(&service);
        service.add_to_cart("alice", pen).unwrap();
        service.add_to_cart("alice", ProductId::new(999)).unwrap();

        let err = service.get_cart("alice").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = service.load_carts("alice").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn load_carts_keeps_row_metadata() {
        let service = service();
        let pen = add_pen(&service);
        service.add_to_cart("alice", pen).unwrap();

        let carts = service.load_carts("alice").unwrap();
        assert_eq!(carts.len(), 1);
        let cart = &carts[0];
        assert_eq!(*cart.id(), CartId::new(1));
        assert_eq!(cart.username(), "alice");
        assert_eq!(cart.cost(), 0.0);
        assert_eq!(names(cart.contents()), vec!["Pen"]);
    }

    #[test]
    fn pen_scenario() {
        let service = service();
        let pen = service
            .catalog()
            .add_product(NewProduct::new("Pen", "Blue pen", 1.5, 10))
            .unwrap();

        let listed = service.catalog().list_products().unwrap();
        assert!(listed.iter().any(|p| p.name() == "Pen" && p.qty() == 10));

        service.add_to_cart("alice", pen).unwrap();
        assert_eq!(names(&service.get_cart("alice").unwrap()), vec!["Pen"]);

        service.remove_from_cart("alice", pen).unwrap();
        assert!(service.get_cart("alice").unwrap().is_empty());
    }
}
