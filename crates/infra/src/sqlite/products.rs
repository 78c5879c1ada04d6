use sqlx::sqlite::SqliteRow;
use sqlx::Connection;

use shopcart_core::{DomainResult, ProductId};
use shopcart_products::{NewProduct, ProductRow, ProductStore};

use super::{column, SqliteStore};
use crate::error::StoreError;

impl ProductStore for SqliteStore {
    fn list_products(&self) -> DomainResult<Vec<ProductRow>> {
        self.run("list_products", async {
            let mut conn = self.connect().await?;
            let rows = sqlx::query(
                r#"
                SELECT id, name, description, cost, qty
                FROM products
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&mut conn)
            .await?;
            conn.close().await?;

            let products = rows.iter().map(row_to_product).collect::<Result<Vec<_>, _>>()?;
            Ok::<_, StoreError>(products)
        })
    }

    fn get_product(&self, id: ProductId) -> DomainResult<Option<ProductRow>> {
        self.run("get_product", async {
            let mut conn = self.connect().await?;
            let row = sqlx::query(
                r#"
                SELECT id, name, description, cost, qty
                FROM products
                WHERE id = ?1
                "#,
            )
            .bind(id.get())
            .fetch_optional(&mut conn)
            .await?;
            conn.close().await?;

            let product = row.as_ref().map(row_to_product).transpose()?;
            Ok::<_, StoreError>(product)
        })
    }

    fn add_product(&self, product: &NewProduct) -> DomainResult<ProductId> {
        self.run("add_product", async {
            let mut conn = self.connect().await?;
            let result = sqlx::query(
                r#"
                INSERT INTO products (name, description, cost, qty)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.cost)
            .bind(product.qty)
            .execute(&mut conn)
            .await?;
            conn.close().await?;

            let id = ProductId::new(result.last_insert_rowid());
            tracing::debug!(product_id = %id, "product row inserted");
            Ok::<_, StoreError>(id)
        })
    }

    fn update_qty(&self, id: ProductId, qty: i64) -> DomainResult<()> {
        self.run("update_qty", async {
            let mut conn = self.connect().await?;
            let result = sqlx::query("UPDATE products SET qty = ?1 WHERE id = ?2")
                .bind(qty)
                .bind(id.get())
                .execute(&mut conn)
                .await?;
            conn.close().await?;

            tracing::debug!(product_id = %id, qty, updated = result.rows_affected(), "product qty written");
            Ok::<(), StoreError>(())
        })
    }
}

fn row_to_product(row: &SqliteRow) -> Result<ProductRow, StoreError> {
    let id: i64 = column(row, "id")?;
    Ok(ProductRow {
        id: ProductId::new(id),
        name: column(row, "name")?,
        description: column(row, "description")?,
        cost: column(row, "cost")?,
        qty: column(row, "qty")?,
    })
}
