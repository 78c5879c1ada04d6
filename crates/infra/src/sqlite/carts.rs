use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Connection;

use shopcart_cart::{CartContents, CartRow, CartStore};
use shopcart_core::{CartId, DomainResult, ProductId};

use super::{column, SqliteStore};
use crate::error::StoreError;

impl CartStore for SqliteStore {
    fn get_cart(&self, username: &str) -> DomainResult<Vec<CartRow>> {
        self.run("get_cart", async {
            let mut conn = self.connect().await?;
            let rows = sqlx::query(
                r#"
                SELECT id, username, contents, cost
                FROM carts
                WHERE username = ?1
                "#,
            )
            .bind(username)
            .fetch_all(&mut conn)
            .await?;
            conn.close().await?;

            tracing::debug!(username, rows = rows.len(), "cart fetched");
            let carts = rows.iter().map(row_to_cart).collect::<Result<Vec<_>, _>>()?;
            Ok::<_, StoreError>(carts)
        })
    }

    fn add_to_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        self.run("add_to_cart", async {
            let mut conn = self.connect().await?;
            let mut contents = fetch_contents(&mut conn, username)
                .await?
                .unwrap_or_default();
            contents.push(product_id);
            let encoded = contents.encode()?;

            sqlx::query(
                r#"
                INSERT INTO carts (username, contents, cost)
                VALUES (?1, ?2, 0)
                ON CONFLICT(username) DO UPDATE SET contents = excluded.contents
                "#,
            )
            .bind(username)
            .bind(encoded)
            .execute(&mut conn)
            .await?;
            conn.close().await?;

            tracing::debug!(username, product_id = %product_id, items = contents.len(), "added to cart");
            Ok::<(), StoreError>(())
        })
    }

    fn remove_from_cart(&self, username: &str, product_id: ProductId) -> DomainResult<()> {
        self.run("remove_from_cart", async {
            let mut conn = self.connect().await?;

            let Some(mut contents) = fetch_contents(&mut conn, username).await? else {
                conn.close().await?;
                return Ok(());
            };

            if contents.remove_first(product_id) {
                let encoded = contents.encode()?;
                sqlx::query(
                    r#"
                    UPDATE carts
                    SET contents = ?1
                    WHERE username = ?2
                    "#,
                )
                .bind(encoded)
                .bind(username)
                .execute(&mut conn)
                .await?;
                tracing::debug!(username, product_id = %product_id, "removed from cart");
            }

            conn.close().await?;
            Ok::<(), StoreError>(())
        })
    }

    fn delete_cart(&self, username: &str) -> DomainResult<()> {
        self.run("delete_cart", async {
            let mut conn = self.connect().await?;
            let result = sqlx::query("DELETE FROM carts WHERE username = ?1")
                .bind(username)
                .execute(&mut conn)
                .await?;
            conn.close().await?;

            tracing::debug!(username, deleted = result.rows_affected(), "cart deleted");
            Ok::<(), StoreError>(())
        })
    }
}

/// Current contents for `username`, or `None` if there is no row.
async fn fetch_contents(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<CartContents>, StoreError> {
    let row = sqlx::query("SELECT contents FROM carts WHERE username = ?1")
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => {
            let raw: Option<String> = column(&row, "contents")?;
            Ok(Some(CartContents::decode(raw.as_deref())?))
        }
        None => Ok(None),
    }
}

fn row_to_cart(row: &SqliteRow) -> Result<CartRow, StoreError> {
    let id: i64 = column(row, "id")?;
    let username: String = column(row, "username")?;
    let raw: Option<String> = column(row, "contents")?;
    let cost: Option<f64> = column(row, "cost")?;

    Ok(CartRow {
        id: CartId::new(id),
        username,
        contents: CartContents::decode(raw.as_deref())?,
        cost: cost.unwrap_or_default(),
    })
}
