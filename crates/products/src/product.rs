use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopcart_core::{DomainError, DomainResult, Entity, ProductId};

/// Fields every new product must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "cost", "qty"];

/// Typed record for one row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub qty: i64,
}

/// Catalog product (domain object).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    cost: f64,
    qty: i64,
}

impl Product {
    /// Build the domain object from a stored row.
    pub fn load(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            cost: row.cost,
            qty: row.qty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }

    pub fn in_stock(&self) -> bool {
        self.qty > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Payload for creating a product. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub qty: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, description: impl Into<String>, cost: f64, qty: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            qty,
        }
    }

    /// Parse an untyped payload (e.g. a JSON request body).
    ///
    /// The value must be an object holding every key in [`REQUIRED_FIELDS`]
    /// with a value of the right type; extra keys are ignored.
    pub fn from_fields(fields: &Value) -> DomainResult<Self> {
        let Some(map) = fields.as_object() else {
            return Err(DomainError::invalid_argument(
                "product must be an object with 'name', 'description', 'cost', and 'qty'",
            ));
        };

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| !map.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "product is missing required fields: {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(fields.clone())
            .map_err(|e| DomainError::invalid_argument(format!("malformed product: {e}")))
    }

    /// Check the invariants a stored product must satisfy.
    pub fn validate(&self) -> DomainResult<()> {
        if self.qty < 0 {
            return Err(DomainError::invalid_argument("quantity cannot be negative"));
        }
        if !self.cost.is_finite() {
            return Err(DomainError::invalid_argument("cost must be a finite number"));
        }
        Ok(())
    }

    /// Attach the store-assigned id.
    pub fn into_row(self, id: ProductId) -> ProductRow {
        ProductRow {
            id,
            name: self.name,
            description: self.description,
            cost: self.cost,
            qty: self.qty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_copies_every_field() {
        let row = ProductRow {
            id: ProductId::new(3),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            cost: 1.5,
            qty: 10,
        };

        let product = Product::load(row);
        assert_eq!(*product.id(), ProductId::new(3));
        assert_eq!(product.name(), "Pen");
        assert_eq!(product.description(), "Blue pen");
        assert_eq!(product.cost(), 1.5);
        assert_eq!(product.qty(), 10);
        assert!(product.in_stock());
    }

    #[test]
    fn from_fields_accepts_complete_object() {
        let payload = json!({
            "name": "Pen",
            "description": "Blue pen",
            "cost": 1.5,
            "qty": 10,
            "colour": "blue"
        });

        let product = NewProduct::from_fields(&payload).unwrap();
        assert_eq!(product, NewProduct::new("Pen", "Blue pen", 1.5, 10));
    }

    #[test]
    fn from_fields_accepts_integer_cost() {
        let payload = json!({"name": "Pad", "description": "A4", "cost": 3, "qty": 0});
        let product = NewProduct::from_fields(&payload).unwrap();
        assert_eq!(product.cost, 3.0);
    }

    #[test]
    fn from_fields_names_missing_fields() {
        let payload = json!({"name": "Pen", "cost": 1.5});

        let err = NewProduct::from_fields(&payload).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) => {
                assert!(msg.contains("description"));
                assert!(msg.contains("qty"));
                assert!(!msg.contains("name,"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn from_fields_rejects_non_objects() {
        for payload in [json!(null), json!([1, 2]), json!("Pen")] {
            let err = NewProduct::from_fields(&payload).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn from_fields_rejects_wrong_types() {
        let payload = json!({"name": "Pen", "description": "x", "cost": "cheap", "qty": 1});
        let err = NewProduct::from_fields(&payload).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn validate_rejects_negative_qty_and_nan_cost() {
        assert!(NewProduct::new("a", "b", 1.0, -1).validate().unwrap_err().is_invalid_argument());
        assert!(NewProduct::new("a", "b", f64::NAN, 1).validate().unwrap_err().is_invalid_argument());
        assert!(NewProduct::new("a", "b", 0.0, 0).validate().is_ok());
    }
}
