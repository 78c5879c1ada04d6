//! Ordered product-id list stored in the `carts.contents` column.
//!
//! On disk this is a JSON array of integers, e.g. `[3,1,3]`. Duplicates are
//! kept and ids are not checked against the catalog.

use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartContents(Vec<ProductId>);

impl CartContents {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode the raw column value. NULL and empty text mean an empty cart.
    pub fn decode(raw: Option<&str>) -> DomainResult<Self> {
        let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(Self::new());
        };
        serde_json::from_str(text)
            .map_err(|e| DomainError::decode(format!("cart contents {text:?}: {e}")))
    }

    /// Encode for the `contents` column.
    pub fn encode(&self) -> DomainResult<String> {
        serde_json::to_string(&self.0)
            .map_err(|e| DomainError::decode(format!("cart contents not encodable: {e}")))
    }

    pub fn push(&mut self, id: ProductId) {
        self.0.push(id);
    }

    /// Remove the first occurrence of `id`. Returns false if it was absent.
    pub fn remove_first(&mut self, id: ProductId) -> bool {
        match self.0.iter().position(|p| *p == id) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    pub fn count(&self, id: ProductId) -> usize {
        self.0.iter().filter(|p| **p == id).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ProductId] {
        &self.0
    }
}

impl From<Vec<ProductId>> for CartContents {
    fn from(value: Vec<ProductId>) -> Self {
        Self(value)
    }
}

impl FromIterator<ProductId> for CartContents {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
