//! Vendor aggregate with its per-category price table.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, Price, TypeConstraintError, VendorId, VendorName};

/// Category → price table of a vendor. Keys are unique by construction.
pub type CategoryPrices = BTreeMap<CategoryName, Price>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: VendorName,
    pub categories: CategoryPrices,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Vendor {
    #[must_use]
    pub fn new(
        id: VendorId,
        name: VendorName,
        categories: CategoryPrices,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            categories,
            created_at,
            updated_at,
        }
    }

    /// Price charged for `category`, if the vendor offers it.
    pub fn price_for(&self, category: &str) -> Option<Price> {
        self.categories.get(category).copied()
    }
}

/// Validated vendor data used for both creation and wholesale replacement.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewVendor {
    pub name: VendorName,
    pub categories: CategoryPrices,
}

impl NewVendor {
    /// Builds the payload from ordered category/price pairs.
    ///
    /// At least one pair is required and a category may appear only once.
    pub fn try_new<I>(name: VendorName, pairs: I) -> Result<Self, TypeConstraintError>
    where
        I: IntoIterator<Item = (CategoryName, Price)>,
    {
        let mut categories = CategoryPrices::new();
        for (category, price) in pairs {
            if categories.contains_key(&category) {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "duplicate category: {category}"
                )));
            }
            categories.insert(category, price);
        }
        if categories.is_empty() {
            return Err(TypeConstraintError::InvalidValue(
                "vendor needs at least one category".to_string(),
            ));
        }
        Ok(Self { name, categories })
    }
}

/// Replacing a vendor carries the same data as creating one: the old
/// category set is dropped, never merged.
pub type UpdateVendor = NewVendor;
