use serde::Serialize;

use crate::domain::vendor::Vendor;

/// One row of a vendor's price table, formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryPriceView {
    pub category: String,
    /// Plain amount suitable for an input value, e.g. `5000.00`.
    pub price: String,
    /// Currency formatted amount, e.g. `$5,000.00`.
    pub price_display: String,
}

/// Vendor as listed in the dashboard table and the edit modal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VendorRow {
    pub id: i32,
    pub name: String,
    pub categories: Vec<CategoryPriceView>,
}

impl From<&Vendor> for VendorRow {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.get(),
            name: vendor.name.to_string(),
            categories: vendor
                .categories
                .iter()
                .map(|(category, price)| CategoryPriceView {
                    category: category.to_string(),
                    price: price.to_string(),
                    price_display: price.to_currency_string(),
                })
                .collect(),
        }
    }
}

/// Data required to render the vendor edit modal.
pub struct VendorModalData {
    pub vendor: VendorRow,
}
