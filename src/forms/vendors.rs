//! Vendor add/edit forms.
//!
//! The category table arrives as repeated `category` and `price` fields, one
//! pair per row, so these forms are decoded with `serde_html_form` rather than
//! `web::Form`.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{CategoryName, Price, VendorId, VendorName};
use crate::domain::vendor::NewVendor;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for adding a vendor.
pub struct AddVendorForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub price: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for replacing an existing vendor.
pub struct SaveVendorForm {
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub price: Vec<String>,
}

impl AddVendorForm {
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|_| FormError::Malformed)
    }
}

impl SaveVendorForm {
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|_| FormError::Malformed)
    }
}

/// Validated vendor update: target id plus the replacement data.
pub struct SaveVendorPayload {
    pub id: VendorId,
    pub vendor: NewVendor,
}

/// Pairs category and price columns into a vendor payload. Rows where both
/// cells are blank are skipped.
fn parse_vendor(name: &str, categories: &[String], prices: &[String]) -> Result<NewVendor, FormError> {
    let name = VendorName::new(name).map_err(|_| FormError::InvalidName)?;

    let rows = categories.len().max(prices.len());
    let mut pairs: Vec<(CategoryName, Price)> = Vec::with_capacity(rows);

    for row in 0..rows {
        let category = categories.get(row).map(|s| s.trim()).unwrap_or_default();
        let price = prices.get(row).map(|s| s.trim()).unwrap_or_default();

        if category.is_empty() && price.is_empty() {
            continue;
        }

        let category = CategoryName::new(category).map_err(|_| FormError::MissingCategory)?;
        let price = price
            .parse::<Price>()
            .map_err(|_| FormError::InvalidPrice(category.to_string()))?;

        if pairs.iter().any(|(existing, _)| *existing == category) {
            return Err(FormError::DuplicateCategory(category.into_inner()));
        }
        pairs.push((category, price));
    }

    if pairs.is_empty() {
        return Err(FormError::NoCategories);
    }

    NewVendor::try_new(name, pairs).map_err(|_| FormError::NoCategories)
}

impl TryFrom<AddVendorForm> for NewVendor {
    type Error = FormError;

    fn try_from(form: AddVendorForm) -> Result<Self, Self::Error> {
        form.validate()?;
        parse_vendor(&form.name, &form.category, &form.price)
    }
}

impl TryFrom<SaveVendorForm> for SaveVendorPayload {
    type Error = FormError;

    fn try_from(form: SaveVendorForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let id = VendorId::new(form.id).map_err(|_| FormError::InvalidVendorId)?;
        let vendor = parse_vendor(&form.name, &form.category, &form.price)?;
        Ok(Self { id, vendor })
    }
}
