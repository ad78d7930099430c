//! Diesel models representing vendors and their category price table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{CategoryName, Price, TypeConstraintError, VendorId, VendorName};
use crate::domain::vendor::{
    CategoryPrices, NewVendor as DomainNewVendor, Vendor as DomainVendor,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vendors)]
/// Diesel model for [`crate::domain::vendor::Vendor`].
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vendors)]
/// Insertable form of [`Vendor`].
pub struct NewVendor<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::vendors)]
/// Data used when updating a [`Vendor`] record.
pub struct UpdateVendor<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::vendor_categories)]
#[diesel(belongs_to(Vendor, foreign_key = vendor_id))]
#[diesel(primary_key(vendor_id, category))]
/// One row of a vendor's category price table.
pub struct VendorCategory {
    pub vendor_id: i32,
    pub category: String,
    pub price_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vendor_categories)]
pub struct NewVendorCategory<'a> {
    pub vendor_id: i32,
    pub category: &'a str,
    pub price_cents: i64,
}

impl<'a> From<&'a DomainNewVendor> for NewVendor<'a> {
    fn from(vendor: &'a DomainNewVendor) -> Self {
        Self {
            name: vendor.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewVendor> for UpdateVendor<'a> {
    fn from(vendor: &'a DomainNewVendor) -> Self {
        Self {
            name: vendor.name.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Rows to insert for the category table of `vendor_id`.
pub fn category_rows(vendor_id: i32, categories: &CategoryPrices) -> Vec<NewVendorCategory<'_>> {
    categories
        .iter()
        .map(|(category, price)| NewVendorCategory {
            vendor_id,
            category: category.as_str(),
            price_cents: price.cents(),
        })
        .collect()
}

/// Assembles a domain vendor from its row and category rows.
pub fn assemble_vendor(
    vendor: Vendor,
    categories: Vec<VendorCategory>,
) -> Result<DomainVendor, TypeConstraintError> {
    let categories = categories
        .into_iter()
        .map(|row| {
            Ok((
                CategoryName::new(row.category)?,
                Price::from_cents(row.price_cents)?,
            ))
        })
        .collect::<Result<CategoryPrices, TypeConstraintError>>()?;

    Ok(DomainVendor::new(
        VendorId::new(vendor.id)?,
        VendorName::new(vendor.name)?,
        categories,
        vendor.created_at,
        vendor.updated_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_domain_new() -> DomainNewVendor {
        DomainNewVendor::try_new(
            VendorName::new("Elite Catering").expect("valid name"),
            vec![
                (
                    CategoryName::new("catering").expect("valid category"),
                    Price::from_units(5000).expect("valid price"),
                ),
                (
                    CategoryName::new("food").expect("valid category"),
                    "3000.50".parse().expect("valid price"),
                ),
            ],
        )
        .expect("valid vendor")
    }

    #[test]
    fn from_domain_new_creates_rows() {
        let domain = sample_domain_new();
        let new: NewVendor = (&domain).into();
        assert_eq!(new.name, "Elite Catering");

        let rows = category_rows(4, &domain.categories);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].vendor_id, 4);
        assert_eq!(rows[0].category, "catering");
        assert_eq!(rows[0].price_cents, 500_000);
        assert_eq!(rows[1].price_cents, 300_050);
    }

    #[test]
    fn assemble_vendor_into_domain() {
        let now = chrono::Utc::now().naive_utc();
        let vendor = Vendor {
            id: 3,
            name: "Perfect Photos".to_string(),
            created_at: now,
            updated_at: now,
        };
        let rows = vec![VendorCategory {
            vendor_id: 3,
            category: "photography".to_string(),
            price_cents: 300_000,
        }];

        let domain = assemble_vendor(vendor, rows).expect("valid vendor");
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Perfect Photos");
        assert_eq!(
            domain.price_for("photography"),
            Some(Price::from_units(3000).expect("valid price"))
        );
    }

    #[test]
    fn assemble_vendor_rejects_negative_prices() {
        let now = chrono::Utc::now().naive_utc();
        let vendor = Vendor {
            id: 3,
            name: "Broken".to_string(),
            created_at: now,
            updated_at: now,
        };
        let rows = vec![VendorCategory {
            vendor_id: 3,
            category: "photography".to_string(),
            price_cents: -1,
        }];

        assert!(assemble_vendor(vendor, rows).is_err());
    }
}
