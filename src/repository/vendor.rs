//! Repository implementation for vendors and their category tables.

use diesel::prelude::*;

use crate::{
    domain::{
        types::VendorId,
        vendor::{NewVendor, UpdateVendor, Vendor},
    },
    models::vendor::{
        NewVendor as DbNewVendor, UpdateVendor as DbUpdateVendor, Vendor as DbVendor,
        VendorCategory as DbVendorCategory, assemble_vendor, category_rows,
    },
    repository::{
        DieselRepository, VendorReader, VendorWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn load_categories(
    conn: &mut SqliteConnection,
    vendor: &DbVendor,
) -> Result<Vec<DbVendorCategory>, diesel::result::Error> {
    use crate::schema::vendor_categories;

    DbVendorCategory::belonging_to(vendor)
        .select(DbVendorCategory::as_select())
        .order(vendor_categories::category.asc())
        .load(conn)
}

fn replace_categories(
    conn: &mut SqliteConnection,
    vendor_id: i32,
    vendor: &NewVendor,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::vendor_categories;

    diesel::delete(vendor_categories::table.filter(vendor_categories::vendor_id.eq(vendor_id)))
        .execute(conn)?;

    diesel::insert_into(vendor_categories::table)
        .values(category_rows(vendor_id, &vendor.categories))
        .execute(conn)
}

impl VendorReader for DieselRepository {
    fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let db_vendors = vendors::table
            .order(vendors::id.asc())
            .select(DbVendor::as_select())
            .load::<DbVendor>(&mut conn)?;

        let categories = DbVendorCategory::belonging_to(&db_vendors)
            .select(DbVendorCategory::as_select())
            .load::<DbVendorCategory>(&mut conn)?
            .grouped_by(&db_vendors);

        db_vendors
            .into_iter()
            .zip(categories)
            .map(|(vendor, categories)| {
                assemble_vendor(vendor, categories).map_err(RepositoryError::from)
            })
            .collect()
    }

    fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let db_vendor = vendors::table
            .find(id.get())
            .select(DbVendor::as_select())
            .first::<DbVendor>(&mut conn)
            .optional()?;

        let Some(db_vendor) = db_vendor else {
            return Ok(None);
        };

        let categories = load_categories(&mut conn, &db_vendor)?;
        let vendor = assemble_vendor(db_vendor, categories)?;
        Ok(Some(vendor))
    }
}

impl VendorWriter for DieselRepository {
    fn create_vendor(&self, new_vendor: &NewVendor) -> RepositoryResult<Vendor> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let db_new_vendor: DbNewVendor = new_vendor.into();

        conn.transaction::<Vendor, RepositoryError, _>(|conn| {
            let db_vendor = diesel::insert_into(vendors::table)
                .values(&db_new_vendor)
                .returning(DbVendor::as_returning())
                .get_result::<DbVendor>(conn)?;

            replace_categories(conn, db_vendor.id, new_vendor)?;
            let categories = load_categories(conn, &db_vendor)?;

            Ok(assemble_vendor(db_vendor, categories)?)
        })
    }

    fn update_vendor(&self, id: VendorId, updates: &UpdateVendor) -> RepositoryResult<Vendor> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateVendor = updates.into();

        conn.transaction::<Vendor, RepositoryError, _>(|conn| {
            // `get_result` reports a missing row as `NotFound`.
            let db_vendor = diesel::update(vendors::table.find(id.get()))
                .set(&db_updates)
                .returning(DbVendor::as_returning())
                .get_result::<DbVendor>(conn)?;

            replace_categories(conn, db_vendor.id, updates)?;
            let categories = load_categories(conn, &db_vendor)?;

            Ok(assemble_vendor(db_vendor, categories)?)
        })
    }

    fn delete_vendor(&self, id: VendorId) -> RepositoryResult<()> {
        use crate::schema::{vendor_categories, vendors};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                vendor_categories::table.filter(vendor_categories::vendor_id.eq(id.get())),
            )
            .execute(conn)?;

            let deleted = diesel::delete(vendors::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
