//! Services handling the vendor catalog.

use log::info;

use crate::domain::types::VendorId;
use crate::domain::vendor::{NewVendor, Vendor};
use crate::dto::vendors::{VendorModalData, VendorRow};
use crate::forms::vendors::{AddVendorForm, SaveVendorForm, SaveVendorPayload};
use crate::repository::{VendorReader, VendorWriter};
use crate::services::{ServiceError, ServiceResult};

/// Parses the urlencoded body and creates the vendor.
pub fn add_vendor<R>(repo: &R, body: &[u8]) -> ServiceResult<Vendor>
where
    R: VendorWriter + ?Sized,
{
    let form = AddVendorForm::from_bytes(body)?;
    let new_vendor = NewVendor::try_from(form)?;

    let vendor = repo.create_vendor(&new_vendor)?;
    info!("Created vendor {} ({})", vendor.id, vendor.name);

    Ok(vendor)
}

/// Replaces the vendor's name and whole category table.
pub fn save_vendor<R>(repo: &R, body: &[u8]) -> ServiceResult<Vendor>
where
    R: VendorWriter + ?Sized,
{
    let form = SaveVendorForm::from_bytes(body)?;
    let payload = SaveVendorPayload::try_from(form)?;

    let vendor = repo.update_vendor(payload.id, &payload.vendor)?;
    info!("Updated vendor {} ({})", vendor.id, vendor.name);

    Ok(vendor)
}

/// Deletes the vendor. Events referencing it stay and stop contributing cost.
pub fn delete_vendor<R>(repo: &R, vendor_id: i32) -> ServiceResult<()>
where
    R: VendorWriter + ?Sized,
{
    let vendor_id = VendorId::new(vendor_id)?;
    repo.delete_vendor(vendor_id)?;
    info!("Deleted vendor {vendor_id}");
    Ok(())
}

/// Loads data necessary to render the vendor edit modal.
pub fn load_vendor_modal<R>(repo: &R, vendor_id: i32) -> ServiceResult<VendorModalData>
where
    R: VendorReader + ?Sized,
{
    let vendor = repo
        .get_vendor_by_id(VendorId::new(vendor_id)?)?
        .ok_or(ServiceError::NotFound)?;

    Ok(VendorModalData {
        vendor: VendorRow::from(&vendor),
    })
}
