use actix_web::{HttpResponse, Responder, post, web};
use actix_web_flash_messages::FlashMessage;
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{redirect, render_template};
use crate::services::{ServiceError, vendors as vendors_service};

#[post("/vendors/add")]
pub async fn add_vendor(repo: web::Data<DieselRepository>, form: web::Bytes) -> impl Responder {
    match vendors_service::add_vendor(repo.get_ref(), form.as_ref()) {
        Ok(_) => {
            FlashMessage::success("Vendor added successfully").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a vendor: {err}");
            FlashMessage::error("Error saving vendor").send();
        }
    }
    redirect("/")
}

#[post("/vendors/save")]
pub async fn save_vendor(repo: web::Data<DieselRepository>, form: web::Bytes) -> impl Responder {
    match vendors_service::save_vendor(repo.get_ref(), form.as_ref()) {
        Ok(_) => {
            FlashMessage::success("Vendor updated successfully").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Vendor not found").send();
        }
        Err(err) => {
            log::error!("Failed to save the vendor: {err}");
            FlashMessage::error("Error saving vendor").send();
        }
    }
    redirect("/")
}

#[post("/vendors/{vendor_id}/delete")]
pub async fn delete_vendor(
    vendor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match vendors_service::delete_vendor(repo.get_ref(), vendor_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Vendor deleted successfully").send();
        }
        Err(err) => {
            log::error!("Failed to delete the vendor: {err}");
            FlashMessage::error("Error deleting vendor").send();
        }
    }
    redirect("/")
}

#[post("/vendors/modal/{vendor_id}")]
pub async fn vendor_modal(
    vendor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match vendors_service::load_vendor_modal(repo.get_ref(), vendor_id.into_inner()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("vendor", &data.vendor);
            render_template(&tera, "vendors/modal_body.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load vendor modal: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
