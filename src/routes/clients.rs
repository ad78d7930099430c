use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::wizard::ClientWizard;
use crate::forms::clients::{ClientForm, EventForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::clients::{self as clients_service, WizardOutcome};
use crate::services::ServiceError;

/// Session key holding the wizard in progress.
pub const WIZARD_SESSION_KEY: &str = "client_wizard";

const WIZARD_URL: &str = "/clients/wizard";

fn store_wizard(session: &Session, wizard: &ClientWizard) -> HttpResponse {
    match session.insert(WIZARD_SESSION_KEY, wizard) {
        Ok(()) => redirect(WIZARD_URL),
        Err(err) => {
            log::error!("Failed to store the client wizard: {err}");
            FlashMessage::error("Error saving client").send();
            redirect("/")
        }
    }
}

fn load_wizard(session: &Session) -> Option<ClientWizard> {
    match session.get::<ClientWizard>(WIZARD_SESSION_KEY) {
        Ok(wizard) => wizard,
        Err(err) => {
            log::error!("Failed to read the client wizard: {err}");
            session.remove(WIZARD_SESSION_KEY);
            None
        }
    }
}

#[post("/clients/add")]
pub async fn add_client(session: Session, web::Form(form): web::Form<ClientForm>) -> impl Responder {
    match clients_service::start_client_wizard(form) {
        Ok(wizard) => store_wizard(&session, &wizard),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to start the client wizard: {err}");
            FlashMessage::error("Error saving client").send();
            redirect("/")
        }
    }
}

#[post("/clients/{client_id}/edit")]
pub async fn edit_client(
    client_id: web::Path<i32>,
    session: Session,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ClientForm>,
) -> impl Responder {
    match clients_service::start_edit_wizard(repo.get_ref(), client_id.into_inner(), form) {
        Ok(wizard) => store_wizard(&session, &wizard),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Client not found").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to start the edit wizard: {err}");
            FlashMessage::error("Error saving client").send();
            redirect("/")
        }
    }
}

#[get("/clients/wizard")]
pub async fn show_wizard(
    session: Session,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(wizard) = load_wizard(&session) else {
        return redirect("/");
    };

    match clients_service::load_wizard_step(repo.get_ref(), &wizard) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("wizard", &data);
            render_template(&tera, "clients/wizard.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the wizard step: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/clients/wizard")]
pub async fn submit_wizard(
    session: Session,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EventForm>,
) -> impl Responder {
    let Some(wizard) = load_wizard(&session) else {
        FlashMessage::error("No client is being entered").send();
        return redirect("/");
    };

    // On failure the session keeps the previous state so the step can be retried.
    match clients_service::submit_wizard_event(repo.get_ref(), wizard, form) {
        Ok(WizardOutcome::Pending(wizard)) => store_wizard(&session, &wizard),
        Ok(WizardOutcome::Created(_)) => {
            session.remove(WIZARD_SESSION_KEY);
            FlashMessage::success("Client added successfully").send();
            redirect("/")
        }
        Ok(WizardOutcome::Updated(_)) => {
            session.remove(WIZARD_SESSION_KEY);
            FlashMessage::success("Client updated successfully").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(WIZARD_URL)
        }
        Err(ServiceError::NotFound) => {
            session.remove(WIZARD_SESSION_KEY);
            FlashMessage::error("Client not found").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to save the client: {err}");
            FlashMessage::error("Error saving client").send();
            redirect(WIZARD_URL)
        }
    }
}

#[post("/clients/wizard/cancel")]
pub async fn cancel_wizard(session: Session) -> impl Responder {
    session.remove(WIZARD_SESSION_KEY);
    redirect("/")
}

#[post("/clients/{client_id}/delete")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Client deleted successfully").send();
        }
        Err(err) => {
            log::error!("Failed to delete the client: {err}");
            FlashMessage::error("Error deleting client").send();
        }
    }
    redirect("/")
}
