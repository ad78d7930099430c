//! Services driving the client wizard and client removal.
//!
//! The wizard itself is a pure state machine in [`crate::domain::wizard`];
//! these functions validate input at each step and persist the client with all
//! of its events once the last step is filled.

use log::info;

use crate::domain::client::ClientWithEvents;
use crate::domain::event::NewEvent;
use crate::domain::types::ClientId;
use crate::domain::wizard::{ClientWizard, WizardStep, WizardTarget};
use crate::dto::clients::WizardPageData;
use crate::forms::FormError;
use crate::forms::clients::{ClientForm, ClientPayload, EventForm};
use crate::repository::{ClientReader, ClientWriter, VendorReader};
use crate::services::{ServiceError, ServiceResult};

/// Upper bound for a pending wizard as it is written into the session
/// cookie. Keeps the encrypted cookie below the 4096 byte browser limit.
pub const MAX_STORED_WIZARD_BYTES: usize = 2600;

/// What happened after an event step was submitted.
#[derive(Debug)]
pub enum WizardOutcome {
    /// More events are expected; the wizard must be stored again.
    Pending(ClientWizard),
    Created(ClientWithEvents),
    Updated(ClientWithEvents),
}

/// Length of the wizard once stored by the session: serialized to a JSON
/// string, then escaped again inside the session's JSON map.
pub(crate) fn stored_wizard_len(wizard: &ClientWizard) -> ServiceResult<usize> {
    let value =
        serde_json::to_string(wizard).map_err(|e| ServiceError::Internal(e.to_string()))?;
    let stored =
        serde_json::to_string(&value).map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(stored.len())
}

fn start(target: WizardTarget, form: ClientForm) -> ServiceResult<ClientWizard> {
    let payload = ClientPayload::try_from(form)?;
    ClientWizard::start(target, payload.client, payload.event_count)
        .map_err(|_| FormError::InvalidEventCount.into())
}

/// Validates the client details and opens a wizard that creates a client.
pub fn start_client_wizard(form: ClientForm) -> ServiceResult<ClientWizard> {
    start(WizardTarget::Create, form)
}

/// Validates the client details and opens a wizard that replaces the client's
/// fields and events.
pub fn start_edit_wizard<R>(repo: &R, client_id: i32, form: ClientForm) -> ServiceResult<ClientWizard>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id).map_err(|_| FormError::InvalidClientId)?;

    if repo.get_client_by_id(client_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    start(WizardTarget::Edit(client_id), form)
}

/// Loads data necessary to render the current event step.
pub fn load_wizard_step<R>(repo: &R, wizard: &ClientWizard) -> ServiceResult<WizardPageData>
where
    R: VendorReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    Ok(WizardPageData::new(wizard, &vendors))
}

/// Stages one event. When it fills the last slot, the client and every staged
/// event are written in a single repository call.
pub fn submit_wizard_event<R>(
    repo: &R,
    wizard: ClientWizard,
    form: EventForm,
) -> ServiceResult<WizardOutcome>
where
    R: VendorReader + ClientWriter + ?Sized,
{
    let event = NewEvent::try_from(form)?;

    if let Some(vendor_id) = event.vendor_id {
        if repo.get_vendor_by_id(vendor_id)?.is_none() {
            return Err(FormError::InvalidVendorId.into());
        }
    }

    let submission = match wizard.stage(event) {
        WizardStep::Pending(wizard) => {
            if stored_wizard_len(&wizard)? > MAX_STORED_WIZARD_BYTES {
                return Err(FormError::WizardTooLarge.into());
            }
            return Ok(WizardOutcome::Pending(wizard));
        }
        WizardStep::Complete(submission) => submission,
    };

    match submission.target {
        WizardTarget::Create => {
            let created = repo.create_client(&submission.client, &submission.events)?;
            info!(
                "Created client {} with {} events",
                created.client.id,
                created.events.len()
            );
            Ok(WizardOutcome::Created(created))
        }
        WizardTarget::Edit(client_id) => {
            let updated =
                repo.update_client(client_id, &submission.client, &submission.events)?;
            info!(
                "Updated client {} with {} events",
                updated.client.id,
                updated.events.len()
            );
            Ok(WizardOutcome::Updated(updated))
        }
    }
}

/// Deletes the client together with its events.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let client_id = ClientId::new(client_id)?;
    repo.delete_client(client_id)?;
    info!("Deleted client {client_id}");
    Ok(())
}
