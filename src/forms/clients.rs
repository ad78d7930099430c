//! Client details and wizard event forms.

use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::event::{NewEvent, optional_category};
use crate::domain::types::{ClientName, ContactNumber, EventName, VendorId};
use crate::domain::wizard::MAX_EVENTS_PER_CLIENT;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// First wizard step: client details and how many events follow.
pub struct ClientForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub contact_no: String,
    pub number_of_events: usize,
}

/// Validated [`ClientForm`].
#[derive(Debug)]
pub struct ClientPayload {
    pub client: NewClient,
    pub event_count: usize,
}

impl TryFrom<ClientForm> for ClientPayload {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = ClientName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let contact_no =
            ContactNumber::new(form.contact_no).map_err(|_| FormError::InvalidContactNumber)?;

        if !(1..=MAX_EVENTS_PER_CLIENT).contains(&form.number_of_events) {
            return Err(FormError::InvalidEventCount);
        }

        Ok(Self {
            client: NewClient::new(name, contact_no),
            event_count: form.number_of_events,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// One wizard event step. `vendor_id` of 0 means no vendor.
///
/// Staged events live in the session cookie until the wizard completes, so
/// text fields are kept short.
pub struct EventForm {
    #[validate(length(min = 1, max = 80))]
    pub event_name: String,
    #[serde(default)]
    #[validate(length(max = 80))]
    pub category: String,
    #[serde(default)]
    pub vendor_id: i32,
}

impl TryFrom<EventForm> for NewEvent {
    type Error = FormError;

    fn try_from(form: EventForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = EventName::new(form.event_name).map_err(|_| FormError::InvalidEventName)?;
        let vendor_id = match form.vendor_id {
            0 => None,
            id => Some(VendorId::new(id).map_err(|_| FormError::InvalidVendorId)?),
        };

        Ok(NewEvent::new(name, optional_category(form.category), vendor_id))
    }
}
