use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::event::Event;
use crate::domain::types::{ClientId, ClientName, ContactNumber};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub contact_no: ContactNumber,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Client together with its events in creation order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientWithEvents {
    pub client: Client,
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub contact_no: ContactNumber,
}

impl NewClient {
    #[must_use]
    pub fn new(name: ClientName, contact_no: ContactNumber) -> Self {
        Self { name, contact_no }
    }
}

/// Editing a client replaces its name, number and the whole event set.
pub type UpdateClient = NewClient;
