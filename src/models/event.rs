use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::event::{Event as DomainEvent, NewEvent as DomainNewEvent};
use crate::domain::types::TypeConstraintError;
use crate::models::client::Client;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::events)]
#[diesel(belongs_to(Client, foreign_key = client_id))]
/// Diesel model for [`crate::domain::event::Event`].
pub struct Event {
    pub id: i32,
    pub client_id: i32,
    pub event_name: String,
    pub category: String,
    pub vendor_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::events)]
/// Insertable form of [`Event`].
pub struct NewEvent<'a> {
    pub client_id: i32,
    pub event_name: &'a str,
    pub category: &'a str,
    pub vendor_id: Option<i32>,
}

impl TryFrom<Event> for DomainEvent {
    type Error = TypeConstraintError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        DomainEvent::try_new(
            event.id,
            event.client_id,
            event.event_name,
            event.category,
            event.vendor_id,
            event.created_at,
        )
    }
}

impl<'a> NewEvent<'a> {
    /// Binds a staged event to the client it is saved under.
    pub fn for_client(client_id: i32, event: &'a DomainNewEvent) -> Self {
        Self {
            client_id,
            event_name: event.name.as_str(),
            category: event.category.as_deref().unwrap_or_default(),
            vendor_id: event.vendor_id.map(|id| id.get()),
        }
    }
}
