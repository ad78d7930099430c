//! Events booked for a client, optionally served by a vendor.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, ClientId, EventId, EventName, TypeConstraintError, VendorId,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub client_id: ClientId,
    pub name: EventName,
    /// `None` when the user left the category blank.
    pub category: Option<CategoryName>,
    /// Weak reference: the vendor may have been deleted since.
    pub vendor_id: Option<VendorId>,
    pub created_at: NaiveDateTime,
}

impl Event {
    /// Builds an event from raw persisted values.
    pub fn try_new(
        id: i32,
        client_id: i32,
        name: String,
        category: String,
        vendor_id: Option<i32>,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: EventId::new(id)?,
            client_id: ClientId::new(client_id)?,
            name: EventName::new(name)?,
            category: optional_category(category),
            vendor_id: vendor_id.map(VendorId::new).transpose()?,
            created_at,
        })
    }
}

/// Event collected by the client wizard before it is attached to a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewEvent {
    pub name: EventName,
    pub category: Option<CategoryName>,
    pub vendor_id: Option<VendorId>,
}

impl NewEvent {
    #[must_use]
    pub fn new(
        name: EventName,
        category: Option<CategoryName>,
        vendor_id: Option<VendorId>,
    ) -> Self {
        Self {
            name,
            category,
            vendor_id,
        }
    }
}

/// Blank categories are stored as an empty string and read back as `None`.
pub fn optional_category<S: Into<String>>(raw: S) -> Option<CategoryName> {
    CategoryName::new(raw).ok()
}

/// Read access shared by persisted and staged events, used by the cost
/// engine and the vendor grouping.
pub trait EventLine {
    fn vendor_id(&self) -> Option<VendorId>;
    fn category(&self) -> Option<&CategoryName>;
}

impl EventLine for Event {
    fn vendor_id(&self) -> Option<VendorId> {
        self.vendor_id
    }

    fn category(&self) -> Option<&CategoryName> {
        self.category.as_ref()
    }
}

impl EventLine for NewEvent {
    fn vendor_id(&self) -> Option<VendorId> {
        self.vendor_id
    }

    fn category(&self) -> Option<&CategoryName> {
        self.category.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_becomes_none() {
        let now = chrono::Utc::now().naive_utc();
        let event = Event::try_new(1, 2, "Wedding".into(), "   ".into(), None, now)
            .expect("valid event");
        assert_eq!(event.category, None);
        assert_eq!(event.vendor_id, None);
    }

    #[test]
    fn persisted_values_are_validated() {
        let now = chrono::Utc::now().naive_utc();
        assert!(Event::try_new(1, 2, "".into(), "food".into(), None, now).is_err());
        assert!(Event::try_new(1, 2, "Party".into(), "food".into(), Some(0), now).is_err());

        let event = Event::try_new(3, 2, "Party".into(), " food ".into(), Some(7), now)
            .expect("valid event");
        assert_eq!(event.category.as_deref(), Some("food"));
        assert_eq!(event.vendor_id.map(VendorId::get), Some(7));
    }
}
