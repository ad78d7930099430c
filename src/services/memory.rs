//! Small in-memory repository used by the service tests.

use std::cell::RefCell;

use chrono::Utc;

use crate::domain::client::{Client, ClientWithEvents, NewClient, UpdateClient};
use crate::domain::event::{Event, NewEvent};
use crate::domain::types::{ClientId, EventId, VendorId};
use crate::domain::vendor::{NewVendor, UpdateVendor, Vendor};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, VendorReader, VendorWriter};

#[derive(Default)]
pub struct MemoryRepository {
    vendors: RefCell<Vec<Vendor>>,
    clients: RefCell<Vec<ClientWithEvents>>,
    next_id: RefCell<i32>,
}

impl MemoryRepository {
    fn next_id(&self) -> i32 {
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        *next
    }

    fn materialize_events(&self, client_id: ClientId, events: &[NewEvent]) -> Vec<Event> {
        events
            .iter()
            .map(|event| Event {
                id: EventId::new(self.next_id()).expect("positive id"),
                client_id,
                name: event.name.clone(),
                category: event.category.clone(),
                vendor_id: event.vendor_id,
                created_at: Utc::now().naive_utc(),
            })
            .collect()
    }

    pub fn vendor_count(&self) -> usize {
        self.vendors.borrow().len()
    }

    pub fn client_count(&self) -> usize {
        self.clients.borrow().len()
    }
}

impl VendorReader for MemoryRepository {
    fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>> {
        Ok(self.vendors.borrow().clone())
    }

    fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>> {
        Ok(self.vendors.borrow().iter().find(|v| v.id == id).cloned())
    }
}

impl VendorWriter for MemoryRepository {
    fn create_vendor(&self, new_vendor: &NewVendor) -> RepositoryResult<Vendor> {
        let now = Utc::now().naive_utc();
        let vendor = Vendor::new(
            VendorId::new(self.next_id()).expect("positive id"),
            new_vendor.name.clone(),
            new_vendor.categories.clone(),
            now,
            now,
        );
        self.vendors.borrow_mut().push(vendor.clone());
        Ok(vendor)
    }

    fn update_vendor(&self, id: VendorId, updates: &UpdateVendor) -> RepositoryResult<Vendor> {
        let mut vendors = self.vendors.borrow_mut();
        let vendor = vendors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(RepositoryError::NotFound)?;
        vendor.name = updates.name.clone();
        vendor.categories = updates.categories.clone();
        vendor.updated_at = Utc::now().naive_utc();
        Ok(vendor.clone())
    }

    fn delete_vendor(&self, id: VendorId) -> RepositoryResult<()> {
        let mut vendors = self.vendors.borrow_mut();
        let before = vendors.len();
        vendors.retain(|v| v.id != id);
        if vendors.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl ClientReader for MemoryRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<ClientWithEvents>> {
        Ok(self.clients.borrow().clone())
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientWithEvents>> {
        Ok(self
            .clients
            .borrow()
            .iter()
            .find(|c| c.client.id == id)
            .cloned())
    }
}

impl ClientWriter for MemoryRepository {
    fn create_client(
        &self,
        new_client: &NewClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents> {
        let now = Utc::now().naive_utc();
        let id = ClientId::new(self.next_id()).expect("positive id");
        let created = ClientWithEvents {
            client: Client {
                id,
                name: new_client.name.clone(),
                contact_no: new_client.contact_no.clone(),
                created_at: now,
                updated_at: now,
            },
            events: self.materialize_events(id, events),
        };
        self.clients.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_client(
        &self,
        id: ClientId,
        updates: &UpdateClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents> {
        let events = self.materialize_events(id, events);
        let mut clients = self.clients.borrow_mut();
        let entry = clients
            .iter_mut()
            .find(|c| c.client.id == id)
            .ok_or(RepositoryError::NotFound)?;
        entry.client.name = updates.name.clone();
        entry.client.contact_no = updates.contact_no.clone();
        entry.client.updated_at = Utc::now().naive_utc();
        entry.events = events;
        Ok(entry.clone())
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        let mut clients = self.clients.borrow_mut();
        let before = clients.len();
        clients.retain(|c| c.client.id != id);
        if clients.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
