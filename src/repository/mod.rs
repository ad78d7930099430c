//! Persistence seams for vendors and clients.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the SQLite implementation used by the server and the integration tests.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{ClientWithEvents, NewClient, UpdateClient};
use crate::domain::event::NewEvent;
use crate::domain::types::{ClientId, VendorId};
use crate::domain::vendor::{NewVendor, UpdateVendor, Vendor};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod vendor;

/// Diesel backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait VendorReader {
    /// All vendors with their category tables, ordered by id.
    fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>>;
    fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>>;
}

pub trait VendorWriter {
    fn create_vendor(&self, new_vendor: &NewVendor) -> RepositoryResult<Vendor>;
    /// Replaces name and the whole category table.
    fn update_vendor(&self, id: VendorId, updates: &UpdateVendor) -> RepositoryResult<Vendor>;
    /// Removes the vendor and its category table. Events pointing at it are
    /// left untouched.
    fn delete_vendor(&self, id: VendorId) -> RepositoryResult<()>;
}

pub trait ClientReader {
    /// All clients with their events, clients ordered by id and events in
    /// creation order.
    fn list_clients(&self) -> RepositoryResult<Vec<ClientWithEvents>>;
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientWithEvents>>;
}

pub trait ClientWriter {
    /// Inserts the client and all of its events in one transaction.
    fn create_client(
        &self,
        new_client: &NewClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents>;
    /// Replaces the client's fields and its whole event set in one transaction.
    fn update_client(
        &self,
        id: ClientId,
        updates: &UpdateClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents>;
    /// Removes the client; its events go with it.
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}
