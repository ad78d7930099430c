//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{ClientWithEvents, NewClient, UpdateClient};
use crate::domain::event::NewEvent;
use crate::domain::types::{ClientId, VendorId};
use crate::domain::vendor::{NewVendor, UpdateVendor, Vendor};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, VendorReader, VendorWriter};

mock! {
    pub Repository {}

    impl VendorReader for Repository {
        fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>>;
        fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>>;
    }

    impl VendorWriter for Repository {
        fn create_vendor(&self, new_vendor: &NewVendor) -> RepositoryResult<Vendor>;
        fn update_vendor(&self, id: VendorId, updates: &UpdateVendor) -> RepositoryResult<Vendor>;
        fn delete_vendor(&self, id: VendorId) -> RepositoryResult<()>;
    }

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<ClientWithEvents>>;
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientWithEvents>>;
    }

    impl ClientWriter for Repository {
        fn create_client(
            &self,
            new_client: &NewClient,
            events: &[NewEvent],
        ) -> RepositoryResult<ClientWithEvents>;
        fn update_client(
            &self,
            id: ClientId,
            updates: &UpdateClient,
            events: &[NewEvent],
        ) -> RepositoryResult<ClientWithEvents>;
        fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
    }
}
