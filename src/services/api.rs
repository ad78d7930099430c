//! Services backing the JSON API.

use crate::domain::cost::{CostEngine, PricingPolicy};
use crate::domain::summary::{DashboardStats, summarize_clients};
use crate::dto::api::{ApiClient, ApiStats, ApiVendor};
use crate::repository::{ClientReader, VendorReader};
use crate::services::ServiceResult;

/// Clients with their events and totals recomputed from the current catalog.
pub fn list_clients<R>(repo: &R, policy: PricingPolicy) -> ServiceResult<Vec<ApiClient>>
where
    R: VendorReader + ClientReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    let clients = repo.list_clients()?;

    let engine = CostEngine::new(&vendors, policy);
    let summaries = summarize_clients(clients, &engine);

    Ok(summaries.iter().map(ApiClient::from).collect())
}

pub fn list_vendors<R>(repo: &R) -> ServiceResult<Vec<ApiVendor>>
where
    R: VendorReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    Ok(vendors.iter().map(ApiVendor::from).collect())
}

pub fn load_stats<R>(repo: &R, policy: PricingPolicy) -> ServiceResult<ApiStats>
where
    R: VendorReader + ClientReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    let clients = repo.list_clients()?;

    let engine = CostEngine::new(&vendors, policy);
    let summaries = summarize_clients(clients, &engine);

    Ok(DashboardStats::collect(vendors.len(), &summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::NewClient;
    use crate::domain::event::NewEvent;
    use crate::domain::types::{
        CategoryName, ClientName, ContactNumber, EventName, Price, VendorName,
    };
    use crate::domain::vendor::NewVendor;
    use crate::repository::{ClientWriter, VendorWriter};
    use crate::services::memory::MemoryRepository;

    fn seed_flat_match(repo: &MemoryRepository) {
        let catering = repo
            .create_vendor(
                &NewVendor::try_new(
                    VendorName::new("Elite Catering").unwrap(),
                    vec![
                        (CategoryName::new("catering").unwrap(), Price::from_units(5000).unwrap()),
                        (CategoryName::new("food").unwrap(), Price::from_units(5000).unwrap()),
                    ],
                )
                .unwrap(),
            )
            .unwrap();
        let photos = repo
            .create_vendor(
                &NewVendor::try_new(
                    VendorName::new("Perfect Photos").unwrap(),
                    vec![(
                        CategoryName::new("photography").unwrap(),
                        Price::from_units(3000).unwrap(),
                    )],
                )
                .unwrap(),
            )
            .unwrap();

        repo.create_client(
            &NewClient::new(
                ClientName::new("John Smith").unwrap(),
                ContactNumber::new("1234567890").unwrap(),
            ),
            &[
                NewEvent::new(
                    EventName::new("Wedding").unwrap(),
                    CategoryName::new("catering").ok(),
                    Some(catering.id),
                ),
                NewEvent::new(
                    EventName::new("Photos").unwrap(),
                    CategoryName::new("photography").ok(),
                    Some(photos.id),
                ),
            ],
        )
        .unwrap();
    }

    #[test]
    fn clients_carry_recomputed_totals() {
        let repo = MemoryRepository::default();
        seed_flat_match(&repo);

        let clients = list_clients(&repo, PricingPolicy::FlatMatch).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].total_cost, Price::from_units(8000).unwrap());
        assert_eq!(clients[0].events.len(), 2);
        assert_eq!(clients[0].events[0].category, "catering");
    }

    #[test]
    fn stats_and_vendors() {
        let repo = MemoryRepository::default();
        seed_flat_match(&repo);

        let stats = load_stats(&repo, PricingPolicy::FlatMatch).unwrap();
        assert_eq!(stats.total_vendors, 2);
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.total_earnings, Price::from_units(8000).unwrap());

        let vendors = list_vendors(&repo).unwrap();
        assert_eq!(vendors[0].name, "Elite Catering");
        assert_eq!(vendors[0].categories.len(), 2);
    }
}
