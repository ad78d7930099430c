//! Derived views over clients: per-client totals and dashboard statistics.

use serde::Serialize;

use crate::domain::client::{Client, ClientWithEvents};
use crate::domain::cost::CostEngine;
use crate::domain::event::Event;
use crate::domain::types::Price;

/// Client, its events and the total recomputed from the current catalog.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientSummary {
    pub client: Client,
    pub events: Vec<Event>,
    pub total_cost: Price,
}

impl ClientSummary {
    pub fn compute(client: ClientWithEvents, engine: &CostEngine<'_>) -> Self {
        let total_cost = engine.client_total_cost(&client.events);
        Self {
            client: client.client,
            events: client.events,
            total_cost,
        }
    }

    /// Distinct non-empty categories across the client's events, in first
    /// seen order.
    pub fn unique_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.events.iter().filter_map(|event| event.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

/// Prices every client against one catalog snapshot.
pub fn summarize_clients(
    clients: Vec<ClientWithEvents>,
    engine: &CostEngine<'_>,
) -> Vec<ClientSummary> {
    clients
        .into_iter()
        .map(|client| ClientSummary::compute(client, engine))
        .collect()
}

/// Headline figures shown at the top of the dashboard.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_vendors: usize,
    pub total_clients: usize,
    pub total_events: usize,
    pub total_earnings: Price,
}

impl DashboardStats {
    pub fn collect(vendor_count: usize, clients: &[ClientSummary]) -> Self {
        Self {
            total_vendors: vendor_count,
            total_clients: clients.len(),
            total_events: clients.iter().map(|summary| summary.events.len()).sum(),
            total_earnings: clients.iter().map(|summary| summary.total_cost).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost::PricingPolicy;
    use crate::domain::types::{
        CategoryName, ClientId, ClientName, ContactNumber, Price, VendorId, VendorName,
    };
    use crate::domain::vendor::{NewVendor, Vendor};

    fn sample_vendors() -> Vec<Vendor> {
        let now = chrono::Utc::now().naive_utc();
        let payload = NewVendor::try_new(
            VendorName::new("Elite Catering").unwrap(),
            vec![
                (
                    CategoryName::new("catering").unwrap(),
                    Price::from_units(5000).unwrap(),
                ),
                (
                    CategoryName::new("food").unwrap(),
                    Price::from_units(3000).unwrap(),
                ),
            ],
        )
        .unwrap();
        vec![Vendor::new(
            VendorId::new(1).unwrap(),
            payload.name,
            payload.categories,
            now,
            now,
        )]
    }

    fn sample_client(id: i32, events: &[(&str, &str, Option<i32>)]) -> ClientWithEvents {
        let now = chrono::Utc::now().naive_utc();
        ClientWithEvents {
            client: Client {
                id: ClientId::new(id).unwrap(),
                name: ClientName::new(format!("Client {id}")).unwrap(),
                contact_no: ContactNumber::new("1234567890").unwrap(),
                created_at: now,
                updated_at: now,
            },
            events: events
                .iter()
                .enumerate()
                .map(|(i, (name, category, vendor))| {
                    Event::try_new(
                        i as i32 + 1,
                        id,
                        name.to_string(),
                        category.to_string(),
                        *vendor,
                        now,
                    )
                    .unwrap()
                })
                .collect(),
        }
    }

    #[test]
    fn stats_sum_client_totals() {
        let vendors = sample_vendors();
        let engine = CostEngine::new(&vendors, PricingPolicy::PerCategory);
        let clients = summarize_clients(
            vec![
                sample_client(1, &[("Dinner", "food", Some(1)), ("Party", "", None)]),
                sample_client(2, &[("Gala", "catering", Some(1))]),
                sample_client(3, &[]),
            ],
            &engine,
        );

        assert_eq!(clients[0].total_cost, Price::from_units(3000).unwrap());
        assert_eq!(clients[2].total_cost, Price::ZERO);

        let stats = DashboardStats::collect(vendors.len(), &clients);
        assert_eq!(stats.total_vendors, 1);
        assert_eq!(stats.total_clients, 3);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_earnings, Price::from_units(8000).unwrap());
    }

    #[test]
    fn unique_categories_keep_first_seen_order() {
        let vendors = sample_vendors();
        let engine = CostEngine::new(&vendors, PricingPolicy::PerCategory);
        let summary = ClientSummary::compute(
            sample_client(
                1,
                &[
                    ("A", "food", None),
                    ("B", "", None),
                    ("C", "catering", None),
                    ("D", "food", None),
                ],
            ),
            &engine,
        );

        assert_eq!(summary.unique_categories(), vec!["food", "catering"]);
    }
}
