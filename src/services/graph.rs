//! Relationship graph service.

use crate::domain::cost::{CostEngine, PricingPolicy};
use crate::domain::graph::build_relationship_graph;
use crate::domain::summary::summarize_clients;
use crate::dto::graph::GraphView;
use crate::repository::{ClientReader, VendorReader};
use crate::services::ServiceResult;

/// Builds the client → vendor graph from the current catalog.
pub fn load_graph<R>(repo: &R, policy: PricingPolicy) -> ServiceResult<GraphView>
where
    R: VendorReader + ClientReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    let clients = repo.list_clients()?;

    let engine = CostEngine::new(&vendors, policy);
    let summaries = summarize_clients(clients, &engine);

    Ok(build_relationship_graph(&summaries, &engine).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::NewClient;
    use crate::domain::event::NewEvent;
    use crate::domain::graph::NodeKind;
    use crate::domain::types::{
        CategoryName, ClientName, ContactNumber, EventName, Price, VendorName,
    };
    use crate::domain::vendor::NewVendor;
    use crate::repository::{ClientWriter, VendorWriter};
    use crate::services::memory::MemoryRepository;

    #[test]
    fn graph_connects_client_to_vendor() {
        let repo = MemoryRepository::default();
        let vendor = repo
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
                ClientName::new("Sarah Johnson").unwrap(),
                ContactNumber::new("9876543210").unwrap(),
            ),
            &[NewEvent::new(
                EventName::new("Portraits").unwrap(),
                CategoryName::new("photography").ok(),
                Some(vendor.id),
            )],
        )
        .unwrap();

        let graph = load_graph(&repo, PricingPolicy::PerCategory).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].kind, NodeKind::Client);
        assert_eq!(graph.nodes[0].cost, "$3,000.00");
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].label, "photography");
        // Edge runs from the right side of the client box to the vendor box.
        assert_eq!(graph.edges[0].x1, 50 + graph.node_width);
        assert_eq!(graph.edges[0].x2, 400);
    }

    #[test]
    fn empty_store_gives_empty_graph() {
        let repo = MemoryRepository::default();
        let graph = load_graph(&repo, PricingPolicy::PerCategory).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }
}
