//! Dashboard service.

use crate::domain::cost::{CostEngine, PricingPolicy};
use crate::domain::summary::{DashboardStats, summarize_clients};
use crate::dto::main::{ClientRow, IndexPageData};
use crate::dto::vendors::VendorRow;
use crate::repository::{ClientReader, VendorReader};
use crate::services::ServiceResult;

/// Loads vendors and clients and prices every client against the current
/// catalog.
pub fn load_dashboard<R>(repo: &R, policy: PricingPolicy) -> ServiceResult<IndexPageData>
where
    R: VendorReader + ClientReader + ?Sized,
{
    let vendors = repo.list_vendors()?;
    let clients = repo.list_clients()?;

    let engine = CostEngine::new(&vendors, policy);
    let summaries = summarize_clients(clients, &engine);
    let stats = DashboardStats::collect(vendors.len(), &summaries);

    Ok(IndexPageData {
        stats: stats.into(),
        vendors: vendors.iter().map(VendorRow::from).collect(),
        clients: summaries.iter().map(ClientRow::from).collect(),
    })
}
