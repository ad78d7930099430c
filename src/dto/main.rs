use serde::Serialize;

use crate::domain::summary::{ClientSummary, DashboardStats};
use crate::dto::vendors::VendorRow;

const EVENT_PREVIEW: usize = 2;
const CATEGORY_PREVIEW: usize = 3;

/// Headline numbers with earnings already formatted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsView {
    pub total_vendors: usize,
    pub total_clients: usize,
    pub total_events: usize,
    pub total_earnings: String,
}

impl From<DashboardStats> for StatsView {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_vendors: stats.total_vendors,
            total_clients: stats.total_clients,
            total_events: stats.total_events,
            total_earnings: stats.total_earnings.to_currency_string(),
        }
    }
}

/// Client as listed in the dashboard table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientRow {
    pub id: i32,
    pub name: String,
    pub contact_no: String,
    pub event_count: usize,
    /// First event names, the rest is summarised by `more_events`.
    pub event_preview: Vec<String>,
    pub more_events: usize,
    pub categories: Vec<String>,
    pub more_categories: usize,
    pub total_cost: String,
}

impl From<&ClientSummary> for ClientRow {
    fn from(summary: &ClientSummary) -> Self {
        let categories = summary.unique_categories();
        Self {
            id: summary.client.id.get(),
            name: summary.client.name.to_string(),
            contact_no: summary.client.contact_no.to_string(),
            event_count: summary.events.len(),
            event_preview: summary
                .events
                .iter()
                .take(EVENT_PREVIEW)
                .map(|event| event.name.to_string())
                .collect(),
            more_events: summary.events.len().saturating_sub(EVENT_PREVIEW),
            categories: categories
                .iter()
                .take(CATEGORY_PREVIEW)
                .map(|category| category.to_string())
                .collect(),
            more_categories: categories.len().saturating_sub(CATEGORY_PREVIEW),
            total_cost: summary.total_cost.to_currency_string(),
        }
    }
}

/// Data required to render the main index template.
pub struct IndexPageData {
    pub stats: StatsView,
    pub vendors: Vec<VendorRow>,
    pub clients: Vec<ClientRow>,
}
