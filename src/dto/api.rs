//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::event::Event;
use crate::domain::summary::{ClientSummary, DashboardStats};
use crate::domain::types::Price;
use crate::domain::vendor::Vendor;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiEvent {
    pub id: i32,
    pub event_name: String,
    pub category: String,
    pub vendor_id: Option<i32>,
}

impl From<&Event> for ApiEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.get(),
            event_name: event.name.to_string(),
            category: event
                .category
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            vendor_id: event.vendor_id.map(|id| id.get()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiClient {
    pub id: i32,
    pub name: String,
    pub contact_no: String,
    pub events: Vec<ApiEvent>,
    /// Total in cents.
    pub total_cost: Price,
}

impl From<&ClientSummary> for ApiClient {
    fn from(summary: &ClientSummary) -> Self {
        Self {
            id: summary.client.id.get(),
            name: summary.client.name.to_string(),
            contact_no: summary.client.contact_no.to_string(),
            events: summary.events.iter().map(ApiEvent::from).collect(),
            total_cost: summary.total_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiCategoryPrice {
    pub category: String,
    /// Price in cents.
    pub price: Price,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiVendor {
    pub id: i32,
    pub name: String,
    pub categories: Vec<ApiCategoryPrice>,
}

impl From<&Vendor> for ApiVendor {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.get(),
            name: vendor.name.to_string(),
            categories: vendor
                .categories
                .iter()
                .map(|(category, price)| ApiCategoryPrice {
                    category: category.to_string(),
                    price: *price,
                })
                .collect(),
        }
    }
}

/// Same figures as the dashboard header; earnings in cents.
pub type ApiStats = DashboardStats;
