use serde::Serialize;

use crate::domain::event::NewEvent;
use crate::domain::vendor::Vendor;
use crate::domain::wizard::{ClientWizard, WizardTarget};

/// Vendor choice offered by the event step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VendorOption {
    pub id: i32,
    /// Name followed by the vendor's categories, e.g. `Elite Catering (catering, food)`.
    pub label: String,
}

impl From<&Vendor> for VendorOption {
    fn from(vendor: &Vendor) -> Self {
        let categories = vendor
            .categories
            .keys()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: vendor.id.get(),
            label: format!("{} ({categories})", vendor.name),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StagedEventView {
    pub name: String,
    pub category: String,
    pub vendor_id: Option<i32>,
}

impl From<&NewEvent> for StagedEventView {
    fn from(event: &NewEvent) -> Self {
        Self {
            name: event.name.to_string(),
            category: event
                .category
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            vendor_id: event.vendor_id.map(|id| id.get()),
        }
    }
}

/// Data required to render the current wizard step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WizardPageData {
    pub editing: bool,
    pub client_name: String,
    pub step_number: usize,
    pub total_steps: usize,
    pub is_last_step: bool,
    /// Completion in percent, used for the progress bar.
    pub progress: usize,
    pub staged: Vec<StagedEventView>,
    pub vendors: Vec<VendorOption>,
}

impl WizardPageData {
    pub fn new(wizard: &ClientWizard, vendors: &[Vendor]) -> Self {
        let total_steps = wizard.total_steps();
        Self {
            editing: matches!(wizard.target(), WizardTarget::Edit(_)),
            client_name: wizard.client().name.to_string(),
            step_number: wizard.step_number(),
            total_steps,
            is_last_step: wizard.is_last_step(),
            progress: wizard.step_number() * 100 / total_steps.max(1),
            staged: wizard.staged().map(StagedEventView::from).collect(),
            vendors: vendors.iter().map(VendorOption::from).collect(),
        }
    }
}
