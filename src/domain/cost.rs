//! Cost engine: prices a client's events against the vendor catalog.
//!
//! Everything here is pure. Missing vendors, blank categories and categories
//! a vendor does not price are not errors; they contribute zero so the
//! dashboard keeps working with partially inconsistent data.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::event::EventLine;
use crate::domain::types::{Price, VendorId};
use crate::domain::vendor::Vendor;

/// How an event's category is matched against a vendor's price table.
///
/// A deployment picks exactly one policy and applies it to every client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    /// The event category is a single key; the event costs the price stored
    /// under that key, or nothing.
    #[default]
    PerCategory,
    /// The event category is a comma separated tag list. If any tag is priced
    /// by the vendor, the vendor is charged once, at the price of the first
    /// matching tag.
    FlatMatch,
}

/// Splits a comma separated category string into trimmed, non-empty tags.
pub fn split_categories(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Vendor catalog indexed by id plus the pricing policy to apply.
#[derive(Debug, Clone)]
pub struct CostEngine<'a> {
    vendors: HashMap<VendorId, &'a Vendor>,
    policy: PricingPolicy,
}

impl<'a> CostEngine<'a> {
    pub fn new(vendors: &'a [Vendor], policy: PricingPolicy) -> Self {
        Self {
            vendors: vendors.iter().map(|vendor| (vendor.id, vendor)).collect(),
            policy,
        }
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    /// Resolves a vendor reference; `None` for dangling ids.
    pub fn vendor(&self, id: VendorId) -> Option<&'a Vendor> {
        self.vendors.get(&id).copied()
    }

    /// Contribution of a single event to its client's total.
    pub fn event_cost<E: EventLine + ?Sized>(&self, event: &E) -> Price {
        let (Some(vendor_id), Some(category)) = (event.vendor_id(), event.category()) else {
            return Price::ZERO;
        };
        let Some(vendor) = self.vendor(vendor_id) else {
            return Price::ZERO;
        };

        let price = match self.policy {
            PricingPolicy::PerCategory => vendor.price_for(category.as_str()),
            PricingPolicy::FlatMatch => {
                split_categories(category.as_str()).find_map(|tag| vendor.price_for(tag))
            }
        };
        price.unwrap_or(Price::ZERO)
    }

    /// Sum of all event contributions. An empty slice costs zero.
    pub fn client_total_cost<E: EventLine>(&self, events: &[E]) -> Price {
        events.iter().map(|event| self.event_cost(event)).sum()
    }
}

/// Computes a client's total cost against `vendors` in one call.
pub fn compute_client_total_cost<E: EventLine>(
    events: &[E],
    vendors: &[Vendor],
    policy: PricingPolicy,
) -> Price {
    CostEngine::new(vendors, policy).client_total_cost(events)
}

/// Groups events by the vendor they reference, keeping the original order
/// inside each group. Events without a vendor are left out. Groups are keyed
/// by ascending vendor id.
pub fn group_events_by_vendor<E: EventLine>(events: &[E]) -> BTreeMap<VendorId, Vec<&E>> {
    let mut groups: BTreeMap<VendorId, Vec<&E>> = BTreeMap::new();
    for event in events {
        if let Some(vendor_id) = event.vendor_id() {
            groups.entry(vendor_id).or_default().push(event);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::NewEvent;
    use crate::domain::types::{CategoryName, EventName, VendorName};
    use crate::domain::vendor::NewVendor;

    fn price(units: i64) -> Price {
        Price::from_units(units).expect("valid price")
    }

    fn vendor(id: i32, name: &str, categories: &[(&str, i64)]) -> Vendor {
        let now = chrono::Utc::now().naive_utc();
        let payload = NewVendor::try_new(
            VendorName::new(name).expect("valid name"),
            categories.iter().map(|(category, units)| {
                (
                    CategoryName::new(*category).expect("valid category"),
                    price(*units),
                )
            }),
        )
        .expect("valid vendor");
        Vendor::new(
            VendorId::new(id).expect("valid id"),
            payload.name,
            payload.categories,
            now,
            now,
        )
    }

    fn event(name: &str, category: &str, vendor_id: Option<i32>) -> NewEvent {
        NewEvent::new(
            EventName::new(name).expect("valid name"),
            CategoryName::new(category).ok(),
            vendor_id.map(|id| VendorId::new(id).expect("valid id")),
        )
    }

    fn catalog() -> Vec<Vendor> {
        vec![
            vendor(1, "Elite Catering", &[("catering", 5000), ("food", 3000)]),
            vendor(2, "Perfect Photos", &[("photography", 3000)]),
            vendor(3, "Sound Masters", &[("audio", 2500), ("equipment", 1500)]),
        ]
    }

    #[test]
    fn no_events_cost_nothing() {
        let vendors = catalog();
        let events: Vec<NewEvent> = Vec::new();
        for policy in [PricingPolicy::PerCategory, PricingPolicy::FlatMatch] {
            assert_eq!(
                compute_client_total_cost(&events, &vendors, policy),
                Price::ZERO
            );
        }
    }

    #[test]
    fn events_without_vendor_cost_nothing() {
        let vendors = catalog();
        let events = vec![event("Party", "catering", None)];
        for policy in [PricingPolicy::PerCategory, PricingPolicy::FlatMatch] {
            assert_eq!(
                compute_client_total_cost(&events, &vendors, policy),
                Price::ZERO
            );
        }
    }

    #[test]
    fn dangling_vendor_costs_nothing() {
        let vendors = catalog();
        let events = vec![event("Party", "catering", Some(42))];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            Price::ZERO
        );
    }

    #[test]
    fn blank_category_costs_nothing() {
        let vendors = catalog();
        let events = vec![event("Party", "", Some(1))];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::FlatMatch),
            Price::ZERO
        );
    }

    #[test]
    fn flat_match_charges_the_first_matching_tag_in_event_order() {
        let vendors = catalog();
        let catering_first = vec![event("Gala", "catering, food", Some(1))];
        let food_first = vec![event("Gala", "food, catering", Some(1))];
        let unknown_first = vec![event("Gala", "balloons, food, catering", Some(1))];

        assert_eq!(
            compute_client_total_cost(&catering_first, &vendors, PricingPolicy::FlatMatch),
            price(5000)
        );
        assert_eq!(
            compute_client_total_cost(&food_first, &vendors, PricingPolicy::FlatMatch),
            price(3000)
        );
        assert_eq!(
            compute_client_total_cost(&unknown_first, &vendors, PricingPolicy::FlatMatch),
            price(3000)
        );
    }

    #[test]
    fn per_category_uses_the_matching_price() {
        let vendors = catalog();
        let events = vec![event("Dinner", "food", Some(1))];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            price(3000)
        );
    }

    #[test]
    fn per_category_missing_key_costs_nothing() {
        let vendors = catalog();
        let events = vec![
            event("Dinner", "photography", Some(1)),
            event("Lunch", "Food", Some(1)),
        ];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            Price::ZERO
        );
    }

    #[test]
    fn per_category_does_not_split_tags() {
        let vendors = catalog();
        let events = vec![event("Reception", "catering,photography", Some(1))];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            Price::ZERO
        );
    }

    #[test]
    fn flat_match_charges_once() {
        let vendors = catalog();
        let events = vec![event("Reception", "catering", Some(1))];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::FlatMatch),
            price(5000)
        );

        let both = vec![event("Reception", "catering, food", Some(1))];
        assert_eq!(
            compute_client_total_cost(&both, &vendors, PricingPolicy::FlatMatch),
            price(5000)
        );
    }

    #[test]
    fn flat_match_trims_tags_but_keeps_case() {
        let vendors = catalog();
        let trimmed = vec![event("Show", " , audio ,", Some(3))];
        assert_eq!(
            compute_client_total_cost(&trimmed, &vendors, PricingPolicy::FlatMatch),
            price(2500)
        );

        let wrong_case = vec![event("Show", "Audio", Some(3))];
        assert_eq!(
            compute_client_total_cost(&wrong_case, &vendors, PricingPolicy::FlatMatch),
            Price::ZERO
        );
    }

    #[test]
    fn john_smith_flat_total() {
        let vendors = catalog();
        let events = vec![
            event("Wedding Reception", "catering,photography", Some(1)),
            event("Wedding Ceremony", "photography,audio", Some(2)),
        ];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::FlatMatch),
            price(8000)
        );
    }

    #[test]
    fn deleted_vendor_no_longer_contributes() {
        let mut vendors = catalog();
        let events = vec![
            event("Dinner", "catering", Some(1)),
            event("Photos", "photography", Some(2)),
        ];
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            price(8000)
        );

        vendors.retain(|vendor| vendor.id.get() != 1);
        assert_eq!(
            compute_client_total_cost(&events, &vendors, PricingPolicy::PerCategory),
            price(3000)
        );
    }

    #[test]
    fn grouping_keeps_order_and_skips_vendorless_events() {
        let events = vec![
            event("A", "catering", Some(2)),
            event("B", "food", None),
            event("C", "audio", Some(1)),
            event("D", "photography", Some(2)),
        ];

        let groups = group_events_by_vendor(&events);

        assert_eq!(groups.len(), 2);
        let keys: Vec<i32> = groups.keys().map(|id| id.get()).collect();
        assert_eq!(keys, vec![1, 2]);

        let second: Vec<&str> = groups[&VendorId::new(2).unwrap()]
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(second, vec!["A", "D"]);
        assert!(
            groups
                .values()
                .flatten()
                .all(|e| e.name.as_str() != "B")
        );
    }

    #[test]
    fn split_categories_drops_blank_tags() {
        let tags: Vec<&str> = split_categories(" a, ,b ,, c").collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }
}
