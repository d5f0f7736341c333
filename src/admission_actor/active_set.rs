//! # Active Set
//!
//! The admission gate's state: every order currently being prepared, plus the
//! limits it is checked against.
//!
//! This type is plain synchronous data. It does no locking of its own; the
//! [`AdmissionActor`](super::AdmissionActor) owns it and is the only code that
//! touches it while the service runs. Keeping it free of channels and timers lets
//! tests replay any interleaving of admissions and completions step by step.
//!
//! Invariant: for every category, the number of active orders never exceeds its
//! limit.

use crate::admission_actor::OrderError;
use crate::config::CapacityLimits;
use crate::model::{ActiveOrder, Category, CustomerNumber, OrderId, ServedOrder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Occupancy of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub in_use: usize,
    pub limit: usize,
}

/// Counters and occupancy reported by the admission actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionStats {
    pub accepted: u64,
    pub rejected: u64,
    pub invalid: u64,
    pub completed: u64,
    pub categories: BTreeMap<Category, Occupancy>,
}

#[derive(Debug)]
pub struct ActiveSet {
    limits: CapacityLimits,
    orders: BTreeMap<OrderId, ActiveOrder>,
    next_id: u64,
    accepted: u64,
    rejected: u64,
    invalid: u64,
    completed: u64,
}

impl ActiveSet {
    pub fn new(limits: CapacityLimits) -> Self {
        Self {
            limits,
            orders: BTreeMap::new(),
            next_id: 1,
            accepted: 0,
            rejected: 0,
            invalid: 0,
            completed: 0,
        }
    }

    /// Admits an order if its category has a free slot.
    ///
    /// On rejection nothing but the rejection counters changes.
    pub fn try_admit(
        &mut self,
        customer_number: CustomerNumber,
        category: Category,
        now: Instant,
    ) -> Result<ActiveOrder, OrderError> {
        let Some(limit) = self.limits.limit(category) else {
            self.invalid += 1;
            return Err(OrderError::UnknownCategory(category.to_string()));
        };

        if self.in_use(category) >= limit {
            self.rejected += 1;
            return Err(OrderError::CapacityExceeded { category, limit });
        }

        let id = OrderId::from(self.next_id);
        self.next_id += 1;

        let order = ActiveOrder {
            id,
            customer_number,
            category,
            accepted_at: now,
        };
        self.orders.insert(id, order.clone());
        self.accepted += 1;
        Ok(order)
    }

    /// Releases the slot held by `id`.
    ///
    /// Returns `None` when the order is not active, so a repeated completion is a no-op.
    pub fn complete(&mut self, id: OrderId) -> Option<ActiveOrder> {
        let order = self.orders.remove(&id)?;
        self.completed += 1;
        Some(order)
    }

    pub fn in_use(&self, category: Category) -> usize {
        self.orders
            .values()
            .filter(|order| order.category == category)
            .count()
    }

    pub fn limit(&self, category: Category) -> Option<usize> {
        self.limits.limit(category)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// Orders in preparation, oldest admission first.
    pub fn snapshot(&self) -> Vec<ServedOrder> {
        self.orders.values().map(ServedOrder::from).collect()
    }

    pub fn stats(&self) -> AdmissionStats {
        let categories = self
            .limits
            .iter()
            .map(|(category, limit)| {
                let occupancy = Occupancy {
                    in_use: self.in_use(category),
                    limit,
                };
                (category, occupancy)
            })
            .collect();

        AdmissionStats {
            accepted: self.accepted,
            rejected: self.rejected,
            invalid: self.invalid,
            completed: self.completed,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_set() -> ActiveSet {
        ActiveSet::new(CapacityLimits::default())
    }

    fn admit(set: &mut ActiveSet, customer: u64, category: Category) -> Result<ActiveOrder, OrderError> {
        set.try_admit(CustomerNumber(customer), category, Instant::now())
    }

    #[test]
    fn third_beer_is_rejected_until_one_completes() {
        let mut set = reference_set();
        let first = admit(&mut set, 1, Category::Beer).unwrap();
        admit(&mut set, 2, Category::Beer).unwrap();

        let err = admit(&mut set, 3, Category::Beer).unwrap_err();
        assert_eq!(
            err,
            OrderError::CapacityExceeded {
                category: Category::Beer,
                limit: 2
            }
        );
        assert_eq!(set.len(), 2);

        set.complete(first.id).unwrap();
        assert!(admit(&mut set, 3, Category::Beer).is_ok());
    }

    #[test]
    fn categories_have_independent_pools() {
        let mut set = reference_set();
        admit(&mut set, 1, Category::Beer).unwrap();
        admit(&mut set, 1, Category::Beer).unwrap();
        admit(&mut set, 2, Category::Drink).unwrap();
        assert!(admit(&mut set, 3, Category::Drink).unwrap_err().is_capacity_exceeded());
        assert_eq!(set.in_use(Category::Beer), 2);
        assert_eq!(set.in_use(Category::Drink), 1);
    }

    #[test]
    fn unconfigured_category_is_invalid_not_full() {
        let mut set = ActiveSet::new(CapacityLimits::empty().with(Category::Beer, 1));
        let err = admit(&mut set, 1, Category::Drink).unwrap_err();
        assert_eq!(err, OrderError::UnknownCategory("DRINK".to_string()));
        let stats = set.stats();
        assert_eq!((stats.invalid, stats.rejected), (1, 0));
        assert!(set.is_empty());
    }

    #[test]
    fn zero_limit_always_rejects() {
        let mut set = ActiveSet::new(CapacityLimits::empty().with(Category::Drink, 0));
        assert!(admit(&mut set, 1, Category::Drink).unwrap_err().is_capacity_exceeded());
    }

    #[test]
    fn duplicate_customers_are_tracked_and_removed_by_identity() {
        let mut set = reference_set();
        let a = admit(&mut set, 9, Category::Beer).unwrap();
        let b = admit(&mut set, 9, Category::Beer).unwrap();
        assert_ne!(a.id, b.id);

        set.complete(b.id).unwrap();
        assert!(set.contains(a.id));
        assert!(!set.contains(b.id));
    }

    #[test]
    fn completing_twice_removes_once() {
        let mut set = reference_set();
        let order = admit(&mut set, 1, Category::Drink).unwrap();
        assert_eq!(set.complete(order.id), Some(order.clone()));
        assert_eq!(set.complete(order.id), None);
        assert_eq!(set.stats().completed, 1);
        assert!(set.is_empty());
    }

    #[test]
    fn snapshot_lists_orders_in_admission_order() {
        let mut set = reference_set();
        admit(&mut set, 5, Category::Drink).unwrap();
        admit(&mut set, 3, Category::Beer).unwrap();
        let snapshot = set.snapshot();
        assert_eq!(
            snapshot,
            vec![
                ServedOrder {
                    customer_number: CustomerNumber(5),
                    drink_type: Category::Drink
                },
                ServedOrder {
                    customer_number: CustomerNumber(3),
                    drink_type: Category::Beer
                },
            ]
        );
    }

    #[test]
    fn stats_report_occupancy_per_category() {
        let mut set = reference_set();
        admit(&mut set, 1, Category::Beer).unwrap();
        let _ = admit(&mut set, 2, Category::Drink);
        let _ = admit(&mut set, 3, Category::Drink);

        let stats = set.stats();
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(
            stats.categories[&Category::Beer],
            Occupancy { in_use: 1, limit: 2 }
        );
        assert_eq!(
            stats.categories[&Category::Drink],
            Occupancy { in_use: 1, limit: 1 }
        );
    }

    #[derive(Debug, Clone)]
    enum Step {
        Admit(Category),
        Complete(usize),
        CompleteStale(usize),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            prop_oneof![Just(Category::Beer), Just(Category::Drink)].prop_map(Step::Admit),
            any::<usize>().prop_map(Step::Complete),
            any::<usize>().prop_map(Step::CompleteStale),
        ]
    }

    proptest! {
        #[test]
        fn limits_hold_in_every_reachable_state(
            beer in 0usize..4,
            drink in 0usize..4,
            steps in proptest::collection::vec(step(), 0..64),
        ) {
            let limits = CapacityLimits::empty()
                .with(Category::Beer, beer)
                .with(Category::Drink, drink);
            let mut set = ActiveSet::new(limits);
            let mut live: Vec<OrderId> = Vec::new();
            let mut done: Vec<OrderId> = Vec::new();

            for step in steps {
                match step {
                    Step::Admit(category) => {
                        let before = set.in_use(category);
                        match set.try_admit(CustomerNumber(0), category, Instant::now()) {
                            Ok(order) => live.push(order.id),
                            Err(_) => prop_assert_eq!(set.in_use(category), before),
                        }
                    }
                    Step::Complete(pick) if !live.is_empty() => {
                        let id = live.remove(pick % live.len());
                        prop_assert!(set.complete(id).is_some());
                        done.push(id);
                    }
                    Step::CompleteStale(pick) if !done.is_empty() => {
                        let len = set.len();
                        prop_assert!(set.complete(done[pick % done.len()]).is_none());
                        prop_assert_eq!(set.len(), len);
                    }
                    _ => {}
                }
                prop_assert!(set.in_use(Category::Beer) <= beer);
                prop_assert!(set.in_use(Category::Drink) <= drink);
                prop_assert_eq!(set.len(), live.len());
            }

            for id in live.drain(..) {
                set.complete(id);
            }
            prop_assert!(set.is_empty());
        }
    }
}
