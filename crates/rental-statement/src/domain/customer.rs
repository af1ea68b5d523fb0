use crate::domain::rentals::RentalItem;
use crate::domain::types::{Amount, Category, PricingRules};
use serde::Serialize;
use tracing::debug;

/// Billed line of a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalLine {
    title: String,
    amount: Amount,
}

impl RentalLine {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Read-only view of a customer's bill, handed to formatters.
///
/// Only [`Customer::compute_snapshot`] builds one, so the totals always agree
/// with the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSnapshot {
    name: String,
    rentals: Vec<RentalLine>,
    total_amount: Amount,
    frequent_renter_points: u32,
}

impl StatementSnapshot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rentals(&self) -> &[RentalLine] {
        &self.rentals
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    pub fn frequent_renter_points(&self) -> u32 {
        self.frequent_renter_points
    }
}

/// A customer and the titles they rented, in billing order
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    items: Vec<RentalItem>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[RentalItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: RentalItem) {
        self.items.push(item);
    }

    pub fn with_item(mut self, item: RentalItem) -> Self {
        self.add_item(item);
        self
    }

    /// Aggregates the current items in one pass. Nothing is cached.
    pub fn compute_snapshot(&self) -> StatementSnapshot {
        let mut rentals = Vec::with_capacity(self.items.len());
        let mut total_amount = Amount::zero();
        let mut frequent_renter_points = 0u32;

        for item in &self.items {
            let amount = item.amount();
            total_amount = total_amount.add(amount);
            frequent_renter_points =
                frequent_renter_points.saturating_add(frequent_renter_points_for(item));

            rentals.push(RentalLine {
                title: item.title().to_string(),
                amount,
            });
        }

        debug!(
            customer = %self.name,
            rentals = rentals.len(),
            total_amount = %total_amount,
            frequent_renter_points,
            "Computed statement snapshot"
        );

        StatementSnapshot {
            name: self.name.clone(),
            rentals,
            total_amount,
            frequent_renter_points,
        }
    }

    pub fn total_amount(&self) -> Amount {
        self.compute_snapshot().total_amount()
    }

    pub fn frequent_renter_points(&self) -> u32 {
        self.compute_snapshot().frequent_renter_points()
    }
}

/// Points earned by one rental: always one, plus a bonus for a new release
/// kept longer than a day.
pub fn frequent_renter_points_for(item: &RentalItem) -> u32 {
    let bonus = item.category() == Category::NewRelease
        && item.days_rented() > PricingRules::NEW_RELEASE_BONUS_AFTER_DAYS;

    if bonus {
        PricingRules::BASE_POINTS + PricingRules::NEW_RELEASE_BONUS_POINTS
    } else {
        PricingRules::BASE_POINTS
    }
}
