//! TOML rental sheets: the input format of the `rental-statement` binary.
//!
//! ```toml
//! customer = "Test"
//!
//! [[rentals]]
//! title = "Gladiator"
//! days_rented = 1
//! category = "children"
//! ```

use crate::domain::{Category, Customer, RentalItem};
use crate::error::{Result, StatementError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct RentalSheet {
    pub customer: String,
    #[serde(default)]
    pub rentals: Vec<RentalEntry>,
}

/// Unvalidated rental row as written in the sheet
#[derive(Debug, Clone, Deserialize)]
pub struct RentalEntry {
    pub title: String,
    pub days_rented: i64,
    pub category: String,
}

impl RentalSheet {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| StatementError::Sheet(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StatementError::Sheet(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// Validate every row and build the customer, preserving row order.
    pub fn into_customer(self) -> Result<Customer> {
        if self.customer.trim().is_empty() {
            return Err(StatementError::invalid_argument(
                "customer name must not be blank",
            ));
        }

        let mut customer = Customer::new(self.customer);
        for entry in self.rentals {
            let category: Category = entry.category.parse()?;
            customer.add_item(RentalItem::new(entry.title, entry.days_rented, category)?);
        }

        debug!(
            customer = customer.name(),
            rentals = customer.items().len(),
            "Loaded rental sheet"
        );
        Ok(customer)
    }
}
