use crate::domain::types::{Amount, Category};
use crate::error::{Result, StatementError};
use tracing::warn;

/// One rented title. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalItem {
    title: String,
    days_rented: u32,
    category: Category,
}

impl RentalItem {
    /// Fails with `InvalidArgument` when `days_rented` is negative or out of range.
    pub fn new(title: impl Into<String>, days_rented: i64, category: Category) -> Result<Self> {
        let title = title.into();

        if days_rented < 0 {
            warn!(title = %title, days_rented, "Rejected rental with negative days");
            return Err(StatementError::invalid_argument(format!(
                "days rented for '{}' must not be negative, got {}",
                title, days_rented
            )));
        }

        let days_rented = u32::try_from(days_rented).map_err(|_| {
            StatementError::invalid_argument(format!(
                "days rented for '{}' is out of range: {}",
                title, days_rented
            ))
        })?;

        Ok(Self {
            title,
            days_rented,
            category,
        })
    }

    pub fn regular(title: impl Into<String>, days_rented: i64) -> Result<Self> {
        Self::new(title, days_rented, Category::Regular)
    }

    pub fn children(title: impl Into<String>, days_rented: i64) -> Result<Self> {
        Self::new(title, days_rented, Category::Children)
    }

    pub fn new_release(title: impl Into<String>, days_rented: i64) -> Result<Self> {
        Self::new(title, days_rented, Category::NewRelease)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.category.tariff().price(self.days_rented)
    }
}
