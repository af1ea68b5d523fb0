pub mod customer;
pub mod rentals;
pub mod types;

pub use customer::{Customer, RentalLine, StatementSnapshot};
pub use rentals::RentalItem;
pub use types::{Amount, Category, PricingRules, Tariff};
