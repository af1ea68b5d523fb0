pub mod config;
pub mod domain;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod sheet;

pub use config::StatementConfig;
pub use domain::{Amount, Category, Customer, RentalItem, RentalLine, StatementSnapshot};
pub use error::{Result, StatementError};
pub use formatting::{resolve_formatter, StatementFormat, StatementFormatter};
pub use sheet::RentalSheet;
