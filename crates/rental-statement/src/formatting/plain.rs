use super::StatementFormatter;
use crate::domain::StatementSnapshot;
use crate::error::Result;

/// Tab-separated plain text, one line per rental
pub struct PlainTextFormatter;

impl StatementFormatter for PlainTextFormatter {
    fn format_id(&self) -> &'static str {
        "string"
    }

    fn render(&self, snapshot: &StatementSnapshot) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("Rental Record for {}\n", snapshot.name()));
        for rental in snapshot.rentals() {
            out.push_str(&format!("{}\t{}\n", rental.title(), rental.amount()));
        }
        out.push_str(&format!("Amount owed is {}\n", snapshot.total_amount()));
        out.push_str(&format!(
            "You earned {} frequent renter points\n",
            snapshot.frequent_renter_points()
        ));

        Ok(out)
    }
}
