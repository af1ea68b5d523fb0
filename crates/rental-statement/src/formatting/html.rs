use super::StatementFormatter;
use crate::domain::StatementSnapshot;
use crate::error::Result;
use html_escape::encode_text;

/// HTML fragment: heading, a title/amount table and two trailer paragraphs
pub struct HtmlFormatter;

impl StatementFormatter for HtmlFormatter {
    fn format_id(&self) -> &'static str {
        "html"
    }

    fn render(&self, snapshot: &StatementSnapshot) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "<h1>Rental Record for {}</h1>\n",
            encode_text(snapshot.name())
        ));

        out.push_str("<table>\n");
        for rental in snapshot.rentals() {
            out.push_str(&format!(
                "  <tr><td>{}</td><td>{}</td></tr>\n",
                encode_text(rental.title()),
                rental.amount()
            ));
        }
        out.push_str("</table>\n");

        out.push_str(&format!(
            "<p>Amount owed is {}</p>\n",
            snapshot.total_amount()
        ));
        out.push_str(&format!(
            "<p>You earned {} frequent renter points</p>\n",
            snapshot.frequent_renter_points()
        ));

        Ok(out)
    }
}
