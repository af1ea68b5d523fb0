use super::StatementFormatter;
use crate::domain::StatementSnapshot;
use crate::error::Result;

/// Pretty-printed JSON of the snapshot. Amounts are decimal strings.
pub struct JsonFormatter;

impl StatementFormatter for JsonFormatter {
    fn format_id(&self) -> &'static str {
        "json"
    }

    fn render(&self, snapshot: &StatementSnapshot) -> Result<String> {
        let mut out = serde_json::to_string_pretty(snapshot)?;
        out.push('\n');
        Ok(out)
    }
}
