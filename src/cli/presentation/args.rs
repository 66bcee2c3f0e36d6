//! Classification presentation for `tidycli args` and configured commands.

use crate::classify::Classified;
use crate::error::CliError;
use crate::table::Table;

/// Two-column table: command, raw args, then one row per mapped key.
pub fn format_classification_text(classified: &Classified) -> Result<String, CliError> {
    let mut table = Table::new();
    table.add_row(1, ["command", classified.command.as_str()])?;
    table.add_row(2, ["args".to_string(), classified.args.join(" ")])?;
    for (i, (key, value)) in classified.args_map.iter().enumerate() {
        table.add_row(i + 3, [key.as_str(), value.as_str()])?;
    }
    Ok(table.render())
}

pub fn format_classification_json(classified: &Classified) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(classified)?)
}
