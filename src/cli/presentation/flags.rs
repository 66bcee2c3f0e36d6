//! Flag registry presentation for `tidycli flags`.

use crate::error::CliError;
use crate::flags::FlagRegistry;
use crate::table::Table;

/// Header row then one row per visible flag, in name order.
pub fn format_flags_text(registry: &FlagRegistry) -> Result<String, CliError> {
    let mut table = Table::new();
    table.add_row(1, ["NAME", "VALUE", "DEFAULT", "USAGE"])?;
    let visible = registry.iter().filter(|f| !f.hidden);
    for (i, flag) in visible.enumerate() {
        table.add_row(
            i + 2,
            [
                flag.name.as_str(),
                flag.value.as_str(),
                flag.default_value.as_str(),
                flag.usage.as_str(),
            ],
        )?;
    }
    Ok(table.render())
}
