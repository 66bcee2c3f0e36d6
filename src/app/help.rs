//! Usage and version text for the façade.

use super::App;
use std::collections::HashMap;

/// One usage line: flags sharing a usage string collapse into one entry.
struct FlagEntry<'a> {
    label: String,
    usage: &'a str,
    default_value: &'a str,
}

/// `-x` for names of at most two characters, `--name` otherwise.
fn flag_label(name: &str) -> String {
    if name.chars().count() > 2 {
        format!("--{}", name)
    } else {
        format!("-{}", name)
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

impl App {
    /// Version string with one leading `v` removed.
    ///
    /// With `extra`, also reports the target the binary was built for.
    pub fn version_text(&self, extra: bool) -> String {
        let version = self.version.strip_prefix('v').unwrap_or(&self.version);
        if extra {
            format!(
                "Bin Version : {}\nTarget      : {}/{}",
                version,
                std::env::consts::ARCH,
                std::env::consts::OS
            )
        } else {
            version.to_string()
        }
    }

    /// Usage text: header, description, options and commands.
    ///
    /// Option and command lines share one alignment width and are each
    /// sorted alphabetically. Hidden flags are left out.
    pub fn usage_text(&self) -> String {
        let mut width = self
            .commands
            .keys()
            .map(|c| text_width(c))
            .max()
            .unwrap_or(0);

        let mut entries: Vec<FlagEntry<'_>> = Vec::new();
        let mut by_usage: HashMap<&str, usize> = HashMap::new();
        for flag in self.registry.iter().filter(|f| !f.hidden) {
            let label = flag_label(&flag.name);
            match by_usage.get(flag.usage.as_str()) {
                Some(&index) => {
                    let entry = &mut entries[index];
                    entry.label.push_str(", ");
                    entry.label.push_str(&label);
                }
                None => {
                    by_usage.insert(flag.usage.as_str(), entries.len());
                    entries.push(FlagEntry {
                        label,
                        usage: &flag.usage,
                        default_value: &flag.default_value,
                    });
                }
            }
        }
        width = entries
            .iter()
            .map(|e| text_width(&e.label))
            .fold(width, usize::max);

        let mut flag_lines: Vec<String> = entries
            .iter()
            .map(|e| {
                let mut line = format!("{:<width$} : {}", e.label, e.usage, width = width);
                if !e.default_value.is_empty() && e.default_value != "false" {
                    line.push_str(&format!(" (default \"{}\")", e.default_value));
                }
                line
            })
            .collect();
        flag_lines.sort();

        let mut command_lines: Vec<String> = self
            .commands
            .iter()
            .map(|(name, desc)| format!("{:<width$} : {}", name, desc, width = width))
            .collect();
        command_lines.sort();

        let mut usage = format!("Usage: {} [OPTIONS] COMMAND [arg...]\n\n", self.name);
        if !self.description.is_empty() {
            usage.push_str(&self.description);
            usage.push_str("\n\n");
        }

        if !flag_lines.is_empty() {
            usage.push_str("Options:\n");
            for line in &flag_lines {
                usage.push_str(&format!("  {}\n", line));
            }
        }

        if !command_lines.is_empty() {
            usage.push_str("\nCommands:\n");
            for line in &command_lines {
                usage.push_str(&format!("  {}\n", line));
            }
        }

        usage
    }
}
