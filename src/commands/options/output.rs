//! Output formatting for options command results.

use crate::output::Outputable;
use crate::types::OptionsResult;

fn push_section(lines: &mut Vec<String>, label: &str, values: &[String]) {
    lines.push(format!("{} ({}):", label, values.len()));
    for value in values {
        lines.push(format!("  {}", value));
    }
}

impl Outputable for OptionsResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Options: {}", self.pipeline.title()));
        lines.push(String::new());

        if self.pipeline.has_role_controls() {
            push_section(&mut lines, "Producers", &self.producers);
            push_section(&mut lines, "Consumers", &self.consumers);
        }
        push_section(&mut lines, "Function category", &self.function_categories);

        lines.join("\n")
    }
}
