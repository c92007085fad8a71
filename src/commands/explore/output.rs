//! Output formatting for the explore session summary.

use super::execute::ExploreSummary;
use crate::output::Outputable;

impl Outputable for ExploreSummary {
    fn to_table(&self) -> String {
        format!(
            "Session ended after {} render passes ({} failed)",
            self.renders, self.failed_renders
        )
    }
}
