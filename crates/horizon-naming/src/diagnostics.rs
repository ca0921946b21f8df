//! Diagnostic reports for paths that could not be resolved.
//!
//! A report looks like this:
//!
//! ```text
//!
//! Couldn't find object  `MainWindow/0QToolBar1/1QToolButton3`
//! Found up to           `MainWindow`
//!     Possible match:   `MainWindow/1QToolBar1/1QToolButton3`
//! ```
//!
//! Candidates are the descendants of the deepest matched object whose label
//! equals the last segment of the path. When there are none, every
//! descendant is listed as an available widget instead. Either list is capped
//! by the configured [`MatchLimit`](crate::MatchLimit).

use std::fmt::Write as FmtWrite;

use crate::config::{MatchLimit, MATCH_LIMIT_ENV};
use crate::naming::ObjectNaming;
use crate::tree::ObjectTree;

const POSSIBLE_MATCH: &str = "Possible match:";
const AVAILABLE_WIDGET: &str = "Available widget:";

impl<T: ObjectTree + ?Sized> ObjectNaming<'_, T> {
    /// Build the report for a failed resolution of `path`.
    ///
    /// `last_matched` is the deepest object the path matched, if any.
    pub(crate) fn error_report(
        &self,
        path: &str,
        last_segment: &str,
        last_matched: Option<T::Node>,
    ) -> String {
        let mut report = String::new();
        report.push('\n');
        writeln!(report, "Couldn't find object  `{path}`").expect("write to String");

        let Some(last_matched) = last_matched else {
            return report;
        };

        writeln!(
            report,
            "Found up to           `{}`",
            self.name_or_empty(last_matched)
        )
        .expect("write to String");

        let descendants = self.tree.descendants(last_matched);
        let matches: Vec<T::Node> = descendants
            .iter()
            .copied()
            .filter(|&node| self.local_label(node) == last_segment)
            .collect();

        let limit = self.config.match_limit;
        if matches.is_empty() {
            self.write_candidates(&mut report, AVAILABLE_WIDGET, &descendants, limit);
        } else {
            self.write_candidates(&mut report, POSSIBLE_MATCH, &matches, limit);
        }

        report
    }

    fn write_candidates(
        &self,
        report: &mut String,
        heading: &str,
        candidates: &[T::Node],
        limit: MatchLimit,
    ) {
        for &candidate in &candidates[..limit.listed(candidates.len())] {
            writeln!(
                report,
                "    {heading:<18}`{}`",
                self.name_or_empty(candidate)
            )
            .expect("write to String");
        }

        if let Some(omitted) = limit.omitted(candidates.len()) {
            writeln!(report, "    {heading} .... (and {omitted} more!)").expect("write to String");
            writeln!(
                report,
                "    Set {MATCH_LIMIT_ENV} environment var to a +'ve number to limit entries (or 0 for unlimited)."
            )
            .expect("write to String");
        }
    }
}
