//! Path resolution: `/`-separated path back to a live object.
//!
//! Each segment is matched against the children of the object matched so
//! far, accepting either a child's local label or its synthesized label.
//! When nothing matches a segment that starts with `0`, the segment is
//! retried with `1` in its place: the object was hidden when the path was
//! recorded and has been shown since.

use horizon_naming_core::logging::targets;

use crate::error::{NamingError, Result};
use crate::label::SEGMENT_SEPARATOR;
use crate::naming::ObjectNaming;
use crate::tree::ObjectTree;

/// The segment an object hidden at recording time carries once it is visible.
fn shown_segment(segment: &str) -> Option<String> {
    segment.strip_prefix('0').map(|rest| format!("1{rest}"))
}

impl<T: ObjectTree + ?Sized> ObjectNaming<'_, T> {
    /// Resolve `path` to the object it names.
    ///
    /// On failure the error carries a diagnostic report listing how far the
    /// path matched and which objects could have been meant. The report is
    /// also kept for [`last_error_message`](Self::last_error_message).
    /// An empty path fails with [`NamingError::EmptyPath`] and leaves the
    /// last report untouched.
    #[tracing::instrument(skip(self), target = "horizon_naming::resolve", level = "trace")]
    pub fn resolve(&self, path: &str) -> Result<T::Node> {
        if path.is_empty() {
            return Err(NamingError::EmptyPath);
        }

        if let Some(app) = self.tree.application() {
            if self.local_label(app) == path {
                return Ok(app);
            }
        }

        let segments: Vec<&str> = path.split(SEGMENT_SEPARATOR).collect();

        let mut current = self.find_labelled(&self.tree.roots(), segments[0]);
        let mut last_matched = current;

        for segment in &segments[1..] {
            let children = current
                .map(|node| self.tree.children(node))
                .unwrap_or_default();
            current = self.match_segment(&children, segment);
            if current.is_some() {
                last_matched = current;
            }
        }

        if let Some(node) = current {
            return Ok(node);
        }

        let last_segment = segments[segments.len() - 1];
        let report = self.error_report(path, last_segment, last_matched);
        self.set_last_error(&report);
        tracing::debug!(target: targets::RESOLVE, path, ?last_matched, "could not resolve object path");

        Err(NamingError::NotFound {
            path: path.to_owned(),
            report,
        })
    }

    /// Like [`resolve`](Self::resolve), but discards the error.
    ///
    /// The diagnostic report is still available from
    /// [`last_error_message`](Self::last_error_message).
    pub fn resolve_or_none(&self, path: &str) -> Option<T::Node> {
        self.resolve(path).ok()
    }

    /// Match one segment against `children`, retrying once as shown.
    fn match_segment(&self, children: &[T::Node], segment: &str) -> Option<T::Node> {
        self.find_labelled(children, segment).or_else(|| {
            shown_segment(segment).and_then(|shown| self.find_labelled(children, &shown))
        })
    }

    /// The first candidate whose local or synthesized label is `label`.
    fn find_labelled(&self, candidates: &[T::Node], label: &str) -> Option<T::Node> {
        candidates.iter().copied().find(|&candidate| {
            self.local_label(candidate) == label || self.synthesized_label(candidate) == label
        })
    }
}
