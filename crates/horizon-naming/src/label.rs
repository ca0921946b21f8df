//! Local labels: the single path segment naming one object.
//!
//! An object with an explicit name is labelled by that name. An unnamed
//! object gets a synthesized label built from its visibility, its type tag
//! and its index among comparable siblings, e.g. `1QToolButton3`.

use crate::naming::ObjectNaming;
use crate::tree::ObjectTree;

/// Separator between path segments.
pub const SEGMENT_SEPARATOR: char = '/';

/// Stand-in for separators occurring inside a label.
pub const ESCAPED_SEPARATOR: char = '|';

/// Suffix marking the application object's label.
pub const APPLICATION_SUFFIX: &str = "-app";

/// Replace path separators in a label so it stays a single segment.
pub fn escape_segment(label: &str) -> String {
    label.replace(SEGMENT_SEPARATOR, &ESCAPED_SEPARATOR.to_string())
}

impl<T: ObjectTree + ?Sized> ObjectNaming<'_, T> {
    /// Label `node` as if it had no explicit name.
    ///
    /// Siblings are the parent's children, or the roots for parentless
    /// objects. Only siblings that precede `node`, share its type tag and
    /// are themselves unnamed are counted, separately for visible and
    /// not-visible ones; non-visual siblings count as not visible.
    ///
    /// Root order is not stable, so labels of unnamed roots are best effort.
    pub fn synthesized_label(&self, node: T::Node) -> String {
        let tree = self.tree;
        let siblings = match tree.parent(node) {
            Some(parent) => tree.children(parent),
            None => tree.roots(),
        };
        let type_tag = tree.type_tag(node);

        let mut visible_index = 0usize;
        let mut invisible_index = 0usize;
        for sibling in siblings {
            if sibling == node {
                break;
            }
            if tree.type_tag(sibling) == type_tag && tree.object_name(sibling).is_empty() {
                if tree.visibility(sibling) == Some(true) {
                    visible_index += 1;
                } else {
                    invisible_index += 1;
                }
            }
        }

        let label = match tree.visibility(node) {
            Some(true) => format!("1{type_tag}{visible_index}"),
            Some(false) => format!("0{type_tag}{invisible_index}"),
            None => format!("{type_tag}{invisible_index}"),
        };
        escape_segment(&label)
    }

    /// The label of `node` within its parent: its explicit name if it has
    /// one, otherwise its synthesized label.
    ///
    /// The application object's label carries an `-app` suffix so it cannot
    /// collide with an ordinary object of the same name.
    pub fn local_label(&self, node: T::Node) -> String {
        let name = self.tree.object_name(node);
        let mut label = if name.is_empty() {
            self.synthesized_label(node)
        } else {
            name.into_owned()
        };

        if self.tree.is_application(node) {
            label.push_str(APPLICATION_SUFFIX);
        }

        escape_segment(&label)
    }
}
