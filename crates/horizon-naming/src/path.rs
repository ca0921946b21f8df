//! Path construction: object to `/`-separated path.

use horizon_naming_core::logging::targets;

use crate::error::{NamingError, Result};
use crate::label::SEGMENT_SEPARATOR;
use crate::naming::ObjectNaming;
use crate::tree::ObjectTree;

impl<T: ObjectTree + ?Sized> ObjectNaming<'_, T> {
    /// Compute the full path of `node`, from its root down to itself.
    ///
    /// Fails when the object or one of its ancestors has no label, or when
    /// the ancestor chain ends at an object that is not one of the tree's
    /// roots. A parentless object is not checked against the roots.
    /// Failures are logged at `error` level before being returned.
    pub fn name(&self, node: T::Node) -> Result<String> {
        self.build_path(node).inspect_err(|err| {
            tracing::error!(target: targets::NAMING, %err, "cannot name object");
        })
    }

    /// Like [`name`](Self::name), but returns an empty string on failure.
    pub fn name_or_empty(&self, node: T::Node) -> String {
        self.name(node).unwrap_or_default()
    }

    fn build_path(&self, node: T::Node) -> Result<String> {
        let mut name = self.local_label(node);
        if name.is_empty() {
            return Err(NamingError::EmptyLabel {
                object: format!("{node:?}"),
            });
        }

        let mut ancestor = self.tree.parent(node);
        while let Some(current) = ancestor {
            let parent_label = self.local_label(current);
            if parent_label.is_empty() {
                return Err(NamingError::EmptyAncestorLabel {
                    object: format!("{node:?}"),
                    name,
                    ancestor: format!("{current:?}"),
                });
            }

            name.insert(0, SEGMENT_SEPARATOR);
            name.insert_str(0, &parent_label);

            ancestor = self.tree.parent(current);
            if ancestor.is_none() && !self.tree.roots().contains(&current) {
                return Err(NamingError::DetachedRoot {
                    object: format!("{node:?}"),
                    ancestor: format!("{current:?}"),
                    partial: name,
                });
            }
        }

        tracing::trace!(target: targets::NAMING, ?node, path = %name, "named object");
        Ok(name)
    }
}
