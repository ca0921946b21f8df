//! The tree capability the naming scheme runs against.
//!
//! Naming never creates, destroys or mutates objects. It only queries the
//! live tree through [`ObjectTree`], so any toolkit can be addressed by
//! implementing this trait for its object hierarchy.

use std::borrow::Cow;
use std::fmt;

use horizon_naming_core::{ObjectId, ObjectRegistry};

/// Read-only view of a hierarchical object tree.
///
/// # Example
///
/// ```
/// use horizon_naming::ObjectTree;
/// use horizon_naming_core::{ObjectRegistry, WidgetState};
///
/// let mut registry = ObjectRegistry::new();
/// let window = registry.register_class("QMainWindow");
/// registry.init_widget_state(window, WidgetState::default()).unwrap();
///
/// assert_eq!(ObjectTree::roots(&registry), vec![window]);
/// assert_eq!(registry.type_tag(window), "QMainWindow");
/// assert_eq!(registry.visibility(window), Some(true));
/// ```
pub trait ObjectTree {
    /// Handle to a live object in the tree.
    type Node: Copy + Eq + fmt::Debug;

    /// The current top-level objects. Order is not guaranteed to be stable.
    fn roots(&self) -> Vec<Self::Node>;

    /// The parent of `node`, or `None` for parentless objects.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The children of `node`, in enumeration order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The explicit name of `node`; empty when unnamed.
    fn object_name(&self, node: Self::Node) -> Cow<'_, str>;

    /// The type tag (class name) of `node`.
    fn type_tag(&self, node: Self::Node) -> Cow<'_, str>;

    /// Whether `node` is visible on screen.
    ///
    /// `None` for objects that are not visual, where visibility has no meaning.
    fn visibility(&self, node: Self::Node) -> Option<bool>;

    /// The application object, if the tree has one.
    fn application(&self) -> Option<Self::Node>;

    /// Whether `node` is the application object.
    fn is_application(&self, node: Self::Node) -> bool {
        self.application() == Some(node)
    }

    /// All descendants of `node` in pre-order, excluding `node` itself.
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut result = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        result
    }
}

/// Roots are the top-level widgets; the type tag is the class name and
/// visibility is effective visibility. Destroyed ids read as unnamed leaves.
impl ObjectTree for ObjectRegistry {
    type Node = ObjectId;

    fn roots(&self) -> Vec<ObjectId> {
        self.top_level_widgets()
    }

    fn parent(&self, node: ObjectId) -> Option<ObjectId> {
        ObjectRegistry::parent(self, node).ok().flatten()
    }

    fn children(&self, node: ObjectId) -> Vec<ObjectId> {
        ObjectRegistry::children(self, node)
            .map(<[ObjectId]>::to_vec)
            .unwrap_or_default()
    }

    fn object_name(&self, node: ObjectId) -> Cow<'_, str> {
        Cow::Borrowed(ObjectRegistry::object_name(self, node).unwrap_or_default())
    }

    fn type_tag(&self, node: ObjectId) -> Cow<'_, str> {
        Cow::Borrowed(self.class_name(node).unwrap_or_default())
    }

    fn visibility(&self, node: ObjectId) -> Option<bool> {
        self.is_effectively_visible(node).ok().flatten()
    }

    fn application(&self) -> Option<ObjectId> {
        ObjectRegistry::application(self)
    }

    fn descendants(&self, node: ObjectId) -> Vec<ObjectId> {
        ObjectRegistry::descendants(self, node).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_naming_core::WidgetState;

    /// Minimal tree used to exercise the provided methods.
    struct Flat {
        children: Vec<Vec<usize>>,
    }

    impl ObjectTree for Flat {
        type Node = usize;

        fn roots(&self) -> Vec<usize> {
            vec![0]
        }

        fn parent(&self, node: usize) -> Option<usize> {
            self.children.iter().position(|c| c.contains(&node))
        }

        fn children(&self, node: usize) -> Vec<usize> {
            self.children[node].clone()
        }

        fn object_name(&self, _node: usize) -> Cow<'_, str> {
            Cow::Borrowed("")
        }

        fn type_tag(&self, _node: usize) -> Cow<'_, str> {
            Cow::Borrowed("Node")
        }

        fn visibility(&self, _node: usize) -> Option<bool> {
            None
        }

        fn application(&self) -> Option<usize> {
            None
        }
    }

    #[test]
    fn test_default_descendants_are_preorder() {
        let tree = Flat {
            children: vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![]],
        };
        assert_eq!(tree.descendants(0), vec![1, 2, 3, 4]);
        assert!(!tree.is_application(0));
    }

    #[test]
    fn test_registry_tree_view() {
        let mut registry = ObjectRegistry::new();
        let window = registry.register_class("QMainWindow");
        registry.init_widget_state(window, WidgetState::default()).unwrap();
        let action = registry.register_class("QAction");
        registry.set_parent(action, Some(window)).unwrap();
        registry.set_object_name(action, "open").unwrap();

        assert_eq!(ObjectTree::children(&registry, window), vec![action]);
        assert_eq!(ObjectTree::parent(&registry, action), Some(window));
        assert_eq!(ObjectTree::object_name(&registry, action), "open");
        assert_eq!(registry.visibility(action), None);
        assert_eq!(ObjectTree::descendants(&registry, window), vec![action]);
    }

    #[test]
    fn test_registry_destroyed_object_reads_empty() {
        let mut registry = ObjectRegistry::new();
        let window = registry.register_class("QMainWindow");
        registry.destroy(window).unwrap();

        assert!(ObjectTree::children(&registry, window).is_empty());
        assert_eq!(ObjectTree::object_name(&registry, window), "");
        assert_eq!(ObjectTree::parent(&registry, window), None);
    }
}
