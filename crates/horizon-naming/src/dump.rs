//! Hierarchy dumps: the path of every object in the tree.

use crate::naming::ObjectNaming;
use crate::tree::ObjectTree;

impl<T: ObjectTree + ?Sized> ObjectNaming<'_, T> {
    /// Append the path of every object under every root to `results`.
    ///
    /// Objects are visited in pre-order. Objects that cannot be named
    /// contribute an empty string.
    pub fn dump_hierarchy(&self, results: &mut Vec<String>) {
        for root in self.tree.roots() {
            self.dump_subtree(root, results);
        }
    }

    /// Append the path of `node` and of each of its descendants to `results`.
    pub fn dump_subtree(&self, node: T::Node, results: &mut Vec<String>) {
        results.push(self.name_or_empty(node));
        for child in self.tree.children(node) {
            self.dump_subtree(child, results);
        }
    }

    /// The paths of every object in the tree, in pre-order.
    pub fn hierarchy(&self) -> Vec<String> {
        let mut results = Vec::new();
        self.dump_hierarchy(&mut results);
        results
    }
}
