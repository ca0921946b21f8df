//! The naming context tying a tree to its configuration.

use parking_lot::Mutex;

use crate::config::NamingConfig;
use crate::tree::ObjectTree;

/// Names objects of a tree by path and resolves paths back to objects.
///
/// A context borrows the tree for its whole lifetime, so the tree cannot
/// change while a name is computed or a path is resolved. Build a fresh
/// context whenever the tree may have changed.
///
/// # Example
///
/// ```
/// use horizon_naming::ObjectNaming;
/// use horizon_naming_core::{ObjectRegistry, WidgetState};
///
/// let mut registry = ObjectRegistry::new();
/// let window = registry.register_class("QMainWindow");
/// registry.init_widget_state(window, WidgetState::default()).unwrap();
/// registry.set_object_name(window, "MainWindow").unwrap();
/// let button = registry.register_class("QToolButton");
/// registry.init_widget_state(button, WidgetState::default()).unwrap();
/// registry.set_parent(button, Some(window)).unwrap();
///
/// let naming = ObjectNaming::new(&registry);
/// let path = naming.name(button).unwrap();
/// assert_eq!(path, "MainWindow/1QToolButton0");
/// assert_eq!(naming.resolve(&path).unwrap(), button);
/// ```
pub struct ObjectNaming<'t, T: ObjectTree + ?Sized> {
    pub(crate) tree: &'t T,
    pub(crate) config: NamingConfig,
    last_error: Mutex<String>,
}

impl<'t, T: ObjectTree + ?Sized> ObjectNaming<'t, T> {
    /// Create a naming context configured from the environment.
    pub fn new(tree: &'t T) -> Self {
        Self::with_config(tree, NamingConfig::from_env())
    }

    /// Create a naming context with explicit configuration.
    pub fn with_config(tree: &'t T, config: NamingConfig) -> Self {
        Self {
            tree,
            config,
            last_error: Mutex::new(String::new()),
        }
    }

    /// The tree this context names.
    pub fn tree(&self) -> &'t T {
        self.tree
    }

    /// The configuration of this context.
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Diagnostic report of the most recent failed [`resolve`](Self::resolve).
    ///
    /// Empty until a resolution fails. Each failure overwrites the previous
    /// report; successful resolutions leave it untouched.
    pub fn last_error_message(&self) -> String {
        self.last_error.lock().clone()
    }

    pub(crate) fn set_last_error(&self, report: &str) {
        let mut slot = self.last_error.lock();
        slot.clear();
        slot.push_str(report);
    }
}
