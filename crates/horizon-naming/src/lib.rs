//! Stable widget paths for recording and replaying UI events.
//!
//! Every object in a widget tree gets a human-readable path such as
//! `MainWindow/0QToolBar1/1QToolButton3`, built from the labels of the
//! object and its ancestors. A recorded path can later be resolved back to
//! the live object, even when the object has been shown since recording.
//!
//! - **Labels**: an object's explicit name, or `[0|1]Type<index>` when it
//!   has none (`1` visible, `0` hidden, digit omitted for non-visual objects)
//! - **Paths**: [`ObjectNaming::name`] joins labels from root to object
//! - **Resolution**: [`ObjectNaming::resolve`] walks a path back down
//! - **Diagnostics**: failed resolutions carry a report of near matches
//! - **Dumps**: [`ObjectNaming::dump_hierarchy`] lists every path in the tree
//!
//! The tree is accessed through the [`ObjectTree`] trait, implemented for
//! [`horizon_naming_core::ObjectRegistry`].
//!
//! # Example
//!
//! ```
//! use horizon_naming::{MatchLimit, NamingConfig, NamingError, ObjectNaming};
//! use horizon_naming_core::{ObjectRegistry, WidgetState};
//!
//! let mut registry = ObjectRegistry::new();
//! let window = registry.register_class("QMainWindow");
//! registry.init_widget_state(window, WidgetState::default()).unwrap();
//! registry.set_object_name(window, "MainWindow").unwrap();
//!
//! let toolbar = registry.register_class("QToolBar");
//! registry.init_widget_state(toolbar, WidgetState::hidden()).unwrap();
//! registry.set_parent(toolbar, Some(window)).unwrap();
//!
//! let config = NamingConfig::default().with_match_limit(MatchLimit::Limited(5));
//! let recorded = {
//!     let naming = ObjectNaming::with_config(&registry, config.clone());
//!     naming.name(toolbar).unwrap()
//! };
//! assert_eq!(recorded, "MainWindow/0QToolBar0");
//!
//! // The toolbar is shown before playback; the recorded path still resolves.
//! registry.set_widget_visible(toolbar, true).unwrap();
//! let naming = ObjectNaming::with_config(&registry, config);
//! assert_eq!(naming.resolve(&recorded).unwrap(), toolbar);
//!
//! match naming.resolve("MainWindow/missing") {
//!     Err(NamingError::NotFound { report, .. }) => {
//!         assert!(report.contains("Available widget: `MainWindow/1QToolBar0`"));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Shared registries
//!
//! Run a whole naming session under one read lock so the tree cannot change
//! between calls:
//!
//! ```
//! use horizon_naming::ObjectNaming;
//! use horizon_naming_core::SharedObjectRegistry;
//!
//! let shared = SharedObjectRegistry::new();
//! let paths = shared.with_read(|registry| ObjectNaming::new(registry).hierarchy());
//! assert!(paths.is_empty());
//! ```

mod config;
mod diagnostics;
mod dump;
mod error;
mod label;
mod naming;
mod path;
mod resolve;
mod tree;

pub use config::{
    parse_match_limit, MatchLimit, NamingConfig, DEFAULT_MATCH_LIMIT, MATCH_LIMIT_ENV,
};
pub use error::{NamingError, Result};
pub use label::{escape_segment, APPLICATION_SUFFIX, ESCAPED_SEPARATOR, SEGMENT_SEPARATOR};
pub use naming::ObjectNaming;
pub use tree::ObjectTree;

static_assertions::assert_impl_all!(
    ObjectNaming<'static, horizon_naming_core::ObjectRegistry>: Send, Sync
);
