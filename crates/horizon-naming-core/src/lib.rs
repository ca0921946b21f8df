//! Core object tree for Horizon Naming.
//!
//! This crate provides the object hierarchy that widget paths are computed
//! against:
//!
//! - **Object Registry**: arena-backed objects with stable [`ObjectId`]s
//! - **Ownership**: ordered parent-child relationships with cascade destroy
//! - **Widget State**: per-widget visibility, with effective visibility queries
//! - **Application Object**: an explicitly marked application singleton
//!
//! # Example
//!
//! ```
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
//! assert_eq!(registry.top_level_widgets(), vec![window]);
//! assert_eq!(registry.is_effectively_visible(toolbar).unwrap(), Some(false));
//! ```

pub mod logging;
pub mod object;

pub use object::{
    class_name_of, ObjectError, ObjectId, ObjectRegistry, ObjectResult, SharedObjectRegistry,
    WidgetState,
};
