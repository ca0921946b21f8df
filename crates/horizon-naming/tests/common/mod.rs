//! Shared fixtures for naming integration tests.

#![allow(dead_code)]

use horizon_naming::{MatchLimit, NamingConfig, ObjectNaming};
use horizon_naming_core::{ObjectId, ObjectRegistry, WidgetState};

/// Install a test-writer subscriber so failures show naming logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds widget trees the way a toolkit would populate its registry.
pub struct TreeBuilder {
    pub registry: ObjectRegistry,
}

impl TreeBuilder {
    pub fn new() -> Self {
        init_tracing();
        Self {
            registry: ObjectRegistry::new(),
        }
    }

    /// A visible top-level window.
    pub fn window(&mut self, class: &'static str, name: &str) -> ObjectId {
        self.add(None, class, name, Some(WidgetState::default()))
    }

    /// A widget child of `parent`.
    pub fn widget(
        &mut self,
        parent: ObjectId,
        class: &'static str,
        name: &str,
        visible: bool,
    ) -> ObjectId {
        let state = if visible {
            WidgetState::default()
        } else {
            WidgetState::hidden()
        };
        self.add(Some(parent), class, name, Some(state))
    }

    /// A non-visual object, optionally parented.
    pub fn object(&mut self, parent: Option<ObjectId>, class: &'static str, name: &str) -> ObjectId {
        self.add(parent, class, name, None)
    }

    /// The application object.
    pub fn application(&mut self, name: &str) -> ObjectId {
        let app = self.object(None, "QApplication", name);
        self.registry.set_application(app).unwrap();
        app
    }

    fn add(
        &mut self,
        parent: Option<ObjectId>,
        class: &'static str,
        name: &str,
        state: Option<WidgetState>,
    ) -> ObjectId {
        let id = self.registry.register_class(class);
        if let Some(state) = state {
            self.registry.init_widget_state(id, state).unwrap();
        }
        if !name.is_empty() {
            self.registry.set_object_name(id, name).unwrap();
        }
        self.registry.set_parent(id, parent).unwrap();
        id
    }

    pub fn naming(&self) -> ObjectNaming<'_, ObjectRegistry> {
        ObjectNaming::with_config(&self.registry, NamingConfig::default())
    }

    pub fn naming_with_limit(&self, limit: MatchLimit) -> ObjectNaming<'_, ObjectRegistry> {
        ObjectNaming::with_config(
            &self.registry,
            NamingConfig::default().with_match_limit(limit),
        )
    }
}
