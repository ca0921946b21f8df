//! Object tree for Horizon Naming.
//!
//! Provides the in-process object tree the naming scheme runs against:
//! - Unique object identifiers via arena-based storage
//! - Parent-child ownership with ordered children and drop cascade
//! - Object names and class names
//! - Widget visibility state
//! - An explicitly marked application object
//!
//! # Key Types
//!
//! - [`ObjectId`] - Unique stable identifier for each object
//! - [`ObjectRegistry`] - Arena managing all objects and their relationships
//! - [`SharedObjectRegistry`] - Thread-safe wrapper around [`ObjectRegistry`]
//! - [`WidgetState`] - Visibility/enabled state for widget objects

use std::any::TypeId;
use std::borrow::Cow;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are stable handles that remain valid even as the object tree changes.
    /// They become invalid when the object is destroyed.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    ///
    /// The raw value can be converted back using [`ObjectId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create an ObjectId from a raw u64 value.
    ///
    /// Note: This does not check if the ObjectId exists in the registry.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Errors that can occur during object operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// The object ID is invalid or has been destroyed.
    #[error("Invalid or destroyed object ID")]
    InvalidObjectId,
    /// Attempted to set an object as its own parent/ancestor.
    #[error("Cannot set an object as its own parent or ancestor")]
    CircularParentage,
}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Widget-specific state stored in the registry.
///
/// Only widgets carry this state; plain objects have no notion of visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the widget is visible (its own state, not considering ancestors).
    pub visible: bool,
    /// Whether the widget is enabled (its own state, not considering ancestors).
    pub enabled: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
        }
    }
}

impl WidgetState {
    /// State for a widget that has not been shown yet.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }
}

/// Internal data stored in the registry for each object.
struct ObjectData {
    /// Human-readable name for lookup; empty when unnamed.
    name: String,
    /// The type ID of the concrete Rust type, if registered from one.
    type_id: Option<TypeId>,
    /// Fully qualified type name.
    type_name: Cow<'static, str>,
    /// Type name without module path, used as the object's class.
    class_name: Cow<'static, str>,
    parent: Option<ObjectId>,
    /// Child objects in creation/stacking order.
    children: Vec<ObjectId>,
    /// Widget state (None for non-widget objects).
    widget_state: Option<WidgetState>,
}

impl ObjectData {
    fn new(
        type_id: Option<TypeId>,
        type_name: Cow<'static, str>,
        class_name: Cow<'static, str>,
    ) -> Self {
        Self {
            name: String::new(),
            type_id,
            type_name,
            class_name,
            parent: None,
            children: Vec::new(),
            widget_state: None,
        }
    }
}

/// Strip the module path from a type name, keeping any generic arguments.
///
/// `app::widgets::ToolButton<app::Icon>` becomes `ToolButton<app::Icon>`.
pub fn class_name_of(type_name: &str) -> &str {
    let head_end = type_name.find('<').unwrap_or(type_name.len());
    match type_name[..head_end].rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}

/// The central registry that manages all objects and their relationships.
///
/// Uses arena-based storage via SlotMap for stable object IDs and efficient
/// parent-child relationship management.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
    application: Option<ObjectId>,
}

impl ObjectRegistry {
    /// Create a new empty object registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            application: None,
        }
    }

    /// Register a new object of Rust type `T` and return its ID.
    ///
    /// The object's class name is the type name without its module path.
    pub fn register<T: 'static>(&mut self) -> ObjectId {
        let type_name = std::any::type_name::<T>();
        let data = ObjectData::new(
            Some(TypeId::of::<T>()),
            Cow::Borrowed(type_name),
            Cow::Borrowed(class_name_of(type_name)),
        );
        let id = self.objects.insert(data);
        tracing::trace!(target: targets::OBJECT, ?id, type_name, "registered object");
        id
    }

    /// Register a new object known only by its class name.
    ///
    /// Used for objects mirrored from another toolkit, where no Rust type exists.
    pub fn register_class(&mut self, class_name: impl Into<Cow<'static, str>>) -> ObjectId {
        let class_name = class_name.into();
        let data = ObjectData::new(None, class_name.clone(), class_name);
        let id = self.objects.insert(data);
        tracing::trace!(target: targets::OBJECT, ?id, class_name = %self.objects[id].class_name, "registered object");
        id
    }

    /// Remove an object and all its children from the registry.
    #[tracing::instrument(skip(self), target = "horizon_naming_core::object", level = "trace")]
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let descendants = self.descendants(id)?;
        tracing::trace!(target: targets::OBJECT, ?id, descendant_count = descendants.len(), "destroying object tree");

        if let Some(parent_id) = self.objects.get(id).and_then(|d| d.parent) {
            if let Some(parent_data) = self.objects.get_mut(parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        for child_id in descendants {
            self.objects.remove(child_id);
        }
        self.objects.remove(id);

        if self.application.is_some_and(|app| !self.objects.contains_key(app)) {
            self.application = None;
        }

        Ok(())
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set the parent of an object.
    ///
    /// The object is appended to the new parent's children. Passing `None`
    /// makes the object a root object.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(parent_id) = new_parent {
            if !self.objects.contains_key(parent_id) {
                return Err(ObjectError::InvalidObjectId);
            }
            if self.is_ancestor_of(id, parent_id) {
                return Err(ObjectError::CircularParentage);
            }
        }

        let old_parent = self.objects.get(id).and_then(|d| d.parent);
        if let Some(old_parent_id) = old_parent {
            if let Some(parent_data) = self.objects.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        if let Some(data) = self.objects.get_mut(id) {
            data.parent = new_parent;
        }

        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.objects.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        Ok(())
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_of(&self, potential_ancestor: ObjectId, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.objects.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of an object, in order.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the object's name. Unnamed objects return an empty string.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|d| d.name = name.into())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the Rust type ID of an object, if it was registered from a Rust type.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<Option<TypeId>> {
        self.objects
            .get(id)
            .map(|d| d.type_id)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the fully qualified type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.type_name.as_ref())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the class name of an object (type name without module path).
    pub fn class_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.class_name.as_ref())
            .ok_or(ObjectError::InvalidObjectId)
    }

    // =========================================================================
    // Widget State
    // =========================================================================

    /// Initialize widget state for an object, turning it into a widget.
    pub fn init_widget_state(&mut self, id: ObjectId, state: WidgetState) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.widget_state = Some(state);
        Ok(())
    }

    /// Get the widget state for an object.
    ///
    /// Returns `None` if the object is not a widget.
    pub fn widget_state(&self, id: ObjectId) -> ObjectResult<Option<WidgetState>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data.widget_state)
    }

    /// Check whether an object carries widget state.
    pub fn is_widget(&self, id: ObjectId) -> bool {
        self.objects
            .get(id)
            .is_some_and(|d| d.widget_state.is_some())
    }

    /// Set the visible state for a widget.
    pub fn set_widget_visible(&mut self, id: ObjectId, visible: bool) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.widget_state.get_or_insert_with(WidgetState::default).visible = visible;
        Ok(())
    }

    /// Set the enabled state for a widget.
    pub fn set_widget_enabled(&mut self, id: ObjectId, enabled: bool) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.widget_state.get_or_insert_with(WidgetState::default).enabled = enabled;
        Ok(())
    }

    /// Check if a widget is effectively visible (itself and all ancestors are visible).
    ///
    /// Returns `None` if the object doesn't have widget state.
    pub fn is_effectively_visible(&self, id: ObjectId) -> ObjectResult<Option<bool>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;

        let state = match data.widget_state {
            Some(s) => s,
            None => return Ok(None),
        };

        if !state.visible {
            return Ok(Some(false));
        }

        let mut current = data.parent;
        while let Some(current_id) = current {
            let Some(ancestor_data) = self.objects.get(current_id) else {
                break;
            };
            if ancestor_data.widget_state.is_some_and(|s| !s.visible) {
                return Ok(Some(false));
            }
            current = ancestor_data.parent;
        }

        Ok(Some(true))
    }

    // =========================================================================
    // Roots and the Application Object
    // =========================================================================

    /// Mark an object as the application object.
    pub fn set_application(&mut self, id: ObjectId) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }
        self.application = Some(id);
        Ok(())
    }

    /// Get the application object, if one is marked.
    pub fn application(&self) -> Option<ObjectId> {
        self.application
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all root objects (objects with no parent).
    ///
    /// Iteration order follows arena slots and is not stable across destroys.
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Get all top-level widgets: parentless widgets other than the application.
    pub fn top_level_widgets(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(id, data)| {
                data.parent.is_none()
                    && data.widget_state.is_some()
                    && self.application != Some(*id)
            })
            .map(|(id, _)| id)
            .collect()
    }

    // =========================================================================
    // Sibling Ordering
    // =========================================================================

    /// Get the index of an object among its siblings.
    ///
    /// Returns `None` if the object has no parent (is a root object).
    pub fn sibling_index(&self, id: ObjectId) -> ObjectResult<Option<usize>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;

        match data.parent {
            Some(parent_id) => {
                let parent_data = self
                    .objects
                    .get(parent_id)
                    .ok_or(ObjectError::InvalidObjectId)?;
                Ok(parent_data.children.iter().position(|&child| child == id))
            }
            None => Ok(None),
        }
    }

    /// Raise an object to the front, moving it to the end of its parent's children.
    pub fn raise(&mut self, id: ObjectId) -> ObjectResult<()> {
        let parent = self.parent(id)?;
        if let Some(parent_id) = parent {
            let parent_data = self
                .objects
                .get_mut(parent_id)
                .ok_or(ObjectError::InvalidObjectId)?;
            parent_data.children.retain(|&child| child != id);
            parent_data.children.push(id);
        }
        Ok(())
    }

    /// Lower an object to the back, moving it to the start of its parent's children.
    pub fn lower(&mut self, id: ObjectId) -> ObjectResult<()> {
        let parent = self.parent(id)?;
        if let Some(parent_id) = parent {
            let parent_data = self
                .objects
                .get_mut(parent_id)
                .ok_or(ObjectError::InvalidObjectId)?;
            parent_data.children.retain(|&child| child != id);
            parent_data.children.insert(0, id);
        }
        Ok(())
    }

    // =========================================================================
    // Tree Traversal
    // =========================================================================

    /// Perform a depth-first pre-order traversal starting from an object.
    ///
    /// Returns objects in the order: root, child1, grandchild1, grandchild2, child2, ...
    pub fn depth_first_preorder(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = Vec::new();
        self.depth_first_preorder_recursive(id, &mut result)?;
        Ok(result)
    }

    fn depth_first_preorder_recursive(
        &self,
        id: ObjectId,
        result: &mut Vec<ObjectId>,
    ) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        result.push(id);
        for &child_id in &data.children {
            self.depth_first_preorder_recursive(child_id, result)?;
        }
        Ok(())
    }

    /// All descendants of an object in pre-order, excluding the object itself.
    pub fn descendants(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = self.depth_first_preorder(id)?;
        result.remove(0);
        Ok(result)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`ObjectRegistry`].
///
/// Provides concurrent read access with exclusive write access via `RwLock`.
/// Multi-step queries that must observe a single tree state should run
/// inside [`with_read`](Self::with_read).
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared object registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: ObjectRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }

    /// Register a new object of Rust type `T`.
    pub fn register<T: 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Destroy an object and its children.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the children of an object (returns owned Vec for thread safety).
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_owned)
    }

    /// Set the object's name.
    pub fn set_object_name(&self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Set the visible state for a widget.
    pub fn set_widget_visible(&self, id: ObjectId, visible: bool) -> ObjectResult<()> {
        self.inner.write().set_widget_visible(id, visible)
    }

    /// Access the registry with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ObjectRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ObjectRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(ObjectRegistry: Send, Sync);
static_assertions::assert_impl_all!(SharedObjectRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct MainWindow;
    struct ToolButton;

    fn widget(registry: &mut ObjectRegistry, class: &'static str, parent: Option<ObjectId>) -> ObjectId {
        let id = registry.register_class(class);
        registry.init_widget_state(id, WidgetState::default()).unwrap();
        registry.set_parent(id, parent).unwrap();
        id
    }

    #[test]
    fn test_class_name_strips_module_path() {
        assert_eq!(class_name_of("app::widgets::ToolButton"), "ToolButton");
        assert_eq!(class_name_of("ToolButton"), "ToolButton");
        assert_eq!(
            class_name_of("app::widgets::List<app::Item>"),
            "List<app::Item>"
        );
    }

    #[test]
    fn test_register_typed_object() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<ToolButton>();
        assert!(registry.contains(id));
        assert_eq!(registry.class_name(id).unwrap(), "ToolButton");
        assert!(registry.type_name(id).unwrap().ends_with("::ToolButton"));
        assert_eq!(registry.type_id(id).unwrap(), Some(TypeId::of::<ToolButton>()));
    }

    #[test]
    fn test_register_class_object() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register_class("QToolBar");
        assert_eq!(registry.class_name(id).unwrap(), "QToolBar");
        assert_eq!(registry.type_id(id).unwrap(), None);
        assert!(!registry.is_widget(id));
    }

    #[test]
    fn test_object_name() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<MainWindow>();
        assert_eq!(registry.object_name(id).unwrap(), "");
        registry.set_object_name(id, "MainWindow").unwrap();
        assert_eq!(registry.object_name(id).unwrap(), "MainWindow");
    }

    #[test]
    fn test_parent_child_order() {
        let mut registry = ObjectRegistry::new();
        let parent = registry.register::<MainWindow>();
        let a = registry.register::<ToolButton>();
        let b = registry.register::<ToolButton>();
        registry.set_parent(a, Some(parent)).unwrap();
        registry.set_parent(b, Some(parent)).unwrap();

        assert_eq!(registry.children(parent).unwrap(), &[a, b]);
        assert_eq!(registry.parent(b).unwrap(), Some(parent));
        assert_eq!(registry.sibling_index(b).unwrap(), Some(1));
    }

    #[test]
    fn test_circular_parentage_rejected() {
        let mut registry = ObjectRegistry::new();
        let a = registry.register::<MainWindow>();
        let b = registry.register::<ToolButton>();
        registry.set_parent(b, Some(a)).unwrap();

        assert_eq!(
            registry.set_parent(a, Some(b)),
            Err(ObjectError::CircularParentage)
        );
        assert_eq!(
            registry.set_parent(a, Some(a)),
            Err(ObjectError::CircularParentage)
        );
    }

    #[test]
    fn test_cascade_destroy() {
        let mut registry = ObjectRegistry::new();
        let root = widget(&mut registry, "QMainWindow", None);
        let child = widget(&mut registry, "QToolBar", Some(root));
        let grandchild = widget(&mut registry, "QToolButton", Some(child));

        registry.destroy(child).unwrap();

        assert!(registry.contains(root));
        assert!(!registry.contains(child));
        assert!(!registry.contains(grandchild));
        assert!(registry.children(root).unwrap().is_empty());
    }

    #[test]
    fn test_effective_visibility() {
        let mut registry = ObjectRegistry::new();
        let root = widget(&mut registry, "QMainWindow", None);
        let child = widget(&mut registry, "QToolBar", Some(root));
        let plain = registry.register_class("QAction");
        registry.set_parent(plain, Some(child)).unwrap();

        assert_eq!(registry.is_effectively_visible(child).unwrap(), Some(true));
        assert_eq!(registry.is_effectively_visible(plain).unwrap(), None);

        registry.set_widget_visible(root, false).unwrap();
        assert_eq!(registry.is_effectively_visible(child).unwrap(), Some(false));
        assert_eq!(
            registry.widget_state(child).unwrap(),
            Some(WidgetState::default())
        );
    }

    #[test]
    fn test_top_level_widgets_exclude_application_and_plain_objects() {
        let mut registry = ObjectRegistry::new();
        let app = registry.register_class("QApplication");
        registry.set_application(app).unwrap();
        let window = widget(&mut registry, "QMainWindow", None);
        let _orphan = registry.register_class("QTimer");
        let _child = widget(&mut registry, "QToolBar", Some(window));

        assert_eq!(registry.top_level_widgets(), vec![window]);
        assert_eq!(registry.root_objects().count(), 3);
        assert_eq!(registry.application(), Some(app));
    }

    #[test]
    fn test_destroying_application_clears_marker() {
        let mut registry = ObjectRegistry::new();
        let app = registry.register_class("QApplication");
        registry.set_application(app).unwrap();
        registry.destroy(app).unwrap();
        assert_eq!(registry.application(), None);
    }

    #[test]
    fn test_raise_lower() {
        let mut registry = ObjectRegistry::new();
        let parent = registry.register::<MainWindow>();
        let a = registry.register::<ToolButton>();
        let b = registry.register::<ToolButton>();
        let c = registry.register::<ToolButton>();
        for id in [a, b, c] {
            registry.set_parent(id, Some(parent)).unwrap();
        }

        registry.raise(a).unwrap();
        assert_eq!(registry.children(parent).unwrap(), &[b, c, a]);

        registry.lower(c).unwrap();
        assert_eq!(registry.children(parent).unwrap(), &[c, b, a]);
    }

    #[test]
    fn test_depth_first_preorder_and_descendants() {
        let mut registry = ObjectRegistry::new();
        let root = registry.register::<MainWindow>();
        let c1 = registry.register::<ToolButton>();
        let c2 = registry.register::<ToolButton>();
        let g1 = registry.register::<ToolButton>();
        registry.set_parent(c1, Some(root)).unwrap();
        registry.set_parent(c2, Some(root)).unwrap();
        registry.set_parent(g1, Some(c1)).unwrap();

        assert_eq!(registry.depth_first_preorder(root).unwrap(), vec![root, c1, g1, c2]);
        assert_eq!(registry.descendants(root).unwrap(), vec![c1, g1, c2]);
    }

    #[test]
    fn test_raw_id_roundtrip() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<MainWindow>();
        assert_eq!(ObjectId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_shared_registry() {
        let shared = SharedObjectRegistry::new();
        let parent = shared.register::<MainWindow>();
        let child = shared.register::<ToolButton>();
        shared.set_parent(child, Some(parent)).unwrap();
        shared.set_object_name(child, "ok").unwrap();
        shared.set_widget_visible(child, false).unwrap();

        assert_eq!(shared.children(parent).unwrap(), vec![child]);
        assert_eq!(shared.object_name(child).unwrap(), "ok");
        assert!(shared.with_read(|r| r.is_widget(child)));

        shared.destroy(parent).unwrap();
        assert!(!shared.contains(child));
    }
}
