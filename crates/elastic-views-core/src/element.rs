//! Element model for Elastic Views.
//!
//! Elements are the visual nodes an animation can target: buttons, image
//! views, floating action buttons and the groups that contain them. The host
//! UI owns them; everything else refers to them through an [`ElementId`].
//!
//! # Key Types
//!
//! - [`ElementId`] - Generational handle to an element
//! - [`ElementRegistry`] - Arena holding element data and the parent/child tree
//! - [`SharedElementRegistry`] - Cloneable, lock-protected handle to a registry
//! - [`Scale`] - The scale transform animated by the elastic animator
//!
//! A destroyed element's id stays invalid forever; a new element never reuses
//! the same key, so a stale handle can be detected with [`ElementRegistry::contains`].

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for an element in the registry.
    ///
    /// Element ids are non-owning: holding one does not keep the element alive.
    pub struct ElementId;
}

impl ElementId {
    /// Convert the ElementId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Errors that can occur during element operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// The element ID is invalid or has been destroyed.
    #[error("Invalid or destroyed element ID")]
    InvalidElementId,
    /// Attempted to make an element its own ancestor.
    #[error("Cannot set an element as its own parent or ancestor")]
    CircularParentage,
}

/// Result type for element operations.
pub type ElementResult<T> = std::result::Result<T, ElementError>;

/// The kind of visual an element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// A push button.
    #[default]
    Button,
    /// A checkable button.
    CheckButton,
    /// An image view.
    Image,
    /// A floating action button.
    FloatingActionButton,
    /// A text view.
    Text,
    /// A container laying out child elements.
    Group,
}

/// A 2D scale transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Horizontal scale factor.
    pub x: f32,
    /// Vertical scale factor.
    pub y: f32,
}

impl Scale {
    /// The identity scale (1.0, 1.0).
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    /// Create a new scale.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a uniform scale.
    #[inline]
    pub const fn uniform(factor: f32) -> Self {
        Self {
            x: factor,
            y: factor,
        }
    }

    /// Interpolate toward `target` by `fraction`.
    ///
    /// `fraction` is not clamped: elastic curves push it past 1.0 to overshoot.
    #[inline]
    pub fn lerp(self, target: Scale, fraction: f32) -> Scale {
        Scale {
            x: self.x + (target.x - self.x) * fraction,
            y: self.y + (target.y - self.y) * fraction,
        }
    }

    /// Returns `true` if both factors are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `true` if this is exactly the identity scale.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Internal data stored in the registry for each element.
#[derive(Debug)]
struct ElementData {
    name: String,
    kind: ElementKind,
    scale: Scale,
    alpha: f32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl ElementData {
    fn new(name: String, kind: ElementKind) -> Self {
        Self {
            name,
            kind,
            scale: Scale::IDENTITY,
            alpha: 1.0,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The arena that owns all elements and their relationships.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: SlotMap<ElementId, ElementData>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    /// Create a root element.
    pub fn create(&mut self, name: impl Into<String>, kind: ElementKind) -> ElementId {
        let name = name.into();
        let id = self.elements.insert(ElementData::new(name, kind));
        tracing::trace!(target: targets::ELEMENT, ?id, ?kind, "created element");
        id
    }

    /// Create an element as the last child of `parent`.
    pub fn create_child(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        kind: ElementKind,
    ) -> ElementResult<ElementId> {
        if !self.elements.contains_key(parent) {
            return Err(ElementError::InvalidElementId);
        }
        let id = self.create(name, kind);
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Remove an element and all of its descendants.
    #[tracing::instrument(skip(self), target = "elastic_views_core::element", level = "trace")]
    pub fn destroy(&mut self, id: ElementId) -> ElementResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::debug!(target: targets::ELEMENT, ?id, descendant_count = descendants.len(), "destroying element tree");

        if let Some(parent_id) = self.elements.get(id).and_then(|data| data.parent) {
            if let Some(parent) = self.elements.get_mut(parent_id) {
                parent.children.retain(|&child| child != id);
            }
        }

        for child_id in descendants {
            self.elements.remove(child_id);
        }
        self.elements.remove(id);
        Ok(())
    }

    /// Collect all descendant ids, children before their parents.
    fn collect_descendants(&self, id: ElementId) -> ElementResult<Vec<ElementId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ElementId,
        result: &mut Vec<ElementId>,
    ) -> ElementResult<()> {
        let data = self.elements.get(id).ok_or(ElementError::InvalidElementId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check whether an element is still live.
    #[inline]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the registry holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn get(&self, id: ElementId) -> ElementResult<&ElementData> {
        self.elements.get(id).ok_or(ElementError::InvalidElementId)
    }

    fn get_mut(&mut self, id: ElementId) -> ElementResult<&mut ElementData> {
        self.elements.get_mut(id).ok_or(ElementError::InvalidElementId)
    }

    /// Get the element's name.
    pub fn name(&self, id: ElementId) -> ElementResult<&str> {
        self.get(id).map(|data| data.name.as_str())
    }

    /// Get the element's kind.
    pub fn kind(&self, id: ElementId) -> ElementResult<ElementKind> {
        self.get(id).map(|data| data.kind)
    }

    /// Get the element's current scale.
    pub fn scale(&self, id: ElementId) -> ElementResult<Scale> {
        self.get(id).map(|data| data.scale)
    }

    /// Set the element's scale.
    pub fn set_scale(&mut self, id: ElementId, scale: Scale) -> ElementResult<()> {
        self.get_mut(id)?.scale = scale;
        Ok(())
    }

    /// Get the element's opacity.
    pub fn alpha(&self, id: ElementId) -> ElementResult<f32> {
        self.get(id).map(|data| data.alpha)
    }

    /// Set the element's opacity, clamped to `[0.0, 1.0]`.
    pub fn set_alpha(&mut self, id: ElementId, alpha: f32) -> ElementResult<()> {
        self.get_mut(id)?.alpha = alpha.clamp(0.0, 1.0);
        Ok(())
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> ElementResult<Option<ElementId>> {
        self.get(id).map(|data| data.parent)
    }

    /// Get the children of an element.
    pub fn children(&self, id: ElementId) -> ElementResult<&[ElementId]> {
        self.get(id).map(|data| data.children.as_slice())
    }

    /// Re-parent an element. `None` makes it a root.
    pub fn set_parent(&mut self, id: ElementId, parent: Option<ElementId>) -> ElementResult<()> {
        if !self.contains(id) {
            return Err(ElementError::InvalidElementId);
        }
        if let Some(new_parent) = parent {
            if !self.contains(new_parent) {
                return Err(ElementError::InvalidElementId);
            }
            if self.is_ancestor_or_self(id, new_parent) {
                return Err(ElementError::CircularParentage);
            }
        }

        if let Some(old_parent) = self.get(id)?.parent {
            if let Some(data) = self.elements.get_mut(old_parent) {
                data.children.retain(|&child| child != id);
            }
        }
        if let Some(new_parent) = parent {
            self.get_mut(new_parent)?.children.push(id);
        }
        self.get_mut(id)?.parent = parent;
        Ok(())
    }

    /// Returns `true` if `ancestor` is `id` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.elements.get(id).and_then(|data| data.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Find the first element with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, data)| data.name == name)
            .map(|(id, _)| id)
    }

    /// All elements without a parent.
    pub fn roots(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }
}

/// Cloneable handle to a lock-protected [`ElementRegistry`].
///
/// The animator, widgets and the host all hold clones of the same handle.
#[derive(Debug, Clone, Default)]
pub struct SharedElementRegistry {
    inner: Arc<RwLock<ElementRegistry>>,
}

impl SharedElementRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root element.
    pub fn create(&self, name: impl Into<String>, kind: ElementKind) -> ElementId {
        self.inner.write().create(name, kind)
    }

    /// Create an element as a child of `parent`.
    pub fn create_child(
        &self,
        parent: ElementId,
        name: impl Into<String>,
        kind: ElementKind,
    ) -> ElementResult<ElementId> {
        self.inner.write().create_child(parent, name, kind)
    }

    /// Destroy an element and its descendants.
    pub fn destroy(&self, id: ElementId) -> ElementResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an element is live.
    pub fn contains(&self, id: ElementId) -> bool {
        self.inner.read().contains(id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no elements are live.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get the element's name (owned for lock safety).
    pub fn name(&self, id: ElementId) -> ElementResult<String> {
        self.inner.read().name(id).map(str::to_owned)
    }

    /// Get the element's kind.
    pub fn kind(&self, id: ElementId) -> ElementResult<ElementKind> {
        self.inner.read().kind(id)
    }

    /// Get the element's scale.
    pub fn scale(&self, id: ElementId) -> ElementResult<Scale> {
        self.inner.read().scale(id)
    }

    /// Set the element's scale.
    pub fn set_scale(&self, id: ElementId, scale: Scale) -> ElementResult<()> {
        self.inner.write().set_scale(id, scale)
    }

    /// Get the element's opacity.
    pub fn alpha(&self, id: ElementId) -> ElementResult<f32> {
        self.inner.read().alpha(id)
    }

    /// Set the element's opacity.
    pub fn set_alpha(&self, id: ElementId, alpha: f32) -> ElementResult<()> {
        self.inner.write().set_alpha(id, alpha)
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> ElementResult<Option<ElementId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an element (owned for lock safety).
    pub fn children(&self, id: ElementId) -> ElementResult<Vec<ElementId>> {
        self.inner.read().children(id).map(<[ElementId]>::to_vec)
    }

    /// Re-parent an element.
    pub fn set_parent(&self, id: ElementId, parent: Option<ElementId>) -> ElementResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Find an element by name.
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        self.inner.read().find_by_name(name)
    }

    /// All root elements.
    pub fn roots(&self) -> Vec<ElementId> {
        self.inner.read().roots()
    }

    /// Run a closure with read access to the registry.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ElementRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Run a closure with write access to the registry.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ElementRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

static_assertions::assert_impl_all!(SharedElementRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let mut registry = ElementRegistry::new();
        let id = registry.create("button", ElementKind::Button);

        assert!(registry.contains(id));
        assert_eq!(registry.name(id).unwrap(), "button");
        assert_eq!(registry.scale(id).unwrap(), Scale::IDENTITY);
        assert_eq!(registry.alpha(id).unwrap(), 1.0);
        assert_eq!(registry.parent(id).unwrap(), None);
    }

    #[test]
    fn test_destroy_cascades() {
        let mut registry = ElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let child = registry.create_child(group, "child", ElementKind::Text).unwrap();
        let grandchild = registry
            .create_child(child, "grandchild", ElementKind::Image)
            .unwrap();

        registry.destroy(group).unwrap();

        assert!(!registry.contains(group));
        assert!(!registry.contains(child));
        assert!(!registry.contains(grandchild));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_destroy_detaches_from_parent() {
        let mut registry = ElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let a = registry.create_child(group, "a", ElementKind::Button).unwrap();
        let b = registry.create_child(group, "b", ElementKind::Button).unwrap();

        registry.destroy(a).unwrap();
        assert_eq!(registry.children(group).unwrap(), &[b]);
    }

    #[test]
    fn test_stale_id_is_not_reused() {
        let mut registry = ElementRegistry::new();
        let old = registry.create("old", ElementKind::Button);
        registry.destroy(old).unwrap();
        let new = registry.create("new", ElementKind::Button);

        assert_ne!(old, new);
        assert!(!registry.contains(old));
        assert_eq!(registry.scale(old), Err(ElementError::InvalidElementId));
    }

    #[test]
    fn test_circular_parentage_rejected() {
        let mut registry = ElementRegistry::new();
        let a = registry.create("a", ElementKind::Group);
        let b = registry.create_child(a, "b", ElementKind::Group).unwrap();

        assert_eq!(
            registry.set_parent(a, Some(b)),
            Err(ElementError::CircularParentage)
        );
        assert_eq!(
            registry.set_parent(a, Some(a)),
            Err(ElementError::CircularParentage)
        );
    }

    #[test]
    fn test_alpha_is_clamped() {
        let mut registry = ElementRegistry::new();
        let id = registry.create("fab", ElementKind::FloatingActionButton);
        registry.set_alpha(id, 1.5).unwrap();
        assert_eq!(registry.alpha(id).unwrap(), 1.0);
        registry.set_alpha(id, -0.5).unwrap();
        assert_eq!(registry.alpha(id).unwrap(), 0.0);
    }

    #[test]
    fn test_scale_lerp_overshoots_past_one() {
        let from = Scale::IDENTITY;
        let to = Scale::uniform(0.5);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert!((from.lerp(to, 1.2).x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_shared_registry_find_by_name() {
        let shared = SharedElementRegistry::new();
        let id = shared.create("example2_fab", ElementKind::FloatingActionButton);
        assert_eq!(shared.find_by_name("example2_fab"), Some(id));
        assert_eq!(shared.find_by_name("missing"), None);
        assert_eq!(shared.roots(), vec![id]);
    }
}
