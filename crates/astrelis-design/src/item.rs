//! Identifiers for designed components and the lookup from raw hit sources.

use astrelis_core::alloc::HashMap;
use indexmap::IndexSet;

/// A component being designed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesignItemId(pub u64);

/// A raw element of the host visual tree, e.g. the source of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Maps low-level hit sources to the designed component they belong to.
pub trait DesignedElementLookup {
    /// Find the designed element for the given original event source.
    fn find_designed_element(&self, source: ElementId) -> Option<DesignItemId>;
}

/// Parent links of the host visual tree plus which elements are designed.
///
/// A template part inside a designed button (its border, its text block)
/// resolves to the button by walking parents until a designed element is
/// found.
#[derive(Debug, Clone)]
pub struct ElementTree {
    parents: HashMap<ElementId, ElementId>,
    designed: HashMap<ElementId, DesignItemId>,
    max_depth: usize,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        Self::with_max_depth(crate::config::DesignConfig::default().max_source_depth)
    }

    /// Bound the parent walk. Protects against cycles in host-provided links.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            parents: HashMap::new(),
            designed: HashMap::new(),
            max_depth,
        }
    }

    pub fn set_parent(&mut self, child: ElementId, parent: ElementId) {
        self.parents.insert(child, parent);
    }

    pub fn remove(&mut self, element: ElementId) {
        self.parents.remove(&element);
        self.designed.remove(&element);
    }

    /// Mark `element` as the root visual of a designed component.
    pub fn register_designed(&mut self, element: ElementId, item: DesignItemId) {
        self.designed.insert(element, item);
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.parents.get(&element).copied()
    }
}

impl DesignedElementLookup for ElementTree {
    fn find_designed_element(&self, source: ElementId) -> Option<DesignItemId> {
        let mut current = source;
        for _ in 0..=self.max_depth {
            if let Some(item) = self.designed.get(&current) {
                return Some(*item);
            }
            current = self.parent(current)?;
        }
        tracing::warn!(?source, max_depth = self.max_depth, "Gave up resolving designed element");
        None
    }
}

/// Selected design items, in selection order. The first is the primary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: IndexSet<DesignItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<DesignItemId> {
        self.items.first().copied()
    }

    pub fn contains(&self, item: DesignItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DesignItemId> + '_ {
        self.items.iter().copied()
    }

    /// Replace the selection with a single item.
    pub fn select_only(&mut self, item: DesignItemId) {
        self.items.clear();
        self.items.insert(item);
    }

    /// Add or remove `item`, keeping the order of the rest.
    pub fn toggle(&mut self, item: DesignItemId) {
        if !self.items.shift_remove(&item) {
            self.items.insert(item);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
