use astrelis_core::geometry::Pos;
use indexmap::IndexMap;

use super::element::{AdornerId, AdornerInput};
use super::panel::{AdornedGeometry, AdornerPanel, AdornerPanelId};
use super::AdornerZLayer;
use crate::error::{DesignError, DesignResult};
use crate::item::DesignItemId;

/// An adorner under the pointer.
#[derive(Debug, Clone)]
pub struct AdornerHit {
    pub panel: AdornerPanelId,
    pub adorner: AdornerId,
    pub z_layer: AdornerZLayer,
    pub input: Option<AdornerInput>,
}

/// The adorner panels displayed on a design panel.
///
/// Panels keep insertion order; draw order is by [`AdornerZLayer`], with
/// later panels on top within a layer.
#[derive(Debug, Default)]
pub struct AdornerCollection {
    panels: IndexMap<AdornerPanelId, AdornerPanel>,
}

impl AdornerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, panel: AdornerPanel) -> AdornerPanelId {
        let id = panel.id();
        tracing::debug!(panel = ?id, adorned = ?panel.adorned(), z_layer = ?panel.z_layer(), "Adding adorner panel");
        self.panels.insert(id, panel);
        id
    }

    pub fn remove(&mut self, id: AdornerPanelId) -> DesignResult<AdornerPanel> {
        self.panels
            .shift_remove(&id)
            .ok_or(DesignError::UnknownAdornerPanel(id))
    }

    /// Remove every panel adorning `item`. Returns how many were removed.
    pub fn remove_for_item(&mut self, item: DesignItemId) -> usize {
        let before = self.panels.len();
        self.panels.retain(|_, panel| panel.adorned() != item);
        before - self.panels.len()
    }

    pub fn get(&self, id: AdornerPanelId) -> Option<&AdornerPanel> {
        self.panels.get(&id)
    }

    pub fn get_mut(&mut self, id: AdornerPanelId) -> Option<&mut AdornerPanel> {
        self.panels.get_mut(&id)
    }

    pub fn contains(&self, id: AdornerPanelId) -> bool {
        self.panels.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }

    /// Panels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AdornerPanel> + '_ {
        self.panels.values()
    }

    pub fn for_item(&self, item: DesignItemId) -> impl Iterator<Item = &AdornerPanel> + '_ {
        self.panels.values().filter(move |p| p.adorned() == item)
    }

    /// Panels bottom first.
    pub fn draw_order(&self) -> Vec<&AdornerPanel> {
        let mut panels: Vec<_> = self.panels.values().collect();
        panels.sort_by_key(|p| p.z_layer());
        panels
    }

    /// Panels top first.
    pub fn hit_test_order(&self) -> Vec<&AdornerPanel> {
        let mut panels = self.draw_order();
        panels.reverse();
        panels
    }

    /// Push new geometry for `item` to every panel adorning it.
    ///
    /// Returns how many panels ran an arrange pass. Every panel is updated
    /// even if one fails; the first error is returned.
    pub fn update_item_geometry(
        &mut self,
        item: DesignItemId,
        geometry: AdornedGeometry,
    ) -> DesignResult<usize> {
        let mut arranged = 0;
        let mut first_error = None;
        for panel in self.panels.values_mut().filter(|p| p.adorned() == item) {
            match panel.update_geometry(geometry) {
                Ok(true) => arranged += 1,
                Ok(false) => {}
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(arranged),
        }
    }

    /// Every adorner under `point`, topmost first.
    pub fn hit_test(&self, point: Pos<f64>, tolerance: f64) -> Vec<AdornerHit> {
        self.hit_test_order()
            .into_iter()
            .flat_map(|panel| {
                panel.hit_test(point, tolerance).map(move |adorner| AdornerHit {
                    panel: panel.id(),
                    adorner: adorner.id(),
                    z_layer: panel.z_layer(),
                    input: adorner.input().cloned(),
                })
            })
            .collect()
    }
}
