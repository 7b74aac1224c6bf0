use std::sync::atomic::{AtomicU64, Ordering};

use astrelis_core::geometry::{Pos, Rect, Size};
use astrelis_core::math::{self, DAffine2, DVec2};

use super::element::{Adorner, AdornerId};
use super::{AdornerZLayer, PlacementSpace};
use crate::error::{DesignError, DesignResult};
use crate::item::DesignItemId;

/// Global counter for generating unique adorner panel IDs.
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an adorner panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdornerPanelId(pub u64);

impl AdornerPanelId {
    /// Generate a new unique panel ID.
    pub fn new() -> Self {
        Self(PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AdornerPanelId {
    fn default() -> Self {
        Self::new()
    }
}

/// Size and transforms of the adorned element, as reported by the host.
///
/// Points in the element's own space map to designer space through
/// `render_transform`, then `layout_transform`, then `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdornedGeometry {
    pub size: Size<f64>,
    /// Position of the element's layout slot in designer space.
    pub offset: Pos<f64>,
    pub layout_transform: DAffine2,
    pub render_transform: DAffine2,
}

impl AdornedGeometry {
    pub fn new(size: Size<f64>) -> Self {
        Self {
            size,
            offset: Pos::ORIGIN,
            layout_transform: DAffine2::IDENTITY,
            render_transform: DAffine2::IDENTITY,
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Pos::new(x, y);
        self
    }

    pub fn with_layout_transform(mut self, transform: DAffine2) -> Self {
        self.layout_transform = transform;
        self
    }

    pub fn with_render_transform(mut self, transform: DAffine2) -> Self {
        self.render_transform = transform;
        self
    }

    /// Adorned size and panel-to-designer transform for `space`.
    pub fn frame(&self, space: PlacementSpace) -> (Size<f64>, DAffine2) {
        let offset = DAffine2::from_translation(self.offset.to_vec2());
        match space {
            PlacementSpace::Render => (
                self.size,
                offset * self.layout_transform * self.render_transform,
            ),
            PlacementSpace::Layout => (self.size, offset * self.layout_transform),
            PlacementSpace::Designer => {
                let transformed = offset * self.layout_transform * self.render_transform;
                let bounds = Rect::from_size(self.size).transformed_bounds(&transformed);
                (
                    bounds.size(),
                    DAffine2::from_translation(DVec2::new(bounds.x, bounds.y)),
                )
            }
        }
    }
}

/// Copyable description of a panel, handed to [`Placement`](super::Placement)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdornerPanelInfo {
    pub id: AdornerPanelId,
    pub adorned: DesignItemId,
    pub z_layer: AdornerZLayer,
    pub space: PlacementSpace,
}

/// Container of adorners decorating one design item.
#[derive(Debug)]
pub struct AdornerPanel {
    info: AdornerPanelInfo,
    adorners: Vec<Adorner>,
    geometry: Option<AdornedGeometry>,
    adorned_size: Size<f64>,
    transform: DAffine2,
    needs_arrange: bool,
}

impl AdornerPanel {
    pub fn new(adorned: DesignItemId) -> Self {
        Self {
            info: AdornerPanelInfo {
                id: AdornerPanelId::new(),
                adorned,
                z_layer: AdornerZLayer::default(),
                space: PlacementSpace::default(),
            },
            adorners: Vec::new(),
            geometry: None,
            adorned_size: Size::ZERO,
            transform: DAffine2::IDENTITY,
            needs_arrange: true,
        }
    }

    pub fn with_z_layer(mut self, z_layer: AdornerZLayer) -> Self {
        self.info.z_layer = z_layer;
        self
    }

    pub fn with_placement_space(mut self, space: PlacementSpace) -> Self {
        self.info.space = space;
        self.needs_arrange = true;
        self
    }

    pub fn id(&self) -> AdornerPanelId {
        self.info.id
    }

    pub fn adorned(&self) -> DesignItemId {
        self.info.adorned
    }

    pub fn z_layer(&self) -> AdornerZLayer {
        self.info.z_layer
    }

    pub fn placement_space(&self) -> PlacementSpace {
        self.info.space
    }

    pub fn info(&self) -> AdornerPanelInfo {
        self.info
    }

    /// Add an adorner on top of the existing ones.
    pub fn add(&mut self, adorner: Adorner) -> AdornerId {
        let id = adorner.id();
        self.adorners.push(adorner);
        self.needs_arrange = true;
        id
    }

    pub fn remove(&mut self, id: AdornerId) -> DesignResult<Adorner> {
        let index = self
            .adorners
            .iter()
            .position(|a| a.id() == id)
            .ok_or(DesignError::UnknownAdorner(id))?;
        Ok(self.adorners.remove(index))
    }

    pub fn adorner(&self, id: AdornerId) -> Option<&Adorner> {
        self.adorners.iter().find(|a| a.id() == id)
    }

    /// Mutable access. Call [`invalidate`](Self::invalidate) after changing
    /// anything that affects placement.
    pub fn adorner_mut(&mut self, id: AdornerId) -> Option<&mut Adorner> {
        self.adorners.iter_mut().find(|a| a.id() == id)
    }

    /// Adorners in draw order (bottom first).
    pub fn adorners(&self) -> &[Adorner] {
        &self.adorners
    }

    pub fn len(&self) -> usize {
        self.adorners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adorners.is_empty()
    }

    /// Force the next [`update_geometry`](Self::update_geometry) to arrange.
    pub fn invalidate(&mut self) {
        self.needs_arrange = true;
    }

    pub fn needs_arrange(&self) -> bool {
        self.needs_arrange
    }

    /// Geometry of the last arrange pass.
    pub fn geometry(&self) -> Option<&AdornedGeometry> {
        self.geometry.as_ref()
    }

    /// Adorned size in this panel's placement space.
    pub fn adorned_size(&self) -> Size<f64> {
        self.adorned_size
    }

    /// Panel-local to designer-space transform.
    pub fn transform(&self) -> DAffine2 {
        self.transform
    }

    /// Re-arrange if the geometry changed or the panel was invalidated.
    ///
    /// Returns whether an arrange pass ran.
    pub fn update_geometry(&mut self, geometry: AdornedGeometry) -> DesignResult<bool> {
        if !self.needs_arrange && self.geometry.as_ref() == Some(&geometry) {
            return Ok(false);
        }
        self.arrange(geometry)?;
        Ok(true)
    }

    /// Arrange every adorner against `geometry`.
    ///
    /// All adorners are arranged even if one fails; the first error is
    /// returned and the panel stays invalidated.
    pub fn arrange(&mut self, geometry: AdornedGeometry) -> DesignResult<()> {
        let (adorned_size, transform) = geometry.frame(self.info.space);
        self.adorned_size = adorned_size;
        self.transform = transform;
        self.geometry = Some(geometry);

        tracing::trace!(
            panel = ?self.info.id,
            space = ?self.info.space,
            ?adorned_size,
            count = self.adorners.len(),
            "Arranging adorner panel"
        );

        let info = self.info;
        let mut first_error = None;
        for adorner in &mut self.adorners {
            let placement = adorner.placement().clone();
            if let Err(err) = placement.arrange(&info, adorner, adorned_size) {
                tracing::warn!(panel = ?info.id, adorner = ?adorner.id(), %err, "Adorner arrange failed");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => {
                self.needs_arrange = true;
                Err(err)
            }
            None => {
                self.needs_arrange = false;
                Ok(())
            }
        }
    }

    /// Designer-space bounding box of an arranged adorner.
    pub fn adorner_bounds(&self, id: AdornerId) -> Option<Rect<f64>> {
        let rect = self.adorner(id)?.arranged_rect()?;
        Some(rect.transformed_bounds(&self.transform))
    }

    /// Visible, arranged adorners under `point` (designer space), topmost
    /// first.
    ///
    /// `tolerance` grows each adorner's rectangle in its own space.
    pub fn hit_test(&self, point: Pos<f64>, tolerance: f64) -> impl Iterator<Item = &Adorner> + '_ {
        let local = math::is_invertible(&self.transform)
            .then(|| Pos::from_vec2(self.transform.inverse().transform_point2(point.to_vec2())));
        self.adorners.iter().rev().filter(move |adorner| {
            let Some(local) = local else {
                return false;
            };
            adorner.is_visible()
                && adorner
                    .arranged_rect()
                    .is_some_and(|rect| rect.inflate(tolerance).contains(local))
        })
    }
}
