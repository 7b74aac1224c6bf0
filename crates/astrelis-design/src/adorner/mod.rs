//! Adorners: design-time decorations drawn over designed content.
//!
//! # Architecture
//!
//! ```text
//! DesignPanel
//!  └─ AdornerCollection          (ordered by AdornerZLayer)
//!      └─ AdornerPanel           (one adorned item, one PlacementSpace)
//!          └─ Adorner            (handle, grip, frame; owns a Placement)
//! ```
//!
//! Each [`AdornerPanel`] maps its children from panel-local space into
//! designer space. Whenever the adorned item's size or transforms change the
//! panel runs an arrange pass, asking every adorner's [`Placement`] for its
//! rectangle.
//!
//! # Example
//!
//! ```
//! use astrelis_core::geometry::{Rect, Size};
//! use astrelis_design::adorner::{
//!     Adorner, AdornedGeometry, AdornerPanel, AdornerZLayer, RelativePlacement, placement,
//! };
//! use astrelis_design::DesignItemId;
//!
//! let mut panel = AdornerPanel::new(DesignItemId(1)).with_z_layer(AdornerZLayer::Selection);
//! let frame = panel.add(Adorner::new("frame", placement::fill_content()));
//! let label = panel.add(Adorner::new(
//!     "label",
//!     RelativePlacement {
//!         width_relative_to_content_width: 1.0,
//!         height_offset: 10.0,
//!         x_offset: 5.0,
//!         y_offset: 5.0,
//!         ..Default::default()
//!     }
//!     .into_placement(),
//! ));
//!
//! panel.update_geometry(AdornedGeometry::new(Size::new(100.0, 50.0))).unwrap();
//! assert_eq!(panel.adorner(frame).unwrap().arranged_rect(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
//! assert_eq!(panel.adorner(label).unwrap().arranged_rect(), Some(Rect::new(5.0, 5.0, 100.0, 10.0)));
//! ```

mod collection;
mod element;
mod panel;
pub mod placement;

pub use collection::{AdornerCollection, AdornerHit};
pub use element::{Adorner, AdornerHandler, AdornerId, AdornerInput};
pub use panel::{AdornedGeometry, AdornerPanel, AdornerPanelId, AdornerPanelInfo};
pub use placement::{FillContentPlacement, Placement, RelativePlacement};

/// Space in which an adorner panel is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementSpace {
    /// Affected by both the render and the layout transform of the adorned
    /// element.
    #[default]
    Render,
    /// Affected by the layout transform of the adorned element only.
    Layout,
    /// Not affected by transforms of designed elements.
    Designer,
}

/// Layer an adorner panel is drawn on.
///
/// Higher layers draw on top of lower ones and are hit-tested first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AdornerZLayer {
    /// Below the other adorner layers.
    Low,
    /// Normal background adorners.
    #[default]
    Normal,
    /// Selection adorners.
    Selection,
    /// Adorners of the primary selection.
    PrimarySelection,
    /// Above everything else; temporary drawings such as a rubber-band frame.
    High,
}

impl AdornerZLayer {
    /// Z-index for hosts that need a numeric draw order.
    pub fn z_index(&self) -> u16 {
        match self {
            AdornerZLayer::Low => 0,
            AdornerZLayer::Normal => 100,
            AdornerZLayer::Selection => 200,
            AdornerZLayer::PrimarySelection => 300,
            AdornerZLayer::High => 400,
        }
    }

    /// Check if this layer draws above another.
    pub fn is_above(&self, other: &AdornerZLayer) -> bool {
        self > other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_layer_order_matches_z_index() {
        let layers = [
            AdornerZLayer::Low,
            AdornerZLayer::Normal,
            AdornerZLayer::Selection,
            AdornerZLayer::PrimarySelection,
            AdornerZLayer::High,
        ];
        for pair in layers.windows(2) {
            assert!(pair[1].is_above(&pair[0]));
            assert!(pair[1].z_index() > pair[0].z_index());
        }
    }
}
