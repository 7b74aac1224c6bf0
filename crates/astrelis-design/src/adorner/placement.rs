//! Placement strategies: how an adorner is positioned relative to the
//! content it decorates.

use std::fmt;
use std::sync::{Arc, LazyLock};

use astrelis_core::geometry::{Pos, Rect, Size};

use super::element::Adorner;
use super::panel::AdornerPanelInfo;
use crate::error::DesignResult;

/// Defines how a design-time adorner is placed.
///
/// Implementations compute a rectangle in the hosting panel's space and hand
/// it to [`Adorner::arrange`]. `adorned_size` is the adorned content's size in
/// the panel's [`PlacementSpace`](super::PlacementSpace).
pub trait Placement: fmt::Debug + Send + Sync {
    /// Arrange `adorner` on `panel`.
    fn arrange(
        &self,
        panel: &AdornerPanelInfo,
        adorner: &mut Adorner,
        adorned_size: Size<f64>,
    ) -> DesignResult<()>;
}

/// Places the adorner over the content, using the content's bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillContentPlacement;

impl Placement for FillContentPlacement {
    fn arrange(
        &self,
        _panel: &AdornerPanelInfo,
        adorner: &mut Adorner,
        adorned_size: Size<f64>,
    ) -> DesignResult<()> {
        adorner.arrange(Rect::from_size(adorned_size));
        Ok(())
    }
}

static FILL_CONTENT: LazyLock<Arc<dyn Placement>> =
    LazyLock::new(|| Arc::new(FillContentPlacement) as Arc<dyn Placement>);

/// The shared [`FillContentPlacement`] instance.
pub fn fill_content() -> Arc<dyn Placement> {
    Arc::clone(&FILL_CONTENT)
}

/// Placement built from independent, additive terms.
///
/// ```text
/// width  = width_offset
///        + width_relative_to_desired_width  * desired.width
///        + width_relative_to_content_width  * content.width
/// height = (same, vertically)
/// x, y   = x_offset, y_offset
/// ```
///
/// Every field defaults to zero, which yields a zero-sized adorner at the
/// content origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativePlacement {
    /// Width relative to the adorner's desired width.
    pub width_relative_to_desired_width: f64,
    /// Height relative to the adorner's desired height.
    pub height_relative_to_desired_height: f64,
    /// Width relative to the adorned content's width.
    pub width_relative_to_content_width: f64,
    /// Height relative to the adorned content's height.
    pub height_relative_to_content_height: f64,
    /// Added to the computed width.
    pub width_offset: f64,
    /// Added to the computed height.
    pub height_offset: f64,
    /// Horizontal position measured from the content origin.
    pub x_offset: f64,
    /// Vertical position measured from the content origin.
    pub y_offset: f64,
}

impl RelativePlacement {
    /// Adorner sized to its own desired size at a fixed offset.
    pub fn at_desired_size(x_offset: f64, y_offset: f64) -> Self {
        Self {
            width_relative_to_desired_width: 1.0,
            height_relative_to_desired_height: 1.0,
            x_offset,
            y_offset,
            ..Default::default()
        }
    }

    pub fn into_placement(self) -> Arc<dyn Placement> {
        Arc::new(self)
    }

    fn uses_desired_size(&self) -> bool {
        self.width_relative_to_desired_width != 0.0 || self.height_relative_to_desired_height != 0.0
    }

    /// Size of the adorner. The desired size is only read when a desired
    /// factor is non-zero.
    pub fn calculate_size(&self, adorner: &Adorner, adorned_size: Size<f64>) -> DesignResult<Size<f64>> {
        let mut size = Size::new(self.width_offset, self.height_offset);
        if self.uses_desired_size() {
            let desired = adorner.desired_size()?;
            size = size
                + desired.scale(
                    self.width_relative_to_desired_width,
                    self.height_relative_to_desired_height,
                );
        }
        size = size
            + adorned_size.scale(
                self.width_relative_to_content_width,
                self.height_relative_to_content_height,
            );
        Ok(size)
    }

    /// Position of the adorner. Independent of every size.
    pub fn calculate_position(&self) -> Pos<f64> {
        Pos::new(self.x_offset, self.y_offset)
    }
}

impl Placement for RelativePlacement {
    fn arrange(
        &self,
        _panel: &AdornerPanelInfo,
        adorner: &mut Adorner,
        adorned_size: Size<f64>,
    ) -> DesignResult<()> {
        let size = self.calculate_size(adorner, adorned_size)?;
        adorner.arrange(Rect::from_pos_size(self.calculate_position(), size));
        Ok(())
    }
}
