use crate::config::SnapConfig;
use egui::{pos2, Pos2, Rect};

/// Horizontal anchor the panel rests against when it is not being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DockSide {
    #[default]
    Left,
    Right,
}

/// Bottom-anchored panel position in points: `left` from the viewport's left edge,
/// `bottom` from the viewport's bottom edge (grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPos {
    pub left: f32,
    pub bottom: f32,
}

impl PanelPos {
    pub const fn new(left: f32, bottom: f32) -> Self {
        Self { left, bottom }
    }

    /// Measures a rendered panel rect against the viewport it lives in.
    pub fn from_rect(rect: Rect, viewport_height: f32) -> Self {
        Self {
            left: rect.left(),
            bottom: viewport_height - rect.bottom(),
        }
    }

    pub fn top_left(self, viewport_height: f32, panel_height: f32) -> Pos2 {
        pos2(self.left, viewport_height - self.bottom - panel_height)
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            left: self.left + (other.left - self.left) * t,
            bottom: self.bottom + (other.bottom - self.bottom) * t,
        }
    }

    pub fn is_finite(self) -> bool {
        self.left.is_finite() && self.bottom.is_finite()
    }

    pub(crate) fn approx_eq(self, other: Self) -> bool {
        (self.left - other.left).abs() < 0.5 && (self.bottom - other.bottom).abs() < 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `None` when the rect cannot be measured (collapsed or non-finite).
    pub fn from_rect(rect: Rect) -> Option<Self> {
        let (width, height) = (rect.width(), rect.height());
        (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some(Self { width, height })
    }
}

impl SnapConfig {
    pub fn resting_left(&self, side: DockSide, viewport_width: f32) -> f32 {
        match side {
            DockSide::Left => self.margin,
            DockSide::Right => viewport_width - self.panel_width - self.margin,
        }
    }

    pub fn resting_pos(&self, side: DockSide, viewport_width: f32) -> PanelPos {
        PanelPos::new(self.resting_left(side, viewport_width), self.margin)
    }

    /// Side the panel docks to when released with its left edge at `candidate_left`.
    ///
    /// The live preview and the committed result both go through here. A center exactly
    /// on the viewport's midline resolves to [`DockSide::Right`]; the choice is arbitrary
    /// but kept stable.
    pub fn resolve_snap_side(&self, candidate_left: f32, viewport_width: f32) -> DockSide {
        let center = candidate_left + self.panel_width / 2.0;
        if center < viewport_width / 2.0 {
            DockSide::Left
        } else {
            DockSide::Right
        }
    }
}

/// [`SnapConfig::resting_left`] with the default margin and width.
pub fn resting_left(side: DockSide, viewport_width: f32) -> f32 {
    SnapConfig::DEFAULT.resting_left(side, viewport_width)
}

/// [`SnapConfig::resolve_snap_side`] with the default margin and width.
pub fn resolve_snap_side(candidate_left: f32, viewport_width: f32) -> DockSide {
    SnapConfig::DEFAULT.resolve_snap_side(candidate_left, viewport_width)
}
