mod config;
mod drop_zone;
mod errors;
mod geometry;
mod listeners;
mod model;
mod panel;
mod session;

pub use config::{
    SnapConfig, BODY_ANIMATION, DRAG_THRESHOLD, FALLBACK_PANEL_HEIGHT, MARGIN, PANEL_WIDTH,
    SETTLE_DURATION,
};
pub use drop_zone::{DropZone, DropZones};
pub use errors::PanelError;
pub use geometry::{resolve_snap_side, resting_left, DockSide, PanelPos, Viewport};
pub use listeners::{ListenerGuard, ViewportListeners};
pub use model::{Placement, PositionModel, Transition};
pub use panel::{ControlPanel, ControlPanelResponse, PanelOptions, PanelUi};
pub use session::{
    DragSession, DragState, GestureOutcome, LiveUpdate, PointerTarget, PointerTracker,
};
