use crate::config::SnapConfig;
use crate::geometry::{DockSide, PanelPos, Viewport};
use crate::listeners::{ListenerGuard, ViewportListeners};
use egui::Pos2;
use tracing::{debug, trace, warn};

/// What a pointer-down landed on inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// An interactive child (button, checkbox, switch...). Never starts a drag.
    Control,
    Header,
    Body,
}

/// One drag gesture, from an eligible pointer-down until release or teardown.
#[derive(Debug)]
pub struct DragSession {
    pointer_start: Pos2,
    origin: PanelPos,
    viewport: Viewport,
    moved: bool,
    live: PanelPos,
    snap_target: DockSide,
    from_header: bool,
    _listeners: ListenerGuard,
}

impl DragSession {
    pub fn pointer_start(&self) -> Pos2 {
        self.pointer_start
    }

    pub fn origin(&self) -> PanelPos {
        self.origin
    }

    pub fn live(&self) -> PanelPos {
        self.live
    }

    pub fn snap_target(&self) -> DockSide {
        self.snap_target
    }

    pub fn moved_past_threshold(&self) -> bool {
        self.moved
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveUpdate {
    pub live: PanelPos,
    pub snap_target: DockSide,
    pub moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The pointer crossed the threshold; `side` is the snap target at release.
    Commit {
        side: DockSide,
        released_at: PanelPos,
        viewport: Viewport,
    },
    /// The pointer never crossed the threshold.
    Click { on_header: bool },
}

/// Turns a raw down/move/up stream into at most one [`DragSession`] at a time.
#[derive(Debug)]
pub struct PointerTracker {
    config: SnapConfig,
    listeners: ViewportListeners,
    state: DragState,
}

impl PointerTracker {
    pub fn new(config: SnapConfig, listeners: ViewportListeners) -> Self {
        Self {
            config,
            listeners,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn listeners(&self) -> &ViewportListeners {
        &self.listeners
    }

    /// The side to highlight in the drop zones, only once the session has really moved.
    pub fn drop_zone_target(&self) -> Option<DockSide> {
        self.session()
            .filter(|session| session.moved)
            .map(|session| session.snap_target)
    }

    /// Starts a session unless the press is ineligible. `origin` is the panel's measured
    /// position; without it (or without a viewport) the press is ignored.
    pub fn pointer_down(
        &mut self,
        pointer: Pos2,
        target: PointerTarget,
        origin: Option<PanelPos>,
        viewport: Option<Viewport>,
    ) -> bool {
        if self.is_dragging() {
            trace!("pointer-down ignored, a drag session is already active");
            return false;
        }
        if target == PointerTarget::Control {
            trace!("pointer-down on an interactive control, not dragging");
            return false;
        }
        let (Some(origin), Some(viewport)) = (origin.filter(|o| o.is_finite()), viewport) else {
            warn!("pointer-down before the panel was measured, not dragging");
            return false;
        };
        let Some(listeners) = self.listeners.subscribe() else {
            debug!("viewport pointer stream already taken, not dragging");
            return false;
        };

        let snap_target = self.config.resolve_snap_side(origin.left, viewport.width);
        debug!(?pointer, ?origin, "drag session started");
        self.state = DragState::Dragging(DragSession {
            pointer_start: pointer,
            origin,
            viewport,
            moved: false,
            live: origin,
            snap_target,
            from_header: target == PointerTarget::Header,
            _listeners: listeners,
        });
        true
    }

    pub fn pointer_move(&mut self, pointer: Pos2) -> Option<LiveUpdate> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };

        let delta = pointer - session.pointer_start;
        let threshold = self.config.drag_threshold;
        if delta.x.abs() > threshold || delta.y.abs() > threshold {
            session.moved = true;
        }

        session.live = PanelPos::new(session.origin.left + delta.x, session.origin.bottom - delta.y);
        let snap_target = self
            .config
            .resolve_snap_side(session.live.left, session.viewport.width);
        if snap_target != session.snap_target {
            debug!(?snap_target, "snap target changed");
            session.snap_target = snap_target;
        }

        Some(LiveUpdate {
            live: session.live,
            snap_target,
            moved: session.moved,
        })
    }

    pub fn pointer_up(&mut self) -> Option<GestureOutcome> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let outcome = if session.moved {
            GestureOutcome::Commit {
                side: session.snap_target,
                released_at: session.live,
                viewport: session.viewport,
            }
        } else {
            GestureOutcome::Click {
                on_header: session.from_header,
            }
        };
        debug!(?outcome, "drag session ended");
        Some(outcome)
    }

    /// Ends an active session without an outcome, e.g. when the panel goes away mid-drag.
    pub fn teardown(&mut self) {
        if let DragState::Dragging(_) = std::mem::take(&mut self.state) {
            debug!("drag session torn down");
        }
    }
}
