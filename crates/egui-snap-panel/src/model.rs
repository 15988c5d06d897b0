use crate::config::SnapConfig;
use crate::geometry::{DockSide, PanelPos, Viewport};
use egui::emath::easing;
use tracing::debug;

/// How the renderer should move the panel to the reported position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Follow the pointer with no easing lag.
    Instant,
    Eased { duration: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where to draw the panel this frame.
    pub pos: PanelPos,
    /// Where the panel is heading: the live position while dragging, the dock otherwise.
    pub target: PanelPos,
    pub transition: Transition,
    pub animating: bool,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    from: PanelPos,
    started_at: f64,
}

/// Reconciles the committed [`DockSide`] with the live drag position.
#[derive(Debug)]
pub struct PositionModel {
    config: SnapConfig,
    side: DockSide,
    settle: Option<Settle>,
    last_resting: Option<PanelPos>,
}

impl PositionModel {
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            side: DockSide::default(),
            settle: None,
            last_resting: None,
        }
    }

    pub fn side(&self) -> DockSide {
        self.side
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Dock coordinate for the current side. Without a viewport measurement the last
    /// known one is reused; the left dock does not depend on the width at all.
    pub fn resting(&mut self, viewport: Option<Viewport>) -> PanelPos {
        match viewport {
            Some(viewport) => {
                let pos = self.config.resting_pos(self.side, viewport.width);
                self.last_resting = Some(pos);
                pos
            }
            None => match (self.side, self.last_resting) {
                (DockSide::Right, Some(last)) => last,
                _ => self.config.resting_pos(DockSide::Left, 0.0),
            },
        }
    }

    /// Commits the outcome of a drag released at `released_at`.
    ///
    /// Returns whether a settle transition started. Re-docking on the current side with
    /// the panel already at rest is a no-op.
    pub fn commit(
        &mut self,
        side: DockSide,
        released_at: PanelPos,
        viewport: Option<Viewport>,
        now: f64,
    ) -> bool {
        let previous = self.side;
        self.side = side;
        let target = self.resting(viewport);

        if previous == side && released_at.approx_eq(target) {
            debug!(?side, "re-docked in place");
            return false;
        }
        debug!(?previous, ?side, "dock side committed");
        self.settle = Some(Settle {
            from: released_at,
            started_at: now,
        });
        true
    }

    pub fn placement(
        &mut self,
        live: Option<PanelPos>,
        viewport: Option<Viewport>,
        now: f64,
    ) -> Placement {
        if let Some(live) = live {
            return Placement {
                pos: live,
                target: live,
                transition: Transition::Instant,
                animating: false,
            };
        }

        let target = self.resting(viewport);
        let duration = self.config.settle_duration;
        let transition = Transition::Eased { duration };
        let Some(settle) = self.settle else {
            return Placement {
                pos: target,
                target,
                transition,
                animating: false,
            };
        };

        let progress = if duration > 0.0 {
            ((now - settle.started_at) / f64::from(duration)).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.settle = None;
            return Placement {
                pos: target,
                target,
                transition,
                animating: false,
            };
        }

        Placement {
            pos: settle.from.lerp(target, easing::cubic_out(progress)),
            target,
            transition,
            animating: true,
        }
    }
}
