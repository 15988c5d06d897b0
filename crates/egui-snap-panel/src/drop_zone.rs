use crate::config::SnapConfig;
use crate::geometry::{DockSide, Viewport};
use egui::{vec2, Color32, CornerRadius, Painter, Rect, Shape, Stroke, StrokeKind, Visuals};

const ZONE_RADIUS: u8 = 8;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZone {
    pub side: DockSide,
    pub rect: Rect,
    pub emphasized: bool,
}

/// The two candidate docks shown while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZones {
    pub zones: [DropZone; 2],
}

impl DropZones {
    pub fn compute(
        config: &SnapConfig,
        target: DockSide,
        viewport: Viewport,
        panel_height: f32,
    ) -> Self {
        let zone = |side: DockSide| {
            let top_left = config
                .resting_pos(side, viewport.width)
                .top_left(viewport.height, panel_height);
            DropZone {
                side,
                rect: Rect::from_min_size(top_left, vec2(config.panel_width, panel_height)),
                emphasized: side == target,
            }
        };
        Self {
            zones: [zone(DockSide::Left), zone(DockSide::Right)],
        }
    }

    pub fn targeted(&self) -> &DropZone {
        self.zones
            .iter()
            .find(|zone| zone.emphasized)
            .unwrap_or(&self.zones[0])
    }

    pub fn paint(&self, painter: &Painter, visuals: &Visuals) {
        for zone in &self.zones {
            paint_zone(painter, visuals, zone);
        }
    }
}

fn paint_zone(painter: &Painter, visuals: &Visuals, zone: &DropZone) {
    let radius = CornerRadius::same(ZONE_RADIUS);
    if zone.emphasized {
        let accent = visuals.selection.bg_fill;
        painter.rect(
            zone.rect,
            radius,
            accent.gamma_multiply(0.05),
            Stroke::new(2.0, accent),
            StrokeKind::Inside,
        );
        return;
    }

    painter.rect_filled(zone.rect, radius, visuals.faint_bg_color);
    let stroke = Stroke::new(1.0, neutral_stroke(visuals));
    let r = zone.rect.shrink(0.5);
    let outline = [
        r.left_top(),
        r.right_top(),
        r.right_bottom(),
        r.left_bottom(),
        r.left_top(),
    ];
    painter.extend(Shape::dashed_line(&outline, stroke, DASH_LENGTH, GAP_LENGTH));
}

fn neutral_stroke(visuals: &Visuals) -> Color32 {
    visuals.widgets.noninteractive.bg_stroke.color
}
