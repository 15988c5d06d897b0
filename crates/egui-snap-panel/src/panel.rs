use crate::config::{SnapConfig, BODY_ANIMATION, FALLBACK_PANEL_HEIGHT};
use crate::drop_zone::DropZones;
use crate::errors::PanelError;
use crate::geometry::{DockSide, PanelPos, Viewport};
use crate::listeners::ViewportListeners;
use crate::model::{Placement, PositionModel};
use crate::session::{DragSession, GestureOutcome, PointerTarget, PointerTracker};
use egui::{
    vec2, Align, Area, Button, Context, CornerRadius, CursorIcon, Event, Frame, Id, Layout,
    LayerId, Margin, Modal, Order, PointerButton, Pos2, Rect, Response, RichText, Sense, Ui,
    UiBuilder,
};
use egui_phosphor::regular::{CARET_DOWN, CARET_UP, INFO, X};

#[derive(Debug, Clone)]
pub struct PanelOptions {
    pub title: String,
    pub info: String,
    pub context_title: String,
    pub context_subtitle: String,
    pub context_body: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: "Prototype controls".to_owned(),
            info: "Use this space to add controls for your prototype. \
                   You can also drag the panel to the other side!"
                .to_owned(),
            context_title: "Project context".to_owned(),
            context_subtitle: "Add context about your prototype for viewers.".to_owned(),
            context_body: "Use this dialog to share context about the project or work shown \
                           in this prototype. You can describe the problem being solved, the \
                           target audience, key decisions, or anything else that helps viewers \
                           understand what they're looking at."
                .to_owned(),
        }
    }
}

/// Body area handed to the host. Widgets passed through [`PanelUi::control`] are
/// clickable without starting a drag.
pub struct PanelUi<'a> {
    pub ui: &'a mut Ui,
    controls: &'a mut Vec<Rect>,
}

impl PanelUi<'_> {
    pub fn control(&mut self, response: Response) -> Response {
        self.controls.push(response.rect);
        response
    }
}

#[derive(Debug, Clone, Default)]
pub struct ControlPanelResponse {
    /// Outcome of a gesture that ended this frame.
    pub outcome: Option<GestureOutcome>,
    pub minimized_changed: bool,
    pub rect: Option<Rect>,
    pub placement: Option<Placement>,
    /// Set while a moved drag shows its candidate docks.
    pub drop_zones: Option<DropZones>,
}

/// Floating panel that can be dragged anywhere and docks to the nearer side on release.
pub struct ControlPanel {
    id: Id,
    config: SnapConfig,
    options: PanelOptions,
    tracker: PointerTracker,
    position: PositionModel,
    minimized: bool,
    context_open: bool,
    last_viewport: Option<Viewport>,
    panel_rect: Option<Rect>,
    header_rect: Option<Rect>,
    body_height: Option<f32>,
    controls: Vec<Rect>,
}

impl ControlPanel {
    pub fn new(config: SnapConfig, options: PanelOptions) -> Result<Self, PanelError> {
        config.validate()?;
        Ok(Self {
            id: Id::new("egui_snap_panel"),
            config,
            options,
            tracker: PointerTracker::new(config, ViewportListeners::new()),
            position: PositionModel::new(config),
            minimized: false,
            context_open: false,
            last_viewport: None,
            panel_rect: None,
            header_rect: None,
            body_height: None,
            controls: Vec::new(),
        })
    }

    #[inline]
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    /// Shares the pointer stream slot with other panels so only one of them drags at a time.
    #[inline]
    pub fn with_listeners(mut self, listeners: ViewportListeners) -> Self {
        self.tracker = PointerTracker::new(self.config, listeners);
        self
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn side(&self) -> DockSide {
        self.position.side()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.tracker.session()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    pub fn is_context_open(&self) -> bool {
        self.context_open
    }

    pub fn open_context(&mut self) {
        self.context_open = true;
    }

    pub fn rect(&self) -> Option<Rect> {
        self.panel_rect
    }

    /// Ends any drag in progress and releases the pointer stream.
    pub fn teardown(&mut self) {
        self.tracker.teardown();
    }

    pub fn show(
        &mut self,
        ctx: &Context,
        dark_mode: &mut bool,
        add_contents: impl FnOnce(&mut PanelUi<'_>),
    ) -> ControlPanelResponse {
        let mut response = ControlPanelResponse::default();
        let measured = Viewport::from_rect(ctx.screen_rect());
        let now = ctx.input(|i| i.time);

        self.handle_pointer_events(ctx, measured, now, &mut response);

        let Some(viewport) = measured.or(self.last_viewport) else {
            tracing::debug!("viewport not measurable, skipping panel frame");
            return response;
        };
        self.last_viewport = Some(viewport);

        let live = self.tracker.session().map(DragSession::live);
        let placement = self.position.placement(live, measured, now);
        let panel_height = self.panel_height();

        if let Some(target) = self.tracker.drop_zone_target() {
            let zones = DropZones::compute(&self.config, target, viewport, panel_height);
            let painter = ctx.layer_painter(LayerId::new(Order::Middle, self.id.with("drop_zones")));
            zones.paint(&painter, &ctx.style().visuals);
            response.drop_zones = Some(zones);
        }

        let frame = Frame::window(&ctx.style())
            .inner_margin(Margin::ZERO)
            .corner_radius(CornerRadius::same(8));
        let inner_width = self.config.panel_width - 2.0 * frame.stroke.width;
        let mut controls = Vec::new();
        let top_left = placement.pos.top_left(viewport.height, panel_height);

        let area = Area::new(self.id)
            .order(Order::Foreground)
            .fixed_pos(top_left)
            .movable(false)
            .constrain(false)
            .show(ctx, |ui| {
                ui.style_mut().interaction.selectable_labels = false;
                frame
                    .show(ui, |ui| {
                        ui.set_width(inner_width);
                        ui.spacing_mut().item_spacing.y = 0.0;
                        let header = self.header(ui, &mut controls, &mut response);
                        self.body(ui, dark_mode, &mut controls, add_contents);
                        header
                    })
                    .inner
            });

        self.panel_rect = Some(area.response.rect);
        self.header_rect = Some(area.inner);
        self.controls = controls;

        self.context_dialog(ctx);

        if self.tracker.is_dragging() {
            ctx.set_cursor_icon(CursorIcon::Grabbing);
        }
        if self.tracker.is_dragging() || placement.animating {
            ctx.request_repaint();
        }

        response.rect = self.panel_rect;
        response.placement = Some(placement);
        response
    }

    fn panel_height(&self) -> f32 {
        self.panel_rect
            .map(|rect| rect.height())
            .filter(|height| *height > 0.0)
            .unwrap_or(FALLBACK_PANEL_HEIGHT)
    }

    fn handle_pointer_events(
        &mut self,
        ctx: &Context,
        viewport: Option<Viewport>,
        now: f64,
        response: &mut ControlPanelResponse,
    ) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => self.pointer_down(ctx, pos, viewport),
                Event::PointerMoved(pos) => {
                    self.tracker.pointer_move(pos);
                }
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if let Some(outcome) = self.tracker.pointer_up() {
                        self.finish_gesture(outcome, viewport, now, response);
                    }
                }
                _ => {}
            }
        }
    }

    fn pointer_down(&mut self, ctx: &Context, pos: Pos2, viewport: Option<Viewport>) {
        if self.context_open {
            return;
        }
        let Some(rect) = self.panel_rect else {
            tracing::trace!("pointer-down before the panel was laid out");
            return;
        };
        if !rect.contains(pos) {
            return;
        }
        if ctx.layer_id_at(pos) != Some(LayerId::new(Order::Foreground, self.id)) {
            tracing::trace!("pointer-down on a layer covering the panel");
            return;
        }

        let target = self.pointer_target(pos);
        let origin = viewport.map(|viewport| PanelPos::from_rect(rect, viewport.height));
        self.tracker.pointer_down(pos, target, origin, viewport);
    }

    fn pointer_target(&self, pos: Pos2) -> PointerTarget {
        if self.controls.iter().any(|rect| rect.contains(pos)) {
            PointerTarget::Control
        } else if self.header_rect.is_some_and(|rect| rect.contains(pos)) {
            PointerTarget::Header
        } else {
            PointerTarget::Body
        }
    }

    fn finish_gesture(
        &mut self,
        outcome: GestureOutcome,
        viewport: Option<Viewport>,
        now: f64,
        response: &mut ControlPanelResponse,
    ) {
        match outcome {
            GestureOutcome::Commit {
                side,
                released_at,
                viewport: session_viewport,
            } => {
                self.position
                    .commit(side, released_at, viewport.or(Some(session_viewport)), now);
            }
            GestureOutcome::Click { on_header: true } => {
                self.minimized = !self.minimized;
                response.minimized_changed = true;
            }
            GestureOutcome::Click { on_header: false } => {}
        }
        response.outcome = Some(outcome);
    }

    fn header(
        &mut self,
        ui: &mut Ui,
        controls: &mut Vec<Rect>,
        response: &mut ControlPanelResponse,
    ) -> Rect {
        let chevron = if self.minimized { CARET_UP } else { CARET_DOWN };
        let header = Frame::NONE
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&self.options.title).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let chevron = ui.add(Button::new(chevron).frame(false));
                        controls.push(chevron.rect);
                        chevron.clicked()
                    })
                    .inner
                })
                .inner
            });

        if header.inner {
            self.minimized = !self.minimized;
            response.minimized_changed = true;
        }
        header.response.rect
    }

    fn body(
        &mut self,
        ui: &mut Ui,
        dark_mode: &mut bool,
        controls: &mut Vec<Rect>,
        add_contents: impl FnOnce(&mut PanelUi<'_>),
    ) {
        let openness = ui.ctx().animate_bool_with_time(
            self.id.with("body_open"),
            !self.minimized,
            BODY_ANIMATION,
        );
        if openness <= 0.0 {
            return;
        }

        let max_rect = ui.available_rect_before_wrap();
        let mut child = ui.new_child(UiBuilder::new().max_rect(max_rect).layout(*ui.layout()));
        if openness < 1.0 {
            if let Some(full_height) = self.body_height {
                let mut clip = child.clip_rect();
                clip.max.y = clip.max.y.min(max_rect.top() + full_height * openness);
                child.set_clip_rect(clip);
            }
        }

        Frame::NONE
            .inner_margin(Margin::symmetric(12, 8))
            .show(&mut child, |ui| {
                ui.spacing_mut().item_spacing.y = 12.0;
                info_banner(ui, &self.options.info);

                add_contents(&mut PanelUi {
                    ui: &mut *ui,
                    controls: &mut *controls,
                });

                let switch = ui.checkbox(dark_mode, "Dark mode");
                controls.push(switch.rect);

                let show_context = ui.add(
                    Button::new("Show context").min_size(vec2(ui.available_width(), 0.0)),
                );
                controls.push(show_context.rect);
                if show_context.clicked() {
                    self.context_open = true;
                }
            });

        let full_height = child.min_rect().height();
        self.body_height = Some(full_height);
        ui.allocate_exact_size(vec2(max_rect.width(), full_height * openness), Sense::hover());
    }

    fn context_dialog(&mut self, ctx: &Context) {
        if !self.context_open {
            return;
        }

        let mut close = false;
        let modal = Modal::new(self.id.with("context_dialog")).show(ctx, |ui| {
            ui.set_max_width(ctx.screen_rect().width() * 0.8);
            ui.horizontal(|ui| {
                ui.heading(&self.options.context_title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(Button::new(X).frame(false)).clicked() {
                        close = true;
                    }
                });
            });
            ui.label(RichText::new(&self.options.context_subtitle).weak());
            ui.add_space(16.0);
            Frame::NONE
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::symmetric(16, 64))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(700.0);
                        ui.label(RichText::new(&self.options.context_body).weak());
                    });
                });
        });

        if close || modal.should_close() {
            self.context_open = false;
        }
    }
}

fn info_banner(ui: &mut Ui, text: &str) {
    Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = 8.0;
            ui.label(INFO);
            ui.label(RichText::new(text).weak());
        });
}
