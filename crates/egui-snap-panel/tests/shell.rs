//! Headless frames through the egui shell.

use egui::text_selection::LabelSelectionState;
use egui::{pos2, vec2, Context, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect};
use egui_snap_panel::{
    ControlPanel, ControlPanelResponse, DockSide, GestureOutcome, PanelOptions, SnapConfig,
};

const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, pos2(1200.0, 800.0));

struct Shell {
    ctx: Context,
    panel: ControlPanel,
    dark_mode: bool,
    time: f64,
}

impl Shell {
    fn new() -> Self {
        let mut shell = Self {
            ctx: Context::default(),
            panel: ControlPanel::new(SnapConfig::DEFAULT, PanelOptions::default()).unwrap(),
            dark_mode: false,
            time: 0.0,
        };
        for _ in 0..3 {
            shell.frame(vec![]);
        }
        shell
    }

    fn frame(&mut self, events: Vec<Event>) -> ControlPanelResponse {
        self.time += 1.0 / 60.0;
        let input = RawInput {
            screen_rect: Some(SCREEN),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let mut response = None;
        let panel = &mut self.panel;
        let dark_mode = &mut self.dark_mode;
        let _ = self.ctx.run(input, |ctx| {
            response = Some(panel.show(ctx, dark_mode, |_| {}));
        });
        response.unwrap()
    }

    fn wait(&mut self, seconds: f64) {
        self.time += seconds;
        self.frame(vec![]);
    }
}

fn press(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        },
    ]
}

fn release(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::NONE,
    }
}

fn escape() -> Event {
    Event::Key {
        key: Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

fn header_point(panel: &ControlPanel) -> Pos2 {
    let rect = panel.rect().unwrap();
    pos2(rect.left() + 20.0, rect.top() + 12.0)
}

fn has_label_selection(shell: &Shell) -> bool {
    LabelSelectionState::load(&shell.ctx).has_selection()
}

/// A press and release at one point on a freshly mounted panel.
struct Tap {
    started_drag: bool,
    response: ControlPanelResponse,
    shell: Shell,
}

fn tap(pos: Pos2) -> Tap {
    let mut shell = Shell::new();
    shell.frame(press(pos));
    let started_drag = shell.panel.is_dragging();
    let response = shell.frame(vec![release(pos)]);
    Tap {
        started_drag,
        response,
        shell,
    }
}

fn taps_along(points: impl Iterator<Item = Pos2>) -> Vec<Tap> {
    points.map(tap).collect()
}

fn resting_rect() -> Rect {
    Shell::new().panel.rect().unwrap()
}

#[test]
fn rests_bottom_left_at_full_width() {
    let shell = Shell::new();
    let rect = shell.panel.rect().unwrap();
    assert!((rect.left() - 8.0).abs() < 0.5, "{rect:?}");
    assert!((rect.bottom() - 792.0).abs() < 0.5, "{rect:?}");
    assert!((rect.width() - 230.0).abs() < 0.5, "{rect:?}");
    assert_eq!(shell.panel.side(), DockSide::Left);
}

#[test]
fn dragging_past_the_midline_docks_right() {
    let mut shell = Shell::new();
    let start = header_point(&shell.panel);
    shell.frame(press(start));
    assert!(shell.panel.is_dragging());

    let end = start + vec2(700.0, 0.0);
    shell.frame(vec![Event::PointerMoved(end)]);
    assert_eq!(
        shell.panel.session().map(|s| s.snap_target()),
        Some(DockSide::Right)
    );

    let response = shell.frame(vec![release(end)]);
    assert!(matches!(
        response.outcome,
        Some(GestureOutcome::Commit {
            side: DockSide::Right,
            ..
        })
    ));
    assert!(!shell.panel.is_dragging());

    shell.wait(1.0);
    shell.frame(vec![]);
    let rect = shell.panel.rect().unwrap();
    assert!((rect.left() - 962.0).abs() < 0.5, "{rect:?}");
    assert!(!shell.panel.is_minimized());
}

#[test]
fn header_click_toggles_minimized() {
    let mut shell = Shell::new();
    let point = header_point(&shell.panel);
    shell.frame(press(point));
    let response = shell.frame(vec![release(point)]);
    assert!(response.minimized_changed);
    assert!(shell.panel.is_minimized());
    assert_eq!(shell.panel.side(), DockSide::Left);
}

#[test]
fn pointer_after_release_does_not_move_the_panel() {
    let mut shell = Shell::new();
    let start = header_point(&shell.panel);
    shell.frame(press(start));
    shell.frame(vec![Event::PointerMoved(start + vec2(50.0, -40.0))]);
    shell.frame(vec![release(start + vec2(50.0, -40.0))]);
    shell.wait(1.0);
    let rested = shell.panel.rect().unwrap();

    shell.frame(vec![Event::PointerMoved(pos2(900.0, 100.0))]);
    assert_eq!(shell.panel.rect().unwrap(), rested);
    assert_eq!(shell.panel.side(), DockSide::Left);
}

#[test]
fn presses_outside_the_panel_are_ignored() {
    let mut shell = Shell::new();
    shell.frame(press(pos2(600.0, 100.0)));
    assert!(!shell.panel.is_dragging());
}

#[test]
fn dragging_by_the_title_selects_no_text() {
    let mut shell = Shell::new();
    let mut pointer = header_point(&shell.panel);
    shell.frame(press(pointer));
    for _ in 0..10 {
        pointer += vec2(30.0, 0.0);
        shell.frame(vec![Event::PointerMoved(pointer)]);
        assert!(!has_label_selection(&shell));
    }
    assert!(shell.panel.is_dragging());

    shell.frame(vec![release(pointer)]);
    shell.frame(vec![]);
    assert!(!has_label_selection(&shell));
}

#[test]
fn chevron_toggles_minimized_once_without_a_session() {
    let rect = resting_rect();
    let y = rect.top() + 17.0;
    let taps = taps_along((14..40).step_by(2).map(|dx| pos2(rect.right() - dx as f32, y)));

    let chevron: Vec<_> = taps.iter().filter(|t| !t.started_drag).collect();
    assert!(!chevron.is_empty(), "no press landed on the chevron");
    for tap in chevron {
        assert!(tap.shell.panel.is_minimized());
        assert!(tap.response.minimized_changed);
        assert!(tap.response.outcome.is_none());
    }
}

#[test]
fn body_controls_work_without_starting_a_session() {
    let rect = resting_rect();
    let x = rect.left() + 30.0;
    let taps = taps_along(
        (0..)
            .map(|i| rect.top() + 40.0 + 3.0 * i as f32)
            .take_while(|y| *y < rect.bottom() - 2.0)
            .map(|y| pos2(x, y)),
    );

    let switches: Vec<_> = taps.iter().filter(|t| t.shell.dark_mode).collect();
    assert!(!switches.is_empty(), "no press landed on the dark mode switch");
    for tap in switches {
        assert!(!tap.started_drag);
        assert!(tap.response.outcome.is_none());
        assert!(!tap.shell.panel.is_minimized());
    }

    let buttons: Vec<_> = taps
        .iter()
        .filter(|t| t.shell.panel.is_context_open())
        .collect();
    assert!(!buttons.is_empty(), "no press landed on the context button");
    for tap in buttons {
        assert!(!tap.started_drag);
        assert!(tap.response.outcome.is_none());
    }
}

#[test]
fn open_context_dialog_blocks_dragging() {
    let mut shell = Shell::new();
    shell.panel.open_context();
    shell.frame(vec![]);

    let point = header_point(&shell.panel);
    shell.frame(press(point));
    assert!(!shell.panel.is_dragging());
    assert!(shell.panel.session().is_none());

    shell.frame(vec![Event::PointerMoved(point + vec2(400.0, 0.0))]);
    assert!(!shell.panel.is_dragging());
    assert_eq!(shell.panel.side(), DockSide::Left);
}

#[test]
fn escape_closes_the_context_dialog() {
    let mut shell = Shell::new();
    shell.panel.open_context();
    shell.frame(vec![]);
    assert!(shell.panel.is_context_open());

    shell.frame(vec![escape()]);
    assert!(!shell.panel.is_context_open());
}

#[test]
fn drop_zones_appear_once_the_threshold_is_crossed() {
    let mut shell = Shell::new();
    let start = header_point(&shell.panel);
    assert!(shell.frame(press(start)).drop_zones.is_none());

    let response = shell.frame(vec![Event::PointerMoved(start + vec2(2.0, 2.0))]);
    assert!(shell.panel.is_dragging());
    assert!(response.drop_zones.is_none());

    let response = shell.frame(vec![Event::PointerMoved(start + vec2(4.0, 0.0))]);
    let zones = response.drop_zones.unwrap();
    assert_eq!(zones.targeted().side, DockSide::Left);

    // Stays visible when the pointer returns to where it started.
    let response = shell.frame(vec![Event::PointerMoved(start)]);
    assert!(response.drop_zones.is_some());

    let response = shell.frame(vec![release(start)]);
    assert!(response.drop_zones.is_none());
}
