use crate::consts::APP_TITLE;
use crate::errors::{error_toast, DashError};
use crate::ui::side_panel::{Route, SidePanel};
use eframe::{egui, NativeOptions};
use egui::{Align2, RichText, Theme, ThemePreference};
use egui_snap_panel::{ControlPanel, DockSide, PanelOptions, SnapConfig};
use egui_theme_switch::ThemeSwitch;
use egui_toast::Toasts;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub dark_mode: bool,
    pub active_route: Route,
    pub side_panel: SidePanel,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            dark_mode: false,
            active_route: Route::default(),
            side_panel: SidePanel::new(true),
        }
    }
}

pub struct Dashboard {
    pub opts: DashboardOptions,
    pub control_panel: Option<ControlPanel>,
    pub toasts: Toasts,
    /// Dock the control panel lands on if the current drag is released.
    dock_hint: Option<DockSide>,
}

impl Dashboard {
    pub fn new(ctx: &egui::Context) -> Result<Self, DashError> {
        let opts = DashboardOptions::default();
        apply_theme(ctx, opts.dark_mode);
        Ok(Self {
            control_panel: Some(mount_control_panel()?),
            opts,
            toasts: Toasts::new()
                .anchor(Align2::RIGHT_TOP, (-10.0, 10.0))
                .direction(egui::Direction::TopDown),
            dock_hint: None,
        })
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            APP_TITLE,
            options,
            Box::new(|cc| {
                set_font(&cc.egui_ctx);
                Ok(Box::new(Dashboard::new(&cc.egui_ctx)?))
            }),
        )
    }

    /// Hiding drops the panel, ending any drag it was tracking. Showing mounts a fresh
    /// panel docked on the left.
    pub fn set_control_panel_visible(&mut self, visible: bool) {
        if visible == self.control_panel.is_some() {
            return;
        }
        if !visible {
            if let Some(mut panel) = self.control_panel.take() {
                panel.teardown();
            }
            info!("control panel hidden");
            return;
        }
        match mount_control_panel() {
            Ok(panel) => {
                self.control_panel = Some(panel);
                info!("control panel shown");
            }
            Err(err) => {
                error!("failed to mount control panel: {err}");
                self.toasts.add(error_toast(err.to_string()));
            }
        }
    }

    fn theme_switch(&mut self, ui: &mut egui::Ui) {
        let mut preference = if self.opts.dark_mode {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        if ui.add(ThemeSwitch::new(&mut preference)).changed() {
            self.opts.dark_mode = match preference {
                ThemePreference::Dark => true,
                ThemePreference::Light => false,
                ThemePreference::System => ui.ctx().system_theme() == Some(Theme::Dark),
            };
        }
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark_mode = self.opts.dark_mode;

        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        egui::SidePanel::left("main_left_panel")
            .resizable(true)
            .default_width(SidePanel::DEFAULT_WIDTH)
            .width_range(SidePanel::MIN_WIDTH..=SidePanel::MAX_WIDTH)
            .show_animated(ctx, self.opts.side_panel.show, |ui| {
                self.navigation(ui);
            });
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.theme_switch(ui);
                ui.label(RichText::new(self.opts.active_route.path()).weak());
                if let Some(side) = self.dock_hint {
                    ui.label(format!("Release to dock {}", format!("{side:?}").to_lowercase()));
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.opts.active_route.label());
        });

        if let Some(panel) = self.control_panel.as_mut() {
            let route = self.opts.active_route;
            let response = panel.show(ctx, &mut self.opts.dark_mode, |panel_ui| {
                panel_ui
                    .ui
                    .label(RichText::new(format!("Viewing {}", route.label())).weak());
            });
            self.dock_hint = response.drop_zones.map(|zones| zones.targeted().side);
        } else {
            self.dock_hint = None;
        }

        if self.opts.dark_mode != dark_mode {
            apply_theme(ctx, self.opts.dark_mode);
        }
        self.toasts.show(ctx);
    }
}

fn mount_control_panel() -> Result<ControlPanel, DashError> {
    Ok(ControlPanel::new(
        SnapConfig::default(),
        PanelOptions::default(),
    )?)
}

pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_theme(Theme::Dark);
        catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
    } else {
        ctx.set_theme(Theme::Light);
        catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
    }
}

fn set_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_the_panel_unmounts_it() {
        let ctx = egui::Context::default();
        let mut app = Dashboard::new(&ctx).unwrap();
        assert!(app.control_panel.is_some());

        app.set_control_panel_visible(false);
        assert!(app.control_panel.is_none());

        app.set_control_panel_visible(true);
        let panel = app.control_panel.as_ref().unwrap();
        assert_eq!(panel.side(), DockSide::Left);
        assert!(!panel.is_dragging());
    }
}
