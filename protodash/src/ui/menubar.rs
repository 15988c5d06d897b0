use crate::app::Dashboard;
use crate::consts::REPOSITORY_URL;
use crate::errors::{error_toast, DashError};
use egui::{Button, Checkbox, Key, KeyboardShortcut, Modifiers};
use tracing::error;

const BTN_WIDTH: f32 = 200.0;

impl Dashboard {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // View
            self.view_menu(ui);
            // Help
            self.help_menu(ui);
        });
    }

    fn view_menu(&mut self, ui: &mut egui::Ui) {
        let toggle_panel_shortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Period);
        if ui.input_mut(|i| i.consume_shortcut(&toggle_panel_shortcut)) {
            self.set_control_panel_visible(self.control_panel.is_none());
        }
        ui.menu_button("View", |ui| {
            let toggle_panel_shortcut = ui.ctx().format_shortcut(&toggle_panel_shortcut);
            let label = if self.control_panel.is_some() {
                "Hide Control Panel"
            } else {
                "Show Control Panel"
            };
            let toggle_panel_btn = Button::new(label)
                .min_size((BTN_WIDTH, 0.).into())
                .shortcut_text(toggle_panel_shortcut);
            if ui.add(toggle_panel_btn).clicked() {
                self.set_control_panel_visible(self.control_panel.is_none());
                ui.close();
            }
            ui.separator();
            ui.add(Checkbox::new(&mut self.opts.side_panel.show, "Navigation"));
            ui.add(Checkbox::new(&mut self.opts.dark_mode, "Dark Mode"));
        });
    }

    fn help_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            let about_btn = Button::new("About").min_size((BTN_WIDTH, 0.).into());
            if ui.add(about_btn).clicked() {
                if let Err(err) = open::that(REPOSITORY_URL) {
                    error!("opening page {REPOSITORY_URL} error: {err}");
                    self.toasts.add(error_toast(DashError::from(err).to_string()));
                }
                ui.close();
            }
        });
    }
}
