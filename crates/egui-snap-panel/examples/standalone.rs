use egui_snap_panel::{ControlPanel, PanelOptions, SnapConfig};

struct App {
    panel: ControlPanel,
    dark_mode: bool,
    clicks: u32,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            panel: ControlPanel::new(SnapConfig::default(), PanelOptions::default())
                .expect("default config is valid"),
            dark_mode: true,
            clicks: 0,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Drag the panel in the corner");
            ui.label(format!("Docked {:?}", self.panel.side()));
        });

        let clicks = &mut self.clicks;
        self.panel.show(ctx, &mut self.dark_mode, |panel_ui| {
            let button = panel_ui.ui.button(format!("Clicked {clicks} times"));
            if panel_ui.control(button).clicked() {
                *clicks += 1;
            }
        });
        ctx.set_theme(if self.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "snap panel",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
