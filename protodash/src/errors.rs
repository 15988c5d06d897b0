use egui::WidgetText;
use egui_snap_panel::PanelError;
use egui_toast::{Toast, ToastKind, ToastOptions};

#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("{0}")]
    Panel(#[from] PanelError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub fn error_toast<E: Into<WidgetText>>(err: E) -> Toast {
    Toast {
        text: err.into(),
        kind: ToastKind::Error,
        options: ToastOptions::default()
            .duration_in_seconds(5.0)
            .show_progress(true),
        ..Default::default()
    }
}
