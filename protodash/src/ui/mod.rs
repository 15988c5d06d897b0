pub mod menubar;
pub mod side_panel;
