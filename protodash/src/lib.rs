pub mod app;
pub mod consts;
pub mod errors;
pub mod ui;
