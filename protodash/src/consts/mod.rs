pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");
pub const APP_TITLE: &str = "Protodash";
