#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelError {
    #[error("invalid panel config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}
