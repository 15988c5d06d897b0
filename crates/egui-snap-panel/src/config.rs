use crate::errors::PanelError;

/// Distance kept between the resting panel and the viewport's side and bottom edges.
pub const MARGIN: f32 = 8.0;
/// Width of the panel. Every placement computation assumes the rendered width matches it.
pub const PANEL_WIDTH: f32 = 230.0;
/// Pointer travel (per axis) that turns a press into a drag.
pub const DRAG_THRESHOLD: f32 = 3.0;
/// Seconds the panel takes to settle into its dock after a release.
pub const SETTLE_DURATION: f32 = 0.25;
/// Seconds the body takes to collapse or expand.
pub const BODY_ANIMATION: f32 = 0.2;
/// Panel height used before the first measurement.
pub const FALLBACK_PANEL_HEIGHT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    pub margin: f32,
    pub panel_width: f32,
    pub drag_threshold: f32,
    pub settle_duration: f32,
}

impl SnapConfig {
    pub const DEFAULT: Self = Self {
        margin: MARGIN,
        panel_width: PANEL_WIDTH,
        drag_threshold: DRAG_THRESHOLD,
        settle_duration: SETTLE_DURATION,
    };

    pub fn validate(&self) -> Result<(), PanelError> {
        check("margin", self.margin, |v| v >= 0.0)?;
        check("panel_width", self.panel_width, |v| v > 0.0)?;
        check("drag_threshold", self.drag_threshold, |v| v >= 0.0)?;
        check("settle_duration", self.settle_duration, |v| v >= 0.0)
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check(field: &'static str, value: f32, valid: impl Fn(f32) -> bool) -> Result<(), PanelError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(PanelError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SnapConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_width() {
        let config = SnapConfig {
            panel_width: 0.0,
            ..SnapConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(PanelError::InvalidConfig {
                field: "panel_width",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_margin_and_nan() {
        let negative = SnapConfig {
            margin: -1.0,
            ..SnapConfig::DEFAULT
        };
        assert!(negative.validate().is_err());

        let nan = SnapConfig {
            drag_threshold: f32::NAN,
            ..SnapConfig::DEFAULT
        };
        assert!(matches!(
            nan.validate(),
            Err(PanelError::InvalidConfig {
                field: "drag_threshold",
                ..
            })
        ));
    }

    #[test]
    fn zero_settle_duration_is_allowed() {
        let config = SnapConfig {
            settle_duration: 0.0,
            ..SnapConfig::DEFAULT
        };
        assert!(config.validate().is_ok());
    }
}
