use crate::error::{TimelineError, TimelineResult};

use super::ZoomDirection;

/// One wheel event is one zoom step regardless of its magnitude.
pub fn resolve_wheel_zoom_direction(wheel_delta_y: f64) -> TimelineResult<Option<ZoomDirection>> {
    if !wheel_delta_y.is_finite() {
        return Err(TimelineError::InvalidZoomInput {
            value: wheel_delta_y,
        });
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }
    if wheel_delta_y < 0.0 {
        Ok(Some(ZoomDirection::In))
    } else {
        Ok(Some(ZoomDirection::Out))
    }
}

pub fn resolve_pinch_zoom_factor(pinch_scale_factor: f64) -> TimelineResult<Option<f64>> {
    if !pinch_scale_factor.is_finite() || pinch_scale_factor <= 0.0 {
        return Err(TimelineError::InvalidZoomInput {
            value: pinch_scale_factor,
        });
    }
    if (pinch_scale_factor - 1.0).abs() <= f64::EPSILON {
        return Ok(None);
    }
    Ok(Some(pinch_scale_factor))
}
