//! Response normalization onto the 0–4 intensity scale.

use mizan_core::models::response::{CompositeValue, Frequency, ResponseValue};

/// Intensity at or above which a symptom counts as present ("sometimes").
pub const PRESENCE_THRESHOLD: f64 = 2.0;

const MAX_INTENSITY: f64 = 4.0;

/// Map any response shape to a comparable intensity.
///
/// Numeric codes pass through unchanged. Labels, selections and composites
/// map onto 0–4; anything unrecognized (including a missing response)
/// reads as 0.
pub fn intensity(value: Option<&ResponseValue>) -> f64 {
    match value {
        None => 0.0,
        Some(ResponseValue::Number(n)) => *n,
        Some(ResponseValue::Label(label)) => label_intensity(label),
        Some(ResponseValue::Selection(selected)) => {
            if selected.is_empty() {
                0.0
            } else {
                MAX_INTENSITY
            }
        }
        Some(ResponseValue::Composite(composite)) => composite_intensity(composite),
    }
}

/// Whether the response reports the symptom as present.
pub fn is_present(value: Option<&ResponseValue>) -> bool {
    intensity(value) >= PRESENCE_THRESHOLD
}

fn label_intensity(label: &str) -> f64 {
    match label {
        "yes" | "changed" => MAX_INTENSITY,
        "no" | "no_change" | "normal" => 0.0,
        other => Frequency::from_label(other).map_or(0.0, |f| f64::from(f.score())),
    }
}

/// Composites read only their gate: an open gate is full intensity, the
/// second-stage answer is ignored.
fn composite_intensity(composite: &CompositeValue) -> f64 {
    if composite.gate_open() {
        MAX_INTENSITY
    } else {
        0.0
    }
}
