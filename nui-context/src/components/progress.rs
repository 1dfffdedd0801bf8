//! Progress bar primitive.

use dioxus::prelude::*;

use crate::model::resolve_color;

/// Clamp a progress value into the displayable `0..=100` range.
#[must_use]
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Thin horizontal progress bar. `color` is a palette token or CSS color.
#[component]
pub fn Progress(value: f64, color: String) -> Element {
    let value = clamp_progress(value);
    let fill = resolve_color(&color);

    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{value}",
            div {
                class: "progress-bar",
                style: "width: {value}%; background-color: {fill};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert!((clamp_progress(40.0) - 40.0).abs() < f64::EPSILON);
        assert!((clamp_progress(150.0) - 100.0).abs() < f64::EPSILON);
        assert!(clamp_progress(-5.0).abs() < f64::EPSILON);
        assert!(clamp_progress(f64::NAN).abs() < f64::EPSILON);
    }
}
