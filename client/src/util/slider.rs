//! Pointer geometry for horizontal percentage sliders.

/// Percentage of `width` covered by `pointer_x`, measured from `left`.
///
/// Unclamped; callers clamp. A zero-width track reports 0.
pub fn percent_from_pointer(pointer_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 || !width.is_finite() {
        return 0.0;
    }
    (pointer_x - left) / width * 100.0
}

/// Percentage for a pointer event over `track`, using its bounding rect.
#[cfg(feature = "hydrate")]
pub fn percent_for_event(track: &web_sys::Element, ev: &leptos::ev::PointerEvent) -> f64 {
    let rect = track.get_bounding_client_rect();
    percent_from_pointer(f64::from(ev.client_x()), rect.left(), rect.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pointer_across_track() {
        assert!((percent_from_pointer(150.0, 100.0, 200.0) - 25.0).abs() < f64::EPSILON);
        assert!((percent_from_pointer(400.0, 100.0, 200.0) - 150.0).abs() < f64::EPSILON);
        assert!(percent_from_pointer(50.0, 100.0, 200.0) < 0.0);
    }

    #[test]
    fn zero_width_track_is_zero() {
        assert!(percent_from_pointer(10.0, 0.0, 0.0).abs() < f64::EPSILON);
    }
}
