//! Soft light that follows the pointer over the page.

/// Radius of the lit circle, in CSS pixels.
pub const RADIUS: u32 = 600;

/// CSS `background` for the overlay. Nothing is lit until the pointer has
/// moved over the page.
pub fn spotlight_background(pointer: Option<(f64, f64)>) -> String {
    match pointer {
        Some((x, y)) if x.is_finite() && y.is_finite() => format!(
            "radial-gradient({RADIUS}px circle at {x:.0}px {y:.0}px, rgba(255, 255, 255, 0.06), transparent 80%)"
        ),
        _ => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlit_before_pointer_moves() {
        assert_eq!(spotlight_background(None), "none");
    }

    #[test]
    fn test_centered_on_pointer() {
        assert_eq!(
            spotlight_background(Some((120.0, 48.4))),
            "radial-gradient(600px circle at 120px 48px, rgba(255, 255, 255, 0.06), transparent 80%)"
        );
    }

    #[test]
    fn test_non_finite_pointer_is_unlit() {
        assert_eq!(spotlight_background(Some((f64::NAN, 10.0))), "none");
        assert_eq!(spotlight_background(Some((10.0, f64::INFINITY))), "none");
    }
}
