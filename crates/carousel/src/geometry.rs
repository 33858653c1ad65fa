//! Angle arithmetic for panels on a ring.
//!
//! All angles are in degrees.

/// Angular spacing between `count` panels, or `None` for an empty ring.
pub fn sector_angle(count: usize) -> Option<f64> {
    (count > 0).then(|| 360.0 / count as f64)
}

/// Placement angle of the panel at `index`.
pub fn placement_angle(theta: f64, index: usize) -> f64 {
    theta * index as f64
}

/// Signed offset of a panel from the viewer, normalized into (-180, 180].
///
/// The raw difference is reduced modulo 360 keeping the sign of the
/// dividend, then shifted by one turn if it falls outside the range.
pub fn facing_offset(placement: f64, current: f64) -> f64 {
    let mut diff = (placement - current) % 360.0;
    if diff <= -180.0 {
        diff += 360.0;
    }
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// A panel faces the viewer while its offset is strictly inside half a sector.
pub fn is_facing(offset: f64, theta: f64) -> bool {
    offset.abs() < theta / 2.0
}

/// Nearest multiple of `theta`. Halves round away from zero.
pub fn snap_to_sector(angle: f64, theta: f64) -> f64 {
    theta * (angle / theta).round()
}

/// One easing step from `current` toward `target`.
pub fn ease_toward(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Formats a number for a CSS transform, printing negative zero as `0`.
pub(crate) fn css_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Inline transform placing a panel on the ring.
pub fn panel_transform(placement: f64, radius: f64) -> String {
    format!(
        "rotateX({}deg) translateZ({}px)",
        css_number(placement),
        css_number(radius)
    )
}

/// Inline transform of the ring container for the current angle.
pub fn wheel_transform(radius: f64, current: f64) -> String {
    format!(
        "translateZ(-{}px) rotateX({}deg)",
        css_number(radius),
        css_number(-current)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_angle() {
        assert_eq!(sector_angle(4), Some(90.0));
        assert_eq!(sector_angle(3), Some(120.0));
        assert_eq!(sector_angle(1), Some(360.0));
        assert_eq!(sector_angle(0), None);
    }

    #[test]
    fn test_facing_offset_range() {
        assert_eq!(facing_offset(0.0, 0.0), 0.0);
        assert_eq!(facing_offset(270.0, 0.0), -90.0);
        assert_eq!(facing_offset(0.0, 270.0), 90.0);
        assert_eq!(facing_offset(90.0, 720.0), 90.0);
        assert_eq!(facing_offset(0.0, -450.0), 90.0);
    }

    #[test]
    fn test_facing_offset_half_turn_is_positive() {
        assert_eq!(facing_offset(180.0, 0.0), 180.0);
        assert_eq!(facing_offset(0.0, 180.0), 180.0);
        assert_eq!(facing_offset(0.0, -180.0), 180.0);
    }

    #[test]
    fn test_is_facing_boundary_is_exclusive() {
        assert!(is_facing(44.999, 90.0));
        assert!(is_facing(-44.999, 90.0));
        assert!(!is_facing(45.0, 90.0));
        assert!(!is_facing(-45.0, 90.0));
    }

    #[test]
    fn test_snap_to_sector() {
        assert_eq!(snap_to_sector(0.0, 90.0), 0.0);
        assert_eq!(snap_to_sector(44.0, 90.0), 0.0);
        assert_eq!(snap_to_sector(46.0, 90.0), 90.0);
        assert_eq!(snap_to_sector(-46.0, 90.0), -90.0);
        assert_eq!(snap_to_sector(45.0, 90.0), 90.0);
        assert_eq!(snap_to_sector(-45.0, 90.0), -90.0);
        assert_eq!(snap_to_sector(400.0, 120.0), 360.0);
    }

    #[test]
    fn test_ease_toward() {
        assert_eq!(ease_toward(0.0, 90.0, 0.1), 9.0);
        assert_eq!(ease_toward(90.0, 90.0, 0.1), 90.0);
        assert_eq!(ease_toward(10.0, 0.0, 0.5), 5.0);
    }

    #[test]
    fn test_transforms() {
        assert_eq!(
            panel_transform(90.0, 640.0),
            "rotateX(90deg) translateZ(640px)"
        );
        assert_eq!(
            panel_transform(22.5, 576.5),
            "rotateX(22.5deg) translateZ(576.5px)"
        );
        assert_eq!(
            wheel_transform(640.0, 0.0),
            "translateZ(-640px) rotateX(0deg)"
        );
        assert_eq!(
            wheel_transform(640.0, 9.0),
            "translateZ(-640px) rotateX(-9deg)"
        );
        assert_eq!(
            wheel_transform(640.0, -90.0),
            "translateZ(-640px) rotateX(90deg)"
        );
    }
}
