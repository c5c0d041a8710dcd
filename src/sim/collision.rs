//! Terrain collision detection
//!
//! The tricky part of Wave Rider: the boundary height under the player sits
//! between two sampled terrain points, so every check interpolates along the
//! bracketing segment. Segments are scanned in increasing x and the first
//! bracket wins; a player momentarily outside all segments (mid-splice) is a
//! skipped check, never a crash.

use glam::Vec2;

use crate::consts::SPRITE_SIZE;
use crate::lerp;

/// Boundary height at horizontal position `x`, linearly interpolated on the
/// first segment with `x1 <= x <= x2`. `None` when no segment brackets `x`.
pub fn height_at(points: &[Vec2], x: f32) -> Option<f32> {
    for w in points.windows(2) {
        let (p1, p2) = (w[0], w[1]);
        if p1.x <= x && x <= p2.x {
            let t = (x - p1.x) / (p2.x - p1.x);
            return Some(lerp(p1.y, p2.y, t));
        }
    }
    None
}

/// True when the sprite's bottom edge has sunk below the floor under it
pub fn floor_hit(player_x: f32, player_y: f32, floor: &[Vec2]) -> bool {
    match height_at(floor, player_x) {
        Some(h) => player_y + SPRITE_SIZE > h,
        None => false,
    }
}

/// True when the sprite's top edge has risen above the ceiling under it
pub fn ceiling_hit(player_x: f32, player_y: f32, ceiling: &[Vec2]) -> bool {
    match height_at(ceiling, player_x) {
        Some(h) => player_y < h,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn height_at_is_exact_interpolation() {
        let seg = [Vec2::new(100.0, 500.0), Vec2::new(160.0, 520.0)];
        assert_eq!(height_at(&seg, 100.0), Some(500.0));
        assert_eq!(height_at(&seg, 160.0), Some(520.0));
        assert_eq!(height_at(&seg, 130.0), Some(510.0));
    }

    #[test]
    fn height_at_outside_coverage_is_none() {
        let seg = [Vec2::new(100.0, 500.0), Vec2::new(160.0, 520.0)];
        assert_eq!(height_at(&seg, 99.9), None);
        assert_eq!(height_at(&seg, 160.1), None);
        assert_eq!(height_at(&[], 130.0), None);
        assert_eq!(height_at(&[Vec2::new(0.0, 0.0)], 0.0), None);
    }

    #[test]
    fn height_at_uses_first_bracketing_segment() {
        // Shared endpoint at x=160: the left segment is scanned first
        let pts = [
            Vec2::new(100.0, 500.0),
            Vec2::new(160.0, 520.0),
            Vec2::new(220.0, 480.0),
        ];
        assert_eq!(height_at(&pts, 160.0), Some(520.0));
    }

    #[test]
    fn floor_hit_threshold() {
        // Segment (100,500)-(160,520), player at x=130: floor height is 510,
        // so with a 30px sprite the hit threshold is y > 480
        let floor = [Vec2::new(100.0, 500.0), Vec2::new(160.0, 520.0)];
        assert!(!floor_hit(130.0, 480.0, &floor));
        assert!(floor_hit(130.0, 480.1, &floor));
    }

    #[test]
    fn ceiling_hit_threshold() {
        let ceiling = [Vec2::new(100.0, 200.0), Vec2::new(160.0, 240.0)];
        // Height under x=130 is 220
        assert!(!ceiling_hit(130.0, 220.0, &ceiling));
        assert!(ceiling_hit(130.0, 219.9, &ceiling));
    }

    #[test]
    fn checks_skip_when_player_uncovered() {
        let floor = [Vec2::new(300.0, 500.0), Vec2::new(360.0, 520.0)];
        assert!(!floor_hit(130.0, 599.0, &floor));
        assert!(!ceiling_hit(130.0, 0.0, &floor));
    }

    proptest! {
        #[test]
        fn interpolation_stays_between_endpoints(
            y1 in 0.0f32..600.0,
            y2 in 0.0f32..600.0,
            t in 0.0f32..=1.0,
        ) {
            let seg = [Vec2::new(0.0, y1), Vec2::new(60.0, y2)];
            let h = height_at(&seg, t * 60.0).unwrap();
            let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
            prop_assert!(h >= lo - 1e-3 && h <= hi + 1e-3);
        }
    }
}
