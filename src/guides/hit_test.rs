use crate::guides::model::Guide;

pub const HOVER_RADIUS: u32 = 15;
pub const DRAG_RADIUS: u32 = 20;

/// Which guide wins when several hit zones overlap the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Lowest index, i.e. the earliest added (bottom-most) guide.
    #[default]
    FirstAdded,
    /// Highest index, i.e. the guide drawn last.
    Topmost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRadius {
    Hover,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTestConfig {
    pub hover_radius: u32,
    pub drag_radius: u32,
    pub tie_break: TieBreak,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            hover_radius: HOVER_RADIUS,
            drag_radius: DRAG_RADIUS,
            tie_break: TieBreak::default(),
        }
    }
}

impl HitTestConfig {
    pub fn radius(&self, kind: HitRadius) -> u32 {
        match kind {
            HitRadius::Hover => self.hover_radius,
            HitRadius::Drag => self.drag_radius,
        }
    }

    pub fn find(&self, guides: &[Guide], point: (i32, i32), kind: HitRadius) -> Option<usize> {
        find_guide_at(guides, point, self.radius(kind), self.tie_break)
    }
}

pub fn perpendicular_distance(guide: &Guide, point: (i32, i32)) -> u64 {
    let coord = guide.orientation.axis_coord(point) as i64;
    (coord - guide.position as i64).unsigned_abs()
}

pub fn is_hit(guide: &Guide, point: (i32, i32), radius: u32) -> bool {
    perpendicular_distance(guide, point) <= u64::from(radius)
}

pub fn find_guide_at(
    guides: &[Guide],
    point: (i32, i32),
    radius: u32,
    tie_break: TieBreak,
) -> Option<usize> {
    let hit = |(_, guide): &(usize, &Guide)| is_hit(guide, point, radius);
    let found = match tie_break {
        TieBreak::FirstAdded => guides.iter().enumerate().find(hit),
        TieBreak::Topmost => guides.iter().enumerate().rev().find(hit),
    };
    found.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_boundary_is_inclusive() {
        let guide = Guide::vertical(100);
        assert!(is_hit(&guide, (115, 0), HOVER_RADIUS));
        assert!(is_hit(&guide, (85, 0), HOVER_RADIUS));
        assert!(!is_hit(&guide, (116, 0), HOVER_RADIUS));
        assert!(!is_hit(&guide, (84, 0), HOVER_RADIUS));
    }

    #[test]
    fn distance_uses_the_perpendicular_axis() {
        let horizontal = Guide::horizontal(40);
        assert_eq!(perpendicular_distance(&horizontal, (9000, 45)), 5);
        let vertical = Guide::vertical(40);
        assert_eq!(perpendicular_distance(&vertical, (45, 9000)), 5);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let guide = Guide::vertical(i32::MIN);
        assert_eq!(
            perpendicular_distance(&guide, (i32::MAX, 0)),
            u64::from(u32::MAX)
        );
    }

    #[test]
    fn overlapping_zones_follow_tie_break() {
        let guides = [Guide::vertical(100), Guide::vertical(110), Guide::horizontal(5)];
        assert_eq!(
            find_guide_at(&guides, (105, 500), DRAG_RADIUS, TieBreak::FirstAdded),
            Some(0)
        );
        assert_eq!(
            find_guide_at(&guides, (105, 500), DRAG_RADIUS, TieBreak::Topmost),
            Some(1)
        );
        assert_eq!(
            find_guide_at(&guides, (500, 500), DRAG_RADIUS, TieBreak::FirstAdded),
            None
        );
    }

    #[test]
    fn drag_radius_reaches_further_than_hover_radius() {
        let config = HitTestConfig::default();
        let guides = [Guide::vertical(100)];
        assert_eq!(config.find(&guides, (118, 0), HitRadius::Hover), None);
        assert_eq!(config.find(&guides, (118, 0), HitRadius::Drag), Some(0));
    }
}
