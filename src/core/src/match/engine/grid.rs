use serde::Serialize;

pub const GRID_WIDTH: u8 = 6;
pub const GRID_HEIGHT: u8 = 5;

/// One cell of the 6x5 pitch grid.
///
/// The home team attacks toward increasing x, the away team toward
/// decreasing x. Positions are always kept in range: any update that
/// would leave the grid is nudged back to the nearest in-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub x: u8,
    pub y: u8,
}

impl GridPosition {
    pub fn new(x: u8, y: u8) -> Self {
        GridPosition {
            x: x.min(GRID_WIDTH - 1),
            y: y.min(GRID_HEIGHT - 1),
        }
    }

    /// Centre spot used for every kickoff and restart after a goal.
    pub fn kickoff_spot() -> Self {
        GridPosition {
            x: GRID_WIDTH / 2 - 1,
            y: GRID_HEIGHT / 2,
        }
    }

    /// The column a side is shooting at.
    pub fn target_column(is_home_attacking: bool) -> u8 {
        if is_home_attacking { GRID_WIDTH - 1 } else { 0 }
    }

    /// Applies a signed displacement, nudging out-of-bounds results back
    /// inside the grid instead of reflecting them.
    pub fn advanced(&self, dx: i8, dy: i8) -> Self {
        let x = (self.x as i16 + dx as i16).clamp(0, (GRID_WIDTH - 1) as i16);
        let y = (self.y as i16 + dy as i16).clamp(0, (GRID_HEIGHT - 1) as i16);

        GridPosition {
            x: x as u8,
            y: y as u8,
        }
    }

    pub fn distance_to_column(&self, column: u8) -> u8 {
        self.x.abs_diff(column)
    }

    pub fn distance_to_point(&self, x: f32, y: f32) -> f32 {
        let dx = self.x as f32 - x;
        let dy = self.y as f32 - y;

        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_edge_row(&self) -> bool {
        self.y == 0 || self.y == GRID_HEIGHT - 1
    }

    /// A shot makes sense only close to the target goal and never from
    /// the blind corner cells of the target column itself.
    pub fn has_shooting_angle(&self, target_column: u8) -> bool {
        self.distance_to_column(target_column) <= 1 && !(self.x == target_column && self.is_edge_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_into_range() {
        let position = GridPosition::new(9, 9);

        assert_eq!(position.x, GRID_WIDTH - 1);
        assert_eq!(position.y, GRID_HEIGHT - 1);
    }

    #[test]
    fn test_advanced_nudges_back_inside() {
        let position = GridPosition::new(5, 0);

        let moved = position.advanced(2, -3);

        assert_eq!(moved, GridPosition::new(5, 0));

        let moved_back = position.advanced(-7, 6);

        assert_eq!(moved_back, GridPosition::new(0, 4));
    }

    #[test]
    fn test_shooting_angle() {
        // One column away from the home target
        assert!(GridPosition::new(4, 2).has_shooting_angle(5));

        // Too far out
        assert!(!GridPosition::new(2, 2).has_shooting_angle(5));

        // Corner flag cell of the target column has no angle
        assert!(!GridPosition::new(5, 0).has_shooting_angle(5));
        assert!(GridPosition::new(5, 2).has_shooting_angle(5));
    }

    #[test]
    fn test_kickoff_spot_is_central() {
        let spot = GridPosition::kickoff_spot();

        assert!(spot.x < GRID_WIDTH && spot.y < GRID_HEIGHT);
        assert_eq!(spot.y, GRID_HEIGHT / 2);
    }
}
