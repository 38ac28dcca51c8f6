use bevy_ecs::prelude::Component;

/// Battle-grid tile an entity currently occupies.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePosition {
    pub col: i32,
    pub row: i32,
}

impl TilePosition {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The tile one step in `direction` from this one. No bounds check;
    /// callers validate against the field dimensions.
    pub fn stepped(&self, direction: Direction) -> TilePosition {
        let (dc, dr) = direction.delta();
        TilePosition::new(self.col + dc, self.row + dr)
    }
}

/// Cardinal step direction on the battle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row delta of a single step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_moves_one_tile() {
        let pos = TilePosition::new(2, 1);
        assert_eq!(pos.stepped(Direction::Left), TilePosition::new(1, 1));
        assert_eq!(pos.stepped(Direction::Down), TilePosition::new(2, 2));
    }
}
