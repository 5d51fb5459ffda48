use crate::dims::Dims;

/// One grid position. Holds only the passage topology; the solver-visible
/// flags (`visited`, `solution`, `exit`) live in overlays on [`super::Maze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

impl Cell {
    /// A fully walled cell.
    pub fn new() -> Cell {
        Cell::default()
    }

    /// Opens the passage on the given side. One-sided; [`super::Maze::remove_wall`]
    /// keeps the symmetric invariant by opening the neighbor's side too.
    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            CellWall::Left => self.left = true,
            CellWall::Top => self.top = true,
            CellWall::Right => self.right = true,
            CellWall::Bottom => self.bottom = true,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Left => self.left,
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
        }
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        !self.is_open(wall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        use CellWall::*;
        [Left, Right, Top, Bottom]
    }
}
