use crate::array::Array2D;
use crate::dims::Dims;
use crate::maze::cell::{Cell, CellWall};

use self::CellWall::*;

/// Rectangular grid of cells with passage topology, plus the mutable overlays
/// the solver works on.
///
/// The topology (`cells`, `root`) is fixed once generation finishes; only the
/// `visited`/`solution` overlays and the exit position change afterwards.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Array2D<Cell>,
    root: Dims,
    visited: Array2D<bool>,
    solution: Array2D<bool>,
    exit: Option<Dims>,
}

impl Maze {
    /// Creates a fully walled maze of the given size with the given root.
    ///
    /// Returns `None` if the size is not positive or the root is out of
    /// bounds.
    pub fn new(size: Dims, root: Dims) -> Option<Self> {
        let cells = Array2D::new_dims(Cell::new(), size)?;
        cells.dim_to_idx(root)?;

        Some(Maze {
            visited: Array2D::new_dims(false, size)?,
            solution: Array2D::new_dims(false, size)?,
            cells,
            root,
            exit: None,
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn root(&self) -> Dims {
        self.root
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_in_bounds(cell) && self.is_in_bounds(cell + wall.to_coord())
    }

    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(Right),
            (1, 0) => Some(Left),
            (0, -1) => Some(Bottom),
            (0, 1) => Some(Top),
            _ => None,
        }
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// Grid-adjacent neighbor positions, walls or not.
    pub fn get_neighbors_pos(&self, cell: Dims) -> Vec<Dims> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.is_in_bounds(pos))
            .collect()
    }

    /// The neighbor on the other side of an open passage, `None` if the wall
    /// is still standing.
    pub fn passage_end(&self, cell: Dims, wall: CellWall) -> Option<Dims> {
        let end = cell + wall.to_coord();
        (self.is_in_bounds(end) && self.cells.get(cell)?.is_open(wall)).then_some(end)
    }

    /// Carves a passage, opening the wall from both sides. Out-of-bounds
    /// walls are ignored.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[cell + wall.to_coord()].remove_wall(wall.reverse_wall());
    }

    /// Number of open passages; each passage is counted once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [Right, Bottom]
                    .into_iter()
                    .filter(|&wall| self.passage_end(pos, wall).is_some())
                    .count()
            })
            .sum()
    }

    /// Whether every cell is reachable from the root by following passages.
    pub fn is_connected(&self) -> bool {
        let mut seen = Array2D::new_dims(false, self.size()).expect("maze size is positive");
        let mut stack = vec![self.root];
        seen[self.root] = true;
        let mut count = 1;

        while let Some(current) = stack.pop() {
            for wall in CellWall::get_in_order() {
                if let Some(next) = self.passage_end(current, wall) {
                    if !seen[next] {
                        seen[next] = true;
                        count += 1;
                        stack.push(next);
                    }
                }
            }
        }

        count == self.cells.len()
    }

    pub fn visited(&self, pos: Dims) -> bool {
        *self.visited.get(pos).unwrap_or(&false)
    }

    pub fn mark_visited(&mut self, pos: Dims) {
        if let Some(flag) = self.visited.get_mut(pos) {
            *flag = true;
        }
    }

    pub fn is_solution(&self, pos: Dims) -> bool {
        *self.solution.get(pos).unwrap_or(&false)
    }

    pub fn mark_solution(&mut self, pos: Dims) {
        if let Some(flag) = self.solution.get_mut(pos) {
            *flag = true;
        }
    }

    pub fn exit(&self) -> Option<Dims> {
        self.exit
    }

    /// Moves the exit. The `Option` keeps the at-most-one-exit invariant
    /// structural; out-of-bounds positions are refused.
    pub fn set_exit(&mut self, exit: Option<Dims>) {
        if let Some(pos) = exit {
            if !self.is_in_bounds(pos) {
                log::warn!("Exit position out of bounds: {:?}", pos);
                return;
            }
        }
        self.exit = exit;
    }

    /// Clears the `visited` and `solution` overlays. Passages and the exit
    /// are untouched. Idempotent.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.solution.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::{CellWall, Dims, Maze};

    #[test]
    fn new_rejects_bad_input() {
        assert!(Maze::new(Dims(0, 3), Dims::ZERO).is_none());
        assert!(Maze::new(Dims(3, -1), Dims::ZERO).is_none());
        assert!(Maze::new(Dims(3, 3), Dims(3, 0)).is_none());
        assert!(Maze::new(Dims(3, 3), Dims(0, 0)).is_some());
    }

    #[test]
    fn remove_wall_is_symmetric() {
        let mut maze = Maze::new(Dims(3, 3), Dims::ZERO).unwrap();
        maze.remove_wall(Dims(1, 1), CellWall::Right);

        assert!(maze.get_cell(Dims(1, 1)).unwrap().is_open(CellWall::Right));
        assert!(maze.get_cell(Dims(2, 1)).unwrap().is_open(CellWall::Left));
        assert_eq!(maze.passage_end(Dims(2, 1), CellWall::Left), Some(Dims(1, 1)));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn remove_wall_ignores_border() {
        let mut maze = Maze::new(Dims(2, 2), Dims::ZERO).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Left);
        maze.remove_wall(Dims(1, 1), CellWall::Bottom);
        assert_eq!(maze.passage_count(), 0);
    }

    #[test]
    fn wall_symmetry_holds_everywhere() {
        let mut maze = Maze::new(Dims(4, 4), Dims::ZERO).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        maze.remove_wall(Dims(2, 2), CellWall::Top);
        maze.remove_wall(Dims(3, 1), CellWall::Bottom);

        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            for wall in CellWall::get_in_order() {
                if let Some(end) = maze.passage_end(pos, wall) {
                    assert_eq!(maze.passage_end(end, wall.reverse_wall()), Some(pos));
                }
            }
        }
    }

    #[test]
    fn reset_is_idempotent_and_keeps_topology() {
        let mut maze = Maze::new(Dims(3, 3), Dims::ZERO).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        maze.set_exit(Some(Dims(2, 2)));
        maze.mark_visited(Dims(1, 0));
        maze.mark_solution(Dims(1, 0));

        maze.reset();
        maze.reset();

        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            assert!(!maze.visited(pos));
            assert!(!maze.is_solution(pos));
        }
        assert_eq!(maze.exit(), Some(Dims(2, 2)));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn set_exit_refuses_out_of_bounds() {
        let mut maze = Maze::new(Dims(3, 3), Dims::ZERO).unwrap();
        maze.set_exit(Some(Dims(5, 5)));
        assert_eq!(maze.exit(), None);

        maze.set_exit(Some(Dims(1, 1)));
        maze.set_exit(Some(Dims(9, 9)));
        assert_eq!(maze.exit(), Some(Dims(1, 1)));
    }
}
