use rand::{thread_rng, Rng as _, SeedableRng as _};

use super::{GenerationError, Random};
use crate::array::Array2D;
use crate::dims::Dims;
use crate::maze::cell::CellWall;
use crate::maze::Maze;

/// Chance that the loopy pass opens any given remaining wall.
const EXTRA_PASSAGE_CHANCE: f64 = 0.1;

/// Randomized frontier ("Prim") spanning-tree generator.
pub struct RndPrims {}

impl RndPrims {
    /// Generates a maze rooted at `Dims::ZERO`. With `loopy`, a second pass
    /// opens some of the remaining walls, turning the tree into a graph with
    /// cycles.
    pub fn generate(size: Dims, loopy: bool, seed: Option<u64>) -> Result<Maze, GenerationError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        Self::generate_individual(size, Dims::ZERO, loopy, &mut rng)
    }

    pub fn generate_individual(
        size: Dims,
        start: Dims,
        loopy: bool,
        rng: &mut Random,
    ) -> Result<Maze, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }
        let mut maze =
            Maze::new(size, start).ok_or(GenerationError::InvalidStart { size, start })?;

        let mut in_tree =
            Array2D::new_dims(false, size).expect("size was checked to be positive");
        in_tree[start] = true;

        // Walls between an in-tree cell and an out-of-tree neighbor. Entries
        // go stale once the far side joins the tree through another wall;
        // those are discarded when drawn.
        let mut frontier: Vec<(Dims, CellWall)> = Vec::new();
        Self::push_frontier_walls(&maze, &in_tree, start, &mut frontier);

        while !frontier.is_empty() {
            let (pos, wall) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            let next = pos + wall.to_coord();

            if in_tree[next] {
                continue;
            }

            maze.remove_wall(pos, wall);
            in_tree[next] = true;
            Self::push_frontier_walls(&maze, &in_tree, next, &mut frontier);
        }

        if loopy {
            Self::carve_loops(&mut maze, rng);
        }

        log::debug!(
            "generated {}x{} maze with {} passages",
            size.0,
            size.1,
            maze.passage_count()
        );

        Ok(maze)
    }

    fn push_frontier_walls(
        maze: &Maze,
        in_tree: &Array2D<bool>,
        cell: Dims,
        frontier: &mut Vec<(Dims, CellWall)>,
    ) {
        for neighbor in maze.get_neighbors_pos(cell) {
            if !in_tree[neighbor] {
                let wall = Maze::which_wall_between(cell, neighbor).unwrap();
                frontier.push((cell, wall));
            }
        }
    }

    /// Opens remaining walls with a fixed chance. Only ever adds passages, so
    /// connectivity is preserved.
    fn carve_loops(maze: &mut Maze, rng: &mut Random) {
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            for wall in [CellWall::Right, CellWall::Bottom] {
                if maze.is_valid_wall(pos, wall)
                    && maze.get_cell(pos).unwrap().is_closed(wall)
                    && rng.gen_bool(EXTRA_PASSAGE_CHANCE)
                {
                    maze.remove_wall(pos, wall);
                }
            }
        }
    }
}
