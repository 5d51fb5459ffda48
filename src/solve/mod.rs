use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use hashbrown::HashMap;
use thiserror::Error;

use crate::dims::Dims;
use crate::maze::cell::CellWall;
use crate::maze::Maze;

use self::CellWall::*;

/// Neighbor order for the depth-first and breadth-first searches.
const STACK_ORDER: [CellWall; 4] = [Left, Top, Right, Bottom];

/// Neighbor order for the priority-queue searches.
const QUEUE_ORDER: [CellWall; 4] = [Bottom, Top, Left, Right];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// No cell is marked as the exit. Distinct from an unreachable exit,
    /// which is not an error and only shows as missing `solution` marks.
    #[error("no cell is marked as the exit")]
    NoExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    WeightedBestFirst,
}

impl Algorithm {
    /// Maps the cycling selector counter to a variant, wrapping every four.
    pub fn from_selector(selector: usize) -> Algorithm {
        match selector % 4 {
            0 => Algorithm::DepthFirst,
            1 => Algorithm::BreadthFirst,
            2 => Algorithm::UniformCost,
            _ => Algorithm::WeightedBestFirst,
        }
    }

    /// Display name, as shown by the host application.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::UniformCost => "dijkstra",
            Algorithm::WeightedBestFirst => "aStar",
        }
    }
}

/// Runs the selected search over a maze, from its root to the exit cell,
/// marking `visited` and `solution` overlays as it goes.
///
/// Callers reset the maze between runs; `solve` itself does not, so that a
/// per-frame reset-then-solve loop shows the search live.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    selector: usize,
}

impl Solver {
    pub fn new() -> Solver {
        Solver::default()
    }

    pub fn selector(&self) -> usize {
        self.selector
    }

    /// Advances to the next algorithm.
    pub fn cycle(&mut self) {
        self.selector += 1;
    }

    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_selector(self.selector)
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Searches from `maze.root()` to `maze.exit()`.
    ///
    /// An unreachable exit is not an error: the search just leaves the
    /// `solution` overlay (mostly) unmarked.
    pub fn solve(&self, maze: &mut Maze) -> Result<(), SolveError> {
        let goal = maze.exit().ok_or(SolveError::NoExit)?;
        let root = maze.root();

        match self.algorithm() {
            Algorithm::DepthFirst => {
                depth_first(maze, root, goal);
            }
            Algorithm::BreadthFirst => breadth_first(maze, root, goal),
            Algorithm::UniformCost => dijkstra(maze, root, goal, StepCost::Uniform),
            Algorithm::WeightedBestFirst => dijkstra(maze, root, goal, StepCost::GoalDistance),
        }

        Ok(())
    }
}

/// Recursive depth-first walk. A cell is marked `solution` only when one of
/// its branches reached the goal; dead ends stay visited-only.
fn depth_first(maze: &mut Maze, pos: Dims, goal: Dims) -> bool {
    if maze.visited(pos) {
        return false;
    }
    maze.mark_visited(pos);

    if pos == goal {
        maze.mark_solution(pos);
        return true;
    }

    let mut found = false;
    for wall in STACK_ORDER {
        if let Some(next) = maze.passage_end(pos, wall) {
            if !maze.visited(next) && depth_first(maze, next, goal) {
                found = true;
                break;
            }
        }
    }

    if found {
        maze.mark_solution(pos);
    }
    found
}

fn breadth_first(maze: &mut Maze, root: Dims, goal: Dims) {
    let mut queue = VecDeque::new();
    let mut prev: HashMap<Dims, Dims> = HashMap::new();

    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        if maze.visited(current) {
            continue;
        }
        maze.mark_visited(current);

        if current == goal {
            maze.mark_solution(current);
            break;
        }

        for wall in STACK_ORDER {
            if let Some(next) = maze.passage_end(current, wall) {
                if !prev.contains_key(&next) {
                    prev.insert(next, current);
                    queue.push_back(next);
                }
            }
        }
    }

    walk_back(maze, &prev, goal, root);
}

#[derive(Clone, Copy)]
enum StepCost {
    /// Every passage costs 1; classic shortest path.
    Uniform,
    /// Squared euclidean distance from the *current* cell to the goal,
    /// accumulated into the distance map. Not a true path-length metric, but
    /// a monotone score pulling the search towards the goal.
    GoalDistance,
}

impl StepCost {
    fn cost(self, current: Dims, goal: Dims) -> u64 {
        match self {
            StepCost::Uniform => 1,
            StepCost::GoalDistance => {
                let Dims(dx, dy) = current - goal;
                (dx as i64 * dx as i64 + dy as i64 * dy as i64) as u64
            }
        }
    }
}

/// Min-heap entry. Ties on cost break by insertion order, so the expansion
/// order is deterministic for a given maze.
#[derive(Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u64,
    seq: usize,
    pos: Dims,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-queue relaxation shared by the uniform-cost and weighted
/// best-first searches; only the step cost differs.
///
/// Neighbors are marked `visited` the moment they are considered for
/// relaxation rather than when popped, so a live rendering shows the probed
/// frontier. The root itself is never marked.
fn dijkstra(maze: &mut Maze, root: Dims, goal: Dims, step: StepCost) {
    let mut queue = BinaryHeap::new();
    let mut dist: HashMap<Dims, u64> = HashMap::new();
    let mut prev: HashMap<Dims, Dims> = HashMap::new();
    let mut seq = 0;

    dist.insert(root, 0);
    queue.push(QueueEntry {
        cost: 0,
        seq,
        pos: root,
    });

    while let Some(QueueEntry { pos: current, .. }) = queue.pop() {
        if current == goal {
            break;
        }
        let base = dist[&current];

        for wall in QUEUE_ORDER {
            let Some(next) = maze.passage_end(current, wall) else {
                continue;
            };

            maze.mark_visited(next);
            let candidate = base + step.cost(current, goal);

            if candidate < dist.get(&next).copied().unwrap_or(u64::MAX) {
                dist.insert(next, candidate);
                prev.insert(next, current);
                seq += 1;
                queue.push(QueueEntry {
                    cost: candidate,
                    seq,
                    pos: next,
                });
            }
        }
    }

    walk_back(maze, &prev, goal, root);
}

/// Walks the predecessor chain from the goal back to the root, marking the
/// path. A broken chain (unreachable goal) just stops the walk; the root
/// itself is never marked here.
fn walk_back(maze: &mut Maze, prev: &HashMap<Dims, Dims>, goal: Dims, root: Dims) {
    let mut attempt = goal;
    while attempt != root {
        let Some(&back) = prev.get(&attempt) else {
            return;
        };
        maze.mark_solution(attempt);
        attempt = back;
    }
}
