use log::debug;
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use smallvec::SmallVec;

use super::{GenError, Random};
use crate::dims::Dims;
use crate::maze::cell::CellWall;
use crate::maze::Maze;
use crate::trace::Tracer;

/// Randomized recursive backtracking, the depth-first carve: keep knocking
/// the wall out towards a random unvisited neighbor, falling back one cell
/// whenever the walk dead-ends. Run on a fresh grid it opens exactly one
/// route between any two cells.
pub struct Backtracker;

impl Backtracker {
    /// Builds a finished maze: all-walls grid, entrance and exit opened on
    /// the rim, passages carved from `(0,0)`, visited flags cleared.
    ///
    /// With `seed` the layout is reproducible; without it one is drawn from
    /// [`thread_rng`].
    pub fn generate(
        size: Dims,
        seed: Option<u64>,
        trace: &mut impl Tracer,
    ) -> Result<Maze, GenError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        let mut maze = Maze::new(size)?;

        maze.open_outer_wall(Dims::ZERO, CellWall::Top);
        trace.cell_changed(&maze, Dims::ZERO);
        trace.step(&maze);

        let last = size - Dims::ONE;
        maze.open_outer_wall(last, CellWall::Bottom);
        trace.cell_changed(&maze, last);
        trace.step(&maze);

        Self::carve(&mut maze, Dims::ZERO, &mut rng, trace);
        maze.reset_visited();

        debug!("generated a {} maze from seed {}", size, seed);

        Ok(maze)
    }

    /// Carves passages into `maze` starting at `start`, leaving every cell
    /// reachable from it and every cell marked visited.
    ///
    /// The recursion is unrolled onto an explicit stack: the current cell is
    /// popped, and as long as it still has unvisited neighbors it is pushed
    /// back under the chosen one. That re-check after every descent is what
    /// makes a cell branch more than once.
    pub fn carve(maze: &mut Maze, start: Dims, rng: &mut Random, trace: &mut impl Tracer) {
        assert!(maze.is_in_bounds(start), "carve start out of bounds");

        let mut stack = Vec::with_capacity(maze.size().product() as usize);
        maze.set_visited(start, true);
        stack.push(start);

        while let Some(current) = stack.pop() {
            let unvisited = maze
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|&pos| !maze.is_visited(pos))
                .collect::<SmallVec<[Dims; 4]>>();

            if unvisited.is_empty() {
                // dead end, the walls of this cell are final
                trace.cell_changed(maze, current);
                trace.step(maze);
                continue;
            }

            stack.push(current);
            let chosen = *unvisited.choose(rng).unwrap();
            let wall = Maze::which_wall_between(current, chosen).unwrap();
            maze.remove_wall(current, wall);
            maze.set_visited(chosen, true);
            stack.push(chosen);
        }
    }
}
