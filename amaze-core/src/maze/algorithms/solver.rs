use log::debug;

use crate::dims::Dims;
use crate::maze::cell::CellWall;
use crate::maze::Maze;
use crate::trace::Tracer;

/// Depth-first walk from the top-left cell to the bottom-right one,
/// backtracking out of dead ends. It reports the first route it finds,
/// which is rarely the shortest.
pub struct Solver;

struct Frame {
    pos: Dims,
    dir: usize,
}

impl Frame {
    fn new(pos: Dims) -> Self {
        Self { pos, dir: 0 }
    }
}

impl Solver {
    /// The order in which a cell's exits are tried: right, down, up, left.
    pub const DIRECTIONS: [CellWall; 4] = [
        CellWall::Right,
        CellWall::Bottom,
        CellWall::Top,
        CellWall::Left,
    ];

    /// Walks `maze` from `(0,0)` towards the opposite corner and reports
    /// whether it got there. Expects visited flags to be clear, the way
    /// [`Backtracker::generate`](super::Backtracker::generate) leaves them,
    /// and marks every cell it enters.
    ///
    /// Entering a cell traces a [`step`](Tracer::step); every attempted
    /// transition traces a [`moved`](Tracer::moved), once forward and once
    /// more with `undo` set if the descent came back empty-handed. `false`
    /// means no route exists, which on a walled-off grid is the expected
    /// answer rather than an error.
    pub fn solve(maze: &mut Maze, trace: &mut impl Tracer) -> bool {
        let target = maze.size() - Dims::ONE;

        trace.step(maze);
        maze.set_visited(Dims::ZERO, true);
        if target == Dims::ZERO {
            debug!("maze is a single cell, solved on arrival");
            return true;
        }

        let mut stack = vec![Frame::new(Dims::ZERO)];

        while let Some(top) = stack.last_mut() {
            let pos = top.pos;

            match Self::next_exit(maze, top) {
                Some(next) => {
                    trace.moved(maze, pos, next, false);
                    trace.step(maze);
                    maze.set_visited(next, true);
                    if next == target {
                        debug!("reached {} with a path {} cells long", target, stack.len() + 1);
                        return true;
                    }
                    stack.push(Frame::new(next));
                }
                None => {
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        trace.moved(maze, parent.pos, pos, true);
                    }
                }
            }
        }

        debug!("no route to {}", target);
        false
    }

    /// First untried direction out of `frame` that leads through an open
    /// wall to an unvisited in-bounds cell. Advances the frame's cursor
    /// past everything it rejects, so the next call resumes where this one
    /// left off.
    fn next_exit(maze: &Maze, frame: &mut Frame) -> Option<Dims> {
        while frame.dir < Self::DIRECTIONS.len() {
            let wall = Self::DIRECTIONS[frame.dir];
            frame.dir += 1;

            let next = frame.pos + wall.to_coord();
            if maze.is_in_bounds(next)
                && !maze.get_cell(frame.pos).unwrap().get_wall(wall)
                && !maze.is_visited(next)
            {
                return Some(next);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::super::Backtracker;
    use super::*;
    use crate::trace::NoTrace;

    #[derive(Default)]
    struct RecordingTracer {
        steps: usize,
        moves: Vec<(Dims, Dims, bool)>,
    }

    impl Tracer for RecordingTracer {
        fn step(&mut self, _maze: &Maze) {
            self.steps += 1;
        }

        fn moved(&mut self, _maze: &Maze, from: Dims, to: Dims, undo: bool) {
            self.moves.push((from, to, undo));
        }
    }

    /// Grid with every interior wall removed, full of cycles.
    fn open_grid(size: Dims) -> Maze {
        let mut maze = Maze::new(size).unwrap();
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            maze.remove_wall(pos, CellWall::Right);
            maze.remove_wall(pos, CellWall::Bottom);
        }
        maze
    }

    #[test]
    fn solves_every_generated_maze() {
        for size in [Dims(1, 8), Dims(8, 1), Dims(5, 3), Dims(16, 12)] {
            for seed in 0..8 {
                let mut maze = Backtracker::generate(size, Some(seed), &mut NoTrace).unwrap();
                assert!(
                    Solver::solve(&mut maze, &mut NoTrace),
                    "failed to solve a {} maze from seed {}",
                    size,
                    seed,
                );
            }
        }
    }

    #[test]
    fn single_cell_maze_solves_on_arrival() {
        let mut maze = Backtracker::generate(Dims(1, 1), Some(7), &mut NoTrace).unwrap();
        let mut trace = RecordingTracer::default();

        assert!(Solver::solve(&mut maze, &mut trace));
        assert_eq!(trace.steps, 1);
        assert!(trace.moves.is_empty());
    }

    #[test]
    fn walled_off_grid_reports_no_path() {
        let mut maze = Maze::new(Dims(2, 1)).unwrap();
        let mut trace = RecordingTracer::default();

        assert!(!Solver::solve(&mut maze, &mut trace));
        assert_eq!(trace.steps, 1);
        assert!(trace.moves.is_empty());
    }

    #[test]
    fn tries_right_before_down() {
        let mut maze = open_grid(Dims(2, 2));
        let mut trace = RecordingTracer::default();

        assert!(Solver::solve(&mut maze, &mut trace));
        assert_eq!(
            trace.moves,
            vec![
                (Dims(0, 0), Dims(1, 0), false),
                (Dims(1, 0), Dims(1, 1), false),
            ],
        );
    }

    #[test]
    fn backtracks_out_of_a_dead_end() {
        let mut maze = Maze::new(Dims(2, 2)).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        maze.remove_wall(Dims(0, 0), CellWall::Bottom);
        maze.remove_wall(Dims(0, 1), CellWall::Right);

        let mut trace = RecordingTracer::default();
        assert!(Solver::solve(&mut maze, &mut trace));

        // (1,0) is a dead end, so its descent is undone before the walk
        // heads down
        assert_eq!(
            trace.moves,
            vec![
                (Dims(0, 0), Dims(1, 0), false),
                (Dims(0, 0), Dims(1, 0), true),
                (Dims(0, 0), Dims(0, 1), false),
                (Dims(0, 1), Dims(1, 1), false),
            ],
        );
    }

    #[test]
    fn never_enters_a_cell_twice() {
        let mut mazes = Vec::new();
        for seed in 0..6 {
            mazes.push(Backtracker::generate(Dims(10, 10), Some(seed), &mut NoTrace).unwrap());
        }
        mazes.push(open_grid(Dims(3, 3)));

        for mut maze in mazes {
            let mut trace = RecordingTracer::default();
            Solver::solve(&mut maze, &mut trace);

            let mut seen = HashSet::new();
            seen.insert(Dims::ZERO);
            for &(_, to, undo) in &trace.moves {
                if !undo {
                    assert!(seen.insert(to), "entered {} twice", to);
                }
            }
        }
    }

    #[test]
    fn undo_signals_replay_to_the_found_path() {
        for seed in 0..12 {
            let mut maze = Backtracker::generate(Dims(12, 9), Some(seed), &mut NoTrace).unwrap();
            let mut trace = RecordingTracer::default();
            assert!(Solver::solve(&mut maze, &mut trace));

            let mut path = vec![Dims::ZERO];
            let mut forward = 0;
            for &(from, to, undo) in &trace.moves {
                if undo {
                    assert_eq!(path.pop(), Some(to));
                    assert_eq!(path.last(), Some(&from));
                } else {
                    assert_eq!(path.last(), Some(&from));
                    path.push(to);
                    forward += 1;
                }
            }

            // what survives the undos is the walk start to target
            assert_eq!(path.first(), Some(&Dims::ZERO));
            assert_eq!(path.last(), Some(&Dims(11, 8)));
            assert_eq!(trace.steps, forward + 1);
        }
    }
}
