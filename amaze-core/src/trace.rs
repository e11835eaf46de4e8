use crate::dims::Dims;
use crate::maze::Maze;

/// Observer hooked into the maze algorithms so a UI can follow along.
///
/// Every method defaults to a no-op and none of them can feed anything back:
/// the algorithms produce the same maze and the same path whether anything
/// is watching or not.
pub trait Tracer {
    /// The walls of `pos` are settled for now and worth drawing.
    fn cell_changed(&mut self, maze: &Maze, pos: Dims) {
        let _ = (maze, pos);
    }

    /// A unit of work finished; a watcher may refresh its display and pace
    /// the animation here.
    fn step(&mut self, maze: &Maze) {
        let _ = maze;
    }

    /// The solver moved between two neighboring cells, `undo` when it is
    /// retreating from a dead end.
    fn moved(&mut self, maze: &Maze, from: Dims, to: Dims, undo: bool) {
        let _ = (maze, from, to, undo);
    }
}

/// Tracer that ignores everything, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {}
