use smallvec::SmallVec;

use super::algorithms::GenError;
use super::cell::{Cell, CellWall};
use crate::dims::Dims;

/// The grid of cells. Walls only ever come out in matched pairs through
/// [`Maze::remove_wall`], except the single-sided boundary openings made by
/// [`Maze::open_outer_wall`] for the entrance and the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Maze {
    /// Builds an all-walls maze. Zero or negative dimensions are rejected
    /// here, before any algorithm touches the grid.
    pub fn new(size: Dims) -> Result<Maze, GenError> {
        if !size.all_positive() {
            return Err(GenError::InvalidSize(size));
        }

        let (width, height) = (size.0 as usize, size.1 as usize);
        Ok(Maze {
            cells: vec![vec![Cell::new(); width]; height],
            width,
            height,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Returns the wall of `cell` that faces `cell2`, or `None` when the two
    /// are not orthogonal neighbors.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| wall.to_coord())
            .filter(|off| self.is_valid_neighbor(cell, *off))
            .map(|off| cell + off)
            .collect()
    }

    /// Removes the wall between `cell` and its neighbor on the `wall` side,
    /// both sides at once. No-op when there is no neighbor there.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell.1 as usize][cell.0 as usize].remove_wall(wall);
        let neighbor = cell + wall.to_coord();
        self.cells[neighbor.1 as usize][neighbor.0 as usize].remove_wall(wall.reverse_wall());
    }

    /// Opens a wall on the outer rim of the grid, used for the entrance and
    /// the exit. No-op for walls shared by two cells; those go through
    /// [`Maze::remove_wall`] so both sides stay in step.
    pub fn open_outer_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_in_bounds(cell) || self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell.1 as usize][cell.0 as usize].remove_wall(wall);
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        if self.is_in_bounds(pos) {
            Some(&self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            None
        }
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        if self.is_in_bounds(pos) {
            Some(&mut self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            None
        }
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.get_cell(pos).is_some_and(Cell::is_visited)
    }

    pub fn set_visited(&mut self, pos: Dims, visited: bool) {
        if let Some(cell) = self.get_cell_mut(pos) {
            cell.set_visited(visited);
        }
    }

    pub fn reset_visited(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.set_visited(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::cell::CellWall::*;

    #[test]
    fn rejects_empty_and_negative_sizes() {
        assert!(Maze::new(Dims(0, 5)).is_err());
        assert!(Maze::new(Dims(5, 0)).is_err());
        assert!(Maze::new(Dims(0, 0)).is_err());
        assert!(Maze::new(Dims(-1, 3)).is_err());
        assert!(Maze::new(Dims(1, 1)).is_ok());
    }

    #[test]
    fn walls_come_out_in_pairs() {
        let mut maze = Maze::new(Dims(3, 3)).unwrap();
        maze.remove_wall(Dims(0, 0), Right);

        assert!(!maze.get_cell(Dims(0, 0)).unwrap().get_wall(Right));
        assert!(!maze.get_cell(Dims(1, 0)).unwrap().get_wall(Left));
        assert!(maze.get_cell(Dims(0, 0)).unwrap().get_wall(Bottom));
    }

    #[test]
    fn remove_wall_ignores_the_rim() {
        let mut maze = Maze::new(Dims(2, 2)).unwrap();
        maze.remove_wall(Dims(0, 0), Left);
        maze.remove_wall(Dims(0, 0), Top);

        assert!(maze.get_cell(Dims(0, 0)).unwrap().get_wall(Left));
        assert!(maze.get_cell(Dims(0, 0)).unwrap().get_wall(Top));
    }

    #[test]
    fn open_outer_wall_is_single_sided_and_rim_only() {
        let mut maze = Maze::new(Dims(2, 2)).unwrap();

        maze.open_outer_wall(Dims(0, 0), Top);
        assert!(!maze.get_cell(Dims(0, 0)).unwrap().get_wall(Top));

        // interior wall stays put, that one needs a pair
        maze.open_outer_wall(Dims(0, 0), Right);
        assert!(maze.get_cell(Dims(0, 0)).unwrap().get_wall(Right));
        assert!(maze.get_cell(Dims(1, 0)).unwrap().get_wall(Left));
    }

    #[test]
    fn which_wall_between_neighbors() {
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(2, 1)), Some(Right));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(0, 1)), Some(Left));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(1, 2)), Some(Bottom));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(1, 0)), Some(Top));
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(2, 2)), None);
        assert_eq!(Maze::which_wall_between(Dims(1, 1), Dims(1, 1)), None);
    }

    #[test]
    fn neighbors_stop_at_the_rim() {
        let maze = Maze::new(Dims(3, 3)).unwrap();
        assert_eq!(maze.get_neighbors_pos(Dims(0, 0)).len(), 2);
        assert_eq!(maze.get_neighbors_pos(Dims(1, 0)).len(), 3);
        assert_eq!(maze.get_neighbors_pos(Dims(1, 1)).len(), 4);
    }

    #[test]
    fn reset_visited_clears_every_cell() {
        let mut maze = Maze::new(Dims(3, 2)).unwrap();
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            maze.set_visited(pos, true);
        }
        maze.reset_visited();
        assert!(Dims::iter_fill(Dims::ZERO, maze.size()).all(|pos| !maze.is_visited(pos)));
    }
}
