use self::CellWall::*;
use crate::dims::Dims;

/// One grid unit. Walls start out present on all four sides and only ever
/// get removed; `visited` is scratch state for the algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    visited: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
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
    pub fn to_coord(&self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_walled_in() {
        let cell = Cell::new();
        for wall in CellWall::get_in_order() {
            assert!(cell.get_wall(wall));
        }
        assert!(!cell.is_visited());
    }

    #[test]
    fn removing_a_wall_leaves_the_others() {
        let mut cell = Cell::new();
        cell.remove_wall(Right);
        assert!(!cell.get_wall(Right));
        assert!(cell.get_wall(Left));
        assert!(cell.get_wall(Top));
        assert!(cell.get_wall(Bottom));
    }

    #[test]
    fn reverse_walls_pair_up() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
        }
    }
}
