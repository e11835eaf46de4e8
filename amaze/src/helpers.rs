use amaze_core::dims::Dims;
use amaze_core::maze::{CellWall, Maze};

pub fn line_center(container_start: i32, container_end: i32, item_width: i32) -> i32 {
    (container_end - container_start - item_width) / 2 + container_start
}

pub fn box_center(container_start: Dims, container_end: Dims, box_dims: Dims) -> Dims {
    Dims(
        line_center(container_start.0, container_end.0, box_dims.0),
        line_center(container_start.1, container_end.1, box_dims.1),
    )
}

/// Character footprint of a maze: one corridor character per cell, wall
/// characters between them and around the rim.
pub fn maze_render_size(maze: &Maze) -> Dims {
    maze.size() * 2 + Dims::ONE
}

/// Maze position to its corridor character, the center of the cell.
pub fn from_maze_to_real(pos_on_maze: Dims) -> Dims {
    pos_on_maze * 2 + Dims::ONE
}

pub fn double_line_corner(left: bool, top: bool, right: bool, bottom: bool) -> char {
    match (left, top, right, bottom) {
        (false, false, false, false) => '▪',
        (false, false, false, true) => '▪',
        (false, false, true, false) => '▪',
        (false, false, true, true) => '╔',
        (false, true, false, false) => '▪',
        (false, true, false, true) => '║',
        (false, true, true, false) => '╚',
        (false, true, true, true) => '╠',
        (true, false, false, false) => '▪',
        (true, false, false, true) => '╗',
        (true, false, true, false) => '═',
        (true, false, true, true) => '╦',
        (true, true, false, false) => '╝',
        (true, true, false, true) => '╣',
        (true, true, true, false) => '╩',
        (true, true, true, true) => '╬',
    }
}

/// Character of the rendered maze at `pos` on the [`maze_render_size`] grid.
/// Junctions sit at even coordinates, wall segments and corridors at the odd
/// ones between them.
pub fn wall_char(maze: &Maze, pos: Dims) -> char {
    let size = maze.size();

    match (pos.0 % 2 == 0, pos.1 % 2 == 0) {
        (false, false) => ' ',
        (false, true) => {
            if horizontal_wall(maze, pos.0 / 2, pos.1 / 2) {
                '═'
            } else {
                ' '
            }
        }
        (true, false) => {
            if vertical_wall(maze, pos.0 / 2, pos.1 / 2) {
                '║'
            } else {
                ' '
            }
        }
        (true, true) => {
            let Dims(x, y) = pos / 2;
            double_line_corner(
                x > 0 && horizontal_wall(maze, x - 1, y),
                y > 0 && vertical_wall(maze, x, y - 1),
                x < size.0 && horizontal_wall(maze, x, y),
                y < size.1 && vertical_wall(maze, x, y),
            )
        }
    }
}

/// Whole rendered maze, top row first.
pub fn render_lines(maze: &Maze) -> Vec<String> {
    let size = maze_render_size(maze);
    (0..size.1)
        .map(|y| (0..size.0).map(|x| wall_char(maze, Dims(x, y))).collect())
        .collect()
}

// the rim rows and columns read the wall off the single cell next to them,
// everything further in reads the earlier cell of the pair
fn horizontal_wall(maze: &Maze, x: i32, row: i32) -> bool {
    let (pos, wall) = if row == 0 {
        (Dims(x, 0), CellWall::Top)
    } else {
        (Dims(x, row - 1), CellWall::Bottom)
    };
    maze.get_cell(pos).is_some_and(|cell| cell.get_wall(wall))
}

fn vertical_wall(maze: &Maze, col: i32, y: i32) -> bool {
    let (pos, wall) = if col == 0 {
        (Dims(0, y), CellWall::Left)
    } else {
        (Dims(col - 1, y), CellWall::Right)
    };
    maze.get_cell(pos).is_some_and(|cell| cell.get_wall(wall))
}
