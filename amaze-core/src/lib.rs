pub mod dims;
pub mod maze;
pub mod trace;
