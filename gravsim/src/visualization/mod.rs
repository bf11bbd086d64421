pub mod camera;
pub mod grid;
pub mod viewport;
