pub mod behaviors;
pub mod movement;
