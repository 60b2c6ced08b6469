pub mod maintenance;
pub mod menu;
pub mod misc;
pub mod notes;
