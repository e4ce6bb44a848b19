pub mod classifier;
pub mod executor;
pub mod game;
pub mod planner;
pub mod preferences;
pub mod registry;
pub mod repack;
pub mod staging;
