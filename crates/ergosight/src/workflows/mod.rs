pub mod assistant;
pub mod catalog;
pub mod pacing;
pub mod scenario;
pub mod upload;
