pub mod assistant;
pub mod errors;
pub mod models;
pub mod prompt;
pub mod providers;
pub mod stats;
