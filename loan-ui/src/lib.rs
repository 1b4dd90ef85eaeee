pub mod app;
pub mod assistant;
pub mod console;
pub mod export;
pub mod tasks;
pub mod utils;
