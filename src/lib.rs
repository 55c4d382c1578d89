pub mod catalog;
pub mod config;
pub mod errors;
pub mod game;
pub mod io;
pub mod logging;
pub mod solver;
pub mod symbols;
pub mod types;
