pub mod common;
pub mod config;
pub mod map;
pub mod solver;
pub mod stat;
