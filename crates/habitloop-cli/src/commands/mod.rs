pub mod award;
pub mod board;
pub mod challenge;
pub mod config;
pub mod day;
pub mod focus;
pub mod goals;
pub mod idea;
pub mod notes;
pub mod stats;
pub mod track;
