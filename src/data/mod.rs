//! Results input and table output
//!
//! File discovery, CSV reading and CSV writing around the pipeline.

pub mod export;
pub mod source;

pub use export::{write_standings, write_team_games, write_team_games_file};
pub use source::{CsvDirectorySource, GameSource};
