pub mod bracket;
pub mod config;
pub mod logging;
pub mod predicted;
pub mod snapshot_io;
pub mod standings;
pub mod state;
pub mod third_place;
pub mod tiebreak;
pub mod tournament;
