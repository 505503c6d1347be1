// Internal shared infrastructure for the Fulmen library

pub mod error;
