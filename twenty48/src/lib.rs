pub use board::*;
pub use commands::*;
pub use config::*;
pub use errors::*;
pub use game::*;
pub use palette::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod commands;
mod config;
mod errors;
mod game;
mod palette;
mod visualization;
