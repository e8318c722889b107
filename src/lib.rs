pub mod cell;
pub mod config;
pub mod cursor;
pub mod events;
pub mod grid;
pub mod input;
pub mod memorial;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod step;
pub mod terminal;

pub type ScreenSize = u16;
