pub mod banner;
pub mod frames;
pub mod list;
pub mod play;
mod terminal;
