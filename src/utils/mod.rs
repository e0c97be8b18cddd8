pub mod reveal;
pub mod scroll;
pub mod theme;
