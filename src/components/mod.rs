pub mod background;
pub mod nav;
pub mod splash;
