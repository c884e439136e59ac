pub mod actions;
pub mod cli;
pub mod color;
pub mod fit;
pub mod font;
pub mod generator;
pub mod geometry;
pub mod gui;
pub mod logging;
pub mod settings;
pub mod state;
pub mod window;
