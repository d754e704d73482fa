pub mod assets;
pub mod config;
pub mod error;
pub mod gui;
pub mod math;
pub mod model;
pub mod pick;

pub use error::Error;
