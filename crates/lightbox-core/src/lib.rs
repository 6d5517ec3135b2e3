pub mod animation;
pub mod classifier;
pub mod config;
pub mod consts;
pub mod double_tap;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod host;
pub mod script;
pub mod size;
pub mod swipe;
pub mod transform;
pub mod view;
