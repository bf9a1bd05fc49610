//! Platform-independent toolbar logic. Nothing in here touches the renderer.

pub mod geometry;
pub mod hover;
pub mod motion;
pub mod platform;
pub mod registry;
pub mod spring;
pub mod timing;
pub mod visuals;
