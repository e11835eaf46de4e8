pub mod app;
pub mod helpers;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod view;
