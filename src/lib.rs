pub mod gui;
pub mod icon;
pub mod logging;
pub mod ruler;
pub mod settings;
pub mod viewport;
