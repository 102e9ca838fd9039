pub mod command;
pub mod console;
pub mod constants;
pub mod event;
pub mod layout;
pub mod render;
