//! SMS delivery implementations

mod console;

pub use console::ConsoleSms;
