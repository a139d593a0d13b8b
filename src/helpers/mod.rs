//! Helper functions shared by the templates and the controller

mod date;
mod html;

pub use date::*;
pub use html::*;
