//! Utility modules shared by the generator and the viewer.

pub mod date;
pub mod html;
