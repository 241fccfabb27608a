//! Static display data

mod colour;

pub use colour::{Colour, UGLY_THING_COLOURS};
