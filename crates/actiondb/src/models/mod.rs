//! Domain models for strokes and database entries

mod gesture;
mod stroke;
mod stroke_info;

pub use gesture::{Comparator, Gesture};
pub use stroke::{Point, Stroke};
pub use stroke_info::{StrokeId, StrokeInfo};

pub(crate) use stroke_info::UnnamedStrokeInfo;
