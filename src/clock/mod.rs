//! Time to dial geometry.
//!
//! Numerals sit around the face in alphabetical order of their English
//! names, so the hands point at the slot of the ranked label rather than at
//! the usual sequential position.

pub mod angles;
pub mod labels;
pub mod snapshot;

pub use angles::{HandAngles, HandAnglesDegrees};
pub use labels::{label_maps, LabelOrderMap};
pub use snapshot::{ClockData, TimeDataResponse, TimeSample};
