//! Interval maps that store only the boundaries where the value changes,
//! kept in canonical (run-length compressed) form.

pub mod error;
pub mod iter;
pub mod map;
pub mod span;

pub use error::{Error, Result};
pub use iter::{Run, Runs};
pub use map::IntervalMap;
pub use span::SpanExc;
