//! pf-core: stable foundation for pathfinder.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - distance (planar points and the Euclidean / Manhattan metrics)
//! - timing (wall-clock timer for search bodies)
//! - error (shared error types)

pub mod distance;
pub mod error;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use distance::{Point, euclidean, manhattan};
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use timing::{Timer, as_millis_f64};
