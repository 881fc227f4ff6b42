pub mod traits;
pub mod path;
mod engine;
pub mod dijkstra;
pub mod dense;
pub mod batch;

pub use traits::{Relaxation, ShortestPathAlgorithm, ShortestPathResult};
pub use path::{Path, PathReconstructor};
