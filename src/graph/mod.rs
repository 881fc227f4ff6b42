pub mod traits;
pub mod config;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use config::GraphConfig;
pub use directed::DirectedGraph;
