/// Construction limits for [`DirectedGraph`](super::DirectedGraph)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Largest accepted vertex count. `None` only bounds by available memory.
    pub max_vertices: Option<usize>,
}

impl GraphConfig {
    /// Creates a configuration without a vertex limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest accepted vertex count
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = Some(max_vertices);
        self
    }

    /// Returns true if a graph of `vertex_count` vertices is allowed
    pub fn permits(&self, vertex_count: usize) -> bool {
        self.max_vertices.map_or(true, |max| vertex_count <= max)
    }
}
