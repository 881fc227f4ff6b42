//! Presentation of shortest path results as text tables or JSON.

use std::fmt::{Debug, Write};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::algorithm::{PathReconstructor, ShortestPathResult};
use crate::Result;

/// One vertex of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRow {
    pub vertex: usize,
    /// `None` when the vertex is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
}

/// Distances and paths from one source, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathReport {
    pub algorithm: String,
    pub source: usize,
    pub rows: Vec<DistanceRow>,
}

impl ShortestPathReport {
    /// Builds a report, reconstructing the path to every reachable vertex
    pub fn from_result<W>(algorithm: &str, result: &ShortestPathResult<W>) -> Result<Self>
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut rows = Vec::with_capacity(result.vertex_count());
        for vertex in 0..result.vertex_count() {
            let path = PathReconstructor::reconstruct(result, vertex)?;
            rows.push(DistanceRow {
                vertex,
                distance: path.as_ref().and_then(|p| p.distance.to_f64()),
                path: path.map(|p| p.vertices),
            });
        }

        Ok(ShortestPathReport {
            algorithm: algorithm.to_string(),
            source: result.source,
            rows,
        })
    }

    /// Number of reachable vertices in the report
    pub fn reachable_count(&self) -> usize {
        self.rows.iter().filter(|row| row.distance.is_some()).count()
    }
}

/// Rendering options for [`render_table`]
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Digits after the decimal point; `None` prints integral distances without decimals
    pub precision: Option<usize>,
    /// Whether to include the path column
    pub show_paths: bool,
    /// Text printed for unreachable distances
    pub infinity_label: String,
    /// Text printed instead of a path for unreachable vertices
    pub no_path_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: None,
            show_paths: true,
            infinity_label: "INF".to_string(),
            no_path_label: "No path".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_paths(mut self, show_paths: bool) -> Self {
        self.show_paths = show_paths;
        self
    }

    /// Formats a distance (or its absence) according to this configuration
    pub fn format_distance(&self, distance: Option<f64>) -> String {
        match (distance, self.precision) {
            (None, _) => self.infinity_label.clone(),
            (Some(d), Some(precision)) => format!("{:.*}", precision, d),
            (Some(d), None) if d.fract() == 0.0 => format!("{:.0}", d),
            (Some(d), None) => format!("{}", d),
        }
    }
}

/// Formats a vertex sequence as `0 -> 1 -> 3`
pub fn format_path(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders a report as a `Vertex / Distance / Path` table
pub fn render_table(report: &ShortestPathReport, config: &ReportConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Shortest distances from vertex {} ({}):", report.source, report.algorithm);
    if config.show_paths {
        let _ = writeln!(out, "{:<8}{:<12}{}", "Vertex", "Distance", "Path");
        let _ = writeln!(out, "{:<8}{:<12}{}", "------", "--------", "----");
    } else {
        let _ = writeln!(out, "{:<8}{}", "Vertex", "Distance");
        let _ = writeln!(out, "{:<8}{}", "------", "--------");
    }

    for row in &report.rows {
        let distance = config.format_distance(row.distance);
        if config.show_paths {
            let path = match &row.path {
                Some(vertices) => format_path(vertices),
                None => config.no_path_label.clone(),
            };
            let _ = writeln!(out, "{:<8}{:<12}{}", row.vertex, distance, path);
        } else {
            let _ = writeln!(out, "{:<8}{}", row.vertex, distance);
        }
    }

    out
}

/// Serializes a report as pretty-printed JSON
pub fn to_json(report: &ShortestPathReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
