//! Profiling modes the stats object can carry, keyed by their one-letter wire key.

pub use api::ProfileData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    FlameGraph,
    MemoryStats,
    CodeHeatmap,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [Self::FlameGraph, Self::MemoryStats, Self::CodeHeatmap];

    /// Maps a top-level key of the stats object. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "c" => Some(Self::FlameGraph),
            "m" => Some(Self::MemoryStats),
            "h" => Some(Self::CodeHeatmap),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::FlameGraph => "c",
            Self::MemoryStats => "m",
            Self::CodeHeatmap => "h",
        }
    }

    /// DOM id of the tab's content container.
    pub fn tab_id(self) -> &'static str {
        match self {
            Self::FlameGraph => "flame-graph",
            Self::MemoryStats => "memory-chart",
            Self::CodeHeatmap => "code-heatmap",
        }
    }
}
