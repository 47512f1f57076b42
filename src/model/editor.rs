use crate::canvas::BoundaryCanvas;
use crate::config::EditorConfig;
use crate::layout::LayoutDescription;

use super::graph::RoomGraph;

/// Everything the user has entered: rooms, connectivity and the boundary.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    graph: RoomGraph,
    canvas: BoundaryCanvas,
}

impl Editor {
    /// Creates an empty editor using `config`.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let canvas =
            BoundaryCanvas::with_config(&config.canvas).with_tolerance(config.boundary.tolerance);
        Self {
            config,
            graph: RoomGraph::new(),
            canvas,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut RoomGraph {
        &mut self.graph
    }

    #[must_use]
    pub fn canvas(&self) -> &BoundaryCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut BoundaryCanvas {
        &mut self.canvas
    }

    /// Snapshots the current state into a serializable layout description.
    #[must_use]
    pub fn layout(&self) -> LayoutDescription {
        LayoutDescription::from_editor(self)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
