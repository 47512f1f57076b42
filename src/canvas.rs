use tracing::debug;

use crate::config::CanvasConfig;
use crate::geometry::Rect;
use crate::math::{Point2, TOLERANCE};
use crate::operations::BoundaryVertices;

/// Drag-to-draw state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing {
        anchor: Point2,
    },
}

/// The rectangle list plus its interactive drawing state.
///
/// Pointer positions go in; committed rectangles and a live preview come
/// out. Nothing is rendered here.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCanvas {
    rects: Vec<Rect>,
    state: DrawState,
    /// `(width, height)` to clamp pointer positions into, if any.
    clamp: Option<(f64, f64)>,
    tolerance: Option<f64>,
}

impl BoundaryCanvas {
    /// Creates an empty canvas that accepts any pointer position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas configured from `config`.
    #[must_use]
    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            clamp: config
                .clamp_to_canvas
                .then_some((config.width, config.height)),
            ..Self::default()
        }
    }

    /// Sets the merge tolerance used by [`Self::boundary_vertices`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Starts a drag at `p`. A second press while drawing restarts the drag.
    pub fn pointer_down(&mut self, p: Point2) {
        self.state = DrawState::Drawing {
            anchor: self.clamped(p),
        };
    }

    /// Returns the rectangle a release at `p` would commit, or `None` when idle.
    #[must_use]
    pub fn pointer_move(&self, p: Point2) -> Option<Rect> {
        match self.state {
            DrawState::Idle => None,
            DrawState::Drawing { anchor } => Some(Rect::from_corners(anchor, self.clamped(p))),
        }
    }

    /// Ends a drag at `p`, committing and returning the normalized rectangle.
    ///
    /// Does nothing when idle. Zero-area rectangles from a plain click are
    /// committed as well.
    pub fn pointer_up(&mut self, p: Point2) -> Option<Rect> {
        let DrawState::Drawing { anchor } = self.state else {
            return None;
        };
        self.state = DrawState::Idle;
        let rect = Rect::from_corners(anchor, self.clamped(p));
        self.add_rectangle(rect);
        Some(rect)
    }

    /// The pointer left the surface mid-drag; commits like a release.
    pub fn pointer_out(&mut self, p: Point2) -> Option<Rect> {
        self.pointer_up(p)
    }

    /// Appends a rectangle to the list.
    pub fn add_rectangle(&mut self, rect: Rect) {
        self.rects.push(rect);
        debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            count = self.rects.len(),
            "committed boundary rectangle"
        );
    }

    /// Removes every rectangle. An in-progress drag is left alone.
    pub fn clear(&mut self) {
        debug!(count = self.rects.len(), "cleared boundary");
        self.rects.clear();
    }

    #[must_use]
    pub fn rectangles(&self) -> &[Rect] {
        &self.rects
    }

    #[must_use]
    pub fn state(&self) -> DrawState {
        self.state
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    /// Recomputes the boundary vertex set of the current rectangle list.
    #[must_use]
    pub fn boundary_vertices(&self) -> Vec<Point2> {
        BoundaryVertices::new(&self.rects)
            .with_tolerance(self.tolerance.unwrap_or(TOLERANCE))
            .execute()
    }

    fn clamped(&self, p: Point2) -> Point2 {
        match self.clamp {
            Some((w, h)) => Point2::new(p.x.clamp(0.0, w), p.y.clamp(0.0, h)),
            None => p,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn drag_commits_normalized_rect() {
        let mut canvas = BoundaryCanvas::new();
        canvas.pointer_down(Point2::new(50.0, 80.0));
        assert!(canvas.is_drawing());
        let rect = canvas.pointer_up(Point2::new(10.0, 20.0)).unwrap();
        assert_eq!(rect, Rect::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(canvas.rectangles(), &[rect]);
        assert_eq!(canvas.state(), DrawState::Idle);
    }

    #[test]
    fn move_previews_without_committing() {
        let mut canvas = BoundaryCanvas::new();
        assert!(canvas.pointer_move(Point2::new(1.0, 1.0)).is_none());
        canvas.pointer_down(Point2::new(0.0, 0.0));
        let preview = canvas.pointer_move(Point2::new(5.0, 7.0)).unwrap();
        assert_eq!(preview, Rect::new(0.0, 0.0, 5.0, 7.0));
        assert!(canvas.rectangles().is_empty());
    }

    #[test]
    fn pointer_out_commits_mid_drag() {
        let mut canvas = BoundaryCanvas::new();
        canvas.pointer_down(Point2::new(10.0, 10.0));
        let rect = canvas.pointer_out(Point2::new(520.0, 30.0)).unwrap();
        assert_eq!(rect, Rect::new(10.0, 10.0, 510.0, 20.0));
        assert!(!canvas.is_drawing());
        // A later release with no press is ignored.
        assert!(canvas.pointer_up(Point2::new(0.0, 0.0)).is_none());
        assert_eq!(canvas.rectangles().len(), 1);
    }

    #[test]
    fn click_without_drag_commits_zero_area() {
        let mut canvas = BoundaryCanvas::new();
        canvas.pointer_down(Point2::new(5.0, 5.0));
        let rect = canvas.pointer_up(Point2::new(5.0, 5.0)).unwrap();
        assert!(rect.is_degenerate());
        assert_eq!(canvas.boundary_vertices(), vec![Point2::new(5.0, 5.0)]);
    }

    #[test]
    fn clamping_keeps_rect_on_canvas() {
        let config = CanvasConfig {
            width: 100.0,
            height: 100.0,
            clamp_to_canvas: true,
        };
        let mut canvas = BoundaryCanvas::with_config(&config);
        canvas.pointer_down(Point2::new(-10.0, 50.0));
        let rect = canvas.pointer_out(Point2::new(150.0, 60.0)).unwrap();
        assert_eq!(rect, Rect::new(0.0, 50.0, 100.0, 10.0));
    }

    #[test]
    fn clear_empties_list() {
        let mut canvas = BoundaryCanvas::new();
        canvas.add_rectangle(Rect::new(0.0, 0.0, 1.0, 1.0));
        canvas.add_rectangle(Rect::new(2.0, 2.0, 1.0, 1.0));
        canvas.clear();
        assert!(canvas.rectangles().is_empty());
        assert!(canvas.boundary_vertices().is_empty());
    }

    #[test]
    fn vertices_recomputed_after_each_commit() {
        let mut canvas = BoundaryCanvas::new();
        canvas.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(canvas.boundary_vertices().len(), 4);
        canvas.add_rectangle(Rect::new(2.0, 2.0, 2.0, 2.0));
        assert_eq!(canvas.boundary_vertices().len(), 4);
        canvas.add_rectangle(Rect::new(5.0, 5.0, 10.0, 10.0));
        // (10, 10) and (5, 5) are now swallowed; two crossings appear.
        assert_eq!(canvas.boundary_vertices().len(), 8);
    }
}
