pub mod boundary;

pub use boundary::{extract_boundary_vertices, extract_boundary_vertices_opt, BoundaryVertices};
