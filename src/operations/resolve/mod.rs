mod closure;
mod resolve_vertices;

pub use closure::closure_residual;
pub use resolve_vertices::ResolveVertices;
