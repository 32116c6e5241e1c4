mod generate;
pub mod layout;
pub mod render;
pub mod resolve;

pub use generate::GenerateBlueprint;
pub use layout::ComposeLayout;
pub use render::{render_room_outline, RenderBlueprint};
pub use resolve::ResolveVertices;
