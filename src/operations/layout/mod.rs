mod compose_layout;
mod group;

pub use compose_layout::ComposeLayout;
pub use group::{group_walls, RoomGroup};
