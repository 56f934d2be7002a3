//! Map geometry: datasets, projection, hit testing and rendering.
//!
//! Countries and rivers are loaded once from JSON, recentered on the
//! reference coordinate and then drawn every frame through a
//! [`MapProjection`] built from the current view state.

mod layer;
mod projection;
mod renderer;

pub use hit_test::{country_at_screen_pos, ring_contains};
pub use layer::{Country, GeoBounds, River, World};
pub use projection::MapProjection;
pub use renderer::render_world;
