pub mod config;
pub mod constants;
pub mod effect;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod schedule;
pub mod surface;

pub use config::*;
pub use effect::Effect;
pub use geometry::*;
pub use input::*;
pub use render::render_frame;
pub use scene::*;
pub use schedule::*;
pub use surface::*;
