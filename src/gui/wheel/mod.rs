pub mod model;
pub mod view;

pub use model::{Point, WheelGeometry, WheelStyle};
pub use view::draw;

pub const REFERENCE_SIZE: f64 = 600.0;
pub const RIM_MARGIN: f64 = 40.0; // room for the pointer above the rim
pub const SHADOW_OFFSET: f64 = 5.0;
pub const SEGMENT_BORDER_WIDTH: f64 = 3.0;
pub const CAPTION_INSET: f64 = 30.0; // caption right edge, from the rim
pub const CAPTION_OUTLINE_WIDTH: f64 = 4.0;
pub const HUB_RADIUS: f64 = 30.0;
pub const HUB_DOT_RADIUS: f64 = 10.0;
pub const POINTER_DIP: f64 = 10.0; // how far the tip reaches past the rim
pub const POINTER_HALF_WIDTH: f64 = 20.0;
pub const POINTER_LENGTH: f64 = 30.0;
