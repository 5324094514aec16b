//! Spinning wheel engine: labels, spin physics, winner selection and the
//! draw primitives a host renders every frame.

pub mod macros;

pub mod colors;
pub mod engine;
pub mod geometry;
pub mod labels;
pub mod physics;
pub mod scene;
pub mod store;

pub use colors::Palette;
pub use engine::{Engine, Frame, ReplaceError};
pub use labels::{Label, LabelError, LabelList};
pub use scene::{Primitive, Scene, Wedge};
pub use store::{FileStore, LABELS_KEY, LabelStore, MemoryStore, StoreError};
