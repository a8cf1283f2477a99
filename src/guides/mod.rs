pub mod commands;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod hit_test;
pub mod model;
pub mod state;
pub mod store;

pub use commands::{CommandQueue, GuideCommand, HostEffect};
pub use controller::{
    DragState, InteractionController, PointerButton, PointerEvent, PointerModifiers,
};
pub use error::GuideError;
pub use hit_test::{HitTestConfig, TieBreak};
pub use model::{Guide, GuideColor, GuideStyle, LineStyle, Orientation, SurfaceSize};
pub use state::OverlayState;
pub use store::GuideStore;
