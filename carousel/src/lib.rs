pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod input;
pub mod label;
pub mod navigator;
pub mod projection;
pub mod slides;
pub mod state;
pub mod transitions;
pub mod widget;

pub use config::CarouselConfig;
pub use error::CarouselError;
pub use event::{CarouselEvent, Key, Modifiers, MouseButton};
pub use gesture::{commit_threshold, GestureOutcome, GestureTracker};
pub use input::Intent;
pub use navigator::{advance, go_to};
pub use projection::{translate_fraction, Projection, Transition};
pub use slides::Slides;
pub use state::{transition, CarouselState};
pub use transitions::{Easing, TransitionConfig};
pub use widget::Carousel;
