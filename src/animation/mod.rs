//! Animation primitives: easing curves, tweens, timelines, scroll-driven
//! entrances and the hero typewriter.

pub mod ease;
pub mod timeline;
pub mod trigger;
pub mod tween;
pub mod typewriter;

pub use ease::Ease;
pub use timeline::{Position, Timeline};
pub use trigger::{Entrance, EntranceMode, ScrollTrigger, TriggerHandle, TriggerRegistry};
pub use tween::{Stagger, Tween};
pub use typewriter::Typewriter;
