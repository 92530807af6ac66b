//! One-shot visual transitions: viewport reveals, the hero entrance
//! stagger, and stat counters.
//!
//! Every transition here moves forward only. A revealed element is never
//! hidden again, and a counter that started runs to its final value.

pub mod counter;
pub mod reveal;
pub mod stagger;

pub use counter::{CounterAnimation, CounterAnimator, CounterFrame, CounterTarget};
pub use reveal::{RevealController, RevealStyle};
pub use stagger::HeroStagger;
