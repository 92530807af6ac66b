use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Counter", inline)]
#[serde(default)]
/// Count-up animation for stat numbers.
pub struct CounterOptions {
    /// Stat elements whose text encodes the final value.
    pub selector: String,
    /// Visibility ratio that starts the count-up.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: f64,
    /// Length of the count-up in milliseconds.
    pub duration_ms: u64,
    /// Only texts containing this suffix are animated; it is re-appended to
    /// every frame.
    pub suffix: String,
    /// Curve mapping elapsed time to displayed value.
    pub easing: EasingFunction,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            selector: ".stat-number".to_owned(),
            threshold: 0.5,
            duration_ms: 2000,
            suffix: "+".to_owned(),
            easing: EasingFunction::QuarticOut,
        }
    }
}

impl CounterOptions {
    /// Count-up length as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
