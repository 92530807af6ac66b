//! Count-up animation for stat numbers such as `1500+`.
//!
//! A stat is animated once, the first time it becomes visible: its text is
//! rewritten every animation frame from `0{suffix}` up to `{end}{suffix}`
//! along a quartic ease-out curve.

use std::rc::Rc;
use std::time::Duration;

use crate::dom::{Element, Scheduler};
use crate::options::CounterOptions;
use crate::util::easing::EasingFunction;

/// Parse a leading integer the way a lenient number reader does: skip
/// leading whitespace, accept one sign, then read digits up to the first
/// non-digit. Returns `None` when there are no digits.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Final value and suffix encoded in a stat's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    /// Value shown when the animation completes.
    pub end: i64,
    /// Text appended to every frame.
    pub suffix: String,
}

impl CounterTarget {
    /// Parse a stat text. The text must contain `suffix`; the first
    /// occurrence is removed and the remainder must start with an integer.
    #[must_use]
    pub fn parse(text: &str, suffix: &str) -> Option<Self> {
        if suffix.is_empty() || !text.contains(suffix) {
            return None;
        }
        let stripped = text.replacen(suffix, "", 1);
        Some(Self {
            end: parse_leading_int(&stripped)?,
            suffix: suffix.to_owned(),
        })
    }
}

/// One rendered frame of a counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value shown this frame.
    pub value: i64,
    /// Full text shown this frame (`{value}{suffix}`).
    pub text: String,
    /// Whether this was the last frame.
    pub done: bool,
}

/// Time-driven interpolation from a start value to a target value.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start_value: i64,
    target: CounterTarget,
    start_time: f64,
    duration_ms: f64,
    easing: EasingFunction,
    done: bool,
}

impl CounterAnimation {
    /// Animation from 0 to `target`, started at `start_time` (ms).
    #[must_use]
    pub fn new(target: CounterTarget, start_time: f64, duration: Duration) -> Self {
        Self {
            start_value: 0,
            target,
            start_time,
            duration_ms: duration.as_secs_f64() * 1000.0,
            easing: EasingFunction::QuarticOut,
            done: false,
        }
    }

    /// Set custom easing.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress at time `now`, in [0, 1].
    ///
    /// Frame timestamps can predate the moment the animation was started,
    /// so elapsed time is clamped at zero.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Compute the frame for time `now`.
    pub fn frame(&mut self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        let span = (self.target.end - self.start_value) as f64;
        let eased = self.easing.evaluate(progress);
        let value = (self.start_value as f64 + span * eased).floor() as i64;
        self.done = progress >= 1.0;
        CounterFrame {
            value,
            text: format!("{value}{}", self.target.suffix),
            done: self.done,
        }
    }

    /// Whether the final frame has been produced.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Drive `animation` on `element`, one frame per animation tick, until it
/// completes.
pub fn run_on<E: Element + 'static>(
    element: E,
    mut animation: CounterAnimation,
    scheduler: Rc<dyn Scheduler>,
) {
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |now: f64| {
        let frame = animation.frame(now);
        element.set_text_content(&frame.text);
        if !frame.done {
            run_on(element, animation, next);
        }
    }));
}

#[derive(Debug)]
struct Stat<E> {
    element: E,
    consumed: bool,
}

/// Starts a count-up the first time each stat becomes visible.
pub struct CounterAnimator<E> {
    stats: Vec<Stat<E>>,
    options: CounterOptions,
    scheduler: Rc<dyn Scheduler>,
}

impl<E: Element + 'static> CounterAnimator<E> {
    /// Track the candidates whose text contains the configured suffix;
    /// the rest stay static and are never observed.
    pub fn new(
        candidates: Vec<E>,
        options: CounterOptions,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let stats = candidates
            .into_iter()
            .filter(|el| el.text_content().contains(options.suffix.as_str()))
            .map(|element| Stat {
                element,
                consumed: false,
            })
            .collect();
        Self {
            stats,
            options,
            scheduler,
        }
    }

    /// Elements the visibility watcher should observe.
    pub fn targets(&self) -> impl Iterator<Item = &E> + '_ {
        self.stats.iter().map(|s| &s.element)
    }

    /// Handle one visibility report. Returns `true` when the watcher
    /// should stop observing `target`.
    ///
    /// The first intersecting report consumes the stat, whether or not its
    /// text parsed into a number.
    pub fn on_intersection(&mut self, target: &E, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(stat) = self.stats.iter_mut().find(|s| &s.element == target)
        else {
            return true;
        };
        if stat.consumed {
            return true;
        }
        stat.consumed = true;

        let text = stat.element.text_content();
        match CounterTarget::parse(&text, &self.options.suffix) {
            Some(counter) => {
                log::debug!("counting up to {}{}", counter.end, counter.suffix);
                let animation = CounterAnimation::new(
                    counter,
                    self.scheduler.now(),
                    self.options.duration(),
                )
                .with_easing(self.options.easing);
                run_on(
                    stat.element.clone(),
                    animation,
                    Rc::clone(&self.scheduler),
                );
            }
            None => log::debug!("stat text {text:?} has no leading number"),
        }
        true
    }

    /// Number of stats that have been triggered.
    #[cfg(test)]
    pub(crate) fn consumed_count(&self) -> usize {
        self.stats.iter().filter(|s| s.consumed).count()
    }
}
