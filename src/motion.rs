//! Scroll-linked motion: keyframe interpolation, scroll progress math and the
//! spring used to smooth the page progress bar.
//!
//! Everything here is pure so it can be exercised without a browser. The hooks
//! in `crate::hooks` feed it measurements taken from the DOM.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyframeError {
    #[error("keyframe table is empty")]
    Empty,
    #[error("keyframe input at index {index} is lower than the one before it")]
    Unordered { index: usize },
    #[error("keyframe at index {index} is not a finite number")]
    NonFinite { index: usize },
}

/// Ordered `(input, output)` breakpoints describing a clamped piecewise-linear
/// mapping from scroll progress to a style value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    points: &'static [(f64, f64)],
}

impl Keyframes {
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    #[cfg(test)]
    pub fn points(&self) -> &'static [(f64, f64)] {
        self.points
    }

    pub fn validate(&self) -> Result<(), KeyframeError> {
        if self.points.is_empty() {
            return Err(KeyframeError::Empty);
        }
        for (index, &(x, y)) in self.points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(KeyframeError::NonFinite { index });
            }
            if index > 0 && x < self.points[index - 1].0 {
                return Err(KeyframeError::Unordered { index });
            }
        }
        Ok(())
    }

    /// Output at `progress`. Inputs before the first breakpoint take the first
    /// output, inputs past the last take the last output. NaN counts as "before".
    pub fn sample(&self, progress: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        if progress.is_nan() || progress < first_x {
            return first_y;
        }

        for (i, pair) in self.points.windows(2).enumerate() {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if progress > x1 {
                continue;
            }
            if progress == x1 || progress == x0 {
                // Exact hits return the declared value of the last breakpoint
                // sharing that input, so zero-width steps resolve forward.
                let from = if progress == x0 { i } else { i + 1 };
                return self.points[from..]
                    .iter()
                    .take_while(|(x, _)| *x == progress)
                    .last()
                    .map_or(y0, |&(_, y)| y);
            }
            let span = x1 - x0;
            if span <= 0.0 {
                return y1;
            }
            return y0 + (progress - x0) * (y1 - y0) / span;
        }

        self.points.last().map_or(first_y, |&(_, y)| y)
    }
}

/// Transient transform/opacity applied to an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for MotionStyle {
    fn default() -> Self {
        Self {
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl MotionStyle {
    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) scale({:.4}); opacity: {:.4};",
            self.y, self.scale, self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::End => 1.0,
        }
    }
}

/// The moment an edge of the tracked element lines up with an edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub element: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Element top (relative to the viewport) at which this intersection happens.
    fn element_top(&self, element_height: f64, viewport_height: f64) -> f64 {
        self.viewport.fraction() * viewport_height - self.element.fraction() * element_height
    }
}

/// Scroll range over which an element's progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// From the element's top touching the viewport top until its bottom does.
    pub const PINNED: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::Start),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    /// From the element entering at the bottom until it leaves at the top.
    pub const PASS_THROUGH: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::End),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let from = self.start.element_top(element_height, viewport_height);
        let to = self.end.element_top(element_height, viewport_height);
        let span = from - to;
        if span == 0.0 {
            return if element_top > from { 0.0 } else { 1.0 };
        }
        clamp_unit((from - element_top) / span)
    }
}

/// Fraction of the document scrolled; a page that cannot scroll reports 0.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_y / range)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

pub const PROGRESS_SPRING: SpringConfig = SpringConfig {
    stiffness: 120.0,
    damping: 25.0,
    mass: 0.4,
};

const SPRING_SUBSTEP: f64 = 1.0 / 240.0;
const SPRING_MAX_FRAME: f64 = 0.1;
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.01;

/// Damped spring chasing a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Comes to rest exactly on `target`.
    pub fn snap_to(&mut self, target: f64) {
        self.position = target;
        self.velocity = 0.0;
    }

    /// Advances the spring by `dt` seconds and returns the new position.
    /// Long frames are capped so a backgrounded tab does not fling the value.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if dt.is_nan() || dt <= 0.0 || !target.is_finite() {
            return self.position;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let mut remaining = dt.min(SPRING_MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let force = -stiffness * (self.position - target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled(target) {
            self.snap_to(target);
        }
        self.position
    }
}

pub const REVEAL_OFFSET: f64 = 20.0;
pub const REVEAL_DURATION: f64 = 0.5;
pub const REVEAL_STAGGER: f64 = 0.08;
/// Share of an element that must be visible before it reveals.
pub const REVEAL_AMOUNT: f64 = 0.6;

pub fn reveal_delay(index: usize) -> f64 {
    index as f64 * REVEAL_STAGGER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LINEAR: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, -150.0)]);
    const HOLD_THEN_FADE: Keyframes = Keyframes::new(&[(0.0, 1.0), (0.6, 1.0), (1.0, 0.0)]);
    const FADE_IN_OUT: Keyframes =
        Keyframes::new(&[(0.0, 0.0), (0.25, 1.0), (0.75, 1.0), (1.0, 0.0)]);

    #[test]
    fn clamps_before_first_breakpoint() {
        assert_eq!(LINEAR.sample(-0.5), 0.0);
        assert_eq!(LINEAR.sample(f64::NEG_INFINITY), 0.0);
        assert_eq!(FADE_IN_OUT.sample(-1.0), 0.0);
    }

    #[test]
    fn clamps_after_last_breakpoint() {
        assert_eq!(LINEAR.sample(1.5), -150.0);
        assert_eq!(LINEAR.sample(f64::INFINITY), -150.0);
        assert_eq!(HOLD_THEN_FADE.sample(7.0), 0.0);
    }

    #[test]
    fn nan_progress_takes_first_output() {
        assert_eq!(LINEAR.sample(f64::NAN), 0.0);
        assert_eq!(HOLD_THEN_FADE.sample(f64::NAN), 1.0);
    }

    #[test]
    fn exact_at_every_breakpoint() {
        for table in [LINEAR, HOLD_THEN_FADE, FADE_IN_OUT] {
            for &(x, y) in table.points() {
                assert_eq!(table.sample(x), y, "breakpoint {x}");
            }
        }
    }

    #[test]
    fn linear_between_breakpoints() {
        assert_relative_eq!(LINEAR.sample(0.5), -75.0);
        assert_relative_eq!(LINEAR.sample(0.2), -30.0);
        assert_relative_eq!(HOLD_THEN_FADE.sample(0.3), 1.0);
        assert_relative_eq!(HOLD_THEN_FADE.sample(0.8), 0.5);
        assert_relative_eq!(FADE_IN_OUT.sample(0.125), 0.5);
        assert_relative_eq!(FADE_IN_OUT.sample(0.875), 0.5);
    }

    #[test]
    fn zero_width_segment_steps_forward() {
        const STEP: Keyframes = Keyframes::new(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]);
        assert_eq!(STEP.sample(0.5), 1.0);
        assert_eq!(STEP.sample(0.49), 0.0);
        assert_eq!(STEP.sample(0.51), 1.0);
    }

    #[test]
    fn single_point_is_constant() {
        const FLAT: Keyframes = Keyframes::new(&[(0.3, 4.0)]);
        assert_eq!(FLAT.sample(0.0), 4.0);
        assert_eq!(FLAT.sample(0.3), 4.0);
        assert_eq!(FLAT.sample(1.0), 4.0);
    }

    #[test]
    fn validate_reports_malformed_tables() {
        assert_eq!(Keyframes::new(&[]).validate(), Err(KeyframeError::Empty));
        assert_eq!(
            Keyframes::new(&[(0.0, 0.0), (1.0, 1.0), (0.5, 2.0)]).validate(),
            Err(KeyframeError::Unordered { index: 2 })
        );
        assert_eq!(
            Keyframes::new(&[(0.0, f64::NAN)]).validate(),
            Err(KeyframeError::NonFinite { index: 0 })
        );
        assert_eq!(HOLD_THEN_FADE.validate(), Ok(()));
    }

    #[test]
    fn empty_table_samples_zero() {
        assert_eq!(Keyframes::new(&[]).sample(0.5), 0.0);
    }

    #[test]
    fn pinned_offset_runs_over_element_height() {
        let offset = ScrollOffset::PINNED;
        assert_eq!(offset.progress(100.0, 1600.0, 1000.0), 0.0);
        assert_eq!(offset.progress(0.0, 1600.0, 1000.0), 0.0);
        assert_relative_eq!(offset.progress(-800.0, 1600.0, 1000.0), 0.5);
        assert_eq!(offset.progress(-1600.0, 1600.0, 1000.0), 1.0);
        assert_eq!(offset.progress(-5000.0, 1600.0, 1000.0), 1.0);
    }

    #[test]
    fn pass_through_offset_spans_viewport_and_element() {
        let offset = ScrollOffset::PASS_THROUGH;
        assert_eq!(offset.progress(1000.0, 500.0, 1000.0), 0.0);
        assert_relative_eq!(offset.progress(250.0, 500.0, 1000.0), 0.5);
        assert_eq!(offset.progress(-500.0, 500.0, 1000.0), 1.0);
    }

    #[test]
    fn degenerate_offset_jumps() {
        let offset = ScrollOffset::PINNED;
        assert_eq!(offset.progress(10.0, 0.0, 800.0), 0.0);
        assert_eq!(offset.progress(0.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn page_progress_handles_short_pages() {
        assert_eq!(page_progress(0.0, 800.0, 900.0), 0.0);
        assert_relative_eq!(page_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(page_progress(1500.0, 2000.0, 1000.0), 1.0);
        assert_eq!(page_progress(-20.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn motion_style_css() {
        let style = MotionStyle {
            y: -75.0,
            opacity: 0.5,
            scale: 0.975,
        };
        assert_eq!(
            style.to_css(),
            "transform: translate3d(0, -75.00px, 0) scale(0.9750); opacity: 0.5000;"
        );
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.0);
        let mut frames = 0;
        while !spring.is_settled(1.0) {
            spring.step(1.0, 1.0 / 60.0);
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn overdamped_spring_does_not_overshoot() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.0);
        for _ in 0..120 {
            let position = spring.step(0.5, 1.0 / 60.0);
            assert!(position <= 0.5 + 1e-9, "overshot to {position}");
        }
    }

    #[test]
    fn settled_spring_snaps_onto_nudged_target() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.5);
        let nudged = 0.5 + 0.0004;
        assert!(spring.is_settled(nudged));
        spring.snap_to(nudged);
        assert_eq!(spring.position(), nudged);
        assert_eq!(spring.step(nudged, 1.0 / 60.0), nudged);
    }

    #[test]
    fn spring_ignores_empty_frames() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.25);
        assert_eq!(spring.step(1.0, 0.0), 0.25);
        assert_eq!(spring.step(1.0, f64::NAN), 0.25);
        assert_eq!(spring.step(f64::NAN, 0.016), 0.25);
    }

    #[test]
    fn reveal_delay_staggers() {
        assert_eq!(reveal_delay(0), 0.0);
        assert_relative_eq!(reveal_delay(3), 0.24);
    }
}
