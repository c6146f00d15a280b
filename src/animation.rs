//! Time-based interpolation for the menu's animated values
//!
//! Values are updated in place and reused across show cycles. The host's
//! frame scheduler advances them with [`AnimatedScalar::tick`]; each started
//! animation reports completion exactly once, unless a newer animation
//! targeting the same value supersedes it first (last writer wins).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`
    #[default]
    Standard,
    /// CSS-style cubic bezier with fixed end points (0,0) and (1,1)
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluate one coordinate of a cubic bezier with end points 0 and 1
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    // Newton-Raphson first, bisection if the slope gets too flat
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_coord(y1, y2, s)
}

/// Identifies one started animation of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

#[derive(Debug, Clone, Copy)]
struct Tween {
    id: AnimationId,
    from: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

/// A single numeric value with an optional in-flight interpolation
#[derive(Debug, Clone)]
pub struct AnimatedScalar {
    value: f32,
    target: f32,
    tween: Option<Tween>,
    /// Completion of a zero-duration animation, reported on the next tick
    settled: Option<AnimationId>,
    generation: u64,
}

impl AnimatedScalar {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            tween: None,
            settled: None,
            generation: 0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the current (or last) animation ends at
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || self.settled.is_some()
    }

    /// Jump to `value` immediately, dropping any in-flight animation
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.tween = None;
        self.settled = None;
    }

    /// Start animating toward `target`, superseding any previous animation
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing) -> AnimationId {
        self.generation += 1;
        let id = AnimationId(self.generation);
        self.target = target;

        if duration.is_zero() {
            self.value = target;
            self.tween = None;
            self.settled = Some(id);
        } else {
            self.settled = None;
            self.tween = Some(Tween {
                id,
                from: self.value,
                duration,
                elapsed: Duration::ZERO,
                easing,
            });
        }
        id
    }

    /// Advance by `dt`; returns the id of an animation that completed on this tick
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationId> {
        if let Some(id) = self.settled.take() {
            return Some(id);
        }

        let tween = self.tween.as_mut()?;
        tween.elapsed = (tween.elapsed + dt).min(tween.duration);
        let progress = tween.elapsed.as_secs_f32() / tween.duration.as_secs_f32();
        let eased = tween.easing.apply(progress);
        self.value = tween.from + (self.target - tween.from) * eased;

        if tween.elapsed >= tween.duration {
            let id = tween.id;
            self.value = self.target;
            self.tween = None;
            Some(id)
        } else {
            None
        }
    }
}

impl Default for AnimatedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Two scalars animated together as a width/height pair
#[derive(Debug, Clone, Default)]
pub struct AnimatedSize {
    pub width: AnimatedScalar,
    pub height: AnimatedScalar,
}

impl AnimatedSize {
    pub fn value(&self) -> Size {
        Size::new(self.width.value(), self.height.value())
    }

    pub fn is_animating(&self) -> bool {
        self.width.is_animating() || self.height.is_animating()
    }

    pub fn set(&mut self, size: Size) {
        self.width.set(size.width);
        self.height.set(size.height);
    }

    pub fn animate_to(&mut self, size: Size, duration: Duration, easing: Easing) {
        self.width.animate_to(size.width, duration, easing);
        self.height.animate_to(size.height, duration, easing);
    }

    /// Advance both axes; true once neither axis has an animation left
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.width.tick(dt);
        self.height.tick(dt);
        !self.is_animating()
    }
}
