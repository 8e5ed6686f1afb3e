//! Damped spring follower.
//!
//! A unit mass on a spring pulled towards `target`, integrated with
//! semi-implicit Euler in fixed sub-steps so the result does not depend on the
//! frame rate. Used to smooth the scroll progress bar.

/// Physical constants of the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

/// Integration sub-step, in seconds.
const SUBSTEP: f64 = 0.001;

/// Longest frame delta integrated at once. Larger gaps (background tab,
/// debugger pause) are truncated so the spring does not jump.
const MAX_FRAME: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl SpringFollower {
    /// A spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Move the target. The spring wakes up unless it already sits on it.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        if self.position != target || self.velocity != 0.0 {
            self.at_rest = false;
        }
    }

    /// Teleport to `value` and stop.
    pub fn jump_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest || !(dt > 0.0) {
            return self.position;
        }

        let mut remaining = dt.min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
        {
            self.jump_to(self.target);
            tracing::debug!(target = self.target, "spring settled");
        }

        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut SpringFollower, seconds: f64) {
        let frame = 1.0 / 60.0;
        let mut t = 0.0;
        while t < seconds {
            spring.step(frame);
            t += frame;
        }
    }

    #[test]
    fn new_spring_is_at_rest() {
        let spring = SpringFollower::new(SpringConfig::default(), 0.25);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.25);
    }

    #[test]
    fn converges_and_settles_on_target() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        assert!(!spring.is_at_rest());

        run(&mut spring, 3.0);

        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn moves_towards_target_without_jumping() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.0);
        assert!(first < 0.1, "first frame moved too far: {first}");
    }

    #[test]
    fn overdamped_constants_do_not_overshoot() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            peak = peak.max(spring.step(1.0 / 60.0));
        }
        assert!(peak <= 1.0 + 1e-9, "overshoot to {peak}");
    }

    #[test]
    fn step_is_frame_rate_independent() {
        let mut fast = SpringFollower::new(SpringConfig::default(), 0.0);
        let mut slow = SpringFollower::new(SpringConfig::default(), 0.0);
        fast.set_target(1.0);
        slow.set_target(1.0);

        for _ in 0..12 {
            fast.step(1.0 / 120.0);
        }
        for _ in 0..6 {
            slow.step(1.0 / 60.0);
        }

        assert!((fast.value() - slow.value()).abs() < 1e-4);
    }

    #[test]
    fn huge_frame_gap_is_truncated() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(30.0);
        assert!(!spring.is_at_rest());
        assert!(spring.value() < 1.0);
    }

    #[test]
    fn ignores_non_finite_target_and_dt() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.5);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 0.5);
        spring.set_target(1.0);
        assert_eq!(spring.step(f64::NAN), 0.5);
        assert_eq!(spring.step(-1.0), 0.5);
    }

    #[test]
    fn setting_current_value_as_target_keeps_rest() {
        let mut spring = SpringFollower::new(SpringConfig::default(), 0.3);
        spring.set_target(0.3);
        assert!(spring.is_at_rest());
    }
}
