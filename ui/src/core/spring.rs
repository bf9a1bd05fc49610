//! Damped spring used to ease every animated toolbar property.
//!
//! Positions are evaluated from closed-form solutions rather than integrated
//! frame by frame, so a long or irregular frame never overshoots numerically.
//!
//! Underdamped (`zeta < 1`):
//! ```text
//! x(t) = to - e^(-zeta*w0*t) * (A*cos(wd*t) + B*sin(wd*t))
//! A = to - from,  B = (zeta*w0*A - v0) / wd,  wd = w0*sqrt(1 - zeta^2)
//! ```
//! Critically / over-damped:
//! ```text
//! x(t) = to - (A + t*L) * e^(-w0*t),  L = w0*A - v0
//! ```

use serde::{Deserialize, Serialize};

/// Distance and speed below which a spring snaps onto its target.
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    /// Natural angular frequency.
    fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio.
    fn zeta(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.zeta() < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    params: SpringParams,
    from: f64,
    to: f64,
    initial_velocity: f64,
    elapsed: f64,
    position: f64,
    at_rest: bool,
}

impl Spring {
    pub fn new(position: f64, params: SpringParams) -> Self {
        Self {
            params,
            from: position,
            to: position,
            initial_velocity: 0.0,
            elapsed: 0.0,
            position,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn velocity(&self) -> f64 {
        if self.at_rest {
            0.0
        } else {
            self.velocity_at(self.elapsed)
        }
    }

    pub fn arrived(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring, carrying over the current position and velocity so
    /// an interrupted animation bends smoothly toward the new target.
    pub fn set_target(&mut self, target: f64) {
        if target == self.to {
            return;
        }
        let velocity = self.velocity();
        self.from = self.position;
        self.initial_velocity = velocity;
        self.to = target;
        self.elapsed = 0.0;
        self.at_rest = false;
    }

    /// Jump to `value` with no animation.
    pub fn set_position(&mut self, value: f64) {
        self.from = value;
        self.to = value;
        self.position = value;
        self.initial_velocity = 0.0;
        self.elapsed = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if self.at_rest {
            return;
        }
        self.elapsed += dt;
        self.position = self.position_at(self.elapsed);

        if (self.to - self.position).abs() < REST_DELTA
            && self.velocity_at(self.elapsed).abs() < REST_SPEED
        {
            self.set_position(self.to);
        }
    }

    fn position_at(&self, t: f64) -> f64 {
        let delta = self.to - self.from;
        let w0 = self.params.omega();
        let zeta = self.params.zeta();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (zeta * w0 * delta - self.initial_velocity) / wd;
            let envelope = (-zeta * w0 * t).exp();
            self.to - envelope * (delta * (wd * t).cos() + b * (wd * t).sin())
        } else {
            let leftover = w0 * delta - self.initial_velocity;
            self.to - (delta + t * leftover) * (-w0 * t).exp()
        }
    }

    fn velocity_at(&self, t: f64) -> f64 {
        let delta = self.to - self.from;
        let w0 = self.params.omega();
        let zeta = self.params.zeta();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (zeta * w0 * delta - self.initial_velocity) / wd;
            let envelope = (-zeta * w0 * t).exp();
            envelope
                * ((zeta * w0 * delta - b * wd) * (wd * t).cos()
                    + (zeta * w0 * b + delta * wd) * (wd * t).sin())
        } else {
            let leftover = w0 * delta - self.initial_velocity;
            (-w0 * t).exp() * (w0 * (delta + t * leftover) - leftover)
        }
    }
}
