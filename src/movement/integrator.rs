//! Movement domain: velocity integration for horizontal smoothing and the
//! jump/gravity state machine.

use crate::movement::{ControllerTuning, MovementInput};

/// Shortest smoothing time accepted; avoids a division by zero.
const MIN_SMOOTH_TIME: f32 = 1.0e-4;

/// Critically damped spring toward `target`.
///
/// `rate` carries the spring's velocity between calls and must be stored by
/// the caller. Never overshoots `target`.
pub fn smooth_damp(current: f32, target: f32, rate: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*rate + omega * change) * dt;
    *rate = (*rate - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *rate = 0.0;
    }

    output
}

/// Countdown of the remaining hold-to-sustain jump window.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JumpTimer(f32);

impl JumpTimer {
    pub fn remaining(self) -> f32 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0 > 0.0
    }

    fn arm(&mut self, duration: f32) {
        self.0 = duration;
    }

    fn tick(&mut self, dt: f32) {
        self.0 -= dt;
    }

    fn cancel(&mut self) {
        self.0 = 0.0;
    }
}

pub fn integrate_horizontal(
    tuning: &ControllerTuning,
    velocity_x: f32,
    rate: &mut f32,
    axis: f32,
    grounded: bool,
    dt: f32,
) -> f32 {
    let smooth_time = if grounded {
        tuning.ground_smoothing
    } else {
        tuning.air_smoothing
    };
    smooth_damp(velocity_x, axis * tuning.max_speed, rate, smooth_time, dt)
}

pub fn integrate_vertical(
    tuning: &ControllerTuning,
    velocity_y: f32,
    timer: &mut JumpTimer,
    input: &MovementInput,
    grounded: bool,
    dt: f32,
) -> f32 {
    let mut velocity_y = velocity_y;

    if grounded && input.jump_pressed {
        velocity_y = tuning.jump_speed;
        timer.arm(tuning.jump_sustain);
    }

    // Re-assert, not accumulate: a held jump rises at a near-constant rate.
    if input.jump_held && timer.is_active() {
        velocity_y = tuning.jump_speed;
        timer.tick(dt);
    }

    if input.jump_released {
        timer.cancel();
    }

    velocity_y - tuning.gravity * dt
}
