use rand::Rng;

pub const FRICTION: f64 = 0.992;
pub const STOP_THRESHOLD: f64 = 0.001;
pub const BASE_VELOCITY: f64 = 0.5;
pub const BASE_VELOCITY_SPREAD: f64 = 0.15;
pub const BONUS_TURNS: f64 = 8.0;
pub const BONUS_TURNS_SPREAD: f64 = 4.0;
pub const BONUS_SCALE: f64 = 0.05;

/// Frame-based spin model. Velocities are in radians per frame and decay by a
/// constant factor each frame, so the host must tick at a steady display rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPhysics {
    pub friction: f64,
    pub stop_threshold: f64,
}

impl Default for SpinPhysics {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
        }
    }
}

impl SpinPhysics {
    /// Initial velocity in `[0.9, 1.25)`: a base draw plus a long-spin bonus,
    /// taken from two successive uniform samples.
    pub fn initial_velocity<R: Rng>(&self, rng: &mut R) -> f64 {
        let base = BASE_VELOCITY + rng.random::<f64>() * BASE_VELOCITY_SPREAD;
        let bonus_turns = BONUS_TURNS + rng.random::<f64>() * BONUS_TURNS_SPREAD;
        base + bonus_turns * BONUS_SCALE
    }

    /// Number of frames a spin launched at `velocity` runs before stopping.
    pub fn frames_to_stop(&self, velocity: f64) -> usize {
        let mut state = WheelState::default();
        state.launch(velocity);
        let mut frames = 0;
        while state.spinning {
            state.advance(self);
            frames += 1;
        }
        frames
    }
}

/// `angular_velocity` is non-zero only while `spinning`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelState {
    pub rotation: f64,
    pub angular_velocity: f64,
    pub spinning: bool,
}

impl WheelState {
    pub fn launch(&mut self, velocity: f64) {
        self.angular_velocity = velocity;
        self.spinning = true;
    }

    /// One Euler step. Returns `true` on the frame the wheel comes to rest.
    pub fn advance(&mut self, physics: &SpinPhysics) -> bool {
        if !self.spinning {
            return false;
        }

        self.rotation += self.angular_velocity;
        self.angular_velocity *= physics.friction;

        if self.angular_velocity.abs() < physics.stop_threshold {
            self.spinning = false;
            self.angular_velocity = 0.0;
            return true;
        }
        false
    }
}
