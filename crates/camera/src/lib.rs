//! Orbit / free-look camera state machine.
//!
//! The controller owns the full camera state and is mutated once per tick
//! from the single update pass. It has no hidden statics, so tests can
//! construct and reset it freely, and it performs no I/O: pointer visibility
//! is reported as a flag for the windowing collaborator to apply.

use foundation::math::Vec3;
use runtime::input::InputSample;

/// Orbit circle radius before zoom scaling.
const ORBIT_RADIUS: f64 = 25.0;
/// Fixed camera height while orbiting.
const ORBIT_HEIGHT: f64 = 50.0;
/// Orbit phase accumulation rate (radians per second).
const ORBIT_ANGULAR_SPEED: f64 = 0.2;

/// Free-look translation speed (units per second).
const MOVE_SPEED: f64 = 10.0;
/// Vertical translation speed (units per second).
const VERTICAL_SPEED: f64 = 5.0;
/// Speed multiplier while the slow modifier is held.
const SLOW_MULTIPLIER: f64 = 0.25;
/// Pointer-to-angle sensitivity (degrees per pixel).
const POINTER_SENSITIVITY: f64 = 0.1;
/// Pitch clamp that keeps the camera off the poles.
const PITCH_LIMIT_DEG: f64 = 89.0;

/// Scroll-to-zoom rate; negative so scrolling up zooms in.
const ZOOM_SPEED: f64 = -2.5;
const ZOOM_MIN: f64 = 0.0;
const ZOOM_MAX: f64 = 10.0;

/// Startup pose, looking at the reference body from above and behind.
const START_POSITION: Vec3 = Vec3::new(0.0, 60.0, 100.0);
const START_YAW_DEG: f64 = 45.80;
const START_PITCH_DEG: f64 = 42.12;
const FOV_Y_DEG: f64 = 75.0;

/// Fixed reference pose snapped to when free-look is entered, framing the
/// data shell and the reference body.
const FREELOOK_POSITION: Vec3 = Vec3::new(45.48, 42.12, 45.36);
const FREELOOK_TARGET: Vec3 = Vec3::new(44.94, 41.57, 44.73);

const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraMode {
    /// Automatic circular motion around the origin.
    Orbit,
    /// User-driven first-person navigation.
    FreeLook,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Orbit => CameraMode::FreeLook,
            CameraMode::FreeLook => CameraMode::Orbit,
        }
    }
}

/// The pose the renderer consumes every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_deg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    pose: CameraPose,
    mode: CameraMode,
    /// Compared against `mode` each tick so entry actions run exactly once
    /// per transition.
    previous_mode: CameraMode,
    yaw_deg: f64,
    pitch_deg: f64,
    orbit_phase: f64,
    zoom: f64,
    /// Free-look basis vectors, derived once per session and held fixed.
    right: Vec3,
    up: Vec3,
    pointer_visible: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        let direction = direction_from_angles(START_YAW_DEG, START_PITCH_DEG);
        let right = direction.cross(WORLD_UP).normalize();
        let up = right.cross(direction).normalize();

        Self {
            pose: CameraPose {
                position: START_POSITION,
                target: Vec3::zero(),
                up: WORLD_UP,
                fov_y_deg: FOV_Y_DEG,
            },
            mode: CameraMode::Orbit,
            previous_mode: CameraMode::Orbit,
            yaw_deg: START_YAW_DEG,
            pitch_deg: START_PITCH_DEG,
            orbit_phase: 0.0,
            zoom: std::f64::consts::PI,
            right,
            up,
            pointer_visible: true,
        }
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. `dt_s` is the elapsed time since the previous tick.
    pub fn update(&mut self, dt_s: f64, input: &InputSample) {
        if input.mode_toggle {
            self.mode = self.mode.toggled();
        }
        if self.mode != self.previous_mode {
            self.enter(self.mode);
            self.previous_mode = self.mode;
        }

        match self.mode {
            CameraMode::Orbit => self.orbit_tick(dt_s),
            CameraMode::FreeLook => self.free_look_tick(dt_s, input),
        }

        if input.scroll != 0.0 {
            self.zoom = (self.zoom + input.scroll * ZOOM_SPEED * dt_s).clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn orbit_phase(&self) -> f64 {
        self.orbit_phase
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn yaw_deg(&self) -> f64 {
        self.yaw_deg
    }

    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    /// Whether the windowing layer should show the OS pointer. Hidden while
    /// free-look owns pointer motion.
    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    /// One-shot entry actions for a mode transition.
    fn enter(&mut self, mode: CameraMode) {
        match mode {
            CameraMode::FreeLook => {
                self.pose.position = FREELOOK_POSITION;
                self.pose.target = FREELOOK_TARGET;

                let direction = (FREELOOK_POSITION - FREELOOK_TARGET).normalize();
                self.yaw_deg = direction.z.atan2(direction.x).to_degrees();
                self.pitch_deg = direction
                    .y
                    .clamp(-1.0, 1.0)
                    .asin()
                    .to_degrees()
                    .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);

                self.pointer_visible = false;
            }
            CameraMode::Orbit => {
                self.pointer_visible = true;
            }
        }
    }

    /// Trace a circle of zoom-scaled radius around the origin at fixed
    /// height. The phase accumulator only advances while orbiting.
    fn orbit_tick(&mut self, dt_s: f64) {
        self.orbit_phase += dt_s * ORBIT_ANGULAR_SPEED;
        self.pose.position = Vec3::new(
            ORBIT_RADIUS * self.zoom * self.orbit_phase.cos(),
            ORBIT_HEIGHT,
            ORBIT_RADIUS * self.zoom * self.orbit_phase.sin(),
        );
        self.pose.target = Vec3::zero();
    }

    fn free_look_tick(&mut self, dt_s: f64, input: &InputSample) {
        self.yaw_deg += input.pointer_delta.x * POINTER_SENSITIVITY;
        self.pitch_deg = (self.pitch_deg + input.pointer_delta.y * POINTER_SENSITIVITY)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);

        let direction = direction_from_angles(self.yaw_deg, self.pitch_deg);

        let slow = if input.held.slow { SLOW_MULTIPLIER } else { 1.0 };
        let speed = MOVE_SPEED * slow * dt_s;
        let vertical_speed = VERTICAL_SPEED * slow * dt_s;

        // The view direction points from target toward the camera, so
        // forward motion subtracts it.
        let held = input.held;
        if held.forward {
            self.pose.position = self.pose.position - direction * speed;
        }
        if held.back {
            self.pose.position = self.pose.position + direction * speed;
        }
        if held.right {
            self.pose.position = self.pose.position - self.right * speed;
        }
        if held.left {
            self.pose.position = self.pose.position + self.right * speed;
        }
        if held.down {
            self.pose.position = self.pose.position - self.up * vertical_speed;
        }
        if held.up {
            self.pose.position = self.pose.position + self.up * vertical_speed;
        }

        self.pose.target = self.pose.position - direction;
    }
}

/// Spherical basis direction from yaw/pitch in degrees.
fn direction_from_angles(yaw_deg: f64, pitch_deg: f64) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.sin(),
        pitch.cos() * yaw.sin(),
    )
    .normalize()
}
