// Steering
pub const TILT_GAIN: f64 = 3.0;
pub const TARGET_STEP_SCALE: f64 = 10.0;
pub const MIN_X: f64 = -8.0;
pub const MAX_X: f64 = 8.0;
pub const MIN_Y: f64 = -2.0;
pub const MAX_Y: f64 = 8.0;
pub const SMOOTHING_X: f64 = 8.0;
pub const SMOOTHING_Y: f64 = 6.0;
pub const FORWARD_SPEED: f64 = 6.0;

// Cosmetic tilt (degrees)
pub const ROLL_GAIN: f64 = 25.0;
pub const ROLL_SMOOTHING: f64 = 6.0;
pub const PITCH_GAIN: f64 = 10.0;
pub const PITCH_SMOOTHING: f64 = 4.0;

// Follow camera
pub const CAMERA_HEIGHT: f64 = 8.0;
pub const CAMERA_DISTANCE: f64 = 30.0;
pub const CAMERA_FOV_DEGREES: f64 = 60.0;

// Obstacles
pub const SPAWN_INTERVAL_SECONDS: f64 = 0.7;
pub const MIN_SPAWN_INTERVAL_SECONDS: f64 = 0.05;
pub const SPAWN_DISTANCE: f64 = 60.0;
pub const SPAWN_X_SPREAD: f64 = 4.0;
pub const SPAWN_Y_MIN: f64 = -1.0;
pub const SPAWN_Y_MAX: f64 = 2.0;
pub const OBSTACLE_SPEED: f64 = 6.0;
pub const PASS_THRESHOLD: f64 = 10.0;
pub const COLLISION_RADIUS: f64 = 1.0;

// Presentation
pub const GROUND_Y: f64 = -2.0;
pub const GROUND_VISIBLE_SECONDS: f64 = 4.0;
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS

// Orientation device
pub const DEFAULT_BAUD_RATE: u32 = 19_200;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;
pub const END_OF_STREAM_IDLE_MS: u64 = 50;
pub const READ_ERROR_BACKOFF_MS: u64 = 100;
