//! Screen dimensions and tuning literals for the drive loop.
//!
//! Everything here is in logical pixels: the simulation runs in a fixed
//! 800x600 space and the terminal renderer scales it down at draw time.

/// Logical screen width in pixels.
pub const WINDOW_WIDTH: i32 = 800;

/// Logical screen height in pixels. The road art is authored at exactly
/// this height, so one copy fills the screen top to bottom.
pub const WINDOW_HEIGHT: i32 = 600;

/// Seam overlap between stacked road copies. Hides the tile boundary while
/// the road scrolls.
pub const ROAD_SEAM_OVERLAP: i32 = 2;

/// Starting downward scroll speed, in pixels per millisecond.
pub const INITIAL_VELOCITY: f32 = 0.3;

/// Speed gained every time the hazard scrolls off the bottom untouched.
/// There is no cap; the game only ends when you hit something.
pub const VELOCITY_INCREMENT: f32 = 0.1;

/// Horizontal dodge distance in pixels. The sign flips after every dodge so
/// the car alternates between exactly two resting columns.
pub const MOVE_CAR_X: i32 = 160;

/// The two columns a recycled hazard can drop down.
pub const HAZARD_LEFT_X: i32 = 275;
pub const HAZARD_RIGHT_X: i32 = 440;

/// Car's fixed starting rect origin. The car never moves vertically; the
/// scrolling road sells the motion.
pub const CAR_START_X: i32 = 280;
pub const CAR_START_Y: i32 = 440;

/// Scale factors applied to the source art dimensions when sizing the
/// on-screen collision rects.
pub const CAR_SCALE: f32 = 0.2;
pub const HAZARD_SCALE: f32 = 0.4;

/// Input poll budget per frame in the shell loop (~60 FPS).
pub const FRAME_POLL_MS: u64 = 16;
