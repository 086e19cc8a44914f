//! Mutable simulation state for the drive loop.

use crate::constants::*;
use crate::rect::Rect;
use crate::sprites;

/// Running/Crash phase machine. Running is the initial phase; Crash is
/// entered on collision and only leaves through a confirm-key restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Crash,
}

/// Per-frame keyboard observation. `true` means the key was seen down this
/// frame; rising edges are derived by comparing against the previous
/// frame's snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Space — dodge to the other column.
    pub move_down: bool,
    /// Enter — restart after a crash.
    pub confirm_down: bool,
    /// Esc — ask the shell to quit.
    pub exit_down: bool,
}

/// All mutable simulation state, owned as one value and mutated by
/// `game_logic::step` once per frame.
#[derive(Debug, Clone)]
pub struct RaceState {
    /// Y offsets of the three tiled road copies. Stacked upward off-screen
    /// at reset, each `roadHeight - seam` above its neighbor.
    pub road_y: [i32; 3],
    /// Downward scroll speed in pixels/ms. Grows without bound as hazards
    /// pass; the shrinking reaction window is the difficulty curve.
    pub velocity_y: f32,
    /// The car. `y` and dimensions never change after reset; `x` toggles
    /// between two columns.
    pub car: Rect,
    /// Signed dodge offset, negated after every applied dodge.
    pub move_car_x: i32,
    /// The falling hazard.
    pub hazard: Rect,
    /// Hazards that scrolled off the bottom without a collision.
    pub hazards_passed: u32,
    pub phase: Phase,
    /// Previous frame's snapshot, the only input history kept.
    pub previous_input: InputSnapshot,
}

impl RaceState {
    /// Fresh game: everything at its literal starting value.
    pub fn new() -> Self {
        let band_step = -sprites::ROAD.height + ROAD_SEAM_OVERLAP;
        Self {
            road_y: [0, band_step, 2 * band_step],
            velocity_y: INITIAL_VELOCITY,
            car: Rect::new(
                CAR_START_X,
                CAR_START_Y,
                (sprites::CAR.width as f32 * CAR_SCALE) as i32,
                (sprites::CAR.height as f32 * CAR_SCALE) as i32,
            ),
            move_car_x: MOVE_CAR_X,
            hazard: Rect::new(
                HAZARD_LEFT_X,
                -sprites::HAZARD.height,
                (sprites::HAZARD.width as f32 * HAZARD_SCALE) as i32,
                (sprites::HAZARD.height as f32 * HAZARD_SCALE) as i32,
            ),
            hazards_passed: 0,
            phase: Phase::Running,
            previous_input: InputSnapshot::default(),
        }
    }

    /// Restart in place. Always succeeds, regardless of the current phase.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RaceState {
    fn default() -> Self {
        Self::new()
    }
}
