//! The per-frame step: dodge input, road scroll, hazard advance, collision.

use crate::constants::*;
use crate::game_state::{InputSnapshot, Phase, RaceState};
use crate::sprites;
use rand::Rng;

/// What the frame pump should do after a step. Exit is only reported, never
/// acted on here; the shell owns the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    ExitRequested,
}

/// Advance the simulation by `elapsed_ms`, given this frame's keyboard
/// snapshot and the current viewport height.
///
/// Deterministic apart from the hazard's recycle side draw, which comes
/// from `rng`. Total: no input can make it fail.
pub fn step<R: Rng>(
    state: &mut RaceState,
    elapsed_ms: u64,
    input: InputSnapshot,
    window_height: i32,
    rng: &mut R,
) -> StepOutcome {
    let outcome = if input.exit_down {
        StepOutcome::ExitRequested
    } else {
        StepOutcome::Continue
    };

    match state.phase {
        Phase::Running => {
            // Rising edge of the dodge key: hop over, flip direction for
            // next time. Holding the key dodges once.
            if input.move_down && !state.previous_input.move_down {
                state.car.x += state.move_car_x;
                state.move_car_x = -state.move_car_x;
            }

            scroll_road(state, elapsed_ms, window_height);

            // Collision check first: on a hit the hazard freezes exactly
            // where it struck for the crash screen.
            if state.hazard.intersects(&state.car) {
                state.phase = Phase::Crash;
            } else {
                update_hazard(state, elapsed_ms, window_height, rng);
            }
        }
        Phase::Crash => {
            if input.confirm_down && !state.previous_input.confirm_down {
                state.reset();
            }
        }
    }

    state.previous_input = input;
    outcome
}

/// Recycle any band that has scrolled past the bottom, then advance all
/// three bands downward by this tick's travel.
fn scroll_road(state: &mut RaceState, elapsed_ms: u64, window_height: i32) {
    for index in 0..state.road_y.len() {
        if state.road_y[index] >= window_height {
            // Topmost copy at this moment, scanning all three including the
            // band being replaced. Recomputed per qualifying band; under an
            // extreme delta more than one band recycles in the same tick,
            // each against the then-current minimum.
            let mut top = index;
            for candidate in 0..state.road_y.len() {
                if state.road_y[candidate] < state.road_y[top] {
                    top = candidate;
                }
            }
            state.road_y[index] = state.road_y[top] - sprites::ROAD.height + ROAD_SEAM_OVERLAP;
        }
    }

    // Truncated toward zero, so a tiny delta can advance 0 pixels.
    let travel = (state.velocity_y * elapsed_ms as f32) as i32;
    for band_y in &mut state.road_y {
        *band_y += travel;
    }
}

/// Drop the hazard; recycle it off the bottom onto one of the two columns.
fn update_hazard<R: Rng>(
    state: &mut RaceState,
    elapsed_ms: u64,
    window_height: i32,
    rng: &mut R,
) {
    state.hazard.y += (state.velocity_y * elapsed_ms as f32) as i32;

    if state.hazard.y > window_height {
        state.hazard.x = HAZARD_LEFT_X;
        if rng.gen_range(1..3) == 2 {
            state.hazard.x = HAZARD_RIGHT_X;
        }
        // Back up and off-screen; the source image height, not the scaled
        // draw height, sets the drop-in gap.
        state.hazard.y = -sprites::HAZARD.height;
        state.hazards_passed += 1;
        state.velocity_y += VELOCITY_INCREMENT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn pressed_move() -> InputSnapshot {
        InputSnapshot {
            move_down: true,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn test_dodge_alternates_between_two_columns() {
        let mut state = RaceState::new();
        let mut rng = rng();

        step(&mut state, 16, pressed_move(), WINDOW_HEIGHT, &mut rng);
        assert_eq!(state.car.x, 280 + 160);
        assert_eq!(state.move_car_x, -160);

        // Release, then press again
        step(&mut state, 16, idle(), WINDOW_HEIGHT, &mut rng);
        step(&mut state, 16, pressed_move(), WINDOW_HEIGHT, &mut rng);
        assert_eq!(state.car.x, 280);
        assert_eq!(state.move_car_x, 160);
    }

    #[test]
    fn test_held_move_key_dodges_once() {
        let mut state = RaceState::new();
        let mut rng = rng();

        for _ in 0..5 {
            step(&mut state, 16, pressed_move(), WINDOW_HEIGHT, &mut rng);
        }
        assert_eq!(state.car.x, 280 + 160);
    }

    #[test]
    fn test_bands_advance_by_truncated_travel() {
        let mut state = RaceState::new();
        let mut rng = rng();
        let before = state.road_y;

        step(&mut state, 33, idle(), WINDOW_HEIGHT, &mut rng);

        // 0.3 px/ms * 33 ms = 9.9 -> 9
        for (after, before) in state.road_y.iter().zip(before.iter()) {
            assert_eq!(after - before, 9);
        }
    }

    #[test]
    fn test_zero_elapsed_advances_nothing() {
        let mut state = RaceState::new();
        let mut rng = rng();
        let road_before = state.road_y;
        let hazard_before = state.hazard;

        step(&mut state, 0, idle(), WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.road_y, road_before);
        assert_eq!(state.hazard, hazard_before);
    }

    #[test]
    fn test_band_recycles_against_current_minimum() {
        let mut state = RaceState::new();
        let mut rng = rng();
        // One band past the bottom, the others staggered above
        state.road_y = [600, 2, -596];

        step(&mut state, 0, idle(), WINDOW_HEIGHT, &mut rng);

        // min(600, 2, -596) = -596; recycled to -596 - 600 + 2, advance 0
        assert_eq!(state.road_y[0], -596 - 600 + 2);
        assert_eq!(state.road_y[1], 2);
        assert_eq!(state.road_y[2], -596);
    }

    #[test]
    fn test_extreme_delta_recycles_bands_in_sequence() {
        let mut state = RaceState::new();
        let mut rng = rng();
        state.car.x = 50;

        // 0.3 px/ms * 6000 ms = 1800: one tick shoves every band past the
        // bottom at once
        step(&mut state, 6_000, idle(), WINDOW_HEIGHT, &mut rng);
        assert_eq!(state.road_y, [1800, 1202, 604]);

        // Next tick recycles all three, in index order, each against the
        // minimum as it stands at that moment -- including bands already
        // recycled earlier in the same scan
        step(&mut state, 0, idle(), WINDOW_HEIGHT, &mut rng);
        assert_eq!(state.road_y[0], 604 - 598);
        assert_eq!(state.road_y[1], (604 - 598) - 598);
        assert_eq!(state.road_y[2], (604 - 598) - 598 - 598);

        // The chain still comes out seam-spaced
        let mut ys = state.road_y;
        ys.sort_unstable();
        assert_eq!(ys[1] - ys[0], 598);
        assert_eq!(ys[2] - ys[1], 598);
    }

    #[test]
    fn test_band_spacing_survives_recycling() {
        let mut state = RaceState::new();
        let mut rng = rng();
        // Park the car clear of both hazard columns so the drive never ends
        state.car.x = 50;

        // Scroll long enough for several recycles
        for _ in 0..500 {
            step(&mut state, 16, idle(), WINDOW_HEIGHT, &mut rng);
        }

        let mut ys = state.road_y;
        ys.sort_unstable();
        assert_eq!(ys[1] - ys[0], 598);
        assert_eq!(ys[2] - ys[1], 598);
    }

    #[test]
    fn test_overlap_transitions_to_crash_and_freezes_hazard() {
        let mut state = RaceState::new();
        let mut rng = rng();
        // One-pixel overlap in both axes
        state.hazard.x = state.car.right() - 1;
        state.hazard.y = state.car.bottom() - 1;
        let frozen = state.hazard;

        step(&mut state, 16, idle(), WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.phase, Phase::Crash);
        assert_eq!(state.hazard, frozen);
    }

    #[test]
    fn test_edge_contact_does_not_crash() {
        let mut state = RaceState::new();
        let mut rng = rng();
        // Hazard's left edge exactly on the car's right edge
        state.hazard.x = state.car.right();
        state.hazard.y = state.car.y;

        step(&mut state, 0, idle(), WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_crash_ignores_everything_but_confirm() {
        let mut state = RaceState::new();
        let mut rng = rng();
        state.phase = Phase::Crash;
        let road_before = state.road_y;

        step(&mut state, 100, pressed_move(), WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.phase, Phase::Crash);
        assert_eq!(state.road_y, road_before);
        assert_eq!(state.car.x, 280);
    }

    #[test]
    fn test_confirm_edge_restarts_from_crash() {
        let mut state = RaceState::new();
        let mut rng = rng();
        state.phase = Phase::Crash;
        state.velocity_y = 1.7;
        state.hazards_passed = 14;

        let confirm = InputSnapshot {
            confirm_down: true,
            ..InputSnapshot::default()
        };
        step(&mut state, 16, confirm, WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.phase, Phase::Running);
        assert!((state.velocity_y - 0.3).abs() < f32::EPSILON);
        assert_eq!(state.hazards_passed, 0);
        assert_eq!(state.road_y, [0, -598, -1196]);
        // Held Enter must not re-trigger anything next frame
        assert!(state.previous_input.confirm_down);
    }

    #[test]
    fn test_held_confirm_does_not_restart() {
        let mut state = RaceState::new();
        let mut rng = rng();
        state.phase = Phase::Crash;
        state.previous_input.confirm_down = true;

        let confirm = InputSnapshot {
            confirm_down: true,
            ..InputSnapshot::default()
        };
        step(&mut state, 16, confirm, WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.phase, Phase::Crash);
    }

    #[test]
    fn test_hazard_pass_increments_and_speeds_up() {
        let mut state = RaceState::new();
        let mut rng = rng();
        state.hazard.y = WINDOW_HEIGHT;

        // 16ms at 0.3 px/ms pushes y past the window height
        step(&mut state, 16, idle(), WINDOW_HEIGHT, &mut rng);

        assert_eq!(state.hazards_passed, 1);
        assert!((state.velocity_y - 0.4).abs() < 1e-6);
        assert_eq!(state.hazard.y, -256);
        assert!(state.hazard.x == HAZARD_LEFT_X || state.hazard.x == HAZARD_RIGHT_X);
    }

    #[test]
    fn test_recycle_uses_both_columns() {
        let mut rng = rng();
        let mut seen_left = false;
        let mut seen_right = false;

        for _ in 0..64 {
            let mut state = RaceState::new();
            state.hazard.y = WINDOW_HEIGHT;
            step(&mut state, 16, idle(), WINDOW_HEIGHT, &mut rng);
            match state.hazard.x {
                HAZARD_LEFT_X => seen_left = true,
                HAZARD_RIGHT_X => seen_right = true,
                other => panic!("hazard recycled to unexpected column {}", other),
            }
        }

        assert!(seen_left && seen_right);
    }

    #[test]
    fn test_exit_reported_from_both_phases() {
        let mut state = RaceState::new();
        let mut rng = rng();
        let exit = InputSnapshot {
            exit_down: true,
            ..InputSnapshot::default()
        };

        assert_eq!(
            step(&mut state, 16, exit, WINDOW_HEIGHT, &mut rng),
            StepOutcome::ExitRequested
        );

        state.phase = Phase::Crash;
        assert_eq!(
            step(&mut state, 16, exit, WINDOW_HEIGHT, &mut rng),
            StepOutcome::ExitRequested
        );
    }

    #[test]
    fn test_exit_does_not_stop_the_simulation_itself() {
        let mut state = RaceState::new();
        let mut rng = rng();
        let before = state.road_y;
        let exit = InputSnapshot {
            exit_down: true,
            ..InputSnapshot::default()
        };

        step(&mut state, 16, exit, WINDOW_HEIGHT, &mut rng);

        // The tick still ran; honoring the exit is the shell's job
        assert_ne!(state.road_y, before);
    }
}
