mod build_info;
mod constants;
mod game_logic;
mod game_state;
mod input;
mod rect;
mod sprites;
mod ui;

use constants::{FRAME_POLL_MS, WINDOW_HEIGHT};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_logic::{step, StepOutcome};
use game_state::{InputSnapshot, RaceState};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "drivefast {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("DriveFast - Terminal Arcade Driving Game\n");
                println!("Usage: drivefast\n");
                println!("Keys:");
                println!("  Space   Dodge to the other lane");
                println!("  Enter   Restart after a crash");
                println!("  Escape  Exit\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'drivefast --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even if the frame pump bailed with an error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// The frame pump: draw, sample input, step, until the step function
/// surfaces an exit request.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut state = RaceState::new();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            ui::race_scene::render_race_scene(frame, area, &state);
        })?;

        // Drain this frame's key events into one snapshot
        let mut snapshot = InputSnapshot::default();
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            loop {
                if let Event::Key(key) = event::read()? {
                    input::apply_key_event(&mut snapshot, key);
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let elapsed_ms = (now - last_frame).as_millis() as u64;
        last_frame = now;

        let outcome = step(&mut state, elapsed_ms, snapshot, WINDOW_HEIGHT, &mut rng);
        if outcome == StepOutcome::ExitRequested {
            break;
        }
    }

    Ok(())
}
