use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::constants::TICK_INTERVAL_MICROS;
use flappy::game::{tick, Session, TickOutcome};
use flappy::input::poll_tick_input;
use flappy::logger::init_file_logger;
use flappy::ui::draw_ui;
use log::{debug, error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Pipe RNG seed; random when absent.
    seed: Option<u64>,
    /// Log file; no logging when absent.
    log_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Play(Options),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = iter.next().ok_or("Missing value for --seed")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--log" => {
                let value = iter.next().ok_or("Missing value for --log")?;
                options.log_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <n>     Seed the pipe generator for a repeatable run");
    println!("  --log <path>   Write a debug log to <path>");
    println!("  --version      Show version information");
    println!("  --help         Show this help message\n");
    println!("Controls:");
    println!("  Space/Up/Enter  Flap, or restart after a crash");
    println!("  Esc/q/Ctrl-C    Quit");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        init_file_logger(path, LevelFilter::Debug)?;
    }

    let seed = options.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!("{} starting, seed {}", build_info::version_line(), seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut rng);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("terminal error: {}", e);
    }
    result
}

/// Fixed-rate loop: sample input, advance the session, draw.
fn run<B: Backend, R: Rng>(terminal: &mut Terminal<B>, rng: &mut R) -> io::Result<()> {
    let frame_duration = Duration::from_micros(TICK_INTERVAL_MICROS);
    let mut session = Session::new(rng);
    let mut next_frame = Instant::now();

    loop {
        let input = poll_tick_input()?;
        if input.quit {
            info!("quit with score {}", session.score);
            return Ok(());
        }

        let outcome = tick(&mut session, &input, rng);
        log_outcome(&session, &outcome);

        terminal.draw(|frame| draw_ui(frame, &session))?;

        next_frame += frame_duration;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            // Fell behind (slow terminal, suspended process); don't try to catch up
            next_frame = now;
        }
    }
}

fn log_outcome(session: &Session, outcome: &TickOutcome) {
    if outcome.restarted {
        info!("restarted");
    }
    if outcome.scored > 0 {
        debug!("score {}", session.score);
    }
    if let Some(crash) = outcome.crash {
        info!(
            "run over after {} ticks: {}, score {}",
            session.tick_count,
            crash.describe(),
            session.score
        );
    }
}
