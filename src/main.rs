//! Hyper Pong entry point
//!
//! Headless match driver: builds a match from the command line, feeds it
//! scripted paddle input, tallies goals, and logs every event. There is
//! no AI; the paddles only move when the chosen script says so.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use hyper_pong::consts::{MAX_DIMS, TICK_HZ};
use hyper_pong::sim::{GameEvent, MatchState, MoveDir, PlayerSide, TickInput, tick};
use hyper_pong::{GameConfig, MatchMode, axis_label};

const USAGE: &str = "\
Usage: hyper-pong [options]

Options:
  --mode <2d|3d|4d>        Dimensionality of the match (default 4d)
  --ticks <n>              How many ticks to simulate (default 1800)
  --speed <units>          Ball speed per tick (default 4)
  --serve-axis <axis>      Axis index the serve points along (default 1 = y)
  --config <file>          JSON file with a full match config
  --script <none|drift-left>
                           Canned paddle input. drift-left pulls the Left
                           paddle off the serve line; combine it with
                           --serve-axis 0 to watch goals happen.
  -h, --help               Print this help
";

/// Canned input sequences standing in for real players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Script {
    /// Nobody touches the paddles
    #[default]
    None,
    /// Hold the Left paddle's +y key for the first 90 ticks, opening a
    /// lane past it
    DriftLeft,
}

impl Script {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Script::None),
            "drift-left" | "drift" => Some(Script::DriftLeft),
            _ => None,
        }
    }

    fn input_for(self, tick_index: u64) -> TickInput {
        match self {
            Script::None => TickInput::none(),
            Script::DriftLeft if tick_index < 90 => {
                TickInput::none().with_move(PlayerSide::Left, 1, MoveDir::Positive)
            }
            Script::DriftLeft => TickInput::none(),
        }
    }
}

/// Command line options
#[derive(Debug, Default)]
struct Options {
    mode: Option<MatchMode>,
    ticks: Option<u64>,
    speed: Option<f32>,
    serve_axis: Option<usize>,
    config_path: Option<PathBuf>,
    script: Script,
}

impl Options {
    fn parse() -> Self {
        let mut options = Self::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = expect_value(&mut args, "--mode");
                    options.mode = Some(
                        MatchMode::from_str(&value)
                            .unwrap_or_else(|| bad_usage(&format!("unknown mode '{value}'"))),
                    );
                }
                "--ticks" => {
                    let value = expect_value(&mut args, "--ticks");
                    options.ticks = Some(value.parse().unwrap_or_else(|_| {
                        bad_usage(&format!("--ticks wants a number, got '{value}'"))
                    }));
                }
                "--speed" => {
                    let value = expect_value(&mut args, "--speed");
                    options.speed = Some(value.parse().unwrap_or_else(|_| {
                        bad_usage(&format!("--speed wants a number, got '{value}'"))
                    }));
                }
                "--serve-axis" => {
                    let value = expect_value(&mut args, "--serve-axis");
                    options.serve_axis = Some(value.parse().unwrap_or_else(|_| {
                        bad_usage(&format!("--serve-axis wants an axis index, got '{value}'"))
                    }));
                }
                "--config" => {
                    options.config_path = Some(PathBuf::from(expect_value(&mut args, "--config")));
                }
                "--script" => {
                    let value = expect_value(&mut args, "--script");
                    options.script = Script::from_str(&value)
                        .unwrap_or_else(|| bad_usage(&format!("unknown script '{value}'")));
                }
                "-h" | "--help" => {
                    print!("{USAGE}");
                    process::exit(0);
                }
                other => bad_usage(&format!("unknown option '{other}'")),
            }
        }
        options
    }
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => bad_usage(&format!("{flag} needs a value")),
    }
}

fn bad_usage(message: &str) -> ! {
    eprintln!("hyper-pong: {message}\n\n{USAGE}");
    process::exit(2);
}

/// Cumulative score, tallied from goal events outside the core
#[derive(Debug, Default)]
struct Scoreboard {
    score: [u32; 2],
}

impl Scoreboard {
    fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Goal { scorer } = event {
                self.score[scorer.index()] += 1;
                log::info!(
                    "GOAL for {} past {}! score now {} : {}",
                    scorer.as_str(),
                    scorer.opponent().as_str(),
                    self.score[0],
                    self.score[1]
                );
            }
        }
    }
}

fn main() {
    env_logger::init();
    let options = Options::parse();
    log::info!("Hyper Pong (headless) starting...");

    let mut config = match &options.config_path {
        Some(path) => GameConfig::<MAX_DIMS>::load_or_default(path),
        None => GameConfig::classic(options.mode.unwrap_or_default()),
    };
    if let Some(mode) = options.mode {
        config.active_dims = mode.active_dims();
    }
    if let Some(speed) = options.speed {
        config.ball_speed = speed;
    }
    if let Some(axis) = options.serve_axis {
        config.serve_axis = axis;
    }

    let mut state = match MatchState::new(config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("hyper-pong: invalid match config: {err}");
            process::exit(1);
        }
    };

    let ticks = options.ticks.unwrap_or(1800);
    log::info!(
        "{}D match: arena {}, serve {:.1}/tick along {}",
        state.config.active_dims,
        state.config.arena.extents,
        state.config.ball_speed,
        axis_label(state.config.serve_axis)
    );

    let mut scoreboard = Scoreboard::default();
    let started = Instant::now();
    for t in 0..ticks {
        let input = options.script.input_for(t);
        let events = tick(&mut state, &input);
        for event in &events {
            match event {
                GameEvent::WallBounce { axis } => {
                    log::debug!("tick {t}: wall bounce on {}", axis_label(*axis));
                }
                GameEvent::PaddleHit { side } => {
                    log::debug!("tick {t}: ball off the {} paddle", side.as_str());
                }
                GameEvent::Goal { .. } => {} // logged by the scoreboard
            }
        }
        scoreboard.apply(&events);
    }
    let elapsed = started.elapsed();

    println!(
        "{} ticks ({:.1} s of play) simulated in {:.1} ms",
        ticks,
        ticks as f32 / TICK_HZ as f32,
        elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "final score  Left {} : {} Right",
        scoreboard.score[0], scoreboard.score[1]
    );
    println!("ball at {} heading {}", state.ball.pos, state.ball.vel);
}
