use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;
use std::thread;
use std::time::Instant;

use clap::Parser;
use sortvis::prelude::*;

mod render;

#[derive(Debug, Parser)]
#[command(name = "viewer", about = "Watch sorting algorithms run")]
struct Args {
    /// Algorithm to run, see --list
    #[arg(long, short)]
    algorithm: Option<String>,

    /// Number of bars
    #[arg(long, short = 'n')]
    count: Option<usize>,

    /// Playback speed before the multiplier is applied
    #[arg(long, short)]
    speed: Option<f32>,

    /// Seed for datasets and pivot choice
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    fps: Option<f32>,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,

    /// Store the resulting settings as the new defaults
    #[arg(long)]
    save: bool,

    /// Exit as soon as the run finishes
    #[arg(long)]
    once: bool,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let registry = default_registry().unwrap_or_else(|err| {
        eprintln!("sortvis driver registry failed: {}", err);
        process::exit(1);
    });

    if args.list {
        render::print_list(&registry);
        return;
    }

    if let Err(err) = run(args, registry) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args, registry: DriverRegistry) -> Result<(), Box<dyn Error>> {
    let config_dir = storage::config_dir();
    let mut settings = match config_dir.as_deref() {
        Some(dir) => load_settings(dir)?,
        None => Settings::default(),
    };
    apply_args(&mut settings, &args);

    if args.save {
        match &config_dir {
            Some(dir) => {
                let path = storage::save_settings(dir, &settings)?;
                info!("Saved settings to {}", path.display());
            }
            None => warn!("No config directory; settings not saved"),
        }
    }

    let entry = registry.lookup(&settings.algorithm)?;
    let start = Instant::now();
    let mut controller = RunController::new(entry, &settings, start);
    let mut board = Board::new();
    let mut frames = FrameClock::new(settings.fps, start);
    let mut screen = render::Screen::new();
    let commands = spawn_input_reader();
    let mut paused = false;

    loop {
        while let Ok(command) = commands.try_recv() {
            debug!("Received {:?}", command);
            match command {
                RunCommand::Quit => return Ok(()),
                RunCommand::Reset => controller.reset(),
                RunCommand::TogglePause => paused = !paused,
                RunCommand::SetCount(count) => {
                    settings.count = count;
                    controller.set_count(count);
                }
                RunCommand::StepCount { more } => {
                    settings.count = settings.step_count(more);
                    controller.set_count(settings.count);
                }
                RunCommand::SetSpeed(speed) => {
                    settings.speed = speed;
                    controller.set_speed(settings.effective_speed());
                }
                RunCommand::StepSpeed { faster } => {
                    settings.speed = settings.step_speed(faster);
                    controller.set_speed(settings.effective_speed());
                }
                RunCommand::SwitchDriver(name) => {
                    match registry.lookup(&name) {
                        Ok(entry) => {
                            settings.algorithm = name;
                            controller.set_driver(entry);
                        }
                        Err(err) => warn!("{}", err),
                    }
                }
            }
        }

        let now = Instant::now();
        if frames.tick(now).should_render {
            board.sync(&controller);
            let status = if paused {
                controller.status()
            } else {
                controller.tick(now)
            };
            board.sync(&controller);
            screen.draw(&board, &controller, &settings, paused)?;

            if args.once && status == RunStatus::Finished {
                return Ok(());
            }
        }

        let wait = frames.next_deadline().saturating_duration_since(now);
        thread::sleep(wait);
    }
}

fn load_settings(dir: &Path) -> Result<Settings, Box<dyn Error>> {
    match storage::load_settings_if_exists(dir)? {
        Some(settings) => {
            info!("Loaded settings from {}", dir.display());
            Ok(settings)
        }
        None => {
            debug!("No settings in {}, using defaults", dir.display());
            Ok(Settings::default())
        }
    }
}

fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(algorithm) = &args.algorithm {
        settings.algorithm = algorithm.clone();
    }
    if let Some(count) = args.count {
        settings.count = count;
    }
    if let Some(speed) = args.speed {
        settings.speed = speed;
    }
    if let Some(fps) = args.fps {
        settings.fps = fps;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
}

fn spawn_input_reader() -> RunCommandReceiver {
    let (tx, rx) = command_channel();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<RunCommand>() {
                Ok(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                Err(err) => warn!("{}", err),
            }
        }
    });

    rx
}
