mod config;
mod cursor;
mod display;
mod fps;
mod grid;

use backend::logging::{init_logging, LoggingConfig};
use config::{Command, USAGE};
use display::Display;
use fps::FpsCounter;
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<String>>();
    let config = match config::parse_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(LoggingConfig::default());

    let mut display = match Display::init(config) {
        Ok(d) => d,
        Err(msg) => {
            log::error!("Init Error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(msg) = display.load() {
        log::error!("Load Error: {msg}");
        return ExitCode::FAILURE;
    }

    let mut fps = FpsCounter::new(Instant::now());
    loop {
        if let Some(frames) = fps.poll(Instant::now()) {
            log::info!("FPS: {frames}");
        }
        if !display.handle_events() {
            break;
        }
        display.render();
        fps.frame();
    }
    display.stop();

    ExitCode::SUCCESS
}
