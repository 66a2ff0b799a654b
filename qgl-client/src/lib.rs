//! The OpenGL half of the QiangGL lessons: window and context setup, GL
//! resource wrappers, embedded shaders, the lessons themselves and the frame
//! loop that drives them.

use std::process::ExitCode;

use qgl_core::{AppConfig, LessonKind};

pub mod abs;
pub mod error;
pub mod input;
pub mod lessons;
pub mod logging;
pub mod render;
pub mod runner;

pub use error::AppError;
pub use runner::RunMode;

/// Loads the configuration and logger, then runs `kind` until the window closes.
pub fn start(kind: LessonKind, mode: RunMode) -> Result<(), AppError> {
    let (config, config_error) = AppConfig::load_or_default();
    logging::init(&config.log)?;
    if let Some(e) = config_error {
        log::warn!("{}. Using the default configuration", e);
    }

    let mut app = abs::App::new(&config.window)?;
    runner::run(&mut app, &config, kind, mode)
}

/// Entry point for the standalone lesson binaries.
pub fn launch(kind: LessonKind) -> ExitCode {
    exit_code(start(kind, RunMode::Single))
}

/// Entry point for the launcher. `arg` picks the first lesson by name or number.
pub fn launch_selector(arg: Option<String>) -> ExitCode {
    let kind = match arg.as_deref().map(str::parse::<LessonKind>) {
        None => LessonKind::HelloWindow,
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("{}", e);
            eprintln!("Available lessons:");
            for kind in LessonKind::ALL {
                eprintln!("  {}  {}", kind.digit(), kind);
            }
            return ExitCode::FAILURE;
        }
    };
    exit_code(start(kind, RunMode::Launcher))
}

fn exit_code(result: Result<(), AppError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            // the logger may not be installed yet
            if !log::log_enabled!(log::Level::Error) {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
