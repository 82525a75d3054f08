use std::env;

use crate::error::Result;

mod commands;
mod settings;

pub use commands::{Command, USAGE, execute};

pub fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cmd = Command::parse(&args)?;

    let settings = settings::load_settings();
    let catalog = settings::load_catalog(&settings);
    let now = chrono::Utc::now().timestamp();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cmd, &settings, &catalog, now, &mut out)
}
