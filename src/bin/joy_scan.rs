//! Device catalog scanner.
//!
//! Enumerates every joystick slot the subsystem reports, prints capabilities
//! for the occupied ones, and identifies the automation test fixture. Takes
//! no arguments; always exits 0 — an empty catalog is a valid answer.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use joyprobe::subsystem::Subsystem;
use joyprobe::{backends, report, scan};

fn main() -> ExitCode {
    init_tracing();

    let mut sys = backends::detect();
    let stdout = io::stdout();
    match run(&mut stdout.lock(), sys.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("joy_scan: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(out: &mut dyn Write, sys: &mut dyn Subsystem) -> io::Result<()> {
    let catalog = scan::run(sys);
    report::catalog(out, &catalog)
}

fn init_tracing() {
    // stdout belongs to the KEY=VALUE surface; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
