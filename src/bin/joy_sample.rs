//! Sampling aggregator.
//!
//! Polls one joystick slot at a fixed cadence and reports per-axis min/max
//! envelopes, the cumulative button mask, and success/error counts.
//!
//! Usage: `joy_sample [device_id] [samples] [delay_ms]`
//! - defaults: device 0, 10 samples, 50 ms
//! - non-numeric arguments parse to 0, matching the atoi convention the
//!   consuming pipelines already rely on
//!
//! Exits 1 when the device is absent or any poll failed, 0 otherwise.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use joyprobe::backends;
use joyprobe::report;
use joyprobe::session::{self, SessionParams};
use joyprobe::subsystem::Subsystem;

fn main() -> ExitCode {
    init_tracing();

    let params = params_from_args();
    let mut sys = backends::detect();
    let stdout = io::stdout();
    match run(&mut stdout.lock(), sys.as_mut(), params) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("joy_sample: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Validate the slot, run the session, render the report. Returns whether
/// the run was clean (device present, no failed polls).
fn run(out: &mut dyn Write, sys: &mut dyn Subsystem, params: SessionParams) -> io::Result<bool> {
    let caps = match sys.capabilities(params.device) {
        Ok(caps) => caps,
        Err(_) => {
            report::no_device(out, params.device)?;
            return Ok(false);
        }
    };

    let agg = session::run(sys, params);
    report::session(out, &caps, &params, &agg)?;
    Ok(!agg.is_degraded())
}

fn params_from_args() -> SessionParams {
    let defaults = SessionParams::default();
    let mut args = std::env::args().skip(1);
    SessionParams {
        device: args
            .next()
            .map_or(defaults.device, |a| a.parse().unwrap_or(0)),
        samples: args
            .next()
            .map_or(defaults.samples, |a| a.parse().unwrap_or(0)),
        delay_ms: args
            .next()
            .map_or(defaults.delay_ms, |a| a.parse().unwrap_or(0)),
    }
}

fn init_tracing() {
    // stdout belongs to the KEY=VALUE surface; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use joyprobe::backends::scripted::ScriptedSubsystem;
    use joyprobe::caps::DeviceCaps;
    use joyprobe::state::JoySample;

    fn gamepad(id: u32) -> DeviceCaps {
        DeviceCaps {
            id,
            name: "Test Gamepad".to_string(),
            vid: 0x1234,
            pid: 0xBEAD,
            axes: 6,
            buttons: 32,
            max_axes: 6,
            max_buttons: 32,
        }
    }

    #[test]
    fn absent_device_prints_two_lines_and_never_polls() {
        let mut sys = ScriptedSubsystem::new(4);
        let mut out = Vec::new();

        let clean = run(&mut out, &mut sys, SessionParams::default()).expect("run");

        assert!(!clean);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "ERROR=NO_DEVICE\nJOY_ID=0\n"
        );
        assert_eq!(sys.snapshot_calls(), 0);
        assert!(sys.delay_calls().is_empty());
    }

    #[test]
    fn clean_session_reports_and_passes() {
        let mut sys = ScriptedSubsystem::empty();
        sys.install(gamepad(0));
        sys.feed_repeated(
            0,
            JoySample {
                x: 32767,
                buttons: 0x3,
                ..JoySample::default()
            },
            2,
        );

        let params = SessionParams {
            samples: 2,
            ..SessionParams::default()
        };
        let mut out = Vec::new();
        let clean = run(&mut out, &mut sys, params).expect("run");

        assert!(clean);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("JOY_ID=0\nJOY_NAME=Test Gamepad\n"));
        assert!(text.contains("READ_SUCCESS=2\nREAD_ERRORS=0\n"));
        assert!(text.contains("BUTTONS_PRESSED=0x00000003\nBUTTON_COUNT=2\n"));
    }

    #[test]
    fn failed_polls_degrade_the_run() {
        let mut sys = ScriptedSubsystem::empty();
        sys.install(gamepad(0));
        sys.feed(0, JoySample::default());
        sys.feed_failure(0);

        let params = SessionParams {
            samples: 2,
            ..SessionParams::default()
        };
        let mut out = Vec::new();
        let clean = run(&mut out, &mut sys, params).expect("run");

        assert!(!clean);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("READ_SUCCESS=1\nREAD_ERRORS=1\n"));
    }
}
