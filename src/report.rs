//! `KEY=VALUE` report rendering.
//!
//! The tools exist to be parsed, not read: one key per line, no sections, no
//! prose. Everything here writes to a plain [`io::Write`] so the exact
//! surface is pinned by tests. Hex fields use the widths the consuming
//! pipelines expect: 4 digits for vid/pid, 8 for button masks.

use std::io::{self, Write};

use crate::caps::DeviceCaps;
use crate::scan::CatalogReport;
use crate::session::{AxisEnvelope, SessionAggregate, SessionParams};

/// Render the catalog scanner report.
pub fn catalog(w: &mut dyn Write, report: &CatalogReport) -> io::Result<()> {
    writeln!(w, "NUM_DEVS={}", report.num_devs)?;

    for caps in &report.entries {
        writeln!(w, "JOY_{}_NAME={}", caps.id, caps.name)?;
        writeln!(w, "JOY_{}_BUTTONS={}", caps.id, caps.buttons)?;
        writeln!(w, "JOY_{}_AXES={}", caps.id, caps.axes)?;
        writeln!(w, "JOY_{}_MAXBUTTONS={}", caps.id, caps.max_buttons)?;
        writeln!(w, "JOY_{}_MAXAXES={}", caps.id, caps.max_axes)?;
        writeln!(w, "JOY_{}_VID=0x{:04X}", caps.id, caps.vid)?;
        writeln!(w, "JOY_{}_PID=0x{:04X}", caps.id, caps.pid)?;
    }

    writeln!(w, "FOUND_COUNT={}", report.found_count())?;
    writeln!(w, "TEST_FOUND={}", report.selection.found as u32)?;
    writeln!(w, "TEST_BUTTONS={}", report.selection.buttons)?;
    writeln!(w, "TEST_AXES={}", report.selection.axes)?;
    Ok(())
}

/// Render the sampler's absent-device report.
pub fn no_device(w: &mut dyn Write, id: u32) -> io::Result<()> {
    writeln!(w, "ERROR=NO_DEVICE")?;
    writeln!(w, "JOY_ID={id}")?;
    Ok(())
}

/// Render the sampler report for a completed session.
///
/// Axis and button aggregates only appear when at least one poll succeeded;
/// an all-failure session would otherwise render a meaningless envelope.
pub fn session(
    w: &mut dyn Write,
    caps: &DeviceCaps,
    params: &SessionParams,
    agg: &SessionAggregate,
) -> io::Result<()> {
    writeln!(w, "JOY_ID={}", caps.id)?;
    writeln!(w, "JOY_NAME={}", caps.name)?;
    writeln!(w, "JOY_VID=0x{:04X}", caps.vid)?;
    writeln!(w, "JOY_PID=0x{:04X}", caps.pid)?;
    writeln!(w, "JOY_AXES={}", caps.axes)?;
    writeln!(w, "JOY_BUTTONS={}", caps.buttons)?;
    writeln!(w, "SAMPLES={}", params.samples)?;
    writeln!(w, "DELAY_MS={}", params.delay_ms)?;

    for (i, sample) in &agg.spot_samples {
        writeln!(w, "SAMPLE_{i}_X={}", sample.x)?;
        writeln!(w, "SAMPLE_{i}_Y={}", sample.y)?;
        writeln!(w, "SAMPLE_{i}_Z={}", sample.z)?;
        writeln!(w, "SAMPLE_{i}_R={}", sample.r)?;
        writeln!(w, "SAMPLE_{i}_BUTTONS=0x{:08X}", sample.buttons)?;
    }

    writeln!(w, "READ_SUCCESS={}", agg.success)?;
    writeln!(w, "READ_ERRORS={}", agg.errors)?;

    if agg.success > 0 {
        axis(w, "X", &agg.x)?;
        axis(w, "Y", &agg.y)?;
        axis(w, "Z", &agg.z)?;
        axis(w, "R", &agg.r)?;
        writeln!(w, "BUTTONS_PRESSED=0x{:08X}", agg.buttons_ever)?;
        writeln!(w, "BUTTON_COUNT={}", agg.pressed_count())?;
    }

    Ok(())
}

fn axis(w: &mut dyn Write, label: &str, env: &AxisEnvelope) -> io::Result<()> {
    // Defined whenever the caller saw at least one success.
    if let (Some(lo), Some(hi), Some(span)) = (env.min(), env.max(), env.span()) {
        writeln!(w, "{label}_MIN={lo}")?;
        writeln!(w, "{label}_MAX={hi}")?;
        writeln!(w, "{label}_RANGE={span}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::FixtureSelection;
    use crate::state::JoySample;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    fn gamepad() -> DeviceCaps {
        DeviceCaps {
            id: 0,
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
    fn no_device_report_is_two_lines() {
        let out = render(|w| no_device(w, 2));
        assert_eq!(out, "ERROR=NO_DEVICE\nJOY_ID=2\n");
    }

    #[test]
    fn empty_catalog_report() {
        let out = render(|w| catalog(w, &CatalogReport::default()));
        assert_eq!(
            out,
            "NUM_DEVS=0\nFOUND_COUNT=0\nTEST_FOUND=0\nTEST_BUTTONS=0\nTEST_AXES=0\n"
        );
    }

    #[test]
    fn catalog_entry_keys_and_hex_widths() {
        let report = CatalogReport {
            num_devs: 16,
            entries: vec![gamepad()],
            selection: FixtureSelection {
                found: true,
                buttons: 32,
                axes: 6,
            },
        };
        let out = render(|w| catalog(w, &report));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "NUM_DEVS=16",
                "JOY_0_NAME=Test Gamepad",
                "JOY_0_BUTTONS=32",
                "JOY_0_AXES=6",
                "JOY_0_MAXBUTTONS=32",
                "JOY_0_MAXAXES=6",
                "JOY_0_VID=0x1234",
                "JOY_0_PID=0xBEAD",
                "FOUND_COUNT=1",
                "TEST_FOUND=1",
                "TEST_BUTTONS=32",
                "TEST_AXES=6",
            ]
        );
    }

    #[test]
    fn session_report_suppresses_aggregates_without_successes() {
        let agg = SessionAggregate {
            errors: 10,
            ..SessionAggregate::default()
        };
        let out = render(|w| session(w, &gamepad(), &SessionParams::default(), &agg));

        assert!(out.contains("READ_SUCCESS=0\n"));
        assert!(out.contains("READ_ERRORS=10\n"));
        for key in ["_MIN", "_MAX", "_RANGE", "BUTTONS_PRESSED", "BUTTON_COUNT"] {
            assert!(!out.contains(key), "unexpected key {key} in:\n{out}");
        }
    }

    #[test]
    fn session_report_full_surface_in_order() {
        let mut agg = SessionAggregate {
            success: 3,
            errors: 1,
            buttons_ever: 0x0000_0007,
            ..SessionAggregate::default()
        };
        for v in [100u32, 900, 400] {
            agg.x.observe(v);
            agg.y.observe(v);
            agg.z.observe(v);
            agg.r.observe(v);
        }
        agg.spot_samples.push((
            0,
            JoySample {
                x: 100,
                y: 100,
                z: 100,
                r: 100,
                buttons: 0x1,
                ..JoySample::default()
            },
        ));
        agg.spot_samples.push((
            3,
            JoySample {
                x: 400,
                y: 400,
                z: 400,
                r: 400,
                buttons: 0x4,
                ..JoySample::default()
            },
        ));

        let params = SessionParams {
            device: 0,
            samples: 4,
            delay_ms: 25,
        };
        let out = render(|w| session(w, &gamepad(), &params, &agg));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "JOY_ID=0",
                "JOY_NAME=Test Gamepad",
                "JOY_VID=0x1234",
                "JOY_PID=0xBEAD",
                "JOY_AXES=6",
                "JOY_BUTTONS=32",
                "SAMPLES=4",
                "DELAY_MS=25",
                "SAMPLE_0_X=100",
                "SAMPLE_0_Y=100",
                "SAMPLE_0_Z=100",
                "SAMPLE_0_R=100",
                "SAMPLE_0_BUTTONS=0x00000001",
                "SAMPLE_3_X=400",
                "SAMPLE_3_Y=400",
                "SAMPLE_3_Z=400",
                "SAMPLE_3_R=400",
                "SAMPLE_3_BUTTONS=0x00000004",
                "READ_SUCCESS=3",
                "READ_ERRORS=1",
                "X_MIN=100",
                "X_MAX=900",
                "X_RANGE=800",
                "Y_MIN=100",
                "Y_MAX=900",
                "Y_RANGE=800",
                "Z_MIN=100",
                "Z_MAX=900",
                "Z_RANGE=800",
                "R_MIN=100",
                "R_MAX=900",
                "R_RANGE=800",
                "BUTTONS_PRESSED=0x00000007",
                "BUTTON_COUNT=3",
            ]
        );
    }

    #[test]
    fn button_count_is_popcount_of_mask() {
        let mut agg = SessionAggregate {
            success: 1,
            buttons_ever: 0x8000_0001,
            ..SessionAggregate::default()
        };
        agg.x.observe(0);
        agg.y.observe(0);
        agg.z.observe(0);
        agg.r.observe(0);

        let out = render(|w| session(w, &gamepad(), &SessionParams::default(), &agg));
        assert!(out.contains("BUTTONS_PRESSED=0x80000001\n"));
        assert!(out.contains("BUTTON_COUNT=2\n"));
    }
}
