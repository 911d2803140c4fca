//! Desktop simulator for the telemetry strip-chart and gauge screen.
//!
//! Reproduces the in-car screen on an `embedded-graphics-simulator` window
//! and feeds it synthetic sine signals from the wall clock.
//!
//! # Keys
//!
//! - `A`: toggle anti-aliased lines (plots are cleared)
//! - `C`: toggle the sweep cursor

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod dashboard;
mod debug_log;
mod layout;
mod signals;
mod timing;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use dashboard_plot::LineMode;
use dashboard_plot::colors::{BLACK, WHITE};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_9_POINT;

use crate::dashboard::Dashboard;
use crate::debug_log::{DebugLog, LOG_LINE_LENGTH};
use crate::layout::{BOOST_GAUGE, PEDAL_GAUGE, READOUTS, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_Y};
use crate::signals::Sample;
use crate::timing::{FAST_READOUT_PERIOD, FRAME_TIME, SLOW_READOUT_PERIOD};

fn main() {
    let mut dashboard = match Dashboard::new() {
        Ok(dashboard) => dashboard,
        Err(err) => {
            eprintln!("invalid screen layout: {err}");
            return;
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Telemetry Plot Sim", &output_settings);

    display.clear(Rgb565::from(BLACK)).ok();
    dashboard.redraw(&mut display).ok();
    draw_labels(&mut display);
    window.update(&display);

    let mut log = DebugLog::new();
    log.push("System started");
    let mut shown_log_entry = 0;

    let start = Instant::now();
    let mut last_millis = None;
    let mut last_fast_readout = start;
    let mut last_slow_readout = start;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => {
                            let mode = dashboard.toggle_line_mode();
                            dashboard.redraw(&mut display).ok();
                            log.push(match mode {
                                LineMode::Crisp => "AA: OFF",
                                LineMode::AntiAliased => "AA: ON",
                            });
                        }
                        Keycode::C => {
                            let on = dashboard.toggle_cursor();
                            log.push(if on { "Cursor: ON" } else { "Cursor: OFF" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Samples only make sense once per clock tick
        let millis = start.elapsed().as_millis() as u64;
        if last_millis != Some(millis) {
            last_millis = Some(millis);
            let sample = Sample::at(millis);
            dashboard.feed(&mut display, millis, sample, &mut log).ok();

            if last_fast_readout.elapsed() > FAST_READOUT_PERIOD {
                draw_readouts(&mut display, sample.fast, true);
                last_fast_readout = Instant::now();
            }
            if last_slow_readout.elapsed() > SLOW_READOUT_PERIOD {
                draw_readouts(&mut display, sample.fast, false);
                last_slow_readout = Instant::now();
            }
        }

        if log.pushed() != shown_log_entry {
            shown_log_entry = log.pushed();
            draw_status(&mut display, log.latest().unwrap_or_default());
        }

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

fn text_style(color: Rgb888) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&PROFONT_9_POINT)
        .text_color(color.into())
        .background_color(BLACK.into())
        .build()
}

fn draw_labels(display: &mut SimulatorDisplay<Rgb565>) {
    for gauge in [&BOOST_GAUGE, &PEDAL_GAUGE] {
        Text::with_baseline(gauge.label, Point::new(0, gauge.top), text_style(WHITE), Baseline::Top)
            .draw(display)
            .ok();
    }
}

/// Print `value` next to the plots refreshed on the given timer.
fn draw_readouts(
    display: &mut SimulatorDisplay<Rgb565>,
    value: f32,
    fast: bool,
) {
    let mut text: String<8> = String::new();
    let _ = write!(text, "{value:5.2}");
    for readout in READOUTS.iter().filter(|r| r.fast == fast) {
        Text::with_baseline(&text, Point::new(0, readout.top), text_style(readout.color), Baseline::Top)
            .draw(display)
            .ok();
    }
}

fn draw_status(
    display: &mut SimulatorDisplay<Rgb565>,
    line: &str,
) {
    // Pad so a shorter message covers the previous one
    let mut text: String<LOG_LINE_LENGTH> = String::new();
    let _ = write!(text, "{line:<width$}", width = LOG_LINE_LENGTH);
    Text::with_baseline(&text, Point::new(0, STATUS_Y), text_style(WHITE), Baseline::Top)
        .draw(display)
        .ok();
}
