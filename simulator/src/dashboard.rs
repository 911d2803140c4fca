//! The renderers of the simulated screen and how samples reach them.

use core::fmt::Write;

use dashboard_plot::{ConfigError, Domain, LineMode, LinearGauge, StripChart, Surface};
use heapless::String;

use crate::debug_log::DebugLog;
use crate::layout::{
    BOOST_GAUGE,
    CHART_MAX,
    CHART_MIN,
    CHARTS,
    Feed,
    GAUGE_MAX,
    GAUGE_MIN,
    GaugeLayout,
    PEDAL_GAUGE,
};
use crate::signals::Sample;

pub struct Dashboard {
    charts: Vec<(StripChart, Feed)>,
    boost: LinearGauge,
    pedal: LinearGauge,
    line_mode: LineMode,
    cursor: bool,
    pedal_alert: Option<f32>,
    pedal_alerting: bool,
}

impl Dashboard {
    pub fn new() -> Result<Self, ConfigError> {
        let charts = CHARTS
            .iter()
            .map(|layout| {
                let mut chart = StripChart::new(
                    layout.bounds(),
                    Domain::new(0.0, layout.sweep_s, CHART_MIN, CHART_MAX),
                )?;
                if let Some(color) = layout.line {
                    chart.set_line_color(color);
                }
                if let Some(width) = layout.eraser {
                    chart.set_eraser_width(width);
                }
                chart.set_x_grid_interval(layout.x_grid);
                chart.set_y_grid_interval(layout.y_grid);
                chart.set_cursor(true);
                Ok((chart, layout.feed))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            charts,
            boost: build_gauge(&BOOST_GAUGE)?,
            pedal: build_gauge(&PEDAL_GAUGE)?,
            line_mode: LineMode::Crisp,
            cursor: true,
            pedal_alert: PEDAL_GAUGE.max_alert,
            pedal_alerting: false,
        })
    }

    /// Repaint every plot and gauge from scratch.
    pub fn redraw<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        for (chart, _) in &mut self.charts {
            chart.redraw_axis(surface)?;
        }
        self.boost.redraw(surface)?;
        self.pedal.redraw(surface)
    }

    /// Push one frame of readings to all renderers.
    pub fn feed<S: Surface>(
        &mut self,
        surface: &mut S,
        millis: u64,
        sample: Sample,
        log: &mut DebugLog,
    ) -> Result<(), S::Error> {
        for (i, (chart, feed)) in self.charts.iter_mut().enumerate() {
            let sweeps = chart.sweeps();
            chart.add_data_millis(surface, millis, feed.apply(sample.fast))?;
            if sweeps == 0 && chart.sweeps() == 1 {
                let mut msg: String<32> = String::new();
                let _ = write!(msg, "Plot {} wrapped", i + 1);
                log.push(&msg);
            }
        }

        self.pedal.update(surface, sample.pedal())?;
        self.boost.update(surface, sample.boost())?;

        if let Some(alert) = self.pedal_alert {
            let alerting = sample.pedal() >= alert;
            if alerting && !self.pedal_alerting {
                log.push("Pedal over alert");
            }
            self.pedal_alerting = alerting;
        }
        Ok(())
    }

    /// Switch all charts between crisp and anti-aliased lines.
    pub fn toggle_line_mode(&mut self) -> LineMode {
        self.line_mode = match self.line_mode {
            LineMode::Crisp => LineMode::AntiAliased,
            LineMode::AntiAliased => LineMode::Crisp,
        };
        for (chart, _) in &mut self.charts {
            chart.set_line_mode(self.line_mode);
        }
        self.line_mode
    }

    /// Show or hide the sweep position on all charts.
    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor = !self.cursor;
        for (chart, _) in &mut self.charts {
            chart.set_cursor(self.cursor);
        }
        self.cursor
    }

    #[allow(dead_code)]
    pub fn charts(&self) -> impl Iterator<Item = &StripChart> { self.charts.iter().map(|(chart, _)| chart) }

    #[allow(dead_code)]
    pub const fn boost(&self) -> &LinearGauge { &self.boost }

    #[allow(dead_code)]
    pub const fn pedal(&self) -> &LinearGauge { &self.pedal }
}

fn build_gauge(layout: &GaugeLayout) -> Result<LinearGauge, ConfigError> {
    let mut gauge = LinearGauge::new(layout.bounds(), GAUGE_MIN, GAUGE_MAX)?;
    if let Some(base) = layout.baseline {
        gauge.set_base_value(base);
    }
    if let Some(alert) = layout.max_alert {
        gauge.set_max_alert(alert);
    }
    Ok(gauge)
}

// =============================================================================
// Tests
// =============================================================================
