//! Static plot of a trajectory using `plotters`.
//!
//! Two stacked panels share the time axis (in microseconds): inductor current
//! on top, capacitor voltage below.

use std::{
    error::Error as StdError,
    path::{Path, PathBuf},
};

use plotters::{coord::Shift, prelude::*};

use crate::{Float, error::Error, trajectory::Trajectory};

use super::TrajectorySink;

/// Configuration for customizing plots
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 900)
    pub width: u32,
    /// Image height in pixels (default: 600)
    pub height: u32,
    pub title: String,
    pub xlabel: String,
    pub current_label: String,
    pub voltage_label: String,
    pub current_color: RGBColor,
    pub voltage_color: RGBColor,
    pub background: RGBColor,
    /// Line width in pixels (default: 2)
    pub line_width: u32,
    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            title: "Resposta Temporal do Circuito RLC com Diodo".to_string(),
            xlabel: "Tempo [µs]".to_string(),
            current_label: "Corrente no Indutor [A]".to_string(),
            voltage_label: "Tensão no Capacitor [V]".to_string(),
            current_color: BLUE,
            voltage_color: BLUE,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Renders each consumed trajectory to a PNG (or SVG, by extension) file.
pub struct PlotSink {
    path: PathBuf,
    config: PlotConfig,
}

impl PlotSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, PlotConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: PlotConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, trajectory: &Trajectory) -> Result<(), Box<dyn StdError>> {
        let size = (self.config.width, self.config.height);
        let is_svg = self.path.extension().is_some_and(|ext| ext == "svg");
        if is_svg {
            let root = SVGBackend::new(&self.path, size).into_drawing_area();
            draw(&root, trajectory, &self.config)
        } else {
            let root = BitMapBackend::new(&self.path, size).into_drawing_area();
            draw(&root, trajectory, &self.config)
        }
    }
}

impl TrajectorySink for PlotSink {
    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), Error> {
        self.render(trajectory)
            .map_err(|e| Error::Plot(format!("{}: {e}", self.path.display())))?;
        tracing::info!(path = %self.path.display(), "plot written");
        Ok(())
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<(), Box<dyn StdError>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    root.fill(&config.background)?;
    let body = root.titled(&config.title, ("sans-serif", 24).into_font())?;
    let panels = body.split_evenly((2, 1));
    let times = trajectory.times_us();

    draw_panel(
        &panels[0],
        &times,
        trajectory.current(),
        None,
        &config.current_label,
        config.current_color,
        config,
    )?;
    draw_panel(
        &panels[1],
        &times,
        trajectory.voltage(),
        Some(config.xlabel.as_str()),
        &config.voltage_label,
        config.voltage_color,
        config,
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    times: &[Float],
    values: &[Float],
    xlabel: Option<&str>,
    ylabel: &str,
    color: RGBColor,
    config: &PlotConfig,
) -> Result<(), Box<dyn StdError>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let (t_min, t_max) = bounds(times);
    let (y_min, y_max) = padded(bounds(values));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(if xlabel.is_some() { 40 } else { 25 })
        .y_label_area_size(70)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(ylabel);
    if let Some(xlabel) = xlabel {
        mesh.x_desc(xlabel);
    }
    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    chart.draw_series(LineSeries::new(
        times.iter().zip(values).map(|(t, v)| (*t, *v)),
        color.stroke_width(config.line_width),
    ))?;
    Ok(())
}

fn bounds(values: &[Float]) -> (Float, Float) {
    values
        .iter()
        .fold((Float::INFINITY, Float::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// 10% head room on both sides; flat series get a unit band.
fn padded((lo, hi): (Float, Float)) -> (Float, Float) {
    let span = hi - lo;
    if span > 0.0 {
        (lo - 0.1 * span, hi + 0.1 * span)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}
