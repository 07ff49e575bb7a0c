//! Frequency chart rendering.
//!
//! Draws one line per scheme, value on the x-axis and word count on the
//! y-axis, and writes the chart as SVG.

use camino::Utf8Path;
use gematria_stats_core::{Frequencies, Scheme};
use plotters::prelude::*;
use thiserror::Error;

/// Chart caption.
pub const CHART_TITLE: &str = "Gematria Frequency Statistics";

/// X-axis description.
pub const X_LABEL: &str = "Gematria Value";

/// Y-axis description.
pub const Y_LABEL: &str = "Frequency";

/// Output path used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT: &str = "gematria-frequency.svg";

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Every frequency table was empty.
    #[error("nothing to plot: the corpus contains no words")]
    NoData,

    /// Width or height was zero.
    #[error("invalid chart size {width}x{height}")]
    InvalidSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The plotting backend failed.
    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl ChartOptions {
    /// Fill unset dimensions from the defaults.
    pub fn with_overrides(width: Option<u32>, height: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            width: width.unwrap_or(defaults.width),
            height: height.unwrap_or(defaults.height),
        }
    }
}

const fn scheme_color(scheme: Scheme) -> RGBColor {
    match scheme {
        Scheme::Ordinal => BLUE,
        Scheme::Reduced => RED,
        Scheme::ReverseOrdinal => GREEN,
        Scheme::ReverseReduced => MAGENTA,
    }
}

fn drawing_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Render every non-empty frequency table as a line on one chart.
///
/// Points are drawn in ascending value order.
#[tracing::instrument(skip(frequencies), fields(total_words = frequencies.total_words()))]
pub fn render_frequencies(
    frequencies: &Frequencies,
    output: &Utf8Path,
    options: ChartOptions,
) -> Result<(), RenderError> {
    if options.width == 0 || options.height == 0 {
        return Err(RenderError::InvalidSize {
            width: options.width,
            height: options.height,
        });
    }

    let series: Vec<(Scheme, Vec<(u32, usize)>)> = frequencies
        .iter()
        .filter(|(_, table)| !table.is_empty())
        .map(|(scheme, table)| (scheme, table.sorted_pairs()))
        .collect();
    if series.is_empty() {
        return Err(RenderError::NoData);
    }

    let x_max = frequencies
        .iter()
        .filter_map(|(_, table)| table.max_value())
        .max()
        .unwrap_or(0)
        + 1;
    let y_max = frequencies
        .iter()
        .filter_map(|(_, table)| table.max_count())
        .max()
        .unwrap_or(0)
        + 1;

    let root =
        SVGBackend::new(output.as_std_path(), (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0u32..x_max, 0usize..y_max)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(drawing_error)?;

    for (scheme, points) in series {
        let color = scheme_color(scheme);
        tracing::debug!(%scheme, points = points.len(), "drawing series");
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(drawing_error)?
            .label(scheme.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    tracing::info!(output = %output, "chart written");
    Ok(())
}
