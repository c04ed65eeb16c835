//! Figure framing shared by all charts: titles, plot area and value axes

use crate::chart::canvas::{Canvas, HAlign, TextStyle, VAlign};
use crate::io::configuration::{FOREGROUND_COLOR, TARGET_TICK_COUNT};
use crate::math::scale::{LinearScale, nice_step, nice_ticks, tick_precision};
use image::Rgb;

/// Length of a tick mark in pixels
const TICK_LENGTH: i64 = 5;
/// Gap between a tick mark and its label
const TICK_LABEL_GAP: i64 = 4;
/// Magnification of the chart title
pub const TITLE_SCALE: u32 = 2;
/// Space above the plot area reserved for the title
const TITLE_BAND: i64 = 50;
/// Space below the plot area for category labels and the x axis title
const BOTTOM_BAND: i64 = 60;
/// Space right of the plot area
const RIGHT_BAND: i64 = 30;
/// Space between the left edge and the y axis title
const Y_TITLE_BAND: i64 = 30;

/// Texts surrounding a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    /// Title above the plot
    pub title: String,
    /// Horizontal axis title
    pub x_label: String,
    /// Vertical axis title (empty to omit)
    pub y_label: String,
}

impl ChartLabels {
    /// Bundle the three chart texts
    pub fn new(x_label: &str, y_label: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

/// Pixel rectangle the data is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    /// Leftmost column
    pub left: i64,
    /// Topmost row
    pub top: i64,
    /// Rightmost column
    pub right: i64,
    /// Bottom row
    pub bottom: i64,
}

impl PlotArea {
    /// Carve the plot area out of a canvas, leaving `left_band` pixels for
    /// the y axis tick labels
    pub fn within(canvas: &Canvas, left_band: i64) -> Self {
        Self {
            left: Y_TITLE_BAND + left_band,
            top: TITLE_BAND,
            right: canvas.width() - RIGHT_BAND,
            bottom: canvas.height() - BOTTOM_BAND,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Height in pixels
    pub const fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Horizontal center of category slot `index` out of `count`
    pub fn column_center(&self, index: usize, count: usize) -> f64 {
        let slot = self.width() as f64 / count.max(1) as f64;
        (index as f64 + 0.5).mul_add(slot, self.left as f64)
    }

    /// Vertical center of category slot `index` out of `count`, top first
    pub fn row_center(&self, index: usize, count: usize) -> f64 {
        let slot = self.height() as f64 / count.max(1) as f64;
        (index as f64 + 0.5).mul_add(slot, self.top as f64)
    }
}

pub(crate) const fn foreground() -> Rgb<u8> {
    Rgb(FOREGROUND_COLOR)
}

/// Padded data range that always includes `baseline` when one is given
pub fn value_range(
    values: impl IntoIterator<Item = f64>,
    baseline: Option<f64>,
    margin: f64,
) -> (f64, f64) {
    let (mut min, mut max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        (min, max) = (0.0, 1.0);
    }
    if let Some(base) = baseline {
        min = min.min(base);
        max = max.max(base);
    }

    let span = if max - min > 0.0 { max - min } else { 1.0 };
    let pad = span * margin;
    match baseline {
        // Bars stick to their baseline instead of floating in padding
        Some(base) => (
            if min >= base { min } else { min - pad },
            if max <= base { max } else { max + pad },
        ),
        None => (min - pad, max + pad),
    }
}

/// Draw the title and axis titles around `area`
pub fn draw_frame_labels(canvas: &mut Canvas, area: &PlotArea, labels: &ChartLabels) {
    let ink = TextStyle::new(foreground());
    let center_x = (area.left + area.right) / 2;

    canvas.text(
        &labels.title,
        center_x,
        area.top / 2,
        ink.scaled(TITLE_SCALE),
    );
    canvas.text(
        &labels.x_label,
        center_x,
        canvas.height() - BOTTOM_BAND / 4,
        ink.aligned(HAlign::Center, VAlign::Bottom),
    );
    if !labels.y_label.is_empty() {
        canvas.text_vertical(
            &labels.y_label,
            Y_TITLE_BAND / 2,
            (area.top + area.bottom) / 2,
            ink,
        );
    }
}

/// Draw the plot box outline
pub fn draw_axes(canvas: &mut Canvas, area: &PlotArea) {
    canvas.stroke_rect(
        (area.left, area.top),
        (area.right, area.bottom),
        foreground(),
    );
}

/// Ticks for a value axis spanning `domain`
pub fn axis_ticks(domain: (f64, f64)) -> (Vec<f64>, usize) {
    let step = nice_step(domain.1 - domain.0, TARGET_TICK_COUNT);
    (
        nice_ticks(domain.0, domain.1, TARGET_TICK_COUNT),
        tick_precision(step),
    )
}

/// Ticks and labels along the left edge for a vertical value scale
pub fn draw_vertical_value_axis(canvas: &mut Canvas, area: &PlotArea, scale: &LinearScale) {
    let (ticks, precision) = axis_ticks(scale.domain());
    let ink = TextStyle::new(foreground()).aligned(HAlign::Right, VAlign::Center);
    for tick in ticks {
        let y = scale.map_px(tick);
        canvas.hline(area.left - TICK_LENGTH, area.left, y, foreground());
        canvas.text(
            &format!("{tick:.precision$}"),
            area.left - TICK_LENGTH - TICK_LABEL_GAP,
            y,
            ink,
        );
    }
}

/// Ticks and labels along the bottom edge for a horizontal value scale
pub fn draw_horizontal_value_axis(canvas: &mut Canvas, area: &PlotArea, scale: &LinearScale) {
    let (ticks, precision) = axis_ticks(scale.domain());
    let ink = TextStyle::new(foreground()).aligned(HAlign::Center, VAlign::Top);
    for tick in ticks {
        let x = scale.map_px(tick);
        canvas.vline(x, area.bottom, area.bottom + TICK_LENGTH, foreground());
        canvas.text(
            &format!("{tick:.precision$}"),
            x,
            area.bottom + TICK_LENGTH + TICK_LABEL_GAP,
            ink,
        );
    }
}

/// Width needed left of the plot for the widest of `labels`
pub fn label_band<'a>(labels: impl IntoIterator<Item = &'a str>) -> i64 {
    labels
        .into_iter()
        .map(|label| Canvas::text_width(label, 1))
        .max()
        .unwrap_or(0)
        + TICK_LENGTH
        + 2 * TICK_LABEL_GAP
}
