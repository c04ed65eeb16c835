//! Vertical bar chart of one value per team

use crate::chart::canvas::{Canvas, HAlign, TextStyle, VAlign};
use crate::chart::layout::{
    ChartLabels, PlotArea, axis_ticks, draw_axes, draw_frame_labels, draw_vertical_value_axis,
    foreground, label_band, value_range,
};
use crate::io::configuration::{
    AXIS_MARGIN, BACKGROUND_COLOR, BAR_ANNOTATION_OFFSET_PX, BAR_COLOR, BAR_WIDTH, FIGURE_HEIGHT,
    FIGURE_WIDTH,
};
use crate::io::error::{Result, invalid_source_data};
use crate::math::scale::LinearScale;
use crate::table::TeamSeries;
use image::{Rgb, RgbImage};

/// Bars rising from zero, each annotated with its value to two decimals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    labels: ChartLabels,
    width: u32,
    height: u32,
    color: Rgb<u8>,
}

impl BarChart {
    /// Standard-size chart with the default bar color
    pub const fn new(labels: ChartLabels) -> Self {
        Self {
            labels,
            width: FIGURE_WIDTH,
            height: FIGURE_HEIGHT,
            color: Rgb(BAR_COLOR),
        }
    }

    /// Same chart rendered at a different pixel size
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Texts drawn around the chart
    pub const fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    /// Render `series` as one bar per team in series order
    ///
    /// # Errors
    ///
    /// Returns an error if the series is empty
    pub fn render(&self, series: &TeamSeries) -> Result<RgbImage> {
        if series.is_empty() {
            return Err(invalid_source_data(&"bar chart needs at least one team"));
        }

        let mut canvas = Canvas::new(self.width, self.height, Rgb(BACKGROUND_COLOR));
        let domain = value_range(series.values().iter().copied(), Some(0.0), AXIS_MARGIN);
        let (ticks, precision) = axis_ticks(domain);
        let tick_texts: Vec<String> = ticks
            .iter()
            .map(|tick| format!("{tick:.precision$}"))
            .collect();
        let area = PlotArea::within(&canvas, label_band(tick_texts.iter().map(String::as_str)));
        let scale = LinearScale::new(domain, (area.bottom as f64, area.top as f64));

        let count = series.len();
        let bar_half_width = area.width() as f64 / count as f64 * BAR_WIDTH / 2.0;
        let baseline = scale.map_px(0.0);
        let category_ink = TextStyle::new(foreground()).aligned(HAlign::Center, VAlign::Top);
        let value_ink = TextStyle::new(foreground()).aligned(HAlign::Center, VAlign::Center);

        for (index, (team, value)) in series.iter().enumerate() {
            let center = area.column_center(index, count);
            let left = (center - bar_half_width).round() as i64;
            let right = (center + bar_half_width).round() as i64;
            let center_px = center.round() as i64;

            // Non-finite values get no bar, only their text at the baseline
            let top = if value.is_finite() {
                let bar_top = scale.map_px(value);
                canvas.fill_rect((left, bar_top), (right, baseline), self.color);
                bar_top
            } else {
                baseline
            };
            canvas.text(
                &format!("{value:.2}"),
                center_px,
                top - BAR_ANNOTATION_OFFSET_PX,
                value_ink,
            );

            canvas.vline(center_px, area.bottom, area.bottom + 5, foreground());
            canvas.text(team, center_px, area.bottom + 9, category_ink);
        }

        draw_axes(&mut canvas, &area);
        draw_vertical_value_axis(&mut canvas, &area, &scale);
        draw_frame_labels(&mut canvas, &area, &self.labels);

        Ok(canvas.into_image())
    }
}
