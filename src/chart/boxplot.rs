//! Horizontal box-and-whisker chart with one box per team

use crate::chart::canvas::{Canvas, HAlign, TextStyle, VAlign};
use crate::chart::layout::{
    ChartLabels, PlotArea, draw_axes, draw_frame_labels, draw_horizontal_value_axis, foreground,
    label_band, value_range,
};
use crate::chart::palette::team_colors;
use crate::io::configuration::{
    AXIS_MARGIN, BACKGROUND_COLOR, BOX_ANNOTATION_OFFSET, BOX_WIDTH, FIGURE_HEIGHT, FIGURE_WIDTH,
    MEAN_LABEL_COLOR, WHISKER_IQR_FACTOR,
};
use crate::io::error::{Result, invalid_source_data};
use crate::math::scale::LinearScale;
use crate::math::statistics::BoxSummary;
use crate::table::SprintTable;
use image::{Rgb, RgbImage};

/// Outline, whisker and median color
const LINE_COLOR: Rgb<u8> = Rgb([63, 63, 63]);
/// Radius of an outlier marker in pixels
const OUTLIER_RADIUS: i64 = 3;

/// Per-team distribution of rates across all periods
///
/// Each team gets a thin box annotated in place with its minimum and
/// maximum (black) and mean (red).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChart {
    labels: ChartLabels,
    width: u32,
    height: u32,
}

/// Smallest, largest and mean non-NaN rate of one team
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowExtremes {
    /// Smallest rate
    pub min: f64,
    /// Largest rate
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

impl RowExtremes {
    /// Extremes of the non-NaN values; `None` if there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (count, sum, min, max) = values.into_iter().filter(|v| !v.is_nan()).fold(
            (0_usize, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(count, sum, min, max), v| (count + 1, sum + v, min.min(v), max.max(v)),
        );
        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

impl BoxChart {
    /// Standard-size chart
    pub const fn new(labels: ChartLabels) -> Self {
        Self {
            labels,
            width: FIGURE_WIDTH,
            height: FIGURE_HEIGHT,
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

    /// Render every team of `table` top to bottom in table order
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds no finite rate at all
    pub fn render(&self, table: &SprintTable) -> Result<RgbImage> {
        if !table.rates().iter().any(|v| v.is_finite()) {
            return Err(invalid_source_data(
                &"distribution chart needs at least one finite rate",
            ));
        }

        let mut canvas = Canvas::new(self.width, self.height, Rgb(BACKGROUND_COLOR));
        let area = PlotArea::within(&canvas, label_band(table.teams().iter().map(String::as_str)));
        let domain = value_range(table.rates().iter().copied(), None, AXIS_MARGIN);
        let scale = LinearScale::new(domain, (area.left as f64, area.right as f64));

        let count = table.team_count();
        let slot = area.height() as f64 / count as f64;
        let half_box = ((slot * BOX_WIDTH / 2.0).round() as i64).max(1);
        let colors = team_colors(table.teams());
        let label_ink = TextStyle::new(foreground()).aligned(HAlign::Right, VAlign::Center);
        let note_ink = TextStyle::new(foreground())
            .aligned(HAlign::Left, VAlign::Center)
            .bold();

        for (index, ((team, rates), color)) in table.rows().zip(colors).enumerate() {
            let center = area.row_center(index, count);
            let center_px = center.round() as i64;

            canvas.hline(area.left - 5, area.left, center_px, foreground());
            canvas.text(team, area.left - 9, center_px, label_ink);

            if let Some(summary) = BoxSummary::from_values(rates.iter().copied(), WHISKER_IQR_FACTOR)
            {
                Self::draw_box(&mut canvas, &scale, &summary, center_px, half_box, color);
            }

            if let Some(extremes) = RowExtremes::from_values(rates.iter().copied()) {
                let note_y = BOX_ANNOTATION_OFFSET.mul_add(slot, center).round() as i64;
                let notes = [
                    (extremes.min, format!("Min: {:.2}", extremes.min), foreground()),
                    (extremes.max, format!("Max: {:.2}", extremes.max), foreground()),
                    (
                        extremes.mean,
                        format!("Avg: {:.2}", extremes.mean),
                        Rgb(MEAN_LABEL_COLOR),
                    ),
                ];
                for (value, text, ink) in notes.into_iter().filter(|(v, _, _)| v.is_finite()) {
                    canvas.text(
                        &text,
                        scale.map_px(value),
                        note_y,
                        TextStyle { color: ink, ..note_ink },
                    );
                }
            }
        }

        draw_axes(&mut canvas, &area);
        draw_horizontal_value_axis(&mut canvas, &area, &scale);
        draw_frame_labels(&mut canvas, &area, &self.labels);

        Ok(canvas.into_image())
    }

    fn draw_box(
        canvas: &mut Canvas,
        scale: &LinearScale,
        summary: &BoxSummary,
        center: i64,
        half_box: i64,
        fill: Rgb<u8>,
    ) {
        let q1 = scale.map_px(summary.q1);
        let q3 = scale.map_px(summary.q3);
        let low = scale.map_px(summary.whisker_low);
        let high = scale.map_px(summary.whisker_high);
        let cap = (half_box / 2).max(1);

        canvas.hline(low, q1, center, LINE_COLOR);
        canvas.hline(q3, high, center, LINE_COLOR);
        canvas.vline(low, center - cap, center + cap, LINE_COLOR);
        canvas.vline(high, center - cap, center + cap, LINE_COLOR);

        canvas.fill_rect((q1, center - half_box), (q3, center + half_box), fill);
        canvas.stroke_rect((q1, center - half_box), (q3, center + half_box), LINE_COLOR);
        canvas.vline(
            scale.map_px(summary.median),
            center - half_box,
            center + half_box,
            LINE_COLOR,
        );

        for &outlier in &summary.outliers {
            canvas.diamond(scale.map_px(outlier), center, OUTLIER_RADIUS, LINE_COLOR);
        }
    }
}
