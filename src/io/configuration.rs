//! Thresholds, file names and chart layout constants

// Input and output files
/// Table read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "sprint_data.csv";
/// Directory charts are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Bar chart of per-team standard deviation
pub const STD_DEV_CHART_FILE: &str = "Std_Dev_Completion_Rates.jpg";
/// Horizontal box chart of each team's completion rates
pub const DISTRIBUTION_CHART_FILE: &str = "Task_Completion_Rates_Distribution.jpg";
/// Bar chart of per-team sprint goal success rate
pub const SUCCESS_RATE_CHART_FILE: &str = "Sprint_Goal_Success_Rate.jpg";
/// Bar chart of per-team velocity
pub const VELOCITY_CHART_FILE: &str = "Velocity.jpg";
/// Number of charts a full run writes
pub const CHART_COUNT: usize = 4;

// Classification thresholds
/// Completion rate at or above which a sprint counts as a success
pub const SUCCESS_THRESHOLD: f64 = 0.7;
/// Trend magnitude strictly below which a team counts as consistent
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

// Figure geometry (10x6 inches at 100 dpi)
/// Chart width in pixels
pub const FIGURE_WIDTH: u32 = 1000;
/// Chart height in pixels
pub const FIGURE_HEIGHT: u32 = 600;
/// Fraction of a category slot covered by a bar
pub const BAR_WIDTH: f64 = 0.8;
/// Fraction of a category slot covered by a box
pub const BOX_WIDTH: f64 = 0.1;
/// Pixel gap between a bar's top and its value label
pub const BAR_ANNOTATION_OFFSET_PX: i64 = 10;
/// Slot fraction below the box centre where min/max/mean labels sit
pub const BOX_ANNOTATION_OFFSET: f64 = 0.2;
/// Whisker reach as a multiple of the interquartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;
/// Padding added on both ends of a data axis, as a fraction of its span
pub const AXIS_MARGIN: f64 = 0.05;
/// Desired number of ticks on a value axis
pub const TARGET_TICK_COUNT: usize = 6;
/// JPEG encoder quality
pub const JPEG_QUALITY: u8 = 90;

// Colors
/// Bar fill (seaborn's "b")
pub const BAR_COLOR: [u8; 3] = [76, 114, 176];
/// Axis, tick and text color
pub const FOREGROUND_COLOR: [u8; 3] = [0, 0, 0];
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Color of the mean annotation on the box chart
pub const MEAN_LABEL_COLOR: [u8; 3] = [255, 0, 0];
/// Team label always drawn in black on the box chart
pub const OVERALL_LABEL: &str = "Overall";
/// Hue offset of the qualitative palette
pub const PALETTE_HUE_OFFSET: f64 = 0.01;
/// Lightness of the qualitative palette
pub const PALETTE_LIGHTNESS: f64 = 0.6;
/// Saturation of the qualitative palette
pub const PALETTE_SATURATION: f64 = 0.65;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
