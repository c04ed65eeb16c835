//! JPEG export of rendered charts

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{InsightsError, Result};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write `chart` to `output_path` as a JPEG, replacing any existing file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created
/// - JPEG encoding fails
pub fn export_chart_as_jpeg(chart: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| InsightsError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| InsightsError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(chart)
        .map_err(|e| InsightsError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    std::io::Write::flush(&mut writer).map_err(|e| InsightsError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "flush file",
        source: e,
    })?;

    Ok(())
}
