//! Qualitative color palettes for per-team series

use crate::io::configuration::{
    OVERALL_LABEL, PALETTE_HUE_OFFSET, PALETTE_LIGHTNESS, PALETTE_SATURATION,
};
use image::Rgb;

/// Convert hue, lightness and saturation (all in `[0, 1]`) to RGB
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> Rgb<u8> {
    if saturation <= 0.0 {
        let gray = to_channel(lightness);
        return Rgb([gray, gray, gray]);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness.mul_add(-saturation, lightness + saturation)
    };
    let m1 = 2.0f64.mul_add(lightness, -m2);

    Rgb([
        to_channel(hue_component(m1, m2, hue + 1.0 / 3.0)),
        to_channel(hue_component(m1, m2, hue)),
        to_channel(hue_component(m1, m2, hue - 1.0 / 3.0)),
    ])
}

fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        ((m2 - m1) * hue).mul_add(6.0, m1)
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        ((m2 - m1) * (2.0 / 3.0 - hue)).mul_add(6.0, m1)
    } else {
        m1
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// `count` colors evenly spaced around the HLS hue circle
pub fn hls_palette(count: usize) -> Vec<Rgb<u8>> {
    (0..count)
        .map(|index| {
            let hue = (index as f64 / count as f64 + PALETTE_HUE_OFFSET).rem_euclid(1.0);
            hls_to_rgb(hue, PALETTE_LIGHTNESS, PALETTE_SATURATION)
        })
        .collect()
}

/// One palette color per team, with the aggregate "Overall" row forced to black
pub fn team_colors(teams: &[String]) -> Vec<Rgb<u8>> {
    hls_palette(teams.len())
        .into_iter()
        .zip(teams)
        .map(|(color, team)| {
            if team == OVERALL_LABEL {
                Rgb([0, 0, 0])
            } else {
                color
            }
        })
        .collect()
}
