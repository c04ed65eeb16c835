//! Raster drawing surface with bitmap text

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

/// Side length of a glyph cell in font pixels
const GLYPH_SIZE: i64 = 8;

/// Horizontal anchor of a text run relative to its reference point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    /// Text starts at the reference point
    Left,
    /// Text is centered on the reference point
    Center,
    /// Text ends at the reference point
    Right,
}

/// Vertical anchor of a text run relative to its reference point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    /// Reference point is the top edge
    Top,
    /// Reference point is the vertical middle
    Center,
    /// Reference point is the bottom edge
    Bottom,
}

/// How a text run is placed and painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Fill color
    pub color: Rgb<u8>,
    /// Integer magnification of the 8x8 glyphs
    pub scale: u32,
    /// Horizontal anchor
    pub h_align: HAlign,
    /// Vertical anchor
    pub v_align: VAlign,
    /// Paint each glyph twice, one pixel apart
    pub bold: bool,
}

impl TextStyle {
    /// Unscaled, centered, regular text in `color`
    pub const fn new(color: Rgb<u8>) -> Self {
        Self {
            color,
            scale: 1,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            bold: false,
        }
    }

    /// Same style with a different magnification
    pub const fn scaled(self, scale: u32) -> Self {
        Self { scale, ..self }
    }

    /// Same style with different anchors
    pub const fn aligned(self, h_align: HAlign, v_align: VAlign) -> Self {
        Self {
            h_align,
            v_align,
            ..self
        }
    }

    /// Same style painted bold
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Owned RGB image with clipped primitive drawing
///
/// Coordinates are signed so geometry may run off the edges; anything
/// outside the image is silently dropped.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> i64 {
        i64::from(self.image.width())
    }

    /// Height in pixels
    pub fn height(&self) -> i64 {
        i64::from(self.image.height())
    }

    /// Color at `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb<u8>> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Paint a single pixel
    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }

    /// Fill the rectangle spanning both corners, inclusive
    pub fn fill_rect(&mut self, corner_a: (i64, i64), corner_b: (i64, i64), color: Rgb<u8>) {
        let (x0, x1) = ordered(corner_a.0, corner_b.0);
        let (y0, y1) = ordered(corner_a.1, corner_b.1);
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width() - 1);
        let y1 = y1.min(self.height() - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Outline the rectangle spanning both corners
    pub fn stroke_rect(&mut self, corner_a: (i64, i64), corner_b: (i64, i64), color: Rgb<u8>) {
        self.hline(corner_a.0, corner_b.0, corner_a.1, color);
        self.hline(corner_a.0, corner_b.0, corner_b.1, color);
        self.vline(corner_a.0, corner_a.1, corner_b.1, color);
        self.vline(corner_b.0, corner_a.1, corner_b.1, color);
    }

    /// Horizontal line between `x0` and `x1` on row `y`
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgb<u8>) {
        self.fill_rect((x0, y), (x1, y), color);
    }

    /// Vertical line between `y0` and `y1` in column `x`
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
        self.fill_rect((x, y0), (x, y1), color);
    }

    /// Hollow diamond marker of the given radius centered on `(x, y)`
    pub fn diamond(&mut self, x: i64, y: i64, radius: i64, color: Rgb<u8>) {
        for offset in 0..=radius {
            let rest = radius - offset;
            for (dx, dy) in [(-offset, -rest), (offset, -rest), (-offset, rest), (offset, rest)] {
                self.put(x.saturating_add(dx), y.saturating_add(dy), color);
            }
        }
    }

    /// Rendered width of `text` in pixels at `scale`
    pub fn text_width(text: &str, scale: u32) -> i64 {
        text.chars().count() as i64 * GLYPH_SIZE * i64::from(scale)
    }

    /// Rendered height of a text line in pixels at `scale`
    pub fn text_height(scale: u32) -> i64 {
        GLYPH_SIZE * i64::from(scale)
    }

    /// Draw `text` left to right, anchored at `(x, y)`
    pub fn text(&mut self, text: &str, x: i64, y: i64, style: TextStyle) {
        let width = Self::text_width(text, style.scale);
        let height = Self::text_height(style.scale);
        let left = match style.h_align {
            HAlign::Left => x,
            HAlign::Center => x.saturating_sub(width / 2),
            HAlign::Right => x.saturating_sub(width),
        };
        let top = match style.v_align {
            VAlign::Top => y,
            VAlign::Center => y.saturating_sub(height / 2),
            VAlign::Bottom => y.saturating_sub(height),
        };

        let advance = Self::text_width("M", style.scale);
        for (index, character) in (0_i64..).zip(text.chars()) {
            let origin = (left.saturating_add(index * advance), top);
            self.glyph(character, origin, style, |gx, gy| (gx, gy));
        }
    }

    /// Draw `text` bottom to top (rotated a quarter turn counterclockwise),
    /// centered on `(x, y)`
    pub fn text_vertical(&mut self, text: &str, x: i64, y: i64, style: TextStyle) {
        let length = Self::text_width(text, style.scale);
        let thickness = Self::text_height(style.scale);
        let left = x.saturating_sub(thickness / 2);
        let bottom = y.saturating_add(length / 2);

        let advance = Self::text_width("M", style.scale);
        let cell = Self::text_height(style.scale);
        for (index, character) in (1_i64..).zip(text.chars()) {
            let origin = (left, bottom.saturating_sub(index * advance));
            self.glyph(character, origin, style, |gx, gy| (gy, cell - 1 - gx));
        }
    }

    fn glyph(
        &mut self,
        character: char,
        origin: (i64, i64),
        style: TextStyle,
        transform: impl Fn(i64, i64) -> (i64, i64),
    ) {
        let bitmap = BASIC_FONTS
            .get(character)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let scale = i64::from(style.scale.max(1));

        for (row, bits) in (0_i64..).zip(bitmap) {
            for column in 0..GLYPH_SIZE {
                if bits & (1 << column) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let (dx, dy) = transform(column * scale + sx, row * scale + sy);
                        let x = origin.0.saturating_add(dx);
                        let y = origin.1.saturating_add(dy);
                        self.put(x, y, style.color);
                        if style.bold {
                            self.put(x.saturating_add(1), y, style.color);
                        }
                    }
                }
            }
        }
    }

    /// Consume the canvas, yielding the finished image
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

const fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
