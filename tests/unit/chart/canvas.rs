//! Tests for clipped drawing primitives and bitmap text

#[cfg(test)]
mod tests {
    use image::Rgb;
    use sprint_insights::chart::canvas::{Canvas, HAlign, TextStyle, VAlign};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn inked_pixels(canvas: &Canvas) -> Vec<(i64, i64)> {
        let mut inked = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(BLACK) {
                    inked.push((x, y));
                }
            }
        }
        inked
    }

    // Tests rectangles fill inclusively regardless of corner order
    // Verified by making the far edge exclusive
    #[test]
    fn test_fill_rect_inclusive_any_corner_order() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_rect((5, 5), (2, 3), BLACK);

        assert_eq!(inked_pixels(&canvas).len(), 4 * 3);
        assert_eq!(canvas.pixel(2, 3), Some(BLACK));
        assert_eq!(canvas.pixel(5, 5), Some(BLACK));
        assert_eq!(canvas.pixel(6, 5), Some(WHITE));
    }

    // Tests drawing off the edges is clipped instead of panicking
    #[test]
    fn test_drawing_is_clipped() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.fill_rect((-10, -10), (1, 1), BLACK);
        canvas.put(100, 100, BLACK);
        canvas.hline(-5, 50, 3, BLACK);

        assert_eq!(inked_pixels(&canvas).len(), 4 + 4);
        assert_eq!(canvas.pixel(-1, 0), None);
        assert_eq!(canvas.pixel(4, 0), None);
    }

    // Tests text metrics scale with glyph count and magnification
    #[test]
    fn test_text_metrics() {
        assert_eq!(Canvas::text_width("Min", 1), 24);
        assert_eq!(Canvas::text_width("Min", 2), 48);
        assert_eq!(Canvas::text_height(3), 24);
        assert_eq!(Canvas::text_width("", 1), 0);
    }

    // Tests left-aligned text stays right of its anchor and centered text straddles it
    // Verified by ignoring the horizontal anchor
    #[test]
    fn test_text_alignment() {
        let mut left = Canvas::new(100, 20, WHITE);
        left.text("88", 50, 10, TextStyle::new(BLACK).aligned(HAlign::Left, VAlign::Center));
        let inked = inked_pixels(&left);
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(x, _)| x >= 50));

        let mut centered = Canvas::new(100, 20, WHITE);
        centered.text("88", 50, 10, TextStyle::new(BLACK));
        let inked = inked_pixels(&centered);
        assert!(inked.iter().any(|&(x, _)| x < 50));
        assert!(inked.iter().any(|&(x, _)| x > 50));
        assert!(inked.iter().all(|&(_, y)| (6..14).contains(&y)));
    }

    // Tests vertical text is taller than it is wide
    #[test]
    fn test_vertical_text_orientation() {
        let mut canvas = Canvas::new(40, 100, WHITE);
        canvas.text_vertical("HHHH", 20, 50, TextStyle::new(BLACK));
        let inked = inked_pixels(&canvas);

        let xs = inked.iter().map(|&(x, _)| x);
        let ys = inked.iter().map(|&(_, y)| y);
        let width = xs.clone().max().unwrap() - xs.min().unwrap();
        let height = ys.clone().max().unwrap() - ys.min().unwrap();
        assert!(height > 3 * width);
    }

    // Tests bold text inks more pixels than regular text
    #[test]
    fn test_bold_text_is_heavier() {
        let mut regular = Canvas::new(60, 20, WHITE);
        regular.text("Avg", 30, 10, TextStyle::new(BLACK));
        let mut bold = Canvas::new(60, 20, WHITE);
        bold.text("Avg", 30, 10, TextStyle::new(BLACK).bold());

        assert!(inked_pixels(&bold).len() > inked_pixels(&regular).len());
    }

    // Tests the diamond marker touches its four tips
    #[test]
    fn test_diamond_tips() {
        let mut canvas = Canvas::new(11, 11, WHITE);
        canvas.diamond(5, 5, 3, BLACK);
        for (x, y) in [(5, 2), (5, 8), (2, 5), (8, 5)] {
            assert_eq!(canvas.pixel(x, y), Some(BLACK), "tip at ({x}, {y})");
        }
        assert_eq!(canvas.pixel(5, 5), Some(WHITE));
    }

    // Tests the finished image keeps the canvas size
    #[test]
    fn test_into_image_dimensions() {
        let image = Canvas::new(30, 20, WHITE).into_image();
        assert_eq!(image.dimensions(), (30, 20));
    }

    // Tests anchors at the coordinate limits draw nothing instead of overflowing
    // Verified by using plain addition for glyph and marker offsets
    #[test]
    fn test_extreme_anchors_do_not_overflow() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        let right = TextStyle::new(BLACK).aligned(HAlign::Right, VAlign::Bottom);

        canvas.diamond(i64::MAX, 5, 3, BLACK);
        canvas.diamond(i64::MIN, i64::MIN, 3, BLACK);
        canvas.text("Max: inf", i64::MAX, i64::MAX, TextStyle::new(BLACK).bold());
        canvas.text("Min", i64::MIN, 5, right);
        canvas.text_vertical("inf", i64::MAX, i64::MIN, TextStyle::new(BLACK));

        assert!(inked_pixels(&canvas).is_empty());
    }
}
