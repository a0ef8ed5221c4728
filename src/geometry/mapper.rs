//! Conversion from rendered-image pixels back to PDF page points.

use super::{PixelBox, Rect};

/// Maps OCR boxes from a page image rendered at a fixed zoom into page space.
///
/// The horizontal axis only needs rescaling. The vertical axis is also
/// flipped, since image rows grow downward while PDF coordinates grow upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    zoom: f32,
}

impl CoordinateMapper {
    /// Create a mapper for images rendered at `zoom` pixels per point.
    pub fn new(zoom: f32) -> Self {
        Self { zoom }
    }

    /// The zoom factor this mapper divides by.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Convert a pixel box into a page-space rectangle.
    ///
    /// No clamping is applied: a box that extends past the page edge after
    /// rescaling produces a rectangle outside `[0, page_height]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_highlight::geometry::{CoordinateMapper, PixelBox};
    ///
    /// let mapper = CoordinateMapper::new(3.0);
    /// let rect = mapper.to_page_rect(&PixelBox::new(300.0, 0.0, 120.0, 36.0), 792.0);
    /// assert_eq!(rect.x0, 100.0);
    /// assert_eq!(rect.x1, 140.0);
    /// assert_eq!(rect.y1, 792.0);
    /// assert_eq!(rect.y0, 780.0);
    /// ```
    pub fn to_page_rect(&self, pixels: &PixelBox, page_height: f32) -> Rect {
        let left = pixels.left / self.zoom;
        let top = pixels.top / self.zoom;
        let width = pixels.width / self.zoom;
        let height = pixels.height / self.zoom;

        let x0 = left;
        let x1 = left + width;
        let y1 = page_height - top;
        let y0 = page_height - (top + height);

        Rect::from_points(x0, y0, x1, y1)
    }

    /// Inverse of [`to_page_rect`](Self::to_page_rect).
    pub fn to_pixel_box(&self, rect: &Rect, page_height: f32) -> PixelBox {
        let left = rect.x0 * self.zoom;
        let top = (page_height - rect.y1) * self.zoom;
        let width = rect.width() * self.zoom;
        let height = rect.height() * self.zoom;

        PixelBox::new(left, top, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LETTER_HEIGHT: f32 = 792.0;

    #[test]
    fn test_top_of_image_maps_to_page_top() {
        let mapper = CoordinateMapper::new(3.0);
        let rect = mapper.to_page_rect(&PixelBox::new(150.0, 0.0, 60.0, 30.0), LETTER_HEIGHT);
        assert_eq!(rect.y1, LETTER_HEIGHT);
        assert_eq!(rect.y0, LETTER_HEIGHT - 10.0);
    }

    #[test]
    fn test_horizontal_axis_not_flipped() {
        let mapper = CoordinateMapper::new(3.0);
        let rect = mapper.to_page_rect(&PixelBox::new(30.0, 300.0, 90.0, 30.0), LETTER_HEIGHT);
        assert_eq!(rect.x0, 10.0);
        assert_eq!(rect.x1, 40.0);
        assert!(rect.x0 < rect.x1);
    }

    #[test]
    fn test_vertical_axis_flipped() {
        let mapper = CoordinateMapper::new(3.0);
        // 100pt from the top of the image, 12pt tall
        let rect = mapper.to_page_rect(&PixelBox::new(0.0, 300.0, 30.0, 36.0), LETTER_HEIGHT);
        assert_eq!(rect.y1, 692.0);
        assert_eq!(rect.y0, 680.0);
        assert!(rect.y0 < rect.y1);
    }

    #[test]
    fn test_box_past_page_bottom_is_not_clamped() {
        let mapper = CoordinateMapper::new(3.0);
        let rect = mapper.to_page_rect(&PixelBox::new(0.0, 2370.0, 30.0, 12.0), LETTER_HEIGHT);
        assert_eq!(rect.y1, 2.0);
        assert_eq!(rect.y0, -2.0);
    }

    #[test]
    fn test_unit_zoom_only_flips() {
        let mapper = CoordinateMapper::new(1.0);
        let rect = mapper.to_page_rect(&PixelBox::new(5.0, 10.0, 20.0, 8.0), 100.0);
        assert_eq!(rect, Rect::from_points(5.0, 82.0, 25.0, 90.0));
    }

    proptest! {
        #[test]
        fn prop_round_trip_recovers_pixel_box(
            left in 0.0f32..5000.0,
            top in 0.0f32..5000.0,
            width in 0.0f32..1000.0,
            height in 0.0f32..1000.0,
            page_height in 1.0f32..2000.0,
            zoom in 0.5f32..8.0,
        ) {
            let mapper = CoordinateMapper::new(zoom);
            let original = PixelBox::new(left, top, width, height);
            let back = mapper.to_pixel_box(&mapper.to_page_rect(&original, page_height), page_height);

            let tol = 1e-2 * zoom.max(1.0) + 1e-4 * (left + top + width + height + page_height * zoom);
            prop_assert!((back.left - original.left).abs() <= tol);
            prop_assert!((back.top - original.top).abs() <= tol);
            prop_assert!((back.width - original.width).abs() <= tol);
            prop_assert!((back.height - original.height).abs() <= tol);
        }

        #[test]
        fn prop_mapped_rect_is_ordered(
            left in 0.0f32..5000.0,
            top in 0.0f32..5000.0,
            width in 0.0f32..1000.0,
            height in 0.0f32..1000.0,
        ) {
            let rect = CoordinateMapper::new(3.0)
                .to_page_rect(&PixelBox::new(left, top, width, height), LETTER_HEIGHT);
            prop_assert!(rect.x0 <= rect.x1);
            prop_assert!(rect.y0 <= rect.y1);
        }

        // Zooms are powers of two so the division is exact.
        #[test]
        fn prop_box_inside_image_maps_inside_page(
            page_width in 1u32..1500,
            page_height in 1u32..1500,
            zoom in prop::sample::select(vec![0.5f32, 1.0, 2.0, 4.0]),
            a in any::<u32>(),
            b in any::<u32>(),
            c in any::<u32>(),
            d in any::<u32>(),
        ) {
            let image_width = (page_width as f32 * zoom) as u32;
            let image_height = (page_height as f32 * zoom) as u32;
            let left = a % (image_width + 1);
            let width = b % (image_width - left + 1);
            let top = c % (image_height + 1);
            let height = d % (image_height - top + 1);

            let pixels = PixelBox::new(left as f32, top as f32, width as f32, height as f32);
            let rect = CoordinateMapper::new(zoom).to_page_rect(&pixels, page_height as f32);

            prop_assert!(
                rect.is_within_page(page_width as f32, page_height as f32),
                "{:?} from {:?} at zoom {}",
                rect,
                pixels,
                zoom
            );
        }
    }
}
