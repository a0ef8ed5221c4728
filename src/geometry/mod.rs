//! Geometric primitives for page and image space.
//!
//! Two coordinate systems meet in this crate:
//!
//! - **Page space**: PDF points, origin at the bottom-left, Y increasing upward.
//! - **Image space**: pixels of a rendered page, origin at the top-left,
//!   Y increasing downward.
//!
//! [`Rect`] lives in page space, [`PixelBox`] in image space, and
//! [`CoordinateMapper`] converts between them.

mod mapper;

pub use mapper::CoordinateMapper;

/// A rectangle in page space, stored as its two corners.
///
/// `(x0, y0)` is the lower-left corner and `(x1, y1)` the upper-right one,
/// which is exactly the layout of a PDF `/Rect` array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Bottom edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from its lower-left and upper-right corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_highlight::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// The rectangle as a PDF `/Rect` tuple `[x0, y0, x1, y1]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    /// Check whether the rectangle lies inside a `width` x `height` page.
    pub fn is_within_page(&self, width: f32, height: f32) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= width && self.y1 <= height
    }
}

/// A box in image space as reported by an OCR engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    /// Distance from the left edge of the image
    pub left: f32,
    /// Distance from the top edge of the image
    pub top: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
}

impl PixelBox {
    /// Create a new pixel box.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
