use crate::puzzle::Field;

/// Axis-aligned rectangle in cell units. `x`/`y` may be negative: the decoder
/// does not clamp to the field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    pub fn lies_within(&self, field: &Field) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= field.width as i64
            && self.bottom() <= field.height as i64
    }
}

/// Pixel rectangle, inclusive on both corners.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PixelRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(value: Color) -> Self {
        image::Rgb([value.r, value.g, value.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(value: image::Rgb<u8>) -> Self {
        let [r, g, b] = value.0;
        Color { r, g, b }
    }
}
