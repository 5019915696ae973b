use crate::render::graphics::{Color, PixelRect};
use image::RgbImage;
use std::ops::RangeInclusive;

/// Drawing target for frames. Rectangles are inclusive on both corners and
/// clipped to the surface; anything fully outside is ignored.
pub trait Surface {
    fn dimensions(&self) -> (u32, u32);

    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let (width, height) = self.dimensions();
        let (Some(xs), Some(ys)) = (
            clip(rect.left, rect.right, width),
            clip(rect.top, rect.bottom, height),
        ) else {
            return;
        };
        for y in ys {
            for x in xs.clone() {
                self.set_pixel(x, y, color);
            }
        }
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Color) {
        // (top, bottom)
        for y in [rect.top, rect.bottom] {
            self.fill_rect(
                PixelRect {
                    top: y,
                    bottom: y,
                    ..rect
                },
                color,
            );
        }
        // (left, right)
        for x in [rect.left, rect.right] {
            self.fill_rect(
                PixelRect {
                    left: x,
                    right: x,
                    ..rect
                },
                color,
            );
        }
    }

    fn draw_rect(&mut self, rect: PixelRect, fill: Color, outline: Color) {
        self.fill_rect(rect, fill);
        self.outline_rect(rect, outline);
    }
}

fn clip(from: i64, to: i64, len: u32) -> Option<RangeInclusive<u32>> {
    let from = from.max(0);
    let to = to.min(len as i64 - 1);
    if len == 0 || from > to {
        return None;
    }
    Some(from as u32..=to as u32)
}

pub fn blank(width: u32, height: u32, background: Color) -> RgbImage {
    RgbImage::from_pixel(width, height, background.into())
}

impl Surface for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.into());
    }
}
