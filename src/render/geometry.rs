use crate::error::{Error, Result};
use crate::puzzle::Field;
use crate::render::graphics::{PixelRect, Rect};
use serde::Deserialize;

/// Mapping from cell space to pixel space.
///
/// `pixel = (cell + field_margin) * cell_size`, rounded half to even.
/// `car_margin` shrinks every vehicle on all four sides so neighbours keep a
/// visible gap.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub cell_size: u32,
    pub field_margin: f64,
    pub car_margin: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: 100,
            field_margin: 0.5,
            car_margin: 0.1,
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Error::InvalidLayout("cell_size must be positive".into()));
        }
        if !(0.0..0.5).contains(&self.car_margin) {
            return Err(Error::InvalidLayout(format!(
                "car_margin must be in [0, 0.5), got {}",
                self.car_margin
            )));
        }
        if !self.field_margin.is_finite() || self.field_margin < 0.0 {
            return Err(Error::InvalidLayout(format!(
                "field_margin must be non-negative, got {}",
                self.field_margin
            )));
        }
        Ok(())
    }

    fn scale(&self, cell: f64) -> i64 {
        ((cell + self.field_margin) * self.cell_size as f64).round_ties_even() as i64
    }

    pub fn to_pixels(&self, left: f64, top: f64, right: f64, bottom: f64) -> PixelRect {
        PixelRect {
            left: self.scale(left),
            top: self.scale(top),
            right: self.scale(right),
            bottom: self.scale(bottom),
        }
    }

    pub fn vehicle_to_pixels(&self, rect: Rect) -> PixelRect {
        let inset = self.car_margin;
        self.to_pixels(
            rect.x as f64 + inset,
            rect.y as f64 + inset,
            rect.right() as f64 - inset,
            rect.bottom() as f64 - inset,
        )
    }

    pub fn field_to_pixels(&self, field: Field) -> PixelRect {
        self.to_pixels(0.0, 0.0, field.width as f64, field.height as f64)
    }

    pub fn canvas_size(&self, field: Field) -> (u32, u32) {
        let side = |cells: u32| {
            ((cells as f64 + 2.0 * self.field_margin) * self.cell_size as f64).round_ties_even()
                as u32
        };
        (side(field.width), side(field.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX: Field = Field {
        width: 6,
        height: 6,
    };

    fn cell(x: i64, y: i64, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn default_vehicle_rect_is_inset_and_offset() {
        let px = Layout::default().vehicle_to_pixels(cell(2, 2, 2, 1));
        assert_eq!(
            px,
            PixelRect {
                left: 260,
                top: 260,
                right: 440,
                bottom: 340,
            }
        );
    }

    #[test]
    fn field_border_has_no_inset() {
        let px = Layout::default().field_to_pixels(SIX);
        assert_eq!(
            px,
            PixelRect {
                left: 50,
                top: 50,
                right: 650,
                bottom: 650,
            }
        );
    }

    #[test]
    fn canvas_includes_margin_on_both_sides() {
        assert_eq!(Layout::default().canvas_size(SIX), (700, 700));
        assert_eq!(
            Layout::default().canvas_size(Field {
                width: 4,
                height: 3
            }),
            (500, 400)
        );
    }

    #[test]
    fn cell_size_scales_proportionally() {
        let base = Layout {
            cell_size: 8,
            field_margin: 1.0,
            car_margin: 0.25,
        };
        let doubled = Layout {
            cell_size: 16,
            ..base
        };
        for rect in [cell(0, 0, 1, 3), cell(3, 1, 2, 1), cell(5, -2, 1, 3)] {
            let a = base.vehicle_to_pixels(rect);
            let b = doubled.vehicle_to_pixels(rect);
            assert_eq!(b.left, 2 * a.left);
            assert_eq!(b.top, 2 * a.top);
            assert_eq!(b.right, 2 * a.right);
            assert_eq!(b.bottom, 2 * a.bottom);
        }
    }

    #[test]
    fn field_margin_translates() {
        let base = Layout {
            cell_size: 100,
            field_margin: 0.5,
            car_margin: 0.1,
        };
        let wider = Layout {
            field_margin: 1.5,
            ..base
        };
        for rect in [cell(0, 0, 1, 2), cell(4, 4, 2, 1)] {
            let a = base.vehicle_to_pixels(rect);
            let b = wider.vehicle_to_pixels(rect);
            assert_eq!(b.left - a.left, 100);
            assert_eq!(b.top - a.top, 100);
            assert_eq!(b.right - a.right, 100);
            assert_eq!(b.bottom - a.bottom, 100);
        }
    }

    #[test]
    fn ties_round_to_even() {
        let layout = Layout {
            cell_size: 1,
            field_margin: 0.5,
            car_margin: 0.0,
        };
        let px = layout.to_pixels(0.0, 0.0, 1.0, 1.0);
        assert_eq!(px.left, 0);
        assert_eq!(px.top, 0);
        assert_eq!(px.right, 2);
        assert_eq!(px.bottom, 2);

        let px = layout.to_pixels(2.0, 3.0, 4.0, -1.0);
        assert_eq!((px.left, px.top, px.right, px.bottom), (2, 4, 4, 0));
    }

    #[test]
    fn mapping_is_deterministic() {
        let layout = Layout::default();
        let rect = cell(1, 4, 3, 1);
        assert_eq!(layout.vehicle_to_pixels(rect), layout.vehicle_to_pixels(rect));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(Layout::default().validate().is_ok());
        assert!(
            Layout {
                car_margin: 0.5,
                ..Layout::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            Layout {
                cell_size: 0,
                ..Layout::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            Layout {
                field_margin: -1.0,
                ..Layout::default()
            }
            .validate()
            .is_err()
        );
    }
}
