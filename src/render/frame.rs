use crate::puzzle::{Field, Stage};
use crate::render::canvas::{Surface, blank};
use crate::render::geometry::Layout;
use crate::render::palette::{self, BACKGROUND, BORDER_CAR, BORDER_FIELD};
use image::RgbImage;
use log::warn;

pub struct FrameRenderer {
    layout: Layout,
}

impl FrameRenderer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn render(&self, field: Field, stage: &Stage) -> RgbImage {
        let (width, height) = self.layout.canvas_size(field);
        let mut image = blank(width, height, BACKGROUND);
        self.render_onto(&mut image, field, stage);
        image
    }

    /// Field first, then villains in listed order, hero last so it stays on
    /// top of any overlap.
    pub fn render_onto<S: Surface>(&self, surface: &mut S, field: Field, stage: &Stage) {
        surface.draw_rect(self.layout.field_to_pixels(field), BACKGROUND, BORDER_FIELD);

        for (vehicle, role) in stage.vehicles() {
            let footprint = vehicle.footprint();
            if !footprint.lies_within(&field) {
                warn!("{:?} {:?} leaves the field: {:?}", role, vehicle, footprint);
            }
            surface.draw_rect(
                self.layout.vehicle_to_pixels(footprint),
                palette::color_for(vehicle, role),
                BORDER_CAR,
            );
        }
    }
}
