use crate::puzzle::{Direction, Role, Vehicle};
use crate::render::graphics::Color;

pub const BACKGROUND: Color = Color::rgb(128, 128, 128);
pub const BORDER_CAR: Color = Color::rgb(255, 255, 255);
pub const BORDER_FIELD: Color = Color::rgb(182, 195, 179);
pub const HERO: Color = Color::rgb(200, 66, 77);
pub const VILLAIN_2: Color = Color::rgb(155, 155, 155);
pub const VILLAIN_3_DOWN: Color = Color::rgb(0, 155, 0);
pub const VILLAIN_3_RIGHT: Color = Color::rgb(155, 155, 0);
pub const VILLAIN_DEFAULT: Color = Color::rgb(55, 44, 192);

/// Fill color of a vehicle. The hero color wins over every other rule;
/// villains without a dedicated entry share `VILLAIN_DEFAULT`.
pub fn color_for(vehicle: &Vehicle, role: Role) -> Color {
    match (role, vehicle.size, vehicle.direction) {
        (Role::Hero, _, _) => HERO,
        (Role::Villain, 2, _) => VILLAIN_2,
        (Role::Villain, 3, Direction::Down) => VILLAIN_3_DOWN,
        (Role::Villain, 3, Direction::Right) => VILLAIN_3_RIGHT,
        _ => VILLAIN_DEFAULT,
    }
}
