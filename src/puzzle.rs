use crate::error::{Error, Result};
use crate::render::graphics::Rect;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Field {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Up and left vehicles are encoded by their leading cell and extend back
    /// towards the origin.
    pub fn is_backward(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl TryFrom<&str> for Direction {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(Error::InvalidDirection {
                token: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Role {
    Hero,
    Villain,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Vehicle {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub direction: Direction,
}

impl Vehicle {
    /// Cell-space rectangle covered by the vehicle.
    ///
    /// Down/right vehicles are anchored at their top-left cell. Up/left
    /// vehicles are anchored at their far cell, so the top-left corner is
    /// `(1 + x - width, 1 + y - height)`. No clamping to the field is done.
    pub fn footprint(&self) -> Rect {
        let (width, height) = if self.direction.is_vertical() {
            (1, self.size)
        } else {
            (self.size, 1)
        };

        let (x, y) = (self.x as i64, self.y as i64);
        let (x, y) = if self.direction.is_backward() {
            (1 + x - width as i64, 1 + y - height as i64)
        } else {
            (x, y)
        };

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawVehicle {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub dir: String,
}

impl TryFrom<&RawVehicle> for Vehicle {
    type Error = Error;

    fn try_from(raw: &RawVehicle) -> Result<Self> {
        let direction = Direction::try_from(raw.dir.as_str())?;
        if raw.size == 0 {
            return Err(Error::InvalidSize { size: raw.size });
        }
        Ok(Vehicle {
            x: raw.x,
            y: raw.y,
            size: raw.size,
            direction,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawStage {
    pub cars: Vec<RawVehicle>,
    #[serde(default)]
    pub field: Option<Field>,
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub hero: Vehicle,
    pub villains: Vec<Vehicle>,
    pub field: Option<Field>,
}

impl Stage {
    /// The first car of a raw stage is the hero, the rest keep their order.
    pub fn from_raw(index: usize, raw: &RawStage) -> Result<Self> {
        let (hero, villains) = raw
            .cars
            .split_first()
            .ok_or(Error::EmptyStage { index })?;

        Ok(Stage {
            hero: Vehicle::try_from(hero)?,
            villains: villains
                .iter()
                .map(Vehicle::try_from)
                .collect::<Result<Vec<_>>>()?,
            field: raw.field,
        })
    }

    /// Villains in draw order, then the hero.
    pub fn vehicles(&self) -> impl Iterator<Item = (&Vehicle, Role)> {
        self.villains
            .iter()
            .map(|v| (v, Role::Villain))
            .chain(std::iter::once((&self.hero, Role::Hero)))
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Solution {
    pub field: Field,
    #[serde(rename(deserialize = "solution"))]
    pub stages: Vec<RawStage>,
}

impl Solution {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(fs::read_to_string(path)?.as_str())
    }

    pub fn field_for(&self, stage: &Stage) -> Field {
        stage.field.unwrap_or(self.field)
    }
}
