//! Background city: a tiled grid of blocks, looping traffic and a pointer-panned camera.

use crate::animation::camera::{CameraConfig, CameraFollow, CameraPose};
use crate::animation::looping::{Direction, LoopingMotion};
use crate::foundation::core::{DVec3, Rgb8, Vec2};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive};

/// One car in the traffic table.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarSpec {
    /// Starting distance along the track.
    pub offset: f64,
    /// Units per second.
    pub speed: f64,
    pub color: Rgb8,
    /// Lane position along world Z.
    pub lane_z: f64,
    pub direction: Direction,
}

impl CarSpec {
    const fn new(offset: f64, speed: f64, color: Rgb8, lane_z: f64, direction: Direction) -> Self {
        Self {
            offset,
            speed,
            color,
            lane_z,
            direction,
        }
    }
}

/// Ten cars in five lane pairs, alternating direction.
pub const DEFAULT_CARS: [CarSpec; 10] = {
    use Direction::{Backward, Forward};
    [
        CarSpec::new(0.0, 4.0, Rgb8::new(0xef, 0x44, 0x44), -1.0, Forward),
        CarSpec::new(25.0, 5.0, Rgb8::new(0x3b, 0x82, 0xf6), 1.0, Backward),
        CarSpec::new(45.0, 4.5, Rgb8::new(0xf5, 0x9e, 0x0b), 9.0, Forward),
        CarSpec::new(15.0, 6.0, Rgb8::new(0x8b, 0x5c, 0xf6), 11.0, Backward),
        CarSpec::new(20.0, 4.0, Rgb8::new(0x10, 0xb9, 0x81), -9.0, Forward),
        CarSpec::new(60.0, 5.5, Rgb8::new(0xec, 0x48, 0x99), -11.0, Backward),
        CarSpec::new(10.0, 5.0, Rgb8::new(0xfb, 0x92, 0x3c), 19.0, Forward),
        CarSpec::new(35.0, 6.0, Rgb8::new(0x2d, 0xd4, 0xbf), 21.0, Backward),
        CarSpec::new(50.0, 4.0, Rgb8::new(0xa8, 0x55, 0xf7), -19.0, Forward),
        CarSpec::new(75.0, 4.8, Rgb8::new(0xea, 0xb3, 0x08), -21.0, Backward),
    ]
};

/// City layout, traffic and camera rig.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Block centres along X and along Z; the grid is their cross product.
    pub block_offsets: Vec<f64>,
    /// Edge length of one square block.
    pub block_size: f64,
    /// Vertical offset of the whole world group.
    pub ground_y: f64,
    /// Height of a car's origin above the ground.
    pub car_height: f64,
    pub track_length: f64,
    pub cars: Vec<CarSpec>,
    pub camera: CameraConfig,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            block_offsets: vec![-20.0, -10.0, 0.0, 10.0, 20.0],
            block_size: 10.0,
            ground_y: -2.0,
            car_height: 0.5,
            track_length: 100.0,
            cars: DEFAULT_CARS.to_vec(),
            camera: CameraConfig::default(),
        }
    }
}

impl CityConfig {
    pub fn validate(&self) -> KinemaResult<()> {
        if self.block_offsets.iter().any(|v| !v.is_finite()) {
            return Err(KinemaError::validation("city block offsets must be finite"));
        }
        ensure_positive("city block_size", self.block_size)?;
        ensure_finite("city ground_y", self.ground_y)?;
        ensure_finite("city car_height", self.car_height)?;
        ensure_positive("city track_length", self.track_length)?;
        for car in &self.cars {
            ensure_finite("car lane_z", car.lane_z)?;
        }
        self.camera.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Car {
    spec: CarSpec,
    motion: LoopingMotion,
}

/// Evaluated car.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CarFrame {
    /// World position of the car origin.
    pub position: DVec3,
    /// Cabin offset along X, leaning against the direction of travel.
    pub cabin_x: f64,
    pub color: Rgb8,
}

/// Output of [`CityScene::tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CityFrame {
    pub camera: CameraPose,
    pub fov_deg: f64,
    pub cars: Vec<CarFrame>,
}

/// The 3D backdrop.
#[derive(Clone, Debug)]
pub struct CityScene {
    ground_y: f64,
    car_height: f64,
    blocks: Vec<DVec3>,
    cars: Vec<Car>,
    camera: CameraFollow,
}

impl CityScene {
    pub fn new(config: &CityConfig) -> KinemaResult<Self> {
        config.validate()?;
        let blocks = config
            .block_offsets
            .iter()
            .flat_map(|&x| {
                config
                    .block_offsets
                    .iter()
                    .map(move |&z| DVec3::new(x, config.ground_y, z))
            })
            .collect();
        let cars = config
            .cars
            .iter()
            .map(|&spec| -> KinemaResult<Car> {
                Ok(Car {
                    spec,
                    motion: LoopingMotion::new(
                        spec.speed,
                        spec.offset,
                        spec.direction,
                        config.track_length,
                    )?,
                })
            })
            .collect::<KinemaResult<Vec<_>>>()?;
        Ok(Self {
            ground_y: config.ground_y,
            car_height: config.car_height,
            blocks,
            cars,
            camera: CameraFollow::new(config.camera)?,
        })
    }

    /// World-space centres of every city block.
    pub fn blocks(&self) -> &[DVec3] {
        &self.blocks
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    /// Advance the camera by `dt` toward the latest normalized pointer and place
    /// every car at absolute time `elapsed`.
    pub fn tick(&mut self, dt: f64, elapsed: f64, pointer: Vec2) -> CityFrame {
        let camera = self.camera.tick(dt, pointer);
        let y = self.ground_y + self.car_height;
        CityFrame {
            camera,
            fov_deg: self.camera.config().fov_deg,
            cars: self
                .cars
                .iter()
                .map(|car| CarFrame {
                    position: DVec3::new(car.motion.position(elapsed), y, car.spec.lane_z),
                    cabin_x: -0.1 * car.spec.direction.sign(),
                    color: car.spec.color,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/city.rs"]
mod tests;
