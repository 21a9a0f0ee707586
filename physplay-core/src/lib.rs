pub mod body;
pub mod ccd;
pub mod config;
pub mod energy;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod resolver;
pub mod scenario;
pub mod stepper;
pub mod system;
pub mod vector;

pub use body::{MovingCircle, PointMass};
pub use ccd::{find_collision_time, is_colliding, CollisionEvent};
pub use config::{CollisionConfig, GravityConfig, DEFAULT_FRAME_DT, DEFAULT_GRAVITY_DT};
pub use energy::{relative_drift, DriftTracker, EnergyReport};
pub use error::ConfigError;
pub use gravity::{GravityModel, SOFTENING_FLOOR};
pub use integrator::{step, IntegrationMethod};
pub use scenario::{CollisionScenario, GravityScenario};
pub use system::TwoBodyGravitySystem;
pub use vector::Vec2;
