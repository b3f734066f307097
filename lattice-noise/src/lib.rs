//! Deterministic scalar noise fields for procedural generation.
//!
//! Every evaluation is a pure function of a [`NoiseConfig`] and a coordinate:
//! the same configuration and input always produce the same bits.
//!
//! # Key Types
//!
//! - [`NoiseGenerator`] - Owns a configuration and exposes every noise family
//! - [`NoiseConfig`] - Parameter set threaded through each evaluation
//! - [`NoiseSettings`] - Serializable, validated description of a generator
//! - [`NoiseSource`] - Capability used by cellular noise lookups
//!
//! The numeric width is chosen at build time: `f32` by default, `f64` with the
//! `f64` feature. See [`Float`].

pub mod config;
pub mod math;
pub mod noise;
mod generator;
mod settings;

pub use config::{
    CellularDistanceFunction, CellularReturnType, ConfigError, FractalType, Interp, NoiseConfig,
    NoiseType,
};
pub use generator::{NoiseGenerator, NoiseSource};
pub use math::{Float, Vector2, Vector3};
pub use settings::NoiseSettings;
