//! vrinput — per-tick polling of named VR input actions.
//!
//! Polls a device-input runtime once per application tick and exposes a fixed
//! catalog of features (media transport, playspace rotate/move, push-to-talk)
//! as edge-triggered or level-triggered booleans.
//!
//! The runtime sits behind the [`InputGateway`] trait; [`InputController`] owns
//! one and is passed around explicitly. See [`backends`] for the bundled
//! in-memory runtime.

pub mod action;
pub mod activation;
pub mod backends;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod feature;
pub mod fetch;
pub mod gateway;
pub mod manifest;
pub mod snapshot;

pub use action::*;
pub use activation::*;
pub use config::InputConfig;
pub use controller::*;
pub use data::*;
pub use error::*;
pub use feature::*;
pub use fetch::*;
pub use gateway::*;
pub use manifest::ActionManifest;
pub use snapshot::Snapshot;
