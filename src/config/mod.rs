//! Configuration loading for Gati.
//!
//! Loads trajectory limits and sample log settings from a single YAML file
//! with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gati::config::GatiConfig;
//!
//! // Load from default path (configs/gati.yaml)
//! let config = GatiConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = GatiConfig::default();
//!
//! let constraints = config.constraints();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`TrajectorySection`] | Velocity/acceleration limits, sample period |
//! | [`LogSection`] | Sample log output path |
//!
//! ## Example YAML
//!
//! ```yaml
//! trajectory:
//!   max_velocity: 1.5        # m/s
//!   max_acceleration: 2.0    # m/s²
//!   sample_period: 0.02      # s
//! log:
//!   path: ./output/samples.gati
//! ```

mod defaults;
mod error;
mod gati;
mod persistence;
mod trajectory;

pub use error::ConfigLoadError;
pub use gati::GatiConfig;

pub use persistence::LogSection;
pub use trajectory::TrajectorySection;
