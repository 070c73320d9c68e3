//! Sample log persistence.
//!
//! Trajectories are recorded as flat runs of struct-codec records behind a
//! small self-describing header (the `.gati` format).
//!
//! ```rust,ignore
//! use gati::io::{load_samples, save_samples};
//! use gati::trajectory::{Sample, sample_uniform};
//! use std::path::Path;
//!
//! save_samples(&sample_uniform(&traj, 0.02), Path::new("run.gati"))?;
//! let samples: Vec<Sample> = load_samples(Path::new("run.gati"))?;
//! ```

mod sample_log;

pub use sample_log::{
    IoError, LogHeader, load_samples, read_header, read_samples, save_samples, write_samples,
};
