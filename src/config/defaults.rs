//! Default value functions for serde deserialization.

pub fn max_velocity() -> f64 {
    1.5
}

pub fn max_acceleration() -> f64 {
    2.0
}

pub fn sample_period() -> f64 {
    0.02
}

pub fn log_path() -> String {
    "./output/samples.gati".to_string()
}
