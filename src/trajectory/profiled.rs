//! Path follower with a trapezoidal velocity profile.
//!
//! The robot accelerates at `max_acceleration` up to `max_velocity`, cruises,
//! then decelerates symmetrically to rest at the end of the path. Paths too
//! short to reach `max_velocity` get a triangular profile instead.
//!
//! ```text
//!  v
//!  ^     ______________
//!  |    /              \
//!  |   /                \
//!  |  /                  \
//!  +-+----+----------+----+--> t
//!    0   t_a     t_a+t_c  duration
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ChassisAccelerations, Sample, Trajectory, clamp_time};
use crate::core::{ChassisSpeeds, Pose2D};
use crate::path::PositionPath;

/// Errors building a profiled trajectory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// A limit is zero, negative or not finite
    #[error(
        "Infeasible constraints: max_velocity={max_velocity}, max_acceleration={max_acceleration} (both must be positive and finite)"
    )]
    InfeasibleConstraints {
        /// Rejected velocity limit (m/s)
        max_velocity: f64,
        /// Rejected acceleration limit (m/s²)
        max_acceleration: f64,
    },
}

/// Kinematic limits for a profiled trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConstraints {
    /// Maximum forward velocity (m/s).
    pub max_velocity: f64,

    /// Maximum forward acceleration and deceleration (m/s²).
    pub max_acceleration: f64,
}

impl TrajectoryConstraints {
    /// Create constraints; see [`validate`](Self::validate).
    pub const fn new(max_velocity: f64, max_acceleration: f64) -> Self {
        Self {
            max_velocity,
            max_acceleration,
        }
    }

    /// Check that both limits are positive and finite.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.max_velocity) && positive(self.max_acceleration) {
            Ok(())
        } else {
            log::warn!(
                "Rejecting trajectory constraints v={} a={}",
                self.max_velocity,
                self.max_acceleration
            );
            Err(TrajectoryError::InfeasibleConstraints {
                max_velocity: self.max_velocity,
                max_acceleration: self.max_acceleration,
            })
        }
    }
}

/// Timing of the three profile phases.
#[derive(Clone, Copy, Debug, PartialEq)]
struct VelocityProfile {
    distance: f64,
    acceleration: f64,
    peak_velocity: f64,
    /// Duration of the acceleration phase (and of the deceleration phase).
    ramp_time: f64,
    cruise_time: f64,
}

/// Distance, velocity and acceleration along the path at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ProfileState {
    distance: f64,
    velocity: f64,
    acceleration: f64,
}

impl VelocityProfile {
    fn new(distance: f64, constraints: &TrajectoryConstraints) -> Self {
        let acceleration = constraints.max_acceleration;
        let full_ramp = constraints.max_velocity / acceleration;
        let ramp_distance = 0.5 * acceleration * full_ramp * full_ramp;

        if 2.0 * ramp_distance >= distance {
            // Triangular: peak where the two ramps meet.
            let peak_velocity = (acceleration * distance).sqrt();
            Self {
                distance,
                acceleration,
                peak_velocity,
                ramp_time: peak_velocity / acceleration,
                cruise_time: 0.0,
            }
        } else {
            Self {
                distance,
                acceleration,
                peak_velocity: constraints.max_velocity,
                ramp_time: full_ramp,
                cruise_time: (distance - 2.0 * ramp_distance) / constraints.max_velocity,
            }
        }
    }

    fn duration(&self) -> f64 {
        2.0 * self.ramp_time + self.cruise_time
    }

    fn ramp_distance(&self) -> f64 {
        0.5 * self.acceleration * self.ramp_time * self.ramp_time
    }

    /// State at `t`, which must already be within `[0, duration]`.
    fn state(&self, t: f64) -> ProfileState {
        if self.distance <= 0.0 {
            return ProfileState {
                distance: 0.0,
                velocity: 0.0,
                acceleration: 0.0,
            };
        }

        let a = self.acceleration;
        let v_peak = self.peak_velocity;
        let cruise_end = self.ramp_time + self.cruise_time;

        let (distance, velocity, acceleration) = if t < self.ramp_time {
            (0.5 * a * t * t, a * t, a)
        } else if t < cruise_end {
            (self.ramp_distance() + v_peak * (t - self.ramp_time), v_peak, 0.0)
        } else {
            let td = t - cruise_end;
            (
                self.ramp_distance() + v_peak * self.cruise_time + v_peak * td - 0.5 * a * td * td,
                v_peak - a * td,
                -a,
            )
        };

        ProfileState {
            distance: distance.clamp(0.0, self.distance),
            velocity: velocity.max(0.0),
            acceleration,
        }
    }
}

/// A position path driven at a trapezoidal velocity profile.
///
/// The robot faces along the path tangent. Speeds and accelerations are
/// reported in the robot frame: forward motion in `vx`/`ax`, centripetal
/// acceleration in `ay`, and yaw rate from path curvature.
#[derive(Clone, Debug)]
pub struct ProfiledTrajectory<P: PositionPath> {
    path: P,
    constraints: TrajectoryConstraints,
    profile: VelocityProfile,
}

impl<P: PositionPath> ProfiledTrajectory<P> {
    /// Build a trajectory over `path`.
    ///
    /// Fails only when the constraints are not positive and finite.
    pub fn new(path: P, constraints: TrajectoryConstraints) -> Result<Self, TrajectoryError> {
        constraints.validate()?;
        let profile = VelocityProfile::new(path.length().max(0.0), &constraints);

        log::debug!(
            "Profiled trajectory: length={:.3}m, peak={:.3}m/s, duration={:.3}s",
            profile.distance,
            profile.peak_velocity,
            profile.duration()
        );

        Ok(Self {
            path,
            constraints,
            profile,
        })
    }

    /// Path being followed.
    pub fn path(&self) -> &P {
        &self.path
    }

    /// Limits the profile was built with.
    pub fn constraints(&self) -> TrajectoryConstraints {
        self.constraints
    }

    /// Highest velocity reached, `<= max_velocity`.
    pub fn peak_velocity(&self) -> f64 {
        self.profile.peak_velocity
    }
}

impl<P: PositionPath> Trajectory for ProfiledTrajectory<P> {
    fn duration(&self) -> f64 {
        self.profile.duration()
    }

    fn length(&self) -> f64 {
        self.profile.distance
    }

    fn sample_at(&self, time: f64) -> Sample {
        let time = clamp_time(time, self.duration());
        let state = self.profile.state(time);

        let s = state.distance;
        let v = state.velocity;
        let a = state.acceleration;
        let kappa = self.path.curvature(s);

        Sample::new(
            time,
            Pose2D::from_parts(self.path.point(s), self.path.heading(s)),
            ChassisSpeeds::new(v, 0.0, kappa * v),
            ChassisAccelerations::new(a, kappa * v * v, kappa * a),
        )
    }
}
