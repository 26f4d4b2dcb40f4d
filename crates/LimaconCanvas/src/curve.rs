//! # Curve Model
//!
//! This module owns the limaçon family: the closed set of curve profiles, the
//! descriptor table mapping each profile to its amplitude-ratio coefficient,
//! and the `CurveDrawer` that traces the boundary into integer surface pixels.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::f64::consts::TAU;

use crate::math;

/// Share of the inscribed radius taken by `a` in the normalization denominator.
const A_IN_RADIUS: f64 = 0.5;
/// Share of the inscribed radius taken by `l` in the normalization denominator.
const L_IN_RADIUS: f64 = 1.0;

/// A named member of the limaçon family.
///
/// The shape is governed by the ratio `l/a`: above 2 the curve is convex,
/// between 1 and 2 it is dimpled, and below 1 it folds into an inner loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveProfile {
    Convex,
    Dimpled,
    InnerLoop,
}

/// One entry of the profile table: a profile and its `l/a` ratio.
#[derive(Clone, Copy, Debug)]
pub struct ProfileDescriptor {
    pub profile: CurveProfile,
    pub ratio: f64,
}

/// The closed, ordered set of supported profiles.
///
/// Profile cycling walks this table by index modulo its length, so the cycle
/// order is exactly the table order.
pub const PROFILES: [ProfileDescriptor; 3] = [
    ProfileDescriptor {
        profile: CurveProfile::Convex,
        ratio: 3.0,
    },
    ProfileDescriptor {
        profile: CurveProfile::Dimpled,
        ratio: 1.5,
    },
    ProfileDescriptor {
        profile: CurveProfile::InnerLoop,
        ratio: 0.5,
    },
];

fn profile_index(profile: CurveProfile) -> usize {
    PROFILES
        .iter()
        .position(|d| d.profile == profile)
        .unwrap_or(0)
}

/// Traces the limaçon boundary for the current profile and rotation angle.
///
/// The parametric form is
/// `x = a·cos²t + l·cos t − a/2`, `y = a·cos t·sin t + l·sin t`,
/// with `a` and `l` solved from the surface's inscribed radius so the curve
/// fits the surface regardless of profile. The `−a/2` term recenters the
/// curve horizontally about its own centroid rather than the pole.
#[derive(Clone, Debug)]
pub struct CurveDrawer {
    profile_index: usize,
    angle: f64,
    sample_step: f64,
    rotation_step: f64,
}

impl CurveDrawer {
    /// Creates a drawer starting at `initial` with the given sweep and rotation steps.
    pub fn new(initial: CurveProfile, sample_step: f64, rotation_step: f64) -> Self {
        Self {
            profile_index: profile_index(initial),
            angle: 0.0,
            sample_step,
            rotation_step,
        }
    }

    /// The currently selected profile.
    pub fn profile(&self) -> CurveProfile {
        PROFILES[self.profile_index].profile
    }

    /// The current rotation angle in radians, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advances to the next profile in table order, wrapping at the end.
    pub fn switch_profile(&mut self) -> CurveProfile {
        self.profile_index = (self.profile_index + 1) % PROFILES.len();
        self.profile()
    }

    /// Rotates the curve counter-clockwise by one rotation step.
    pub fn rotate_left(&mut self) {
        self.angle = (self.angle + self.rotation_step).rem_euclid(TAU);
    }

    /// Rotates the curve clockwise by one rotation step.
    pub fn rotate_right(&mut self) {
        self.angle = (self.angle - self.rotation_step).rem_euclid(TAU);
    }

    /// Traces the boundary onto a `width` x `height` surface.
    ///
    /// Returns the points in sweep order, deduplicated on (x, y): neighboring
    /// samples frequently round to the same pixel, and duplicates would skew
    /// the min/max extent queries the fill strategies run downstream.
    pub fn trace(&self, width: i32, height: i32) -> Vec<IVec2> {
        let big_radius = width.min(height) as f64 / 2.0;
        let ratio = PROFILES[self.profile_index].ratio;
        let a = big_radius / (A_IN_RADIUS + L_IN_RADIUS * ratio);
        let l = ratio * a;
        let center = IVec2::new(width / 2, height / 2);

        let mut points = Vec::new();
        let mut seen = HashSet::new();
        let mut t = 0.0;
        while t < TAU {
            let (sin_t, cos_t) = t.sin_cos();
            let local = DVec2::new(
                a * cos_t * cos_t + l * cos_t - a / 2.0,
                a * cos_t * sin_t + l * sin_t,
            );
            let rotated = math::rotate(local, self.angle);
            let pixel = IVec2::new(
                rotated.x.round() as i32 + center.x,
                rotated.y.round() as i32 + center.y,
            );
            if seen.insert(pixel) {
                points.push(pixel);
            }
            t += self.sample_step;
        }
        points
    }
}
