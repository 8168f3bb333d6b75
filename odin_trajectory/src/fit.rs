/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! approximate bounding spheres for camera framing

use serde::{Serialize,Deserialize};

use odin_common::cartesian3::Cartesian3;
use crate::dataset::Sample;
use crate::projection::{exaggerated_radius,sphere_to_cartesian};

pub const DEFAULT_CAMERA_PADDING: f64 = 1.6;

/// camera distance we use if the fit radius collapses to 0
pub const FALLBACK_CAMERA_DISTANCE: f64 = 3.2;

/// lower bound for render space fit radii (the globe radius)
pub const MIN_RENDER_FIT_RADIUS: f64 = 1.0;

/// center and radius of an approximate bounding sphere
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct FitResult {
    pub center: Cartesian3,
    pub radius: f64,
}

impl FitResult {
    fn degenerate ()->Self {
        FitResult { center: Cartesian3::zero(), radius: 1.0 }
    }

    fn from_points (points: &[Cartesian3], min_radius: f64)->Self {
        if points.is_empty() { return FitResult::degenerate() }

        let center = Cartesian3::mean( points);
        let radius = points.iter().map( |p| p.distance( &center)).fold( min_radius, f64::max);
        FitResult { center, radius }
    }
}

/// coarse bounding sphere computed in mixed (lat_deg, lon_deg, alt_meters * exaggeration) coordinates, which
/// are stored as x,y,z of the result center. This is not a Euclidean fit and only good enough to frame a
/// camera. Empty inputs yield the origin with radius 1
pub fn compute_bounding_sphere (samples: &[Sample], exaggeration: f64)->FitResult {
    let points: Vec<Cartesian3> = samples.iter()
        .map( |s| Cartesian3::new( s.lat_deg, s.lon_deg, s.alt_or_zero() * exaggeration))
        .collect();
    FitResult::from_points( &points, 0.0)
}

/// bounding sphere of the render space positions (unit sphere, altitude exaggerated with `divisor`).
/// The radius is at least [`MIN_RENDER_FIT_RADIUS`] so that a short track still frames the globe.
/// Empty inputs yield the origin with radius 1
pub fn compute_render_fit (samples: &[Sample], divisor: f64)->FitResult {
    let points: Vec<Cartesian3> = samples.iter()
        .map( |s| sphere_to_cartesian( s.lat_deg, s.lon_deg, exaggerated_radius( s.alt_or_zero(), divisor)))
        .collect();
    FitResult::from_points( &points, MIN_RENDER_FIT_RADIUS)
}

/// where to put a viewer for a given fit
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct CameraPlacement {
    pub eye: Cartesian3,
    pub target: Cartesian3,
    pub distance: f64,
}

/// place the eye at `radius * padding` from the fit center along the +z axis, looking at the center
pub fn camera_placement (fit: &FitResult, padding: f64)->CameraPlacement {
    let mut distance = fit.radius * padding;
    if !(distance.is_finite() && distance > 0.0) { distance = FALLBACK_CAMERA_DISTANCE }

    CameraPlacement {
        eye: fit.center + Cartesian3::new( 0.0, 0.0, distance),
        target: fit.center,
        distance
    }
}

/// place the eye at `radius * padding` from a render space fit center, looking back at the center along
/// the outward direction from the globe origin. This keeps the eye outside the unit sphere. A fit centered
/// at the origin falls back to the +z axis
pub fn render_camera_placement (fit: &FitResult, padding: f64)->CameraPlacement {
    let mut distance = fit.radius * padding;
    if !(distance.is_finite() && distance > 0.0) { distance = FALLBACK_CAMERA_DISTANCE }

    let len = fit.center.length();
    let dir = if len > 0.0 && len.is_finite() { fit.center / len } else { Cartesian3::new( 0.0, 0.0, 1.0) };

    CameraPlacement {
        eye: fit.center + dir * distance,
        target: fit.center,
        distance
    }
}
