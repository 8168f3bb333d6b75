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

//! geometric projections that make normalized telemetry displayable: unit sphere render positions,
//! Mercator map coordinates and anti-meridian aware polyline segmentation

use lazy_static::lazy_static;
use serde::{Serialize,Deserialize};

use odin_common::{PI, QUARTER_PI, TWO_PI};
use odin_common::angle::{clamp_mercator_lat, normalize_lon_180, MAX_MERCATOR_LAT};
use odin_common::cartesian3::Cartesian3;

/// default divisor for display altitude exaggeration (`radius = 1 + alt/divisor`)
pub const DEFAULT_EXAGGERATION_DIVISOR: f64 = 120_000.0;

/// default jump between consecutive projected longitudes that we treat as an anti-meridian crossing
pub const DEFAULT_ANTI_MERIDIAN_THRESHOLD_DEG: f64 = 170.0;

lazy_static! {
    /// Mercator y at the clamp latitude, i.e. the max |y| of anything we project
    pub static ref MAX_MERCATOR_Y: f64 = mercator_y( MAX_MERCATOR_LAT);
}

/* #region sphere ************************************************************************************/

/// render space position on a sphere of given radius (1.0 is the globe surface)
#[inline]
pub fn sphere_to_cartesian (lat_deg: f64, lon_deg: f64, radius: f64)->Cartesian3 {
    Cartesian3::from_spherical_degrees( lat_deg, lon_deg, radius)
}

/// display radius for an altitude. This is a presentation choice, not part of normalization
#[inline]
pub fn exaggerated_radius (alt_meters: f64, divisor: f64)->f64 {
    1.0 + alt_meters / divisor
}

/* #endregion sphere */

/* #region mercator **********************************************************************************/

/// a point in Mercator space: x is longitude radians in (-π,π], y is the dimensionless Mercator ordinate
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    pub fn new (x: f64, y: f64)->Self { MercatorPoint{x,y} }

    /// map into a width x height screen rectangle with y growing downwards. The map covers
    /// x ∈ [-π,π] and y ∈ [-MAX_MERCATOR_Y, MAX_MERCATOR_Y]
    pub fn to_screen (&self, width: f64, height: f64)->(f64,f64) {
        let max_y = *MAX_MERCATOR_Y;
        let nx = (self.x + PI) / TWO_PI;
        let ny = 1.0 - (self.y + max_y) / (2.0 * max_y);
        (nx * width, ny * height)
    }
}

/// Mercator ordinate of a latitude that is already within the clamp range
#[inline]
fn mercator_y (lat_deg: f64)->f64 {
    (QUARTER_PI + lat_deg.to_radians() / 2.0).tan().ln()
}

/// forward Mercator projection. Latitude is clamped to ±85.05112878°, longitude is wrapped into
/// canonical range *before* projecting so that a later anti-meridian check sees real crossings only
pub fn to_mercator (lat_deg: f64, lon_deg: f64)->MercatorPoint {
    MercatorPoint {
        x: normalize_lon_180(lon_deg).to_radians(),
        y: mercator_y( clamp_mercator_lat(lat_deg))
    }
}

/// split an ordered sequence of projected points into polyline segments wherever the x distance
/// of consecutive points exceeds `threshold_deg` (converted to radians). Fewer than 2 points are returned
/// as a single, unsplit segment
pub fn split_anti_meridian (points: &[MercatorPoint], threshold_deg: f64)->Vec<Vec<MercatorPoint>> {
    if points.len() < 2 { return vec![ points.to_vec() ] }

    let threshold = threshold_deg.to_radians();
    let mut segments: Vec<Vec<MercatorPoint>> = Vec::new();
    let mut current: Vec<MercatorPoint> = vec![ points[0] ];

    for w in points.windows(2) {
        let (prev, cur) = (w[0], w[1]);
        if (cur.x - prev.x).abs() > threshold {
            segments.push( std::mem::replace( &mut current, vec![cur]));
        } else {
            current.push(cur);
        }
    }
    segments.push(current);

    segments
}

/// project (lat,lon) pairs and segment them at anti-meridian crossings
pub fn project_polyline<I> (lat_lons: I, threshold_deg: f64)->Vec<Vec<MercatorPoint>> where I: IntoIterator<Item=(f64,f64)> {
    let points: Vec<MercatorPoint> = lat_lons.into_iter().map( |(lat,lon)| to_mercator(lat,lon)).collect();
    split_anti_meridian( &points, threshold_deg)
}

/* #endregion mercator */
