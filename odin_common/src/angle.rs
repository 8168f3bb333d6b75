/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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
#![allow(unused)]

//! longitude/latitude normalization.
//!
//! We do not wrap angles into newtypes here since raw telemetry values are routinely outside of
//! their canonical ranges until they are normalized. These functions are the single place that
//! defines what "canonical" means.

/// the latitude at which a square Mercator map ends (`atan(sinh(π))` in degrees)
pub const MAX_MERCATOR_LAT: f64 = 85.05112878;

/// normalize longitude degrees into the canonical (-180,180] range.
/// Values outside are wrapped with `((lon+180) mod 360 + 360) mod 360 - 180` and the boundary value `-180`
/// is mapped to `180`, which keeps projected x values within (-π,π]. Values that are already canonical are
/// returned unchanged so that the modular arithmetic can't accumulate rounding errors on repeated calls
#[inline]
pub fn normalize_lon_180 (lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 { return lon }

    let wrapped = wrap_lon(lon);
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

/// plain modular wrap into [-180,180) without boundary mapping
#[inline]
pub fn wrap_lon (lon: f64) -> f64 {
    ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}

/// normalize longitude degrees into [0,360)
#[inline]
pub fn normalize_lon_360 (lon: f64) -> f64 {
    ((lon % 360.0) + 360.0) % 360.0
}

/// clamp latitude degrees to the range that can be Mercator projected
#[inline]
pub fn clamp_mercator_lat (lat: f64) -> f64 {
    lat.max(-MAX_MERCATOR_LAT).min(MAX_MERCATOR_LAT)
}

/// is lat a valid geodetic latitude in degrees
#[inline]
pub fn is_valid_lat (lat: f64) -> bool {
    lat.is_finite() && lat >= -90.0 && lat <= 90.0
}

/// is lon within the accepted *input* range [-180,360) - both signed and unsigned conventions are in use
#[inline]
pub fn is_valid_input_lon (lon: f64) -> bool {
    lon.is_finite() && lon >= -180.0 && lon < 360.0
}
