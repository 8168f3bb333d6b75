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

//! time domain interpolation over normalized samples.
//!
//! Latitude and longitude are blended linearly in degree space, not along a great circle. The error of
//! this approximation grows with the time gap between samples, which is acceptable for the densely
//! sampled telemetry we display. Longitudes are not unwrapped, i.e. a segment crossing the anti-meridian
//! is interpolated the long way around.

use odin_common::lerp;
use crate::dataset::Sample;

/// the adjacent sample pair that brackets `t`. Times before the first sample map to the first pair,
/// times after the last sample to the last pair. Requires at least two samples
pub fn find_segment (samples: &[Sample], t: f64)->Option<(&Sample,&Sample)> {
    if samples.len() < 2 { return None }
    if t <= samples[0].t { return Some( (&samples[0], &samples[1])) }

    samples.windows(2)
        .find( |w| w[0].t <= t && t <= w[1].t)
        .map( |w| (&w[0], &w[1]))
        .or_else( || {
            let n = samples.len();
            Some( (&samples[n-2], &samples[n-1]))
        })
}

/// blend factor of `t` within `a`..`b`, clamped to [0,1]. Segments of zero length use a span of 1
pub fn blend_factor (a: &Sample, b: &Sample, t: f64)->f64 {
    let span = b.t - a.t;
    let span = if span == 0.0 { 1.0 } else { span };
    ((t - a.t) / span).clamp( 0.0, 1.0)
}

/// linearly interpolated sample at time `t`, `None` with fewer than two samples.
/// The result carries `t` as its time and has altitude/speed set (missing values count as 0)
pub fn interpolate_sample (samples: &[Sample], t: f64)->Option<Sample> {
    let (a,b) = find_segment( samples, t)?;
    let α = blend_factor( a, b, t);

    // exact sample times reproduce the sample values without rounding
    if α == 0.0 { return Some( Sample { t, ..*a }.with_defaults()) }
    if α == 1.0 { return Some( Sample { t, ..*b }.with_defaults()) }

    Some( Sample {
        t,
        lat_deg: lerp( a.lat_deg, b.lat_deg, α),
        lon_deg: lerp( a.lon_deg, b.lon_deg, α),
        alt_meters: Some( lerp( a.alt_or_zero(), b.alt_or_zero(), α)),
        speed_mps: Some( lerp( a.speed_or_zero(), b.speed_or_zero(), α)),
    })
}

/// the last sample at or before `t` (the first sample if `t` precedes all of them), `None` without samples.
/// This is the fallback for sample sets that are too small to interpolate
pub fn sample_at_or_before (samples: &[Sample], t: f64)->Option<&Sample> {
    let first = samples.first()?;
    Some( samples.iter().skip(1).take_while( |s| s.t <= t).last().unwrap_or(first))
}

/// interpolate if possible, otherwise fall back to [`sample_at_or_before`]
pub fn sample_at (samples: &[Sample], t: f64)->Option<Sample> {
    interpolate_sample( samples, t).or_else( || sample_at_or_before( samples, t).copied())
}
