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

//! display formatting of sample values for HUD style output

const MISSING: &str = "—";

fn is_present (v: Option<f64>)->Option<f64> {
    v.filter( |x| !x.is_nan())
}

pub fn format_lat_lon (lat_deg: Option<f64>, lon_deg: Option<f64>)->String {
    match (is_present(lat_deg), is_present(lon_deg)) {
        (Some(lat), Some(lon)) => format!("{lat:.3} / {lon:.3}"),
        _ => MISSING.to_string()
    }
}

pub fn format_altitude (alt_meters: Option<f64>)->String {
    is_present(alt_meters).map( |a| format!("{:.1} km", a / 1000.0)).unwrap_or_else( || MISSING.to_string())
}

pub fn format_speed (speed_mps: Option<f64>)->String {
    is_present(speed_mps).map( |s| format!("{s:.0} m/s")).unwrap_or_else( || MISSING.to_string())
}

/// `MM:SS` of elapsed seconds. Minutes are not wrapped into hours
pub fn format_time_seconds (t: Option<f64>)->String {
    match is_present(t) {
        Some(t) if t >= 0.0 && t.is_finite() => {
            let total = t.floor() as u64;
            format!("{:02}:{:02}", total / 60, total % 60)
        }
        _ => "00:00".to_string()
    }
}
