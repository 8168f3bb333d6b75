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

//! domain range checks for parsed or programmatically constructed datasets.
//! Validation is fail-fast: the first violation is reported, nothing is repaired

use odin_common::angle::{is_valid_lat, is_valid_input_lon};
use crate::dataset::{Dataset,Sample};
use crate::errors::{OdinTrajectoryError,Result,validation_error};

pub fn validate_sample (sample: &Sample, index: usize)->Result<()> {
    if !sample.t.is_finite() {
        return Err( validation_error!( Some(index), "invalid time {}", sample.t))
    }
    if !is_valid_lat( sample.lat_deg) {
        return Err( validation_error!( Some(index), "latDeg out of range: {}", sample.lat_deg))
    }
    if !is_valid_input_lon( sample.lon_deg) {
        return Err( validation_error!( Some(index), "lonDeg out of range: {}", sample.lon_deg))
    }
    if let Some(alt) = sample.alt_meters.filter( |a| !a.is_finite()) {
        return Err( validation_error!( Some(index), "altMeters invalid: {}", alt))
    }
    if let Some(speed) = sample.speed_mps.filter( |v| !v.is_finite()) {
        return Err( validation_error!( Some(index), "speedMps invalid: {}", speed))
    }
    Ok(())
}

pub fn validate_samples (samples: &[Sample])->Result<()> {
    for (i,s) in samples.iter().enumerate() {
        validate_sample( s, i)?;
    }
    Ok(())
}

pub fn validate_dataset (dataset: &Dataset)->Result<()> {
    if dataset.id.is_empty() {
        return Err( validation_error!( None, "dataset missing id"))
    }
    if dataset.name.is_empty() {
        return Err( validation_error!( None, "dataset '{}' missing name", dataset.id))
    }
    if dataset.samples.is_empty() {
        return Err( validation_error!( None, "dataset '{}' has no samples", dataset.id))
    }
    validate_samples( &dataset.samples)
}
