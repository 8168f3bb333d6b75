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

//! tunable constants of the trajectory pipeline, read from RON

use std::path::Path;
use serde::{Serialize,Deserialize};

use odin_common::fs;
use crate::errors::{OdinTrajectoryError,Result,validation_error};
use crate::fit::DEFAULT_CAMERA_PADDING;
use crate::projection::{DEFAULT_ANTI_MERIDIAN_THRESHOLD_DEG,DEFAULT_EXAGGERATION_DIVISOR};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// longitude jump (in degrees) between consecutive projected points that splits a map polyline
    pub anti_meridian_threshold_deg: f64,
    /// display radius is `1 + alt_meters / altitude_exaggeration_divisor`
    pub altitude_exaggeration_divisor: f64,
    pub camera_padding: f64,
    /// altitude factor used for the mixed space camera fit
    pub fit_exaggeration: f64,
    pub default_speed: f64,
    pub speed_choices: Vec<f64>,
    pub frame_interval_ms: u64,
}

impl Default for TrajectoryConfig {
    fn default()->Self {
        TrajectoryConfig {
            anti_meridian_threshold_deg: DEFAULT_ANTI_MERIDIAN_THRESHOLD_DEG,
            altitude_exaggeration_divisor: DEFAULT_EXAGGERATION_DIVISOR,
            camera_padding: DEFAULT_CAMERA_PADDING,
            fit_exaggeration: 1.0,
            default_speed: 1.0,
            speed_choices: vec![0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0],
            frame_interval_ms: 16,
        }
    }
}

impl TrajectoryConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        let config: TrajectoryConfig = ron::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    fn check (&self)->Result<()> {
        if !(self.anti_meridian_threshold_deg > 0.0 && self.anti_meridian_threshold_deg <= 360.0) {
            return Err( validation_error!( None, "anti_meridian_threshold_deg out of range: {}", self.anti_meridian_threshold_deg))
        }
        if !(self.altitude_exaggeration_divisor.is_finite() && self.altitude_exaggeration_divisor > 0.0) {
            return Err( validation_error!( None, "altitude_exaggeration_divisor has to be positive: {}", self.altitude_exaggeration_divisor))
        }
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            return Err( validation_error!( None, "default_speed has to be positive: {}", self.default_speed))
        }
        if self.frame_interval_ms == 0 {
            return Err( validation_error!( None, "frame_interval_ms can't be 0"))
        }
        Ok(())
    }
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<TrajectoryConfig> {
    let s = fs::filepath_contents_as_string( &path)?;
    TrajectoryConfig::from_ron_str( &s)
}
