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

//! the altitude over time inset plot

use serde::Serialize;
use odin_common::MinMax;
use crate::dataset::Sample;

/// linear mapping from (time,altitude) into a width x height canvas with y growing downwards
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct AltitudeScale {
    pub width: f64,
    pub height: f64,
    pub t_min: f64,
    pub t_max: f64,
    pub alt_min: f64,
    pub alt_max: f64,
}

impl AltitudeScale {
    /// create a scale. Non-finite or empty domains are widened to a span of 1
    pub fn new (width: f64, height: f64, t_min: f64, t_max: f64, alt_min: f64, alt_max: f64)->Self {
        let t_min = if t_min.is_finite() { t_min } else { 0.0 };
        let t_max = if t_max.is_finite() && t_max > t_min { t_max } else { t_min + 1.0 };
        let alt_min = if alt_min.is_finite() { alt_min } else { 0.0 };
        let alt_max = if alt_max.is_finite() && alt_max > alt_min { alt_max } else { alt_min + 1.0 };

        AltitudeScale { width, height, t_min, t_max, alt_min, alt_max }
    }

    pub fn x_for_time (&self, t: f64)->f64 {
        let t = t.clamp( self.t_min, self.t_max);
        (t - self.t_min) / (self.t_max - self.t_min) * self.width
    }

    pub fn y_for_alt (&self, alt: f64)->f64 {
        let alt = alt.clamp( self.alt_min, self.alt_max);
        self.height - (alt - self.alt_min) / (self.alt_max - self.alt_min) * self.height
    }
}

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct AltitudePlot {
    pub points: Vec<(f64,f64)>,
    pub scale: AltitudeScale,
}

/// canvas polyline of altitude over time. The time domain starts at 0, the altitude domain always
/// includes 0 and 1 meter
pub fn build_altitude_plot (samples: &[Sample], width: f64, height: f64)->AltitudePlot {
    let Some(last) = samples.last() else {
        return AltitudePlot { points: Vec::new(), scale: AltitudeScale::new( width, height, 0.0, 1.0, 0.0, 1.0) }
    };

    let mut alt = MinMax::new();
    alt.add( 0.0);
    alt.add( 1.0);
    for s in samples { alt.add( s.alt_or_zero()) }

    let scale = AltitudeScale::new( width, height, 0.0, last.t, alt.min, alt.max);
    let points = samples.iter().map( |s| (scale.x_for_time(s.t), scale.y_for_alt( s.alt_or_zero()))).collect();

    AltitudePlot { points, scale }
}
