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

//! the normalization pipeline that turns a validated raw dataset into its canonical, render ready form

use std::cmp::Ordering;
use serde::Serialize;

use odin_common::{debug, angle::normalize_lon_180, cartesian3::Cartesian3};
use crate::dataset::{Bounds,Dataset,Sample,duration_of};
use crate::projection::{MercatorPoint,sphere_to_cartesian,to_mercator};

/// derived per-sample buffers, aligned 1:1 with the normalized samples
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct NormalizedBuffers {
    /// unit sphere render positions
    pub positions: Vec<Cartesian3>,
    /// Mercator space coordinates
    pub mercator: Vec<MercatorPoint>,
    /// altitude series in meters
    pub altitudes: Vec<f64>,
}

impl NormalizedBuffers {
    fn from_samples (samples: &[Sample])->Self {
        let mut positions = Vec::with_capacity( samples.len());
        let mut mercator = Vec::with_capacity( samples.len());
        let mut altitudes = Vec::with_capacity( samples.len());

        for s in samples {
            positions.push( sphere_to_cartesian( s.lat_deg, s.lon_deg, 1.0));
            mercator.push( to_mercator( s.lat_deg, s.lon_deg));
            altitudes.push( s.alt_or_zero());
        }

        NormalizedBuffers { positions, mercator, altitudes }
    }

    pub fn len (&self)->usize { self.altitudes.len() }

    /// interleaved xyz f32 values, the layout GPU vertex buffers want
    pub fn positions_f32 (&self)->Vec<f32> {
        self.positions.iter().flat_map( |p| [p.x as f32, p.y as f32, p.z as f32]).collect()
    }

    /// interleaved xy f32 values
    pub fn mercator_f32 (&self)->Vec<f32> {
        self.mercator.iter().flat_map( |p| [p.x as f32, p.y as f32]).collect()
    }
}

/// a dataset in canonical form: samples sorted by time with canonical longitudes and default altitudes,
/// plus bounds and render buffers that always reflect exactly these samples.
/// The only way to obtain one is [`normalize`], fields are therefore read-only
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct NormalizedDataset {
    dataset: Dataset,
    bounds: Option<Bounds>,
    buffers: NormalizedBuffers,
}

impl NormalizedDataset {
    pub fn dataset (&self)->&Dataset { &self.dataset }
    pub fn id (&self)->&str { &self.dataset.id }
    pub fn name (&self)->&str { &self.dataset.name }
    pub fn samples (&self)->&[Sample] { &self.dataset.samples }

    /// `None` only for an empty sample set
    pub fn bounds (&self)->Option<&Bounds> { self.bounds.as_ref() }

    pub fn buffers (&self)->&NormalizedBuffers { &self.buffers }

    /// time of the last sample (0 without samples)
    pub fn duration (&self)->f64 { duration_of( &self.dataset.samples) }

    /// the raw dataset this was created from is not kept, but normalizing again is a no-op
    pub fn into_dataset (self)->Dataset { self.dataset }
}

/// canonical sample form: longitude wrapped into (-180,180] and missing altitude defaulted to 0
pub fn normalize_sample (s: &Sample)->Sample {
    Sample {
        lon_deg: normalize_lon_180( s.lon_deg),
        alt_meters: Some( s.alt_or_zero()),
        ..*s
    }
}

/// normalize a dataset that has already passed validation. The input is not modified.
/// Samples are stable-sorted by time, i.e. samples with equal `t` keep their relative order
pub fn normalize (dataset: &Dataset)->NormalizedDataset {
    let mut samples: Vec<Sample> = dataset.samples.iter().map( normalize_sample).collect();
    samples.sort_by( |a,b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));

    let bounds = Bounds::from_samples( &samples);
    let buffers = NormalizedBuffers::from_samples( &samples);
    debug!("normalized dataset '{}': {} samples, duration {}s", dataset.id, samples.len(), duration_of(&samples));

    NormalizedDataset {
        dataset: Dataset { samples, ..dataset.clone() },
        bounds,
        buffers
    }
}
