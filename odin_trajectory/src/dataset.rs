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

//! the telemetry data model: samples, datasets and their derived bounds

use serde::{Serialize,Deserialize};
use odin_common::MinMax;

/// one time-tagged geodetic telemetry observation. Identity is positional
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Sample {
    /// seconds since start of the dataset
    pub t: f64,
    pub lat_deg: f64,
    pub lon_deg: f64,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub alt_meters: Option<f64>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub speed_mps: Option<f64>,
}

impl Sample {
    pub fn new (t: f64, lat_deg: f64, lon_deg: f64)->Self {
        Sample { t, lat_deg, lon_deg, alt_meters: None, speed_mps: None }
    }

    pub fn with_alt (mut self, alt_meters: f64)->Self {
        self.alt_meters = Some(alt_meters);
        self
    }

    pub fn with_speed (mut self, speed_mps: f64)->Self {
        self.speed_mps = Some(speed_mps);
        self
    }

    /// altitude with the normalization default for missing values
    #[inline] pub fn alt_or_zero (&self)->f64 { self.alt_meters.unwrap_or(0.0) }

    #[inline] pub fn speed_or_zero (&self)->f64 { self.speed_mps.unwrap_or(0.0) }

    /// the sample with missing altitude/speed replaced by 0
    pub fn with_defaults (self)->Self {
        Sample { alt_meters: Some(self.alt_or_zero()), speed_mps: Some(self.speed_or_zero()), ..self }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub enum DatasetSource {
    Bundled,
    LocalFile,
}

/// optional presentation overrides carried along with a dataset
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct DatasetStyle {
    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub exaggeration: Option<f64>,
}

/// a named, ordered collection of samples. Once produced by ingestion a dataset is treated as immutable
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub description: Option<String>,

    pub source: DatasetSource,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub time_base: Option<String>,

    pub samples: Vec<Sample>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub style: Option<DatasetStyle>,
}

impl Dataset {
    pub fn new (id: impl ToString, name: impl ToString, source: DatasetSource, samples: Vec<Sample>)->Self {
        Dataset {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            source,
            time_base: None,
            samples,
            style: None
        }
    }

    pub fn with_description (mut self, description: impl ToString)->Self {
        self.description = Some(description.to_string());
        self
    }

    /// time of the last sample, 0 if there are no samples
    pub fn duration (&self)->f64 {
        duration_of( &self.samples)
    }
}

pub fn duration_of (samples: &[Sample])->f64 {
    samples.last().map( |s| s.t).unwrap_or(0.0)
}

/// per-field extent of a sample set. Missing altitudes count as 0
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_alt: f64,
    pub max_alt: f64,
}

impl Bounds {
    /// compute bounds of given samples, `None` if there are none
    pub fn from_samples (samples: &[Sample])->Option<Bounds> {
        let mut lat = MinMax::new();
        let mut lon = MinMax::new();
        let mut alt = MinMax::new();

        for s in samples {
            lat.add( s.lat_deg);
            lon.add( s.lon_deg);
            alt.add( s.alt_or_zero());
        }

        if lat.is_empty() {
            None
        } else {
            Some( Bounds {
                min_lat: lat.min, max_lat: lat.max,
                min_lon: lon.min, max_lon: lon.max,
                min_alt: alt.min, max_alt: alt.max
            })
        }
    }
}

/// the dataset that is used if we don't have any usable one
pub fn default_dataset ()->Dataset {
    let samples = vec![
        Sample::new(   0.0, 28.5, -80.6).with_alt( 82000.0),
        Sample::new(  30.0, 30.1, -79.5).with_alt( 78000.0),
        Sample::new(  60.0, 31.4, -78.0).with_alt( 72000.0),
        Sample::new(  90.0, 33.0, -76.0).with_alt( 65000.0),
        Sample::new( 120.0, 34.2, -73.4).with_alt( 55000.0),
        Sample::new( 150.0, 35.0, -70.8).with_alt( 44000.0),
        Sample::new( 180.0, 35.7, -68.1).with_alt( 32000.0),
        Sample::new( 210.0, 36.1, -65.5).with_alt( 21000.0),
        Sample::new( 240.0, 36.4, -63.0).with_alt( 12000.0),
        Sample::new( 270.0, 36.6, -61.2).with_alt(  7000.0),
        Sample::new( 300.0, 36.8, -60.0).with_alt(     0.0),
    ];

    let mut ds = Dataset::new( "sample_shuttle", "Sample Shuttle Reentry", DatasetSource::Bundled, samples)
        .with_description( "Bundled demo telemetry for globe playback");
    ds.time_base = Some("seconds".to_string());
    ds
}
