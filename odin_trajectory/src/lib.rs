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

#![allow(unused,uncommon_codepoints)]

//! ingestion, normalization, projection and playback of geodetic trajectory telemetry.
//!
//! The pipeline is
//! ```text
//!   raw text ─▶ import (parse + validate) ─▶ Dataset ─▶ normalize ─▶ NormalizedDataset ─┬─▶ projections/fit
//!                                                                                       └─▶ interpolation at clock time
//! ```
//! with a [`controller::TrajectoryController`] owning the dataset list, the selection and the [`clock::PlaybackClock`].

pub mod errors;
pub mod dataset;
pub mod validate;
pub mod import;
pub mod normalize;
pub mod projection;
pub mod interpolate;
pub mod clock;
pub mod fit;
pub mod manifest;
pub mod altitude_plot;
pub mod format;
pub mod config;
pub mod controller;
pub mod driver;

pub use errors::{OdinTrajectoryError,ParseLocation,Result};
pub use dataset::{Bounds,Dataset,DatasetSource,DatasetStyle,Sample,default_dataset};
pub use import::{import_telemetry,import_telemetry_file};
pub use normalize::{NormalizedDataset,normalize};
pub use config::{TrajectoryConfig,load_config};
pub use controller::{Layer,LayerToggles,TrajectoryController};
