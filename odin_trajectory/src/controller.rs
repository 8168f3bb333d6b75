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

//! the single owner of application state: the dataset list, the selection, playback and layer toggles.
//!
//! All mutations go through the [`TrajectoryController`] entry points. Datasets are normalized once when
//! they are added and shared as `Arc<NormalizedDataset>`, so switching the selection is a reference swap.
//! Every selection change stops playback and resets the time to 0.

use std::sync::Arc;
use serde::{Serialize,Deserialize};

use odin_common::{debug, info, warn};
use crate::clock::{FrameHandle,FrameScheduler,PlaybackClock,PlaybackState};
use crate::config::TrajectoryConfig;
use crate::dataset::{Dataset,Sample,default_dataset};
use crate::errors::{OdinTrajectoryError,Result,validation_error};
use crate::fit::{CameraPlacement,FitResult,compute_bounding_sphere,compute_render_fit,render_camera_placement};
use crate::import::import_telemetry;
use crate::interpolate::sample_at;
use crate::normalize::{NormalizedDataset,normalize};
use crate::projection::{MercatorPoint,exaggerated_radius,sphere_to_cartesian,split_anti_meridian};
use crate::validate::validate_dataset;
use odin_common::cartesian3::Cartesian3;

/// display layer flags. These are pure UI state, the controller only stores them
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct LayerToggles {
    pub show_grid: bool,
    pub show_surface_track: bool,
    pub show_altitude_track: bool,
    pub show_mercator_inset: bool,
    pub show_altitude_inset: bool,
}

impl Default for LayerToggles {
    fn default()->Self {
        LayerToggles {
            show_grid: true,
            show_surface_track: true,
            show_altitude_track: true,
            show_mercator_inset: true,
            show_altitude_inset: true,
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Layer {
    Grid,
    SurfaceTrack,
    AltitudeTrack,
    MercatorInset,
    AltitudeInset,
}

impl LayerToggles {
    pub fn is_visible (&self, layer: Layer)->bool {
        match layer {
            Layer::Grid => self.show_grid,
            Layer::SurfaceTrack => self.show_surface_track,
            Layer::AltitudeTrack => self.show_altitude_track,
            Layer::MercatorInset => self.show_mercator_inset,
            Layer::AltitudeInset => self.show_altitude_inset,
        }
    }

    /// flip the flag of `layer` and return its new value
    pub fn toggle (&mut self, layer: Layer)->bool {
        let flag = match layer {
            Layer::Grid => &mut self.show_grid,
            Layer::SurfaceTrack => &mut self.show_surface_track,
            Layer::AltitudeTrack => &mut self.show_altitude_track,
            Layer::MercatorInset => &mut self.show_mercator_inset,
            Layer::AltitudeInset => &mut self.show_altitude_inset,
        };
        *flag = !*flag;
        *flag
    }
}

pub struct TrajectoryController<S: FrameScheduler> {
    config: TrajectoryConfig,
    scheduler: S,
    datasets: Vec<Arc<NormalizedDataset>>,
    selected: Arc<NormalizedDataset>,
    clock: PlaybackClock,
    layers: LayerToggles,
}

impl<S: FrameScheduler> TrajectoryController<S> {

    /// create a controller that shows the default dataset until real ones are set
    pub fn new (config: TrajectoryConfig, scheduler: S)->Self {
        let selected = Arc::new( normalize( &default_dataset()));
        let clock = PlaybackClock::new( selected.duration(), config.default_speed);

        TrajectoryController {
            config,
            scheduler,
            datasets: vec![selected.clone()],
            selected,
            clock,
            layers: LayerToggles::default(),
        }
    }

    /* #region datasets ******************************************************************************/

    /// replace the dataset list and select its first entry. Datasets that don't validate are skipped.
    /// If nothing usable remains we fall back to the default dataset. Returns the number of input datasets we
    /// kept, which does not count the fallback: 0 means the default dataset was installed
    pub fn set_datasets (&mut self, datasets: Vec<Dataset>)->usize {
        let mut normalized: Vec<Arc<NormalizedDataset>> = Vec::with_capacity( datasets.len());

        for ds in datasets {
            match validate_dataset( &ds) {
                Ok(()) => {
                    let nds = Arc::new( normalize( &ds));
                    if let Some(i) = normalized.iter().position( |d| d.id() == nds.id()) {
                        warn!("duplicate dataset id '{}', replacing previous entry", nds.id());
                        normalized[i] = nds;
                    } else {
                        normalized.push( nds);
                    }
                }
                Err(e) => warn!("ignoring dataset '{}': {}", ds.id, e)
            }
        }

        let n = normalized.len();
        if normalized.is_empty() {
            warn!("no usable datasets, falling back to default");
            normalized.push( Arc::new( normalize( &default_dataset())));
        }

        self.datasets = normalized;
        let first = self.datasets[0].clone();
        self.switch_to( first);
        info!("set {} datasets", self.datasets.len());
        n
    }

    /// validate, normalize and append a dataset, then select it. A dataset with an id that is already
    /// known replaces the previous one
    pub fn add_dataset (&mut self, dataset: Dataset)->Result<Arc<NormalizedDataset>> {
        validate_dataset( &dataset)?;
        let nds = Arc::new( normalize( &dataset));

        if let Some(i) = self.datasets.iter().position( |d| d.id() == nds.id()) {
            self.datasets[i] = nds.clone();
        } else {
            self.datasets.push( nds.clone());
        }

        self.switch_to( nds.clone());
        info!("added dataset '{}'", nds.id());
        Ok(nds)
    }

    /// import raw telemetry text and add the resulting dataset. Errors leave the controller unchanged
    pub fn import (&mut self, text: &str, filename: Option<&str>)->Result<Arc<NormalizedDataset>> {
        let dataset = import_telemetry( text, filename)?;
        self.add_dataset( dataset)
    }

    pub fn select_dataset (&mut self, id: &str)->Result<()> {
        let nds = self.datasets.iter().find( |d| d.id() == id).cloned()
            .ok_or_else( || validation_error!( None, "unknown dataset '{}'", id))?;
        self.switch_to( nds);
        Ok(())
    }

    pub fn datasets (&self)->&[Arc<NormalizedDataset>] { &self.datasets }

    pub fn selected (&self)->&Arc<NormalizedDataset> { &self.selected }

    pub fn selected_id (&self)->&str { self.selected.id() }

    fn switch_to (&mut self, nds: Arc<NormalizedDataset>) {
        self.clock.reset( nds.duration(), &mut self.scheduler);
        debug!("selected dataset '{}' (duration {}s)", nds.id(), nds.duration());
        self.selected = nds;
    }

    /* #endregion datasets */

    /* #region playback ******************************************************************************/

    pub fn play (&mut self) { self.clock.play( &mut self.scheduler) }

    pub fn pause (&mut self) { self.clock.pause( &mut self.scheduler) }

    pub fn scrub (&mut self, t: f64) { self.clock.scrub(t) }

    pub fn set_speed (&mut self, speed: f64)->Result<()> { self.clock.set_speed(speed) }

    /// deliver a scheduled frame. Returns true if the clock advanced
    pub fn on_frame (&mut self, handle: FrameHandle, now_secs: f64)->bool {
        self.clock.on_frame( handle, now_secs, &mut self.scheduler)
    }

    pub fn playback_state (&self)->PlaybackState { self.clock.state() }

    pub fn is_playing (&self)->bool { self.clock.is_playing() }

    pub fn duration (&self)->f64 { self.clock.duration() }

    pub fn scheduler (&self)->&S { &self.scheduler }

    pub fn scheduler_mut (&mut self)->&mut S { &mut self.scheduler }

    /* #endregion playback */

    /* #region derived views *************************************************************************/

    /// the (interpolated) sample at the current playback time
    pub fn current_sample (&self)->Option<Sample> {
        sample_at( self.selected.samples(), self.clock.current_time())
    }

    /// Mercator polyline of the selected dataset, split at anti-meridian crossings
    pub fn mercator_track (&self)->Vec<Vec<MercatorPoint>> {
        split_anti_meridian( &self.selected.buffers().mercator, self.config.anti_meridian_threshold_deg)
    }

    /// render space positions with exaggerated altitude
    pub fn globe_track (&self)->Vec<Cartesian3> {
        let divisor = self.config.altitude_exaggeration_divisor;
        self.selected.samples().iter()
            .map( |s| sphere_to_cartesian( s.lat_deg, s.lon_deg, exaggerated_radius( s.alt_or_zero(), divisor)))
            .collect()
    }

    /// coarse mixed space fit of the selected dataset
    pub fn bounding_sphere (&self)->FitResult {
        compute_bounding_sphere( self.selected.samples(), self.config.fit_exaggeration)
    }

    /// camera placement for the render space track
    pub fn camera_fit (&self)->CameraPlacement {
        let fit = compute_render_fit( self.selected.samples(), self.config.altitude_exaggeration_divisor);
        render_camera_placement( &fit, self.config.camera_padding)
    }

    /* #endregion derived views */

    pub fn layers (&self)->LayerToggles { self.layers }

    pub fn toggle_layer (&mut self, layer: Layer)->bool { self.layers.toggle( layer) }

    pub fn config (&self)->&TrajectoryConfig { &self.config }
}
