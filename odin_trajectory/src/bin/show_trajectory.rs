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
#![allow(unused)]

use anyhow::Result;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use odin_common::define_cli;
use odin_trajectory::{default_dataset, import_telemetry_file, load_config, normalize, TrajectoryConfig, Dataset};
use odin_trajectory::altitude_plot::build_altitude_plot;
use odin_trajectory::fit::{compute_bounding_sphere, compute_render_fit, render_camera_placement};
use odin_trajectory::format::{format_altitude, format_lat_lon, format_time_seconds};
use odin_trajectory::manifest::{load_bundled_missions, DirDocumentSource, DEFAULT_MANIFEST};
use odin_trajectory::projection::split_anti_meridian;

define_cli! { ARGS [about="import trajectory telemetry and print a summary of its derived geometry"] =
    config: Option<String> [help="path of RON config file", long],
    manifest_dir: Option<String> [help="directory with missions.json manifest to load all bundled missions from", long],
    path: Option<String> [help="CSV or JSON telemetry file (default dataset if omitted)"]
}

fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).try_init().ok();

    let config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => TrajectoryConfig::default()
    };

    let datasets: Vec<Dataset> = if let Some(dir) = &ARGS.manifest_dir {
        load_bundled_missions( &DirDocumentSource::new( dir), DEFAULT_MANIFEST)?
    } else if let Some(path) = &ARGS.path {
        vec![ import_telemetry_file( path)? ]
    } else {
        vec![ default_dataset() ]
    };

    for ds in &datasets {
        print_summary( ds, &config);
    }

    Ok(())
}

fn print_summary (ds: &Dataset, config: &TrajectoryConfig) {
    let nds = normalize( ds);
    println!("dataset '{}' ({}): {} samples, duration {}", nds.id(), nds.name(), nds.samples().len(), format_time_seconds( Some(nds.duration())));

    if let Some(b) = nds.bounds() {
        println!("  lat: {}  ..  {}", format_lat_lon( Some(b.min_lat), Some(b.min_lon)), format_lat_lon( Some(b.max_lat), Some(b.max_lon)));
        println!("  alt: {}  ..  {}", format_altitude( Some(b.min_alt)), format_altitude( Some(b.max_alt)));
    }

    let fit = compute_bounding_sphere( nds.samples(), config.fit_exaggeration);
    println!("  mixed space fit: center {}, radius {:.3}", fit.center, fit.radius);

    let cam = render_camera_placement( &compute_render_fit( nds.samples(), config.altitude_exaggeration_divisor), config.camera_padding);
    println!("  camera: eye {}, target {}, distance {:.3}", cam.eye, cam.target, cam.distance);

    let segments = split_anti_meridian( &nds.buffers().mercator, config.anti_meridian_threshold_deg);
    println!("  mercator segments: {} [{}]", segments.len(), segments.iter().map( |s| s.len()).join(","));

    let plot = build_altitude_plot( nds.samples(), 400.0, 120.0);
    println!("  altitude plot: {} points, alt domain [{}, {}] m", plot.points.len(), plot.scale.alt_min, plot.scale.alt_max);
}
