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
use tracing_subscriber::EnvFilter;

use odin_common::define_cli;
use odin_trajectory::{load_config, import_telemetry_file, TrajectoryConfig, TrajectoryController};
use odin_trajectory::driver::{run_playback, IntervalScheduler};
use odin_trajectory::format::{format_altitude, format_lat_lon, format_speed, format_time_seconds};

define_cli! { ARGS [about="real time playback of trajectory telemetry, printing a HUD line per second of dataset time"] =
    config: Option<String> [help="path of RON config file", long],
    speed: Option<f64> [help="playback speed multiplier", long],
    start: Option<f64> [help="start time in seconds", long],
    path: Option<String> [help="CSV or JSON telemetry file (default dataset if omitted)"]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).try_init().ok();

    let config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => TrajectoryConfig::default()
    };

    let scheduler = IntervalScheduler::from_millis( config.frame_interval_ms);
    let mut ctrl = TrajectoryController::new( config, scheduler);

    if let Some(path) = &ARGS.path {
        ctrl.add_dataset( import_telemetry_file( path)?)?;
    }
    if let Some(speed) = ARGS.speed {
        ctrl.set_speed( speed)?;
    }
    if let Some(t) = ARGS.start {
        ctrl.scrub( t);
    }

    println!("playing '{}' ({}) at {}x", ctrl.selected().name(), format_time_seconds( Some(ctrl.duration())), ctrl.playback_state().speed);

    let mut last_second = -1.0;
    ctrl.play();
    run_playback( &mut ctrl, |ctrl| {
        let t = ctrl.playback_state().current_time;
        if t.floor() > last_second || !ctrl.is_playing() {
            last_second = t.floor();
            print_hud( ctrl);
        }
    }).await;

    Ok(())
}

fn print_hud (ctrl: &TrajectoryController<IntervalScheduler>) {
    let t = ctrl.playback_state().current_time;
    let s = ctrl.current_sample();
    println!("{}  {:>24}  {:>10}  {:>10}",
        format_time_seconds( Some(t)),
        format_lat_lon( s.map(|s| s.lat_deg), s.map(|s| s.lon_deg)),
        format_altitude( s.and_then(|s| s.alt_meters)),
        format_speed( s.and_then(|s| s.speed_mps))
    );
}
