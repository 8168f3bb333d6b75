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

use odin_trajectory::{load_config, TrajectoryConfig};
use odin_trajectory::altitude_plot::build_altitude_plot;
use odin_trajectory::Sample;

/// run with "cargo test --test test_config -- --nocapture"

#[test]
fn test_shipped_config () {
    let config = load_config( concat!( env!("CARGO_MANIFEST_DIR"), "/configs/trajectory.ron")).unwrap();
    assert_eq!( config, TrajectoryConfig::default());
}

#[test]
fn test_partial_config () {
    let config = TrajectoryConfig::from_ron_str( "(anti_meridian_threshold_deg: 180.0, camera_padding: 2.0)").unwrap();
    assert_eq!( config.anti_meridian_threshold_deg, 180.0);
    assert_eq!( config.camera_padding, 2.0);
    assert_eq!( config.altitude_exaggeration_divisor, 120_000.0);

    assert!( TrajectoryConfig::from_ron_str( "(default_speed: 0.0)").is_err());
    assert!( TrajectoryConfig::from_ron_str( "(frame_interval_ms: 0)").is_err());
    assert!( TrajectoryConfig::from_ron_str( "(bogus").is_err());
}

#[test]
fn test_altitude_plot () {
    let samples = vec![ Sample::new( 0.0, 0.0, 0.0).with_alt( 1000.0), Sample::new( 50.0, 0.0, 0.0), Sample::new( 100.0, 0.0, 0.0).with_alt( 500.0) ];
    let plot = build_altitude_plot( &samples, 200.0, 100.0);
    println!("{:?}", plot.points);

    assert_eq!( (plot.scale.alt_min, plot.scale.alt_max), (0.0, 1000.0));
    assert_eq!( plot.points, vec![ (0.0, 0.0), (100.0, 100.0), (200.0, 50.0) ]);

    let empty = build_altitude_plot( &[], 200.0, 100.0);
    assert!( empty.points.is_empty());
    assert_eq!( (empty.scale.t_max, empty.scale.alt_max), (1.0, 1.0));

    // single sample at t=0 has a degenerate time domain
    let single = build_altitude_plot( &[ Sample::new( 0.0, 0.0, 0.0) ], 200.0, 100.0);
    assert_eq!( single.points, vec![ (0.0, 100.0) ]);
    assert_eq!( single.scale.alt_max, 1.0);
}
