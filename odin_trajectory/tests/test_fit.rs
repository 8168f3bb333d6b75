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

use odin_common::cartesian3::Cartesian3;
use odin_trajectory::Sample;
use odin_trajectory::default_dataset;
use odin_trajectory::fit::{camera_placement, compute_bounding_sphere, compute_render_fit, render_camera_placement, FitResult, DEFAULT_CAMERA_PADDING, FALLBACK_CAMERA_DISTANCE, MIN_RENDER_FIT_RADIUS};

/// run with "cargo test --test test_fit -- --nocapture"

#[test]
fn test_empty () {
    let fit = compute_bounding_sphere( &[], 1.0);
    assert_eq!( fit, FitResult{ center: Cartesian3::zero(), radius: 1.0 });
    assert_eq!( compute_render_fit( &[], 120_000.0).radius, 1.0);
}

#[test]
fn test_mixed_space_fit () {
    let samples = vec![
        Sample::new( 0.0, 10.0, 20.0).with_alt( 0.0),
        Sample::new( 1.0, 14.0, 20.0).with_alt( 0.0),
        Sample::new( 2.0, 12.0, 23.0),
    ];
    let fit = compute_bounding_sphere( &samples, 1.0);
    println!("{fit:?}");
    assert!( fit.center.distance( &Cartesian3::new( 12.0, 21.0, 0.0)) < 1e-12);
    assert!( (fit.radius - 5.0f64.sqrt()).abs() < 1e-12); // both (10,20) and (14,20) are sqrt(4+1) away

    // altitude enters scaled by the exaggeration
    let samples = vec![ Sample::new( 0.0, 0.0, 0.0).with_alt( 0.0), Sample::new( 1.0, 0.0, 0.0).with_alt( 10.0) ];
    assert!( (compute_bounding_sphere( &samples, 2.0).radius - 10.0).abs() < 1e-12);
}

#[test]
fn test_camera_placement () {
    let fit = FitResult{ center: Cartesian3::new( 1.0, 2.0, 3.0), radius: 2.0 };
    let cam = camera_placement( &fit, DEFAULT_CAMERA_PADDING);
    assert!( (cam.distance - 3.2).abs() < 1e-12);
    assert_eq!( cam.target, fit.center);
    assert!( cam.eye.distance( &Cartesian3::new( 1.0, 2.0, 3.0 + cam.distance)) < 1e-12);

    // a fit without extent
    let fit = FitResult{ center: Cartesian3::new( 1.0, 2.0, 3.0), radius: 0.0 };
    assert_eq!( camera_placement( &fit, 1.6).distance, FALLBACK_CAMERA_DISTANCE);
    assert_eq!( render_camera_placement( &fit, 1.6).distance, FALLBACK_CAMERA_DISTANCE);
}

#[test]
fn test_render_fit_min_radius () {
    // a single sample has no extent of its own but still frames the globe
    let fit = compute_render_fit( &[ Sample::new( 0.0, 45.0, 45.0) ], 120_000.0);
    assert_eq!( fit.radius, MIN_RENDER_FIT_RADIUS);
    assert!( (render_camera_placement( &fit, DEFAULT_CAMERA_PADDING).distance - 1.6).abs() < 1e-12);

    let ds = default_dataset();
    let fit = compute_render_fit( &ds.samples, 120_000.0);
    println!("default dataset fit: {fit:?}");
    assert!( fit.radius >= MIN_RENDER_FIT_RADIUS);
}

#[test]
fn test_render_eye_outside_globe () {
    let ds = default_dataset();
    let fit = compute_render_fit( &ds.samples, 120_000.0);
    let cam = render_camera_placement( &fit, DEFAULT_CAMERA_PADDING);
    println!("default dataset camera: {cam:?}, |eye| = {}", cam.eye.length());
    assert!( cam.eye.length() > 1.0);
    assert_eq!( cam.target, fit.center);
    assert!( (cam.eye.distance( &cam.target) - cam.distance).abs() < 1e-12);

    // eye is on the outward ray through the center
    let e = cam.eye / cam.eye.length();
    let c = fit.center / fit.center.length();
    assert!( e.distance( &c) < 1e-12);

    // a fit centered at the globe origin looks down +z
    let fit = FitResult{ center: Cartesian3::zero(), radius: 1.0 };
    let cam = render_camera_placement( &fit, 2.0);
    assert!( cam.eye.distance( &Cartesian3::new( 0.0, 0.0, 2.0)) < 1e-12);
}
