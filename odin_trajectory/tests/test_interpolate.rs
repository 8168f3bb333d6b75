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

use odin_trajectory::Sample;
use odin_trajectory::interpolate::{find_segment, interpolate_sample, sample_at, sample_at_or_before};

/// run with "cargo test --test test_interpolate -- --nocapture"

fn samples ()->Vec<Sample> {
    vec![
        Sample::new(  0.0, 10.0, 20.0).with_alt( 1000.0).with_speed( 100.0),
        Sample::new( 10.0, 11.0, 22.0).with_alt( 3000.0),
        Sample::new( 30.0, 13.3, 25.7).with_alt( 2000.0).with_speed( 300.0),
    ]
}

#[test]
fn test_exact_times () {
    let ss = samples();
    for s in &ss {
        let r = interpolate_sample( &ss, s.t).unwrap();
        println!("{r:?}");
        assert_eq!( r.t, s.t);
        assert_eq!( r.lat_deg, s.lat_deg);
        assert_eq!( r.lon_deg, s.lon_deg);
        assert_eq!( r.alt_meters, Some(s.alt_or_zero()));
        assert_eq!( r.speed_mps, Some(s.speed_or_zero()));
    }
}

#[test]
fn test_blend () {
    let ss = samples();
    let r = interpolate_sample( &ss, 5.0).unwrap();
    assert!( (r.lat_deg - 10.5).abs() < 1e-12);
    assert!( (r.lon_deg - 21.0).abs() < 1e-12);
    assert!( (r.alt_meters.unwrap() - 2000.0).abs() < 1e-9);
    assert!( (r.speed_mps.unwrap() - 50.0).abs() < 1e-9); // missing speed counts as 0

    let r = interpolate_sample( &ss, 20.0).unwrap();
    assert!( (r.alt_meters.unwrap() - 2500.0).abs() < 1e-9);
}

#[test]
fn test_out_of_range () {
    let ss = samples();
    let (a,b) = find_segment( &ss, -5.0).unwrap();
    assert_eq!( (a.t, b.t), (0.0, 10.0));
    let (a,b) = find_segment( &ss, 99.0).unwrap();
    assert_eq!( (a.t, b.t), (10.0, 30.0));

    // blend factor is clamped, time is the query time
    let r = interpolate_sample( &ss, -5.0).unwrap();
    assert_eq!( r.t, -5.0);
    assert_eq!( r.lat_deg, 10.0);
    let r = interpolate_sample( &ss, 99.0).unwrap();
    assert_eq!( r.lat_deg, 13.3);
}

#[test]
fn test_duplicate_times () {
    let ss = vec![ Sample::new( 0.0, 1.0, 1.0), Sample::new( 0.0, 2.0, 2.0) ];
    let r = interpolate_sample( &ss, 0.0).unwrap();
    assert_eq!( r.lat_deg, 1.0);
    assert!( r.lat_deg.is_finite());
}

#[test]
fn test_fallback () {
    let one = vec![ Sample::new( 5.0, 1.0, 2.0) ];
    assert!( interpolate_sample( &one, 5.0).is_none());
    assert_eq!( sample_at( &one, 100.0), Some( one[0]));
    assert_eq!( sample_at( &[], 1.0), None);

    let ss = samples();
    assert_eq!( sample_at_or_before( &ss, 15.0).map( |s| s.t), Some(10.0));
    assert_eq!( sample_at_or_before( &ss, -1.0).map( |s| s.t), Some(0.0));
    assert_eq!( sample_at_or_before( &ss, 30.0).map( |s| s.t), Some(30.0));
}
