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

use odin_common::angle::*;

// run with "cargo test --test test_angle -- --nocapture"

#[test]
fn test_canonical_longitude () {
    let cases = [
        (0.0, 0.0), (179.5, 179.5), (180.0, 180.0), (-180.0, 180.0),
        (190.0, -170.0), (359.0, -1.0), (-190.0, 170.0), (720.0, 0.0)
    ];

    for (lon, expected) in cases {
        let n = normalize_lon_180(lon);
        println!("{lon} -> {n}");
        assert!( (n - expected).abs() < 1e-12, "normalize_lon_180({lon}) = {n}, expected {expected}");
        assert!( n > -180.0 && n <= 180.0);
    }
}

#[test]
fn test_normalization_is_idempotent () {
    let mut lon = -720.0;
    while lon < 720.0 {
        let once = normalize_lon_180(lon);
        let twice = normalize_lon_180(once);
        assert_eq!( once, twice, "not idempotent for {lon}");
        lon += 7.25;
    }

    // steps that are not exactly representable
    let mut lon = -540.0;
    while lon < 540.0 {
        let once = normalize_lon_180(lon);
        assert_eq!( once, normalize_lon_180(once), "not idempotent for {lon}");
        lon += 0.1;
    }
}

#[test]
fn test_input_ranges () {
    assert!( is_valid_lat(90.0));
    assert!( is_valid_lat(-90.0));
    assert!( !is_valid_lat(95.0));
    assert!( !is_valid_lat(f64::NAN));

    assert!( is_valid_input_lon(-180.0));
    assert!( is_valid_input_lon(359.99));
    assert!( !is_valid_input_lon(360.0));
    assert!( !is_valid_input_lon(-180.01));
    assert!( !is_valid_input_lon(f64::INFINITY));
}

#[test]
fn test_mercator_lat_clamp () {
    assert_eq!( clamp_mercator_lat(89.0), MAX_MERCATOR_LAT);
    assert_eq!( clamp_mercator_lat(-89.0), -MAX_MERCATOR_LAT);
    assert_eq!( clamp_mercator_lat(45.0), 45.0);
}
