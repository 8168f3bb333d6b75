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

use odin_common::PI;
use odin_trajectory::projection::{exaggerated_radius, project_polyline, split_anti_meridian, to_mercator, MercatorPoint, MAX_MERCATOR_Y};

/// run with "cargo test --test test_projection -- --nocapture"

fn xs (xs: &[f64])->Vec<MercatorPoint> {
    xs.iter().map( |x| MercatorPoint::new( *x, 0.0)).collect()
}

#[test]
fn test_mercator_monotone () {
    let mut lat = -85.0;
    let mut last = f64::NEG_INFINITY;
    while lat <= 85.0 {
        let y = to_mercator( lat, 0.0).y;
        assert!( y > last, "not increasing at lat {lat}");
        last = y;
        lat += 0.5;
    }
}

#[test]
fn test_mercator_clamp () {
    let y_max = *MAX_MERCATOR_Y;
    println!("max y = {y_max}");
    assert!( (y_max - PI).abs() < 1e-6);
    assert_eq!( to_mercator( 89.9, 0.0).y, to_mercator( 90.0, 0.0).y);
    assert!( (to_mercator( -90.0, 0.0).y + y_max).abs() < 1e-12);

    assert!( (to_mercator( 0.0, 190.0).x - (-170.0f64).to_radians()).abs() < 1e-12);
    assert!( (to_mercator( 0.0, -180.0).x - PI).abs() < 1e-12);

    let (sx, sy) = to_mercator( 0.0, 0.0).to_screen( 200.0, 100.0);
    assert!( (sx - 100.0).abs() < 1e-9 && (sy - 50.0).abs() < 1e-9);
}

#[test]
fn test_anti_meridian_split () {
    let threshold = 170.0f64;
    let segs = split_anti_meridian( &xs( &[3.0, 3.1, -3.1, -3.0]), threshold);
    assert_eq!( segs.len(), 2);
    assert_eq!( segs[0].len(), 2);
    assert_eq!( segs[1].len(), 2);

    for seg in &segs {
        assert!( seg.windows(2).all( |w| (w[1].x - w[0].x).abs() <= threshold.to_radians()));
    }
    // nothing lost
    assert_eq!( segs.iter().map( |s| s.len()).sum::<usize>(), 4);
}

#[test]
fn test_short_sequences () {
    assert_eq!( split_anti_meridian( &[], 170.0), vec![ Vec::<MercatorPoint>::new() ]);
    assert_eq!( split_anti_meridian( &xs( &[3.0]), 170.0).len(), 1);
    assert_eq!( split_anti_meridian( &xs( &[-3.0, 3.0]), 170.0).len(), 2);
}

#[test]
fn test_unnormalized_input_lon () {
    // 175° -> 185° crosses the anti-meridian. 350°, 355°, 5° normalize to -10°, -5°, 5° and stay contiguous
    let segs = project_polyline( vec![ (0.0, 175.0), (0.0, 185.0), (0.0, 190.0) ], 170.0);
    assert_eq!( segs.len(), 2);

    let segs = project_polyline( vec![ (0.0, 350.0), (0.0, 355.0), (0.0, 5.0) ], 170.0);
    assert_eq!( segs.len(), 1);
}

#[test]
fn test_exaggeration () {
    assert_eq!( exaggerated_radius( 0.0, 120_000.0), 1.0);
    assert_eq!( exaggerated_radius( 120_000.0, 120_000.0), 2.0);
}
