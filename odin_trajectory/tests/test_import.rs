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

use odin_trajectory::{import_telemetry, DatasetSource, OdinTrajectoryError, ParseLocation, Sample};
use odin_trajectory::import::{detect_format, parse_csv, parse_json, TelemetryFormat};

/// run with "cargo test --test test_import -- --nocapture"

#[test]
fn test_basic_csv () {
    let samples = parse_csv( "time,lat,lon\n0,10,20\n10,11,21").unwrap();
    assert_eq!( samples, vec![ Sample::new( 0.0, 10.0, 20.0), Sample::new( 10.0, 11.0, 21.0) ]);
    assert!( samples.iter().all( |s| s.alt_meters.is_none() && s.speed_mps.is_none()));
}

#[test]
fn test_csv_aliases_and_whitespace () {
    let text = "\n Seconds , Latitude,LONGITUDE, alt_m ,velocity\r\n0, 10.5 ,20,100,7.5\r\n\r\n5,11,21,,8\n";
    let samples = parse_csv( text).unwrap();
    println!("{samples:?}");
    assert_eq!( samples.len(), 2);
    assert_eq!( samples[0], Sample::new( 0.0, 10.5, 20.0).with_alt( 100.0).with_speed( 7.5));
    assert_eq!( samples[1].alt_meters, None);
    assert_eq!( samples[1].speed_mps, Some(8.0));
}

#[test]
fn test_csv_errors () {
    let e = parse_csv( "foo,lat,lon\n0,1,2").unwrap_err();
    println!("{e}");
    assert!( matches!( e, OdinTrajectoryError::ParseError{ location: ParseLocation::Line(1), .. }));

    let e = parse_csv( "time,lat,lon\n0,1,2\n5,abc,2\n").unwrap_err();
    println!("{e}");
    assert_eq!( e.line(), Some(3));

    let e = parse_csv( "  \n\n").unwrap_err();
    assert!( matches!( e, OdinTrajectoryError::ParseError{ location: ParseLocation::Document, .. }));

    // header only is valid but has no samples
    assert!( parse_csv( "t,lat,lon\n").unwrap().is_empty());
}

#[test]
fn test_json_shapes () {
    let doc = parse_json( r#"[{"t":0,"lat":1,"lon":2},{"t":"5","latitude":1.5,"longitude":2.5,"altitude":300,"velocity":12}]"#).unwrap();
    assert!( doc.id.is_none());
    assert_eq!( doc.samples[1], Sample::new( 5.0, 1.5, 2.5).with_alt( 300.0).with_speed( 12.0));

    let doc = parse_json( r#"{"id":"x1","name":"X","style":{"color":"red"},"samples":[{"t":0,"latDeg":1,"lonDeg":2,"altMeters":3}]}"#).unwrap();
    assert_eq!( doc.id.as_deref(), Some("x1"));
    assert_eq!( doc.style.and_then( |s| s.color).as_deref(), Some("red"));
    assert_eq!( doc.samples[0].alt_meters, Some(3.0));

    // primary keys win over aliases
    let doc = parse_json( r#"[{"t":0,"latDeg":1,"lat":9,"lonDeg":2}]"#).unwrap();
    assert_eq!( doc.samples[0].lat_deg, 1.0);
}

#[test]
fn test_json_errors () {
    let e = parse_json( r#"[{"t":0,"lat":1,"lon":2},{"t":1,"lat":1}]"#).unwrap_err();
    println!("{e}");
    assert_eq!( e.sample_index(), Some(1));

    let e = parse_json( r#"[{"t":0,"lat":1,"lon":2}, 42]"#).unwrap_err();
    assert!( matches!( e, OdinTrajectoryError::ParseError{ location: ParseLocation::Index(1), .. }));

    assert!( matches!( parse_json( "{\"samples\": 3}"), Err(OdinTrajectoryError::ParseError{ location: ParseLocation::Document, .. })));
    assert!( matches!( parse_json( "{not json"), Err(OdinTrajectoryError::ParseError{ location: ParseLocation::Document, .. })));
}

#[test]
fn test_detect_format () {
    assert_eq!( detect_format( Some("track.JSON"), "t,lat,lon"), TelemetryFormat::Structured);
    assert_eq!( detect_format( Some("track.csv"), "[]"), TelemetryFormat::Delimited);
    assert_eq!( detect_format( None, "  [ {\"t\":0} ]"), TelemetryFormat::Structured);
    assert_eq!( detect_format( Some("track.txt"), "time,lat,lon"), TelemetryFormat::Delimited);
}

#[test]
fn test_import_front_end () {
    let ds = import_telemetry( "time,lat,lon\n0,10,20\n10,11,21", Some("x.csv")).unwrap();
    assert_eq!( ds.name, "Imported CSV");
    assert_eq!( ds.source, DatasetSource::LocalFile);
    assert!( ds.id.starts_with("imported-"));

    let ds = import_telemetry( r#"{"name":"Hop","samples":[{"t":0,"lat":1,"lon":2}]}"#, None).unwrap();
    assert_eq!( ds.name, "Hop");

    let ds = import_telemetry( r#"[{"t":0,"lat":1,"lon":2}]"#, Some("hop.json")).unwrap();
    assert_eq!( ds.name, "Imported JSON");

    // parses but does not validate
    let e = import_telemetry( "t,lat,lon\n0,10,20\n5,95,20", None).unwrap_err();
    assert!( matches!( e, OdinTrajectoryError::ValidationError{ index: Some(1), .. }));

    // non numeric optional values are caught by validation
    let e = import_telemetry( r#"[{"t":0,"lat":1,"lon":2,"alt":"high"}]"#, None).unwrap_err();
    assert_eq!( e.sample_index(), Some(0));

    // no samples at all
    assert!( import_telemetry( "t,lat,lon\n", None).is_err());
}
