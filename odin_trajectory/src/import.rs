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

//! ingestion of raw telemetry text.
//!
//! Two formats are supported: delimited text (CSV with a header row) and structured JSON (either a bare
//! array of sample objects or an object with a `samples` array plus optional dataset metadata).
//! Column/field names are matched against static, ordered alias lists. Parsing is atomic - we either
//! return all samples or a [`OdinTrajectoryError::ParseError`] that locates the first problem.

use std::path::Path;
use csv::{ReaderBuilder,StringRecord,Trim};
use serde_json::{Map,Value};

use odin_common::{debug, fs};
use crate::dataset::{Dataset,DatasetSource,DatasetStyle,Sample};
use crate::errors::{OdinTrajectoryError,ParseLocation,Result,parse_error};
use crate::validate::validate_dataset;

/* #region format detection ***************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TelemetryFormat {
    /// comma separated values with header row
    Delimited,
    /// JSON array or object with samples
    Structured,
}

/// pick format by filename extension, falling back to content sniffing
pub fn detect_format (filename: Option<&str>, text: &str)->TelemetryFormat {
    let ext = filename.and_then( |f| fs::extension( &Path::new(f)).map( |e| e.to_ascii_lowercase()));
    match ext.as_deref() {
        Some("json") => TelemetryFormat::Structured,
        Some("csv") => TelemetryFormat::Delimited,
        _ => {
            let t = text.trim_start();
            if t.starts_with('{') || t.starts_with('[') { TelemetryFormat::Structured } else { TelemetryFormat::Delimited }
        }
    }
}

/* #endregion format detection */

/* #region delimited text *****************************************************************************/

const TIME_COLUMNS: &[&str] = &["t", "time", "seconds", "sec", "timestamp"];
const LAT_COLUMNS: &[&str] = &["lat", "latdeg", "latitude", "lat_deg"];
const LON_COLUMNS: &[&str] = &["lon", "londeg", "longitude", "lon_deg"];
const ALT_COLUMNS: &[&str] = &["alt", "altitude", "altmeters", "alt_m", "altitude_m"];
const SPEED_COLUMNS: &[&str] = &["speed", "speedmps", "speed_mps", "velocity", "vel_mps"];

/// column positions resolved from the header row
#[derive(Debug,Clone,Copy)]
struct ColumnIndices {
    t: usize,
    lat: usize,
    lon: usize,
    alt: Option<usize>,
    speed: Option<usize>,
}

impl ColumnIndices {
    fn from_header (header: &StringRecord, line: usize)->Result<Self> {
        let names: Vec<String> = header.iter().map( |h| h.to_lowercase()).collect();
        let find = |aliases: &[&str]| names.iter().position( |n| aliases.contains( &n.as_str()));

        match (find(TIME_COLUMNS), find(LAT_COLUMNS), find(LON_COLUMNS)) {
            (Some(t), Some(lat), Some(lon)) => {
                Ok( ColumnIndices { t, lat, lon, alt: find(ALT_COLUMNS), speed: find(SPEED_COLUMNS) })
            }
            _ => Err( parse_error!( ParseLocation::Line(line), "CSV missing required headers: time, lat, lon"))
        }
    }

    fn parse_row (&self, rec: &StringRecord, line: usize)->Result<Sample> {
        let required = |idx: usize, name: &str| -> Result<f64> {
            rec.get(idx)
                .and_then( |s| s.parse::<f64>().ok())
                .filter( |v| v.is_finite())
                .ok_or_else( || parse_error!( ParseLocation::Line(line), "invalid numeric {} value", name))
        };

        Ok( Sample {
            t: required( self.t, "time")?,
            lat_deg: required( self.lat, "lat")?,
            lon_deg: required( self.lon, "lon")?,
            alt_meters: optional_field( rec, self.alt),
            speed_mps: optional_field( rec, self.speed),
        })
    }
}

/// optional values are absent if there is no column or the cell is empty. Non-numeric cells are kept as NaN
/// so that validation can reject them with the sample index
fn optional_field (rec: &StringRecord, idx: Option<usize>)->Option<f64> {
    let s = rec.get( idx?)?;
    if s.is_empty() { None } else { Some( s.parse::<f64>().unwrap_or(f64::NAN)) }
}

fn is_blank (rec: &StringRecord)->bool {
    rec.iter().all( |f| f.is_empty())
}

/// parse delimited telemetry text. The first non-blank line is the header, blank lines are skipped.
/// Errors report the 1-based source line
pub fn parse_csv (text: &str)->Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false) // we locate the header ourselves so that leading blank lines are skipped
        .flexible(true)
        .trim(Trim::All)
        .from_reader( text.as_bytes());

    let mut columns: Option<ColumnIndices> = None;
    let mut samples: Vec<Sample> = Vec::new();

    for rec in reader.records() {
        let rec = rec?;
        if is_blank(&rec) { continue }
        let line = rec.position().map( |p| p.line() as usize).unwrap_or(0);

        match &columns {
            Some(cols) => samples.push( cols.parse_row( &rec, line)?),
            None => columns = Some( ColumnIndices::from_header( &rec, line)?)
        }
    }

    if columns.is_none() {
        return Err( parse_error!( ParseLocation::Document, "CSV is empty"))
    }
    Ok(samples)
}

/* #endregion delimited text */

/* #region structured text ****************************************************************************/

const TIME_KEYS: &[&str] = &["t"];
const LAT_KEYS: &[&str] = &["latDeg", "lat", "latitude"];
const LON_KEYS: &[&str] = &["lonDeg", "lon", "longitude"];
const ALT_KEYS: &[&str] = &["altMeters", "alt", "altitude"];
const SPEED_KEYS: &[&str] = &["speedMps", "speed", "velocity"];

/// the parsed content of a structured telemetry document. Metadata is only available if the
/// document was an object
#[derive(Debug,Clone,Default)]
pub struct TelemetryDocument {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub time_base: Option<String>,
    pub style: Option<DatasetStyle>,
    pub samples: Vec<Sample>,
}

impl TelemetryDocument {
    /// turn into a dataset, generating an id and using `default_name` for missing metadata
    pub fn into_dataset (self, source: DatasetSource, default_name: &str)->Dataset {
        Dataset {
            id: self.id.unwrap_or_else( generate_dataset_id),
            name: self.name.unwrap_or_else( || default_name.to_string()),
            description: self.description,
            source,
            time_base: self.time_base,
            samples: self.samples,
            style: self.style,
        }
    }
}

pub fn parse_json (text: &str)->Result<TelemetryDocument> {
    let value: Value = serde_json::from_str(text)
        .map_err( |e| parse_error!( ParseLocation::Document, "invalid JSON telemetry: {}", e))?;
    parse_json_value( &value)
}

pub fn parse_json_value (value: &Value)->Result<TelemetryDocument> {
    match value {
        Value::Array(entries) => {
            Ok( TelemetryDocument { samples: coerce_samples(entries)?, ..TelemetryDocument::default() })
        }
        Value::Object(obj) => {
            match obj.get("samples") {
                Some(Value::Array(entries)) => {
                    Ok( TelemetryDocument {
                        id: string_field( obj, "id"),
                        name: string_field( obj, "name"),
                        description: string_field( obj, "description"),
                        time_base: string_field( obj, "timeBase"),
                        style: obj.get("style").and_then( |v| serde_json::from_value::<DatasetStyle>( v.clone()).ok()),
                        samples: coerce_samples(entries)?,
                    })
                }
                Some(_) => Err( parse_error!( ParseLocation::Document, "invalid JSON telemetry: samples must be an array")),
                None => Err( parse_error!( ParseLocation::Document, "invalid JSON telemetry: missing samples array"))
            }
        }
        _ => Err( parse_error!( ParseLocation::Document, "invalid JSON telemetry: expected array or object with samples"))
    }
}

fn string_field (obj: &Map<String,Value>, key: &str)->Option<String> {
    obj.get(key).and_then( |v| v.as_str()).filter( |s| !s.is_empty()).map( |s| s.to_string())
}

/// the first candidate key with a non-null value
fn first_present<'a> (obj: &'a Map<String,Value>, keys: &[&str])->Option<&'a Value> {
    keys.iter().find_map( |k| obj.get(*k).filter( |v| !v.is_null()))
}

/// numbers and numeric strings are accepted, everything else is NaN
fn as_number (v: &Value)->f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN
    }
}

fn coerce_samples (entries: &[Value])->Result<Vec<Sample>> {
    let mut samples = Vec::with_capacity( entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            return Err( parse_error!( ParseLocation::Index(index), "invalid sample: expected object"))
        };

        let required = |keys: &[&str]| first_present( obj, keys).map( as_number).unwrap_or(f64::NAN);
        let t = required( TIME_KEYS);
        let lat_deg = required( LAT_KEYS);
        let lon_deg = required( LON_KEYS);

        if !(t.is_finite() && lat_deg.is_finite() && lon_deg.is_finite()) {
            return Err( parse_error!( ParseLocation::Index(index), "invalid numeric fields in sample"))
        }

        samples.push( Sample {
            t, lat_deg, lon_deg,
            alt_meters: first_present( obj, ALT_KEYS).map( as_number),
            speed_mps: first_present( obj, SPEED_KEYS).map( as_number),
        });
    }

    Ok(samples)
}

/* #endregion structured text */

/* #region import front end ***************************************************************************/

pub fn generate_dataset_id ()->String {
    format!("imported-{:016x}", rand::random::<u64>())
}

/// parse and validate raw telemetry text of a local file. `filename` is only used for format detection.
/// This never returns a partially populated dataset
pub fn import_telemetry (text: &str, filename: Option<&str>)->Result<Dataset> {
    let dataset = match detect_format( filename, text) {
        TelemetryFormat::Delimited => {
            Dataset::new( generate_dataset_id(), "Imported CSV", DatasetSource::LocalFile, parse_csv(text)?)
        }
        TelemetryFormat::Structured => {
            parse_json(text)?.into_dataset( DatasetSource::LocalFile, "Imported JSON")
        }
    };

    validate_dataset( &dataset)?;
    debug!("imported dataset '{}' with {} samples", dataset.id, dataset.samples.len());
    Ok(dataset)
}

pub fn import_telemetry_file (path: impl AsRef<Path>)->Result<Dataset> {
    let path = path.as_ref();
    let text = fs::filepath_contents_as_string( &path)?;
    import_telemetry( &text, fs::filename( &path))
}

/* #endregion import front end */
