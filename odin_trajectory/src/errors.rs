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

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinTrajectoryError>;

/// where in the input a parse failure was detected
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ParseLocation {
    /// 1-based source line of delimited text
    Line(usize),
    /// 0-based sample index of structured input
    Index(usize),
    /// the document as a whole (empty input, wrong top level shape)
    Document,
}

impl fmt::Display for ParseLocation {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseLocation::Line(n) => write!(f, "line {n}"),
            ParseLocation::Index(i) => write!(f, "sample index {i}"),
            ParseLocation::Document => write!(f, "document"),
        }
    }
}

fn index_suffix (index: &Option<usize>)->String {
    match index {
        Some(i) => format!(" in sample {i}"),
        None => String::new()
    }
}

#[derive(Error,Debug)]
pub enum OdinTrajectoryError {

    #[error("parse error at {location}: {msg}")]
    ParseError { msg: String, location: ParseLocation },

    #[error("validation error{}: {msg}", index_suffix(.index))]
    ValidationError { msg: String, index: Option<usize> },

    #[error("manifest load error {0}")]
    ManifestLoadError( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

impl OdinTrajectoryError {
    /// the offending sample index of a validation or structured parse error
    pub fn sample_index (&self)->Option<usize> {
        match self {
            OdinTrajectoryError::ValidationError{ index, .. } => *index,
            OdinTrajectoryError::ParseError{ location: ParseLocation::Index(i), .. } => Some(*i),
            _ => None
        }
    }

    /// the 1-based source line of a delimited text parse error
    pub fn line (&self)->Option<usize> {
        match self {
            OdinTrajectoryError::ParseError{ location: ParseLocation::Line(n), .. } => Some(*n),
            _ => None
        }
    }
}

macro_rules! parse_error {
    ($loc:expr, $fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::ParseError{ msg: format!( $fmt $(, $arg)* ), location: $loc }
    };
}
pub (crate) use parse_error;

macro_rules! validation_error {
    ($idx:expr, $fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::ValidationError{ msg: format!( $fmt $(, $arg)* ), index: $idx }
    };
}
pub (crate) use validation_error;

macro_rules! manifest_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::ManifestLoadError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use manifest_error;
