/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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
#![allow(unused,uncommon_codepoints)]

//! basic geodetic building blocks shared by ODIN trajectory crates

use std::f64::consts::{PI as STD_PI};

pub mod macros;
pub mod fs;
pub mod angle;
pub mod cartesian3;

// re-exported so that our logging macros expand without requiring a direct tracing dependency
pub use tracing;

/// linear interpolation between `a` and `b` for a blend factor `t` (not clamped)
#[inline(always)]
pub fn lerp (a: f64, b: f64, t: f64) -> f64 { a + (b - a) * t }

/// clamp that maps NaN to the lower bound instead of propagating it
#[inline]
pub fn clamp_or_min (x: f64, min: f64, max: f64) -> f64 {
    if x.is_nan() { min } else { x.max(min).min(max) }
}

// a global fn that can be used with serde(skip_serializing_if="odin_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// a simple incremental min/max accumulator
#[derive(Debug,Clone,Copy)]
pub struct MinMax {
    pub n: usize,
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    pub fn new()->Self { MinMax { n: 0, min: f64::INFINITY, max: f64::NEG_INFINITY } }

    /// add a new observation
    pub fn add (&mut self, x: f64) {
        self.n += 1;
        if x < self.min { self.min = x }
        if x > self.max { self.max = x }
    }

    pub fn is_empty (&self)->bool { self.n == 0 }
}

impl Default for MinMax {
    fn default()->Self { MinMax::new() }
}

pub const PI: f64 = STD_PI;
pub const QUARTER_PI: f64 = PI / 4.0;
pub const TWO_PI: f64 = PI * 2.0;
