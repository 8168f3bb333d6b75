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

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign, Div};
use serde::{Serialize,Deserialize};
use crate::angle::normalize_lon_180;

/// a plain 3d vector.
/// Note that we do not use uom here since this is also used for abstract coordinate systems such as
/// unit sphere render space or mixed angular/metric framing space
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    /// spherical to cartesian in physics convention with the pole on the y-axis (y-up render space):
    /// colatitude `φ = 90° - lat`, azimuth `θ = lon`, hence `x = r·sinφ·cosθ, y = r·cosφ, z = r·sinφ·sinθ`.
    /// Longitude is normalized before conversion
    pub fn from_spherical_degrees (lat_deg: f64, lon_deg: f64, radius: f64)->Cartesian3 {
        let φ = (90.0 - lat_deg).to_radians();
        let θ = normalize_lon_180(lon_deg).to_radians();
        let sin_φ = φ.sin();

        Cartesian3 {
            x: radius * sin_φ * θ.cos(),
            y: radius * φ.cos(),
            z: radius * sin_φ * θ.sin()
        }
    }

    /// the inverse of [`from_spherical_degrees`] as (lat_deg,lon_deg,radius). Zero vectors map to (0,0,0)
    pub fn to_spherical_degrees (&self)->(f64,f64,f64) {
        let r = self.length();
        if r == 0.0 { return (0.0, 0.0, 0.0) }

        let φ = (self.y / r).clamp(-1.0, 1.0).acos();
        let θ = self.z.atan2(self.x);
        (90.0 - φ.to_degrees(), normalize_lon_180(θ.to_degrees()), r)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    pub fn distance (&self, p: &Cartesian3) -> f64 {
        (p - self).length()
    }

    pub fn scaled (&self, s: f64) -> Cartesian3 {
        self * s
    }

    /// arithmetic mean of given points (zero for an empty slice)
    pub fn mean (ps: &[Cartesian3]) -> Cartesian3 {
        if ps.is_empty() { return Cartesian3::zero() }

        let mut sum = Cartesian3::zero();
        for p in ps { sum += *p }
        sum / ps.len() as f64
    }

    /// linear interpolation bewteen two points with factor r ∈ [0..1]
    pub fn linear_interpolation (p1: &Cartesian3, p2: &Cartesian3, r: f64) -> Self {
        *p1 + (p2-p1)*r
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Add for Cartesian3 {
    type Output = Self;

    fn add (self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl AddAssign for Cartesian3 {
    fn add_assign (&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub (self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Sub for &Cartesian3 {
    type Output = Cartesian3;

    fn sub (self, rhs: &Cartesian3) -> Cartesian3 {
        Cartesian3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl SubAssign for Cartesian3 {
    fn sub_assign (&mut self, rhs: Self)  {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

    fn mul (self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl Mul<f64> for &Cartesian3 {
    type Output = Cartesian3;

    fn mul (self, rhs: f64) -> Cartesian3 {
        Cartesian3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl MulAssign<f64> for Cartesian3 {
    fn mul_assign (&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Cartesian3 {
    type Output = Self;

    fn div (self, rhs: f64) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

impl From<[f64;3]> for Cartesian3 {
    fn from (a: [f64;3]) -> Self { Cartesian3::new( a[0], a[1], a[2]) }
}
