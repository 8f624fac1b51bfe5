// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Measure capability mapping observed values onto the real line.
//!
//! A sketch quantizes and counts in real space; the measure is the bijection
//! between the caller's value type and that space. For plain `f64` streams
//! [`RealMeasure`] is the identity.

/// Invertible map between a value type and the real line.
///
/// Implementations must be consistent: `from_real(to_real(a))` returns a
/// value equivalent to `a`, and `to_real` must be monotone so that range
/// queries keep their meaning.
pub trait Measure {
    /// The value type observed by the sketch.
    type Value;

    /// Maps a value onto the real line.
    fn to_real(&self, value: &Self::Value) -> f64;

    /// Maps a point on the real line back to a value.
    fn from_real(&self, p: f64) -> Self::Value;
}

/// Identity measure for `f64` observations.
///
/// # Examples
///
/// ```
/// use adasketch::measure::Measure;
/// use adasketch::measure::RealMeasure;
///
/// let measure = RealMeasure;
/// assert_eq!(measure.to_real(&1.5), 1.5);
/// assert_eq!(measure.from_real(-3.0), -3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealMeasure;

impl Measure for RealMeasure {
    type Value = f64;

    fn to_real(&self, value: &f64) -> f64 {
        *value
    }

    fn from_real(&self, p: f64) -> f64 {
        p
    }
}
