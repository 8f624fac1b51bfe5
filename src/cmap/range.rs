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

/// Half-open real interval `[start, end)`, possibly unbounded on either side.
///
/// A range with `start == end` is a point range. Sentinel bins of a cmap use
/// `-inf` and `+inf` endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeP {
    start: f64,
    end: f64,
}

impl RangeP {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is NaN or `start > end`.
    pub fn new(start: f64, end: f64) -> Self {
        assert!(!start.is_nan() && !end.is_nan(), "range endpoints must not be NaN");
        assert!(start <= end, "range start must not exceed end, got [{start}, {end})");
        Self { start, end }
    }

    /// Creates a point range.
    pub fn point(p: f64) -> Self {
        Self::new(p, p)
    }

    /// Returns the left endpoint.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the right endpoint.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`; infinite for sentinel ranges.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if both endpoints are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Returns true if the range has zero length.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns the midpoint; meaningful only for finite ranges.
    pub fn midpoint(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    /// Returns true if `p` falls in `[start, end)`, or equals the endpoint of
    /// a point range.
    ///
    /// A range unbounded above is closed on the right, so it contains
    /// `+inf`; every other range stays half-open.
    pub fn contains(&self, p: f64) -> bool {
        if self.is_point() {
            return p == self.start;
        }
        if p == f64::INFINITY {
            return self.end == f64::INFINITY;
        }
        self.start <= p && p < self.end
    }

    /// Returns the fraction of this range covered by the closed query
    /// interval `[lo, hi]`.
    ///
    /// Finite ranges interpolate linearly at the query edges. A range of
    /// infinite length contributes fully when it lies inside the query and
    /// nothing on partial overlap; a point range contributes fully when the
    /// query contains it.
    pub fn overlap_fraction(&self, lo: f64, hi: f64) -> f64 {
        if lo.is_nan() || hi.is_nan() || hi < lo {
            return 0.0;
        }
        if self.is_point() {
            return if lo <= self.start && self.start <= hi { 1.0 } else { 0.0 };
        }
        if !self.is_finite() {
            return if lo <= self.start && self.end <= hi { 1.0 } else { 0.0 };
        }
        let left = lo.max(self.start);
        let right = hi.min(self.end);
        if right <= left {
            return 0.0;
        }
        ((right - left) / self.length()).clamp(0.0, 1.0)
    }
}
