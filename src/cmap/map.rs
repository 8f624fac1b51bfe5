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

use crate::cmap::RangeP;
use crate::error::Error;
use crate::error::ErrorKind;

/// Ordered partition of the real line into variable-width bins.
///
/// A cmap of size `n` stores `n - 1` strictly increasing finite dividers
/// `d_0 < d_1 < … < d_{n-2}`. Bin 0 is the sentinel `(-inf, d_0)`, bin `k`
/// for `0 < k < n - 1` is `[d_{k-1}, d_k)`, and bin `n - 1` is the sentinel
/// `[d_{n-2}, +inf)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cmap {
    divider: Vec<f64>,
}

impl Cmap {
    /// Creates a cmap from a divider list.
    ///
    /// Returns [`ErrorKind::MalformedCmap`] if the list is empty, contains a
    /// non-finite value, or is not strictly increasing.
    pub fn new(divider: Vec<f64>) -> Result<Self, Error> {
        if divider.is_empty() {
            return Err(Error::new(
                ErrorKind::MalformedCmap,
                "divider list must not be empty",
            ));
        }
        for (i, d) in divider.iter().enumerate() {
            if !d.is_finite() {
                return Err(Error::new(ErrorKind::MalformedCmap, "divider must be finite")
                    .with_field("index", i)
                    .with_field("divider", d));
            }
            if i > 0 && divider[i - 1] >= *d {
                return Err(Error::new(
                    ErrorKind::MalformedCmap,
                    "dividers must be strictly increasing",
                )
                .with_field("index", i)
                .with_field("previous", divider[i - 1])
                .with_field("divider", d));
            }
        }
        Ok(Self { divider })
    }

    /// Creates the uniform cmap of the given size whose finite bins split
    /// `[start, end]` into equal widths.
    ///
    /// A size of 2 yields only the two sentinel bins split at the midpoint of
    /// `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`, the bounds are not finite, or `start >= end`.
    pub fn uniform(size: usize, start: f64, end: f64) -> Self {
        assert!(size >= 2, "cmap size must be at least 2, got {size}");
        assert!(
            start.is_finite() && end.is_finite(),
            "cmap bounds must be finite, got [{start}, {end}]"
        );
        assert!(start < end, "cmap start must be less than end, got [{start}, {end}]");

        if size == 2 {
            return Self {
                divider: vec![start + (end - start) / 2.0],
            };
        }

        let pieces = size - 2;
        let width = (end - start) / pieces as f64;
        let mut divider = Vec::with_capacity(size - 1);
        divider.push(start);
        for i in 1..pieces {
            divider.push(start + width * i as f64);
        }
        divider.push(end);
        Self { divider }
    }

    /// Returns the total number of bins, sentinels included.
    pub fn size(&self) -> usize {
        self.divider.len() + 1
    }

    /// Returns the index of the bin containing `p`.
    ///
    /// The result is monotone non-decreasing in `p`; NaN maps to bin 0.
    pub fn index_of(&self, p: f64) -> usize {
        self.divider.partition_point(|d| *d <= p)
    }

    /// Returns the bin at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn range(&self, index: usize) -> RangeP {
        assert!(index < self.size(), "bin index {index} out of bounds for size {}", self.size());
        let start = if index == 0 {
            f64::NEG_INFINITY
        } else {
            self.divider[index - 1]
        };
        let end = if index == self.divider.len() {
            f64::INFINITY
        } else {
            self.divider[index]
        };
        RangeP::new(start, end)
    }

    /// Returns every bin in ascending order, sentinels included.
    pub fn bins(&self) -> Vec<RangeP> {
        (0..self.size()).map(|i| self.range(i)).collect()
    }

    /// Returns the lower edge of the finite support.
    pub fn min(&self) -> f64 {
        self.divider[0]
    }

    /// Returns the upper edge of the finite support.
    pub fn max(&self) -> f64 {
        self.divider[self.divider.len() - 1]
    }

    /// Returns the divider list.
    pub fn dividers(&self) -> &[f64] {
        &self.divider
    }

    /// Returns the mean finite bin width, or the full support width when the
    /// cmap has no finite bins.
    pub(crate) fn mean_width(&self) -> f64 {
        let span = self.max() - self.min();
        if self.size() > 2 {
            span / (self.size() - 2) as f64
        } else if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Returns the width of the finite bin containing `p`, falling back to
    /// the nearest finite bin for points in the sentinel tails.
    pub(crate) fn width_at(&self, p: f64) -> f64 {
        if self.size() == 2 {
            return self.mean_width();
        }
        let index = self.index_of(p).clamp(1, self.size() - 2);
        self.range(index).length()
    }
}
