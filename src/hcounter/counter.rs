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

use crate::hash::xxhash64;

/// Count-min matrix over bin indices with conservative updates.
///
/// See the [hcounter module level documentation](crate::hcounter) for more.
#[derive(Debug, Clone, PartialEq)]
pub struct HCounter {
    width: usize,
    rows: Vec<Vec<f64>>,
    // One derived seed per row; empty means identity bucketing.
    seeds: Vec<u64>,
}

impl HCounter {
    /// Creates an exact single-row counter with identity bucketing.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0.
    pub fn uncompressed(width: usize) -> Self {
        assert!(width > 0, "counter width must be at least 1");
        Self {
            width,
            rows: vec![vec![0.0; width]],
            seeds: Vec::new(),
        }
    }

    /// Creates a hashed counter of the given depth and width.
    ///
    /// Row seeds are derived deterministically from `seed`, so counters built
    /// with the same seed bucket identically.
    ///
    /// # Panics
    ///
    /// Panics if `depth` or `width` is 0.
    pub fn compressed(depth: usize, width: usize, seed: u64) -> Self {
        assert!(depth > 0, "counter depth must be at least 1");
        assert!(width > 0, "counter width must be at least 1");
        let seeds = (0..depth).map(|row| xxhash64(seed, row as u64)).collect();
        Self {
            width,
            rows: vec![vec![0.0; width]; depth],
            seeds,
        }
    }

    /// Creates the counter appropriate for a bin space of `bins` indices:
    /// exact when the bins fit `width`, hashed otherwise.
    ///
    /// # Panics
    ///
    /// Panics if any argument is 0.
    pub fn for_bins(bins: usize, width: usize, depth: usize, seed: u64) -> Self {
        assert!(bins > 0, "bin count must be at least 1");
        if bins <= width {
            Self::uncompressed(bins)
        } else {
            Self::compressed(depth, width, seed)
        }
    }

    /// Returns the number of rows.
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if indices are hashed rather than bucketed identically.
    pub fn is_compressed(&self) -> bool {
        !self.seeds.is_empty()
    }

    /// Adds `delta` to the cells for `index`, conservatively.
    ///
    /// Every row cell is raised at most to the previous point estimate plus
    /// `delta`; cells already above that stay untouched. Non-positive or NaN
    /// deltas are ignored, so cells never go negative.
    pub fn update(&mut self, index: usize, delta: f64) {
        if !(delta > 0.0) || !delta.is_finite() {
            return;
        }
        let target = self.count(index) + delta;
        for row in 0..self.rows.len() {
            let bucket = self.bucket(row, index);
            let cell = &mut self.rows[row][bucket];
            if *cell < target {
                *cell = target;
            }
        }
    }

    /// Returns the point estimate for `index`: the minimum over rows.
    pub fn count(&self, index: usize) -> f64 {
        let mut min = f64::INFINITY;
        for row in 0..self.rows.len() {
            let value = self.rows[row][self.bucket(row, index)];
            if value < min {
                min = value;
            }
        }
        min
    }

    /// Returns the estimated total mass.
    ///
    /// The uncompressed row sum is exact. For compressed counters the minimum
    /// row sum is used, which under conservative updates never overestimates.
    pub fn sum(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.iter().sum::<f64>())
            .fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every cell by the decay factor `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is not in `[0, 1]`.
    pub fn scale(&mut self, r: f64) {
        assert!((0.0..=1.0).contains(&r), "scale factor must be in [0, 1], got {r}");
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= r;
            }
        }
    }

    fn bucket(&self, row: usize, index: usize) -> usize {
        if self.seeds.is_empty() {
            assert!(index < self.width, "index {index} out of bounds for exact counter width {}", self.width);
            index
        } else {
            (xxhash64(self.seeds[row], index as u64) % self.width as u64) as usize
        }
    }
}
