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

use super::rebin;
use super::DECAY_RATE;
use super::SketchConf;
use super::Structure;
use super::Structures;
use crate::cmap::Cmap;
use crate::error::Error;
use crate::hash::xxhash64;
use crate::hcounter::HCounter;
use crate::measure::Measure;
use crate::measure::RealMeasure;
use crate::plot::DensityPlot;
use crate::plot::DensityRecord;
use crate::plot::interpolate_at;

/// Rule deciding when arriving observations trigger a deep update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Narrow updates only; generations rotate on explicit
    /// [`Sketch::deep_update`] or [`Sketch::rearrange`] calls.
    Simple,
    /// Buffer arrivals and deep-update when the queue fills or the arrival
    /// threshold is reached, whichever fires first.
    Periodic {
        /// Pending-queue capacity.
        queue_size: usize,
        /// Arrivals since the last deep update that force the next one.
        start_threshold: usize,
    },
}

/// Adaptive density sketch.
///
/// See the [sketch module level documentation](crate::sketch) for more.
///
/// A sketch is a single-writer value: updates take `&mut self`, reads are
/// `&self`, and a clone is an independent snapshot. Pending observations of
/// the periodic policy are logically part of the young generation; every
/// observation contributes mass to exactly one generation over its lifetime.
#[derive(Debug, Clone)]
pub struct Sketch<M: Measure = RealMeasure> {
    measure: M,
    conf: SketchConf,
    policy: UpdatePolicy,
    structures: Structures,
    // Pending (point, weight) pairs, young-generation evidence until the
    // next deep update drains them into the fresh counter.
    queue: Vec<(f64, f64)>,
    generation: u64,
}

impl Sketch<RealMeasure> {
    /// Creates an empty periodic sketch over plain `f64` observations.
    pub fn empty(conf: SketchConf) -> Result<Self, Error> {
        let policy = UpdatePolicy::Periodic {
            queue_size: conf.queue_size,
            start_threshold: conf.start_threshold,
        };
        Self::with_measure(RealMeasure, conf, policy)
    }

    /// Creates an empty narrow-only sketch over plain `f64` observations.
    pub fn simple(conf: SketchConf) -> Result<Self, Error> {
        Self::with_measure(RealMeasure, conf, UpdatePolicy::Simple)
    }
}

impl<M: Measure> Sketch<M> {
    /// Creates an empty sketch with the given measure and update policy.
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind) when the
    /// configuration does not validate.
    pub fn with_measure(measure: M, conf: SketchConf, policy: UpdatePolicy) -> Result<Self, Error> {
        conf.validate()?;
        let (start, end) = conf.bounds();
        let cmap = Cmap::uniform(conf.cmap_size, start, end);
        let counter = fresh_counter(&conf, 0);
        Ok(Self {
            measure,
            conf,
            policy,
            structures: Structures::init(Structure::new(cmap, counter)),
            queue: Vec::new(),
            generation: 0,
        })
    }

    /// Returns the configuration.
    pub fn conf(&self) -> &SketchConf {
        &self.conf
    }

    /// Returns the measure.
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Returns the update policy.
    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Returns the generation stack.
    pub fn structures(&self) -> &Structures {
        &self.structures
    }

    /// Feeds observations through the update policy.
    pub fn update(&mut self, values: &[M::Value]) {
        for value in values {
            let p = self.measure.to_real(value);
            self.ingest(p, 1.0);
        }
    }

    /// Feeds weighted observations through the update policy.
    pub fn update_weighted(&mut self, obs: &[(M::Value, f64)]) {
        for (value, weight) in obs {
            let p = self.measure.to_real(value);
            self.ingest(p, *weight);
        }
    }

    /// Increments the young counter for the observation, bypassing the
    /// pending queue. The mass ages in place across deep updates.
    pub fn narrow_update(&mut self, value: &M::Value) {
        self.narrow_update_weighted(value, 1.0);
    }

    /// Weighted form of [`Sketch::narrow_update`].
    pub fn narrow_update_weighted(&mut self, value: &M::Value, weight: f64) {
        let p = self.measure.to_real(value);
        if !p.is_finite() || !(weight > 0.0) || !weight.is_finite() {
            return;
        }
        self.narrow_insert(p, weight);
    }

    /// Rebuilds the bin layout from the pending queue plus the given
    /// observations, prepends a fresh generation, and re-inserts the drained
    /// evidence into it.
    ///
    /// Returns the evicted oldest generation once the stack is full.
    pub fn deep_update(&mut self, values: &[M::Value]) -> Option<Structure> {
        let extra: Vec<(f64, f64)> = values
            .iter()
            .map(|value| (self.measure.to_real(value), 1.0))
            .filter(|(p, _)| p.is_finite())
            .collect();
        self.flush_deep(extra)
    }

    /// Deep update with no new observations: a pure refresh that promotes
    /// the current view one generation older. Pending queued observations
    /// are still drained into the fresh young generation.
    pub fn rearrange(&mut self) -> Option<Structure> {
        self.flush_deep(Vec::new())
    }

    /// Estimated observation count inside the closed range `[start, end]`.
    ///
    /// Partial counts of every generation are combined under `exp(-age)`
    /// weighting, with linear interpolation where the range cuts through a
    /// bin. NaN bounds and empty ranges yield 0.
    pub fn count(&self, start: &M::Value, end: &M::Value) -> f64 {
        self.count_prim(self.measure.to_real(start), self.measure.to_real(end))
    }

    /// Estimated total mass observed by the sketch, age-weighted like
    /// [`Sketch::count`].
    pub fn sum(&self) -> f64 {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        let mut weight = 1.0;
        for (age, structure) in self.structures.iter().enumerate() {
            let mut partial = structure.counter().sum();
            if age == 0 {
                partial += self.queue.iter().map(|(_, mass)| mass).sum::<f64>();
            }
            numerator += weight * partial;
            denominator += weight;
            weight *= DECAY_RATE;
        }
        numerator / denominator
    }

    /// Probability of the closed range `[start, end]`.
    ///
    /// An untouched sketch falls back to the flat density over the young
    /// support, so the result is positive and proportional to the range
    /// length even before any evidence arrives.
    pub fn probability(&self, start: &M::Value, end: &M::Value) -> f64 {
        self.probability_prim(self.measure.to_real(start), self.measure.to_real(end))
    }

    /// Per-bin density plot over the young cmap, sentinel tails included.
    pub fn sampling(&self) -> DensityPlot {
        let cmap = self.structures.young().cmap().clone();
        let records = (0..cmap.size())
            .map(|index| {
                let range = cmap.range(index);
                let prob = self.probability_prim(range.start(), range.end());
                let value = if range.is_finite() && !range.is_point() {
                    prob / range.length()
                } else {
                    0.0
                };
                DensityRecord { range, value }
            })
            .collect();
        DensityPlot::new(records)
    }

    /// Alias of [`Sketch::sampling`].
    pub fn density_plot(&self) -> DensityPlot {
        self.sampling()
    }

    /// Density estimate at the observation.
    ///
    /// Fast path over the three-bin neighbourhood of the young bin
    /// containing the point: per-bin densities are interpolated linearly
    /// between bin midpoints, clamping to the nearest finite neighbour at
    /// the extremes. `pdf(NaN)` is NaN.
    pub fn pdf(&self, value: &M::Value) -> f64 {
        let p = self.measure.to_real(value);
        if p.is_nan() {
            return f64::NAN;
        }
        let cmap = self.structures.young().cmap();
        let index = cmap.index_of(p);
        let first = index.saturating_sub(1);
        let last = (index + 1).min(cmap.size() - 1);
        let mut nodes = Vec::with_capacity(3);
        for i in first..=last {
            let range = cmap.range(i);
            if range.is_finite() && !range.is_point() {
                let prob = self.probability_prim(range.start(), range.end());
                nodes.push((range.midpoint(), prob / range.length()));
            }
        }
        interpolate_at(&nodes, p)
    }

    /// Cumulative distribution at the observation: the probability of
    /// `(-inf, p]`. Monotone non-decreasing and within `[0, 1]`.
    pub fn cdf(&self, value: &M::Value) -> f64 {
        let p = self.measure.to_real(value);
        if p.is_nan() {
            return f64::NAN;
        }
        self.probability_prim(f64::NEG_INFINITY, p)
    }

    /// Observation below which the given fraction of the mass lies.
    ///
    /// Inverts the per-bin cumulative mass with linear interpolation inside
    /// the hit bin; ranks landing in a sentinel tail clamp to the support
    /// edge. An untouched sketch inverts the flat density.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is not in `[0, 1]`.
    pub fn quantile(&self, rank: f64) -> M::Value {
        assert!((0.0..=1.0).contains(&rank), "rank must be in [0, 1], got {rank}");
        let cmap = self.structures.young().cmap();
        let min = cmap.min();
        let max = cmap.max();
        if !(self.sum() > 0.0) {
            return self.measure.from_real(min + rank * (max - min));
        }
        let mut cum = self.probability_prim(f64::NEG_INFINITY, min);
        if rank <= cum {
            return self.measure.from_real(min);
        }
        for index in 1..cmap.size() - 1 {
            let range = cmap.range(index);
            let prob = self.probability_prim(range.start(), range.end());
            if prob > 0.0 && cum + prob >= rank {
                let p = range.start() + range.length() * ((rank - cum) / prob);
                return self.measure.from_real(p);
            }
            cum += prob;
        }
        self.measure.from_real(max)
    }

    /// The 0.5 quantile.
    pub fn median(&self) -> M::Value {
        self.quantile(0.5)
    }

    fn ingest(&mut self, p: f64, weight: f64) {
        if !p.is_finite() || !(weight > 0.0) || !weight.is_finite() {
            return;
        }
        match self.policy {
            UpdatePolicy::Simple => self.narrow_insert(p, weight),
            UpdatePolicy::Periodic {
                queue_size,
                start_threshold,
            } => {
                self.queue.push((p, weight));
                // Queue capacity or arrival threshold, whichever is smaller.
                if self.queue.len() >= queue_size.min(start_threshold) {
                    let _ = self.flush_deep(Vec::new());
                }
            }
        }
    }

    fn narrow_insert(&mut self, p: f64, weight: f64) {
        let young = self.structures.young_mut();
        let index = young.cmap().index_of(p);
        young.counter_mut().update(index, weight);
    }

    fn flush_deep(&mut self, extra: Vec<(f64, f64)>) -> Option<Structure> {
        let mut buffered = std::mem::take(&mut self.queue);
        buffered.extend(extra);

        let young_cmap = self.structures.young().cmap().clone();
        let bin_probs: Vec<f64> = (0..young_cmap.size())
            .map(|index| {
                let range = young_cmap.range(index);
                self.probability_prim(range.start(), range.end())
            })
            .collect();
        let prior = rebin::prior_points(&young_cmap, &bin_probs);
        let data = rebin::kernel_points(
            &young_cmap,
            &buffered,
            self.conf.data_kernel_window,
            self.conf.boundary_correction,
        );
        // On no evidence at all, rotate with the layout unchanged.
        let cmap = rebin::quantile_cmap(prior, data, self.conf.cmap_size).unwrap_or(young_cmap);

        self.generation += 1;
        let counter = fresh_counter(&self.conf, self.generation);
        let evicted = self
            .structures
            .prepend(Structure::new(cmap, counter), self.conf.cmap_no);
        for (p, weight) in buffered {
            self.narrow_insert(p, weight);
        }
        evicted
    }

    fn count_prim(&self, lo: f64, hi: f64) -> f64 {
        if !(lo < hi) {
            return 0.0;
        }
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        let mut weight = 1.0;
        for (age, structure) in self.structures.iter().enumerate() {
            let cmap = structure.cmap();
            let mut partial = 0.0;
            for index in cmap.index_of(lo)..=cmap.index_of(hi) {
                let fraction = cmap.range(index).overlap_fraction(lo, hi);
                if fraction > 0.0 {
                    partial += fraction * structure.counter().count(index);
                }
            }
            if age == 0 {
                for (p, mass) in self.queue.iter() {
                    if lo <= *p && *p <= hi {
                        partial += mass;
                    }
                }
            }
            numerator += weight * partial;
            denominator += weight;
            weight *= DECAY_RATE;
        }
        numerator / denominator
    }

    fn probability_prim(&self, lo: f64, hi: f64) -> f64 {
        let total = self.sum();
        if total > 0.0 {
            (self.count_prim(lo, hi) / total).clamp(0.0, 1.0)
        } else {
            self.flat_probability(lo, hi)
        }
    }

    // Non-informative prior: uniform density over the young support.
    fn flat_probability(&self, lo: f64, hi: f64) -> f64 {
        if lo.is_nan() || hi.is_nan() {
            return 0.0;
        }
        let cmap = self.structures.young().cmap();
        let min = cmap.min();
        let max = cmap.max();
        if !(max > min) {
            return 0.0;
        }
        let left = lo.max(min);
        let right = hi.min(max);
        if right <= left {
            return 0.0;
        }
        (right - left) / (max - min)
    }
}

fn fresh_counter(conf: &SketchConf, generation: u64) -> HCounter {
    HCounter::for_bins(
        conf.cmap_size,
        conf.counter_size,
        conf.counter_no,
        xxhash64(conf.seed, generation),
    )
}
