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

//! Equal-space CDF rebinning.
//!
//! A deep update replaces the bin layout with one whose bins carry equal
//! mass under the combined evidence: the sketch's own per-bin probabilities
//! (the prior) mixed with the kernel-smeared pending observations (the new
//! evidence). Both sides reduce to weighted mass points on the line; the new
//! dividers are the interpolated quantiles of that point set at positions
//! `k / size`.

use crate::cmap::Cmap;
use crate::sketch::DECAY_RATE;

/// Mixing weight of new evidence against the prior, derived from the
/// generation decay: fresh and once-aged evidence relate as `1 : e^-1`.
pub(crate) const EVIDENCE_WEIGHT: f64 = 1.0 / (1.0 + DECAY_RATE);

/// A point mass on the real line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MassPoint {
    pub pos: f64,
    pub mass: f64,
}

/// Reduces per-bin probabilities of `cmap` to prior mass points.
///
/// Finite bins anchor at their midpoint. Tail mass is re-anchored half a
/// mean bin width outside the support, so persistent tail evidence pulls the
/// next layout outward.
pub(crate) fn prior_points(cmap: &Cmap, bin_probs: &[f64]) -> Vec<MassPoint> {
    let half = cmap.mean_width() / 2.0;
    let last = cmap.size() - 1;
    let mut points = Vec::with_capacity(bin_probs.len());
    for (index, prob) in bin_probs.iter().enumerate() {
        if !(*prob > 0.0) || !prob.is_finite() {
            continue;
        }
        let pos = if index == 0 {
            cmap.min() - half
        } else if index == last {
            cmap.max() + half
        } else {
            cmap.range(index).midpoint()
        };
        points.push(MassPoint { pos, mass: *prob });
    }
    points
}

/// Smears observations into kernel mass points.
///
/// Each observation spreads over a triangular window of width
/// `window * local bin width`, approximated by three mass points. With
/// `correction` set, spread points of in-support observations that spill
/// outside `[cmap.min, cmap.max]` are mirror-reflected back inside;
/// observations landing outside the support keep their raw points so the
/// support can grow toward them.
pub(crate) fn kernel_points(
    cmap: &Cmap,
    obs: &[(f64, f64)],
    window: f64,
    correction: bool,
) -> Vec<MassPoint> {
    let min = cmap.min();
    let max = cmap.max();
    let mut points = Vec::with_capacity(obs.len() * 3);
    for (p, weight) in obs {
        if !p.is_finite() || !(*weight > 0.0) || !weight.is_finite() {
            continue;
        }
        let half = window * cmap.width_at(*p) / 2.0;
        let in_support = min <= *p && *p <= max;
        let spread = [
            (*p - half, weight * 0.25),
            (*p, weight * 0.5),
            (*p + half, weight * 0.25),
        ];
        for (pos, mass) in spread {
            let pos = if correction && in_support {
                reflect(pos, min, max)
            } else {
                pos
            };
            if pos.is_finite() {
                points.push(MassPoint { pos, mass });
            }
        }
    }
    points
}

/// Builds a cmap of the given size whose dividers sit at the quantiles of
/// the mixed prior and data mass.
///
/// Returns `None` when neither side carries mass; the caller keeps the old
/// layout in that case.
pub(crate) fn quantile_cmap(
    prior: Vec<MassPoint>,
    data: Vec<MassPoint>,
    size: usize,
) -> Option<Cmap> {
    let prior_total: f64 = prior.iter().map(|mp| mp.mass).sum();
    let data_total: f64 = data.iter().map(|mp| mp.mass).sum();

    let mut points: Vec<MassPoint> = Vec::with_capacity(prior.len() + data.len());
    if prior_total > 0.0 && data_total > 0.0 {
        scale_into(&mut points, prior, (1.0 - EVIDENCE_WEIGHT) / prior_total);
        scale_into(&mut points, data, EVIDENCE_WEIGHT / data_total);
    } else if prior_total > 0.0 {
        scale_into(&mut points, prior, 1.0 / prior_total);
    } else if data_total > 0.0 {
        scale_into(&mut points, data, 1.0 / data_total);
    } else {
        return None;
    }

    points.sort_by(|a, b| a.pos.total_cmp(&b.pos));
    let merged = merge_equal(points);
    let total: f64 = merged.iter().map(|mp| mp.mass).sum();
    if !(total > 0.0) {
        return None;
    }

    let mut dividers = Vec::with_capacity(size - 1);
    let mut cum_before = 0.0;
    let mut j = 0;
    for k in 1..size {
        let target = total * k as f64 / size as f64;
        while j < merged.len() && cum_before + merged[j].mass < target {
            cum_before += merged[j].mass;
            j += 1;
        }
        let divider = if j >= merged.len() {
            merged[merged.len() - 1].pos
        } else if j == 0 {
            merged[0].pos
        } else {
            let left = merged[j - 1].pos;
            let right = merged[j].pos;
            left + (right - left) * ((target - cum_before) / merged[j].mass)
        };
        dividers.push(divider);
    }

    enforce_increasing(&mut dividers);
    Cmap::new(dividers).ok()
}

fn scale_into(points: &mut Vec<MassPoint>, side: Vec<MassPoint>, factor: f64) {
    points.extend(side.into_iter().map(|mp| MassPoint {
        pos: mp.pos,
        mass: mp.mass * factor,
    }));
}

fn merge_equal(points: Vec<MassPoint>) -> Vec<MassPoint> {
    let mut merged: Vec<MassPoint> = Vec::with_capacity(points.len());
    for point in points {
        match merged.last_mut() {
            Some(last) if last.pos == point.pos => last.mass += point.mass,
            _ => merged.push(point),
        }
    }
    merged
}

fn reflect(pos: f64, min: f64, max: f64) -> f64 {
    if pos < min {
        (2.0 * min - pos).min(max)
    } else if pos > max {
        (2.0 * max - pos).max(min)
    } else {
        pos
    }
}

/// Nudges repeated quantiles apart so the divider list is strictly
/// increasing; repeated CDF values otherwise collapse adjacent dividers.
fn enforce_increasing(dividers: &mut [f64]) {
    if dividers.is_empty() {
        return;
    }
    let span = dividers[dividers.len() - 1] - dividers[0];
    let step = if span > 0.0 {
        span * 1e-9
    } else {
        dividers[0].abs().max(1.0) * 1e-9
    };
    for i in 1..dividers.len() {
        if dividers[i] <= dividers[i - 1] {
            dividers[i] = dividers[i - 1] + step;
        }
    }
}
