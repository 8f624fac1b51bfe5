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

use crate::error::Error;
use crate::error::ErrorKind;
use crate::sketch::DEFAULT_CMAP_END;
use crate::sketch::DEFAULT_CMAP_NO;
use crate::sketch::DEFAULT_CMAP_SIZE;
use crate::sketch::DEFAULT_CMAP_START;
use crate::sketch::DEFAULT_COUNTER_NO;
use crate::sketch::DEFAULT_COUNTER_SIZE;
use crate::sketch::DEFAULT_DATA_KERNEL_WINDOW;
use crate::sketch::DEFAULT_QUEUE_SIZE;
use crate::sketch::DEFAULT_START_THRESHOLD;

/// Sketch configuration.
///
/// Validated once at sketch construction; every field has a usable default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchConf {
    /// Bins per generation, sentinel tails included. At least 2.
    pub cmap_size: usize,
    /// Generations retained. At least 1.
    pub cmap_no: usize,
    /// Lower bound of the initial uniform cmap; defaults when absent.
    pub cmap_start: Option<f64>,
    /// Upper bound of the initial uniform cmap; defaults when absent.
    pub cmap_end: Option<f64>,
    /// Counter width. At least 1.
    pub counter_size: usize,
    /// Counter depth for compressed counters. At least 1.
    pub counter_no: usize,
    /// Pending-queue capacity of the periodic policy. At least 1.
    pub queue_size: usize,
    /// Arrivals since the last deep update that force the next one. At
    /// least 1.
    pub start_threshold: usize,
    /// Rebinning smoothing window as a ratio of the local bin width.
    /// Positive and finite.
    pub data_kernel_window: f64,
    /// Mirror-reflect kernel mass spilling outside the cmap support.
    pub boundary_correction: bool,
    /// Sketch-wide seed from which per-generation counter hashes derive.
    pub seed: u64,
}

impl Default for SketchConf {
    fn default() -> Self {
        Self {
            cmap_size: DEFAULT_CMAP_SIZE,
            cmap_no: DEFAULT_CMAP_NO,
            cmap_start: None,
            cmap_end: None,
            counter_size: DEFAULT_COUNTER_SIZE,
            counter_no: DEFAULT_COUNTER_NO,
            queue_size: DEFAULT_QUEUE_SIZE,
            start_threshold: DEFAULT_START_THRESHOLD,
            data_kernel_window: DEFAULT_DATA_KERNEL_WINDOW,
            boundary_correction: true,
            seed: 0,
        }
    }
}

impl SketchConf {
    /// Checks every field, returning [`ErrorKind::ConfigInvalid`] with the
    /// offending field in the error context.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cmap_size < 2 {
            return Err(invalid("cmap_size must be at least 2", "cmap_size", self.cmap_size));
        }
        if self.cmap_no < 1 {
            return Err(invalid("cmap_no must be at least 1", "cmap_no", self.cmap_no));
        }
        if self.counter_size < 1 {
            return Err(invalid(
                "counter_size must be at least 1",
                "counter_size",
                self.counter_size,
            ));
        }
        if self.counter_no < 1 {
            return Err(invalid("counter_no must be at least 1", "counter_no", self.counter_no));
        }
        if self.queue_size < 1 {
            return Err(invalid("queue_size must be at least 1", "queue_size", self.queue_size));
        }
        if self.start_threshold < 1 {
            return Err(invalid(
                "start_threshold must be at least 1",
                "start_threshold",
                self.start_threshold,
            ));
        }
        if !(self.data_kernel_window > 0.0) || !self.data_kernel_window.is_finite() {
            return Err(invalid(
                "data_kernel_window must be positive and finite",
                "data_kernel_window",
                self.data_kernel_window,
            ));
        }
        let (start, end) = self.bounds();
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "cmap bounds must be finite with start < end",
            )
            .with_field("cmap_start", start)
            .with_field("cmap_end", end));
        }
        Ok(())
    }

    /// Returns the initial cmap bounds with defaults applied.
    pub(crate) fn bounds(&self) -> (f64, f64) {
        (
            self.cmap_start.unwrap_or(DEFAULT_CMAP_START),
            self.cmap_end.unwrap_or(DEFAULT_CMAP_END),
        )
    }
}

fn invalid(message: &'static str, field: &'static str, value: impl ToString) -> Error {
    Error::new(ErrorKind::ConfigInvalid, message).with_field(field, value)
}
