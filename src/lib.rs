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

//! Adaptive streaming sketch for non-parametric density estimation.
//!
//! The sketch ingests an unbounded stream of real-valued observations and
//! answers `count`, `probability`, `pdf`, `cdf`, and quantile queries at any
//! point, using bounded memory. Unlike a fixed-bin histogram it continuously
//! re-chooses its quantization boundaries from recent evidence, so regions of
//! high sample density receive finer resolution without prior knowledge of
//! the input distribution.
//!
//! Three subsystems cooperate:
//!
//! - [`cmap`]: an ordered partition of the real line into variable-width
//!   bins, rebuilt from the empirical CDF on every deep update.
//! - [`hcounter`]: a hashed multi-row count-min counter over bin indices
//!   with conservative-update semantics.
//! - [`sketch`]: a bounded stack of `(Cmap, HCounter)` generations with
//!   exponential age weighting, plus the update policy and all queries.
//!
//! # Usage
//!
//! ```rust
//! use adasketch::sketch::Sketch;
//! use adasketch::sketch::SketchConf;
//!
//! let conf = SketchConf {
//!     cmap_size: 10,
//!     cmap_start: Some(0.0),
//!     cmap_end: Some(10.0),
//!     counter_size: 100,
//!     ..SketchConf::default()
//! };
//! let mut sketch = Sketch::empty(conf).unwrap();
//! sketch.update(&[1.0, 2.0, 2.5, 3.0]);
//! assert!(sketch.probability(&0.0, &5.0) > 0.9);
//! assert_eq!(sketch.density_plot().records().len(), 10);
//! ```

pub mod cmap;
pub mod error;
mod hash;
pub mod hcounter;
pub mod measure;
pub mod plot;
pub mod sketch;
