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

//! Adaptive sketch over a generational structure stack.
//!
//! A [`Sketch`] keeps a bounded FIFO of `(Cmap, HCounter)` generations,
//! youngest at the head. Narrow updates increment the young counter in
//! place; a deep update rebuilds the bin layout from recent evidence,
//! prepends a fresh generation, and evicts the oldest once the stack is
//! full. Reads weight generation `k` by `exp(-k)`, so old evidence decays
//! smoothly instead of being dropped at a cliff.
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
//! sketch.update(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert!((sketch.sum() - 5.0).abs() < 0.5);
//!
//! let evicted = sketch.rearrange();
//! assert!(evicted.is_none());
//! assert_eq!(sketch.structures().len(), 2);
//! ```

mod conf;
mod rebin;
#[allow(clippy::module_inception)]
mod sketch;
mod structure;

pub use self::conf::SketchConf;
pub use self::sketch::Sketch;
pub use self::sketch::UpdatePolicy;
pub use self::structure::Structure;
pub use self::structure::Structures;

/// Default number of bins per generation.
pub const DEFAULT_CMAP_SIZE: usize = 20;
/// Default number of retained generations.
pub const DEFAULT_CMAP_NO: usize = 2;
/// Default lower bound of the initial uniform cmap.
pub const DEFAULT_CMAP_START: f64 = -1000.0;
/// Default upper bound of the initial uniform cmap.
pub const DEFAULT_CMAP_END: f64 = 1000.0;
/// Default counter width.
pub const DEFAULT_COUNTER_SIZE: usize = 70;
/// Default counter depth.
pub const DEFAULT_COUNTER_NO: usize = 2;
/// Default pending-queue capacity.
pub const DEFAULT_QUEUE_SIZE: usize = 50;
/// Default arrival count that forces a deep update.
pub const DEFAULT_START_THRESHOLD: usize = 100;
/// Default rebinning kernel window, as a ratio of the local bin width.
pub const DEFAULT_DATA_KERNEL_WINDOW: f64 = 0.1;

/// Weight ratio between adjacent generations, young to old.
pub const DECAY_RATE: f64 = 1.0 / std::f64::consts::E;
