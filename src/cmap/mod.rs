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

//! Cumulative map: the ordered bin partition of the real line.
//!
//! A [`Cmap`] of size `n` covers the whole line with `n` bins: `n - 2`
//! finite bins over the current support plus two half-infinite sentinel bins
//! at each end. Lookup from a point to its bin index is a binary search over
//! the `n - 1` dividers; bins are half-open on the right.
//!
//! # Usage
//!
//! ```rust
//! use adasketch::cmap::Cmap;
//!
//! let cmap = Cmap::uniform(10, 0.0, 10.0);
//! assert_eq!(cmap.size(), 10);
//! assert_eq!(cmap.index_of(-5.0), 0);
//! assert_eq!(cmap.index_of(100.0), 9);
//! assert!(cmap.range(cmap.index_of(3.3)).contains(3.3));
//! ```

mod map;
mod range;

pub use self::map::Cmap;
pub use self::range::RangeP;
