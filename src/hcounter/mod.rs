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

//! Hashed multi-row counter over bin indices.
//!
//! An [`HCounter`] is a count-min matrix specialized to the dense, bounded
//! key space of cmap bin indices. When the bin count fits the configured
//! width the counter degrades to a single exact row with identity bucketing;
//! otherwise it hashes indices into `depth` independently seeded rows and
//! answers point queries with the row minimum. Updates are conservative:
//! only cells below the new point estimate are raised.
//!
//! # Usage
//!
//! ```rust
//! use adasketch::hcounter::HCounter;
//!
//! let mut counter = HCounter::uncompressed(16);
//! counter.update(3, 2.0);
//! counter.update(3, 1.0);
//! assert_eq!(counter.count(3), 3.0);
//! assert_eq!(counter.sum(), 3.0);
//! ```

mod counter;

pub use self::counter::HCounter;
