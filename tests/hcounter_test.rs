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

use adasketch::hcounter::HCounter;
use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::le;

#[test]
fn test_uncompressed_is_exact() {
    let mut counter = HCounter::uncompressed(10);
    assert_eq!(counter.depth(), 1);
    assert_eq!(counter.width(), 10);
    assert!(!counter.is_compressed());

    counter.update(3, 2.0);
    counter.update(3, 1.5);
    counter.update(7, 4.0);
    assert_eq!(counter.count(3), 3.5);
    assert_eq!(counter.count(7), 4.0);
    assert_eq!(counter.count(0), 0.0);
    assert_eq!(counter.sum(), 7.5);
}

#[test]
fn test_conservative_update_stays_exact_on_one_index() {
    let mut counter = HCounter::compressed(4, 32, 9);
    for _ in 0..300 {
        counter.update(5, 1.0);
    }
    assert_eq!(counter.count(5), 300.0);
}

#[test]
fn test_mode_selection() {
    let exact = HCounter::for_bins(10, 100, 3, 1);
    assert!(!exact.is_compressed());
    assert_eq!(exact.width(), 10);
    assert_eq!(exact.depth(), 1);

    let hashed = HCounter::for_bins(100, 16, 3, 1);
    assert!(hashed.is_compressed());
    assert_eq!(hashed.width(), 16);
    assert_eq!(hashed.depth(), 3);
}

#[test]
fn test_compressed_bounds() {
    let mut counter = HCounter::compressed(3, 16, 42);
    for index in 0..50 {
        counter.update(index, 1.0);
    }
    // Point queries never underestimate; the sum never overestimates.
    for index in 0..50 {
        assert_that!(counter.count(index), ge(1.0));
    }
    assert_that!(counter.sum(), le(50.0 + 1e-9));
    assert_that!(counter.sum(), ge(1.0));
}

#[test]
fn test_scale_decays_counts() {
    let mut counter = HCounter::uncompressed(8);
    counter.update(2, 10.0);
    counter.scale(0.5);
    assert_eq!(counter.count(2), 5.0);
    assert_eq!(counter.sum(), 5.0);
    counter.scale(0.0);
    assert_eq!(counter.count(2), 0.0);
    assert_eq!(counter.sum(), 0.0);
}

#[test]
fn test_degenerate_deltas_ignored() {
    let mut counter = HCounter::uncompressed(4);
    counter.update(1, 0.0);
    counter.update(1, -3.0);
    counter.update(1, f64::NAN);
    counter.update(1, f64::INFINITY);
    assert_eq!(counter.count(1), 0.0);
    assert_eq!(counter.sum(), 0.0);
}

#[test]
fn test_same_seed_same_buckets() {
    let mut left = HCounter::compressed(4, 32, 7);
    let mut right = HCounter::compressed(4, 32, 7);
    for i in 0..200 {
        left.update(i % 64, 1.0);
        right.update(i % 64, 1.0);
    }
    for index in 0..64 {
        assert_eq!(left.count(index), right.count(index));
    }
    assert_eq!(left.sum(), right.sum());
}

#[test]
#[should_panic(expected = "out of bounds for exact counter")]
fn test_exact_counter_index_out_of_bounds() {
    let counter = HCounter::uncompressed(4);
    counter.count(9);
}

#[test]
#[should_panic(expected = "scale factor must be in [0, 1]")]
fn test_scale_factor_out_of_range() {
    let mut counter = HCounter::uncompressed(4);
    counter.scale(1.5);
}

#[test]
#[should_panic(expected = "counter width must be at least 1")]
fn test_zero_width() {
    HCounter::uncompressed(0);
}

#[test]
#[should_panic(expected = "counter depth must be at least 1")]
fn test_zero_depth() {
    HCounter::compressed(0, 16, 1);
}
