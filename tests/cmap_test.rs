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

use adasketch::cmap::Cmap;
use adasketch::cmap::RangeP;
use adasketch::error::ErrorKind;

#[test]
fn test_uniform_layout() {
    let cmap = Cmap::uniform(10, 0.0, 10.0);
    assert_eq!(cmap.size(), 10);
    assert_eq!(cmap.dividers().len(), 9);
    assert_eq!(cmap.min(), 0.0);
    assert_eq!(cmap.max(), 10.0);

    let bins = cmap.bins();
    assert_eq!(bins.len(), 10);
    assert_eq!(bins[0].start(), f64::NEG_INFINITY);
    assert_eq!(bins[0].end(), 0.0);
    assert_eq!(bins[9].start(), 10.0);
    assert_eq!(bins[9].end(), f64::INFINITY);

    // Finite bins have equal width.
    for bin in &bins[1..9] {
        assert!((bin.length() - 1.25).abs() < 1e-12);
    }
}

#[test]
fn test_uniform_minimal_size() {
    let cmap = Cmap::uniform(2, 0.0, 10.0);
    assert_eq!(cmap.size(), 2);
    assert_eq!(cmap.dividers(), &[5.0]);
}

#[test]
fn test_index_sentinels() {
    let cmap = Cmap::uniform(10, 0.0, 10.0);
    assert_eq!(cmap.index_of(-5.0), 0);
    assert_eq!(cmap.index_of(-1e300), 0);
    assert_eq!(cmap.index_of(10.0), 9);
    assert_eq!(cmap.index_of(1e300), 9);
    assert_eq!(cmap.index_of(f64::NEG_INFINITY), 0);
    assert_eq!(cmap.index_of(f64::INFINITY), 9);
}

#[test]
fn test_index_monotone_and_consistent() {
    let cmap = Cmap::uniform(12, -3.0, 3.0);
    let mut previous = 0;
    let mut p = -5.0;
    while p <= 5.0 {
        let index = cmap.index_of(p);
        assert!(index >= previous, "index must be monotone in p");
        assert!(cmap.range(index).contains(p), "range({index}) must contain {p}");
        previous = index;
        p += 0.01;
    }
}

#[test]
fn test_half_open_ties() {
    let cmap = Cmap::uniform(10, 0.0, 10.0);
    // A point exactly on a divider belongs to the bin on its right.
    let index = cmap.index_of(1.25);
    assert_eq!(cmap.range(index).start(), 1.25);
}

#[test]
fn test_lookup_consistent_at_infinities() {
    let cmap = Cmap::uniform(10, 0.0, 10.0);
    // The top bin is closed on the right at +inf; lookup and reverse lookup
    // must agree at both edges of the line.
    assert!(cmap.range(cmap.index_of(f64::INFINITY)).contains(f64::INFINITY));
    assert!(cmap.range(cmap.index_of(f64::NEG_INFINITY)).contains(f64::NEG_INFINITY));

    let top = cmap.range(cmap.size() - 1);
    assert!(top.contains(f64::INFINITY));
    let interior = cmap.range(3);
    assert!(!interior.contains(f64::INFINITY));
}

#[test]
fn test_adjacent_ranges_share_edges() {
    let cmap = Cmap::uniform(8, -1.0, 1.0);
    for i in 0..cmap.size() - 1 {
        assert_eq!(cmap.range(i).end(), cmap.range(i + 1).start());
    }
}

#[test]
fn test_new_validates_dividers() {
    assert!(Cmap::new(vec![0.0, 1.0, 4.5]).is_ok());

    let err = Cmap::new(Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCmap);

    let err = Cmap::new(vec![0.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCmap);

    let err = Cmap::new(vec![2.0, 1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCmap);

    let err = Cmap::new(vec![0.0, f64::NAN]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCmap);

    let err = Cmap::new(vec![0.0, f64::INFINITY]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCmap);
}

#[test]
fn test_point_range() {
    let range = RangeP::point(2.0);
    assert!(range.is_point());
    assert_eq!(range.length(), 0.0);
    assert!(range.contains(2.0));
    assert!(!range.contains(2.1));
    assert_eq!(range.overlap_fraction(1.0, 3.0), 1.0);
    assert_eq!(range.overlap_fraction(3.0, 4.0), 0.0);
}

#[test]
fn test_overlap_fraction() {
    let range = RangeP::new(0.0, 4.0);
    assert_eq!(range.overlap_fraction(1.0, 3.0), 0.5);
    assert_eq!(range.overlap_fraction(-10.0, 10.0), 1.0);
    assert_eq!(range.overlap_fraction(4.0, 8.0), 0.0);
    assert_eq!(range.overlap_fraction(f64::NAN, 8.0), 0.0);

    // A sentinel tail contributes all or nothing.
    let tail = RangeP::new(4.0, f64::INFINITY);
    assert_eq!(tail.overlap_fraction(0.0, 10.0), 0.0);
    assert_eq!(tail.overlap_fraction(0.0, f64::INFINITY), 1.0);
}

#[test]
#[should_panic(expected = "cmap size must be at least 2")]
fn test_uniform_size_too_small() {
    Cmap::uniform(1, 0.0, 1.0);
}

#[test]
#[should_panic(expected = "cmap start must be less than end")]
fn test_uniform_inverted_bounds() {
    Cmap::uniform(5, 1.0, 1.0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_range_out_of_bounds() {
    let cmap = Cmap::uniform(10, 0.0, 10.0);
    cmap.range(10);
}
