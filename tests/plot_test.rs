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

use adasketch::cmap::RangeP;
use adasketch::plot::DensityPlot;
use adasketch::plot::DensityRecord;
use googletest::assert_that;
use googletest::prelude::near;

fn sample_plot() -> DensityPlot {
    DensityPlot::new(vec![
        DensityRecord {
            range: RangeP::new(f64::NEG_INFINITY, 0.0),
            value: 0.0,
        },
        DensityRecord {
            range: RangeP::new(0.0, 1.0),
            value: 0.2,
        },
        DensityRecord {
            range: RangeP::new(1.0, 2.0),
            value: 0.8,
        },
        DensityRecord {
            range: RangeP::new(2.0, f64::INFINITY),
            value: 0.0,
        },
    ])
}

#[test]
fn test_interpolate_between_midpoints() {
    let plot = sample_plot();
    // Nodes sit at the finite midpoints 0.5 and 1.5.
    assert_that!(plot.interpolate(1.0), near(0.5, 1e-12));
    assert_that!(plot.interpolate(0.75), near(0.35, 1e-12));
}

#[test]
fn test_interpolate_clamps_outside_nodes() {
    let plot = sample_plot();
    assert_that!(plot.interpolate(0.2), near(0.2, 1e-12));
    assert_that!(plot.interpolate(-100.0), near(0.2, 1e-12));
    assert_that!(plot.interpolate(5.0), near(0.8, 1e-12));
}

#[test]
fn test_interpolate_nan() {
    let plot = sample_plot();
    assert!(plot.interpolate(f64::NAN).is_nan());
}

#[test]
fn test_mass_below() {
    let plot = sample_plot();
    assert_that!(plot.mass_below(-5.0), near(0.0, 1e-12));
    assert_that!(plot.mass_below(0.5), near(0.1, 1e-12));
    assert_that!(plot.mass_below(1.0), near(0.2, 1e-12));
    assert_that!(plot.mass_below(1.5), near(0.6, 1e-12));
    assert_that!(plot.mass_below(100.0), near(1.0, 1e-12));
    assert_that!(plot.total_mass(), near(1.0, 1e-12));
}

#[test]
fn test_empty_plot() {
    let plot = DensityPlot::new(Vec::new());
    assert!(plot.is_empty());
    assert_eq!(plot.interpolate(1.0), 0.0);
    assert_eq!(plot.total_mass(), 0.0);
}
