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

use crate::cmap::Cmap;
use crate::hcounter::HCounter;

/// One generation of the sketch: a bin layout and its counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    cmap: Cmap,
    counter: HCounter,
}

impl Structure {
    /// Creates a generation from a cmap and a counter.
    pub fn new(cmap: Cmap, counter: HCounter) -> Self {
        Self { cmap, counter }
    }

    /// Returns the bin layout.
    pub fn cmap(&self) -> &Cmap {
        &self.cmap
    }

    /// Returns the counter.
    pub fn counter(&self) -> &HCounter {
        &self.counter
    }

    pub(crate) fn counter_mut(&mut self) -> &mut HCounter {
        &mut self.counter
    }
}

/// Non-empty bounded FIFO of generations, youngest at the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Structures {
    gens: Vec<Structure>,
}

impl Structures {
    pub(crate) fn init(structure: Structure) -> Self {
        Self {
            gens: vec![structure],
        }
    }

    /// Returns the number of live generations.
    pub fn len(&self) -> usize {
        self.gens.len()
    }

    /// Always false; the stack holds at least one generation.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the young generation.
    pub fn young(&self) -> &Structure {
        &self.gens[0]
    }

    /// Returns the oldest generation.
    pub fn oldest(&self) -> &Structure {
        &self.gens[self.gens.len() - 1]
    }

    /// Iterates generations young to old.
    pub fn iter(&self) -> std::slice::Iter<'_, Structure> {
        self.gens.iter()
    }

    pub(crate) fn young_mut(&mut self) -> &mut Structure {
        &mut self.gens[0]
    }

    /// Prepends a fresh young generation, evicting and returning the oldest
    /// when the stack would exceed `cap`.
    pub(crate) fn prepend(&mut self, structure: Structure, cap: usize) -> Option<Structure> {
        self.gens.insert(0, structure);
        if self.gens.len() > cap {
            self.gens.pop()
        } else {
            None
        }
    }
}
