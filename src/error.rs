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

//! Construction errors.
//!
//! The sketch is total on well-formed inputs: reads never fail and degenerate
//! query arguments produce neutral values. Errors arise only while building
//! things, from an invalid configuration or a malformed divider list, so an
//! [`Error`] names the violated rule plus the offending field values.

use std::fmt;

/// Kinds of construction failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A sketch configuration field is out of range or inconsistent.
    ConfigInvalid,
    /// A cumulative map was built from dividers that are not finite and
    /// strictly increasing.
    MalformedCmap,
}

impl ErrorKind {
    /// Returns a short description of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "invalid configuration",
            ErrorKind::MalformedCmap => "malformed cmap",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to construct a sketch or one of its parts.
pub struct Error {
    kind: ErrorKind,
    message: String,
    fields: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Creates an error of the given kind describing the violated rule.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: Vec::new(),
            source: None,
        }
    }

    /// Attaches the name and value of an offending field.
    pub fn with_field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Attaches an underlying cause, replacing any previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error as _;
    /// use adasketch::error::Error;
    /// use adasketch::error::ErrorKind;
    ///
    /// let plain = Error::new(ErrorKind::ConfigInvalid, "counter_no must be at least 1");
    /// assert!(plain.source().is_none());
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "config unreadable");
    /// let caused = Error::new(ErrorKind::ConfigInvalid, "bad config").with_source(io);
    /// assert!(caused.source().is_some());
    /// ```
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the violated rule.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if !self.fields.is_empty() {
            f.write_str(" (")?;
            for (i, (name, value)) in self.fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name} = {value}")?;
            }
            f.write_str(")")?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by: {source}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Error");
        out.field("kind", &self.kind);
        out.field("message", &self.message);
        if !self.fields.is_empty() {
            out.field("fields", &self.fields);
        }
        if let Some(source) = &self.source {
            out.field("source", source);
        }
        out.finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|source| source.as_ref())
    }
}
