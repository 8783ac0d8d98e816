// T9 Wiperite - Firmware Bring-up Probe
// Copyright (C) 2026 T9 Wiperite contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::ffi::{OsStr, OsString};

/// Arguments the process was launched with, program name first.
///
/// Values are kept as `OsString` so nothing is lost for arguments that are
/// not valid UTF-8. The list is fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<OsString>,
}

impl ArgumentList {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Captures `std::env::args_os()` verbatim.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn program(&self) -> Option<&OsStr> {
        self.args.first().map(OsString::as_os_str)
    }

    /// Yields `(index, value)` pairs in launch order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &OsStr)> + '_ {
        self.args.iter().map(OsString::as_os_str).enumerate()
    }
}
