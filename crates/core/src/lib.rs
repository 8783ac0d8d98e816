// T9 Wiperite - Firmware Bring-up Probe
// Copyright (C) 2026 T9 Wiperite contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

pub mod args;
pub mod report;

pub use args::ArgumentList;
pub use report::{write_report, GREETING, READY_LINE};

#[derive(Debug, thiserror::Error)]
pub enum BringupError {
    #[error("Failed to write bring-up output: {0}")]
    Output(#[from] std::io::Error),
}

pub type BringupResult<T> = Result<T, BringupError>;
