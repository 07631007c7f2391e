// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;

/// Errors surfaced at the crate boundary. Mining itself cannot fail once
/// the threshold has been validated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("minimum support must be at least 1, got {0}")]
    InvalidMinimumSupport(u32),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
