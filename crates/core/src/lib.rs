// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shopmon-core: configuration, clock, and manifest reading for the
//! shopmon CLI.

pub mod clock;
pub mod composer;
pub mod config;

pub use clock::{Clock, FakeClock, SystemClock};
pub use composer::{read_composer_data, ComposerError};
pub use config::{Config, DEFAULT_BASE_URL};
