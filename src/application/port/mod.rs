// SPDX-License-Identifier: MPL-2.0
//! Port definitions consumed by the session controller.

pub mod media;

pub use media::{AutoplayError, MediaHost};
