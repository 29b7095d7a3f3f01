// SPDX-License-Identifier: MPL-2.0
//! Application layer: capability ports at the system's seams.

pub mod port;
