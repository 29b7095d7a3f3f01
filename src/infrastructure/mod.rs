// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters behind the application ports and the network edge.

pub mod media;
pub mod webhook;
