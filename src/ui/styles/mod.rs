// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the ephemeris page.

pub mod button;
pub mod container;
