// SPDX-License-Identifier: MPL-2.0
//! `ephemerides` is a small desktop client, built with the Iced GUI framework,
//! that shows a historical fact for today's date.
//!
//! Everything comes from an HTTP backend: today's ephemeris, optional
//! details with related links, and the translation bundles for the three
//! display languages (Catalan, Spanish and English).

#![doc(html_root_url = "https://docs.rs/ephemerides/0.1.0")]

pub mod animation;
pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
