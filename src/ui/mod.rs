// SPDX-License-Identifier: MPL-2.0
//! User interface: the retained page model, its alert overlay and styling.

pub mod alert;
pub mod design_tokens;
pub mod page;
pub mod styles;
pub mod theming;
