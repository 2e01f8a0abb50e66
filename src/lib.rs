// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` draws auto-dismissing toast notifications on top of an Iced
//! application.
//!
//! Toasts live in an explicitly owned [`ui::notifications::Manager`]. The host
//! inserts notifications, runs one render pass per frame and stacks the
//! resulting overlay over its own content. A small demo host lives in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
