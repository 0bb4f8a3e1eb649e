//! Localization and animated-backdrop components for the SCAI showcase.
//!
//! * [`i18n`] resolves dotted keys such as `home.title` into localized text,
//!   memoizing every answer per service instance.
//! * [`particles`] simulates and draws a pointer-reactive particle field at a
//!   capped frame rate.
//!
//! The `scai` binary hosts both in a terminal UI.

pub mod config;
pub mod i18n;
pub mod logging;
pub mod particles;
