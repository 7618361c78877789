//! WalletWala terminal landing page.
//!
//! An interactive terminal rendition of the WalletWala marketing page:
//! static copy, a rotating chat carousel, lifestyle personas, a canned
//! demo responder, and the one genuinely interactive piece, a
//! mouse-draggable wallet mood meter with derived spent/remaining
//! amounts.
//!
//! Nothing here tracks real expenses: there is no storage, no network
//! and no model, just fixed strings and one clamped integer.

pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod demo;
pub mod log;
pub mod meter;
pub mod ui;
