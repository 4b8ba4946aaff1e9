//! Greyworld Core Library
//!
//! Illuminant estimation and correction for digital images.
//!
//! Estimates the color of the light source an image was captured under by
//! taking the Minkowski mean (p = 3) of each gamma-linearized channel, then
//! rescales the channels so the image appears captured under a neutral,
//! equal-energy illuminant.
//!
//! ## Example
//!
//! ```no_run
//! use greyworld_core::{correct, CorrectOptions};
//!
//! # fn main() -> greyworld_core::Result<()> {
//! let corrected = correct("photo.jpg", &CorrectOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use error::{CorrectError, Result};
pub use models::{CorrectOptions, IlluminantEstimate, ImageBuffer, ImageSource};
pub use pipeline::{correct, estimate_illuminant};
