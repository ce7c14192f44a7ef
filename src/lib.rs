//! # Twine Titration
//!
//! A conductometric titration model for
//! [Twine](https://github.com/isentropic-dev/twine), built for teaching.
//!
//! A mixture of hydrochloric and acetic acid is titrated with NaOH. Given the
//! sample volume, titrant normality, and two endpoint volumes, the model
//! produces a synthetic conductance curve and the amount of each acid.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Rendering the curve and providing input controls is left to the caller.

pub mod models;
pub mod support;
