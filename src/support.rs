//! Supporting utilities used by models.
//!
//! These are public because they're useful, but their APIs are not stable.

pub mod constraint;
