//! Forecast reduction, hourly scoring and session-window search.
//!
//! Raw provider hours are reduced to one value per parameter, each hour is
//! scored for surfing, and the best block of consecutive hours is picked
//! from the leading part of the forecast. Everything here is synchronous and
//! holds no state between calls.

pub mod analyzer;
pub mod reduce;
pub mod score;
pub mod types;
pub mod utility;
pub mod window;
