//! Generic picker module
//!
//! Provides the list-navigation trait shared by every list the user moves a
//! highlight through (currently the open option list of a level).

mod traits;

pub use traits::Picker;
