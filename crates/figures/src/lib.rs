//! # Geomancy Figures
//!
//! The sixteen geomantic figures, their element algebra and the traditional
//! lookup tables attached to them.
//!
//! ## Encoding
//!
//! ```text
//! line   element  bit
//!  0     fire     0b0001
//!  1     air      0b0010
//!  2     water    0b0100
//!  3     earth    0b1000
//! ```
//!
//! A set bit is an *active* line (a single point). Every 4-bit pattern is
//! exactly one figure, so the catalog is closed under element-wise XOR.
//!
//! ## Example
//!
//! ```rust
//! use geomancy_figures::Figure;
//!
//! let fortuna_major = Figure::by_name("Fortuna Major").unwrap();
//! let via = Figure::by_name("via").unwrap();
//! assert_eq!(fortuna_major + via, Figure::FORTUNA_MINOR);
//! ```

mod catalog;
mod company;
mod error;
mod figure;

pub use catalog::{slugify, FigureDetails};
pub use company::CompanyType;
pub use error::{FigureError, Result};
pub use figure::{Elements, Figure};
