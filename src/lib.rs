//! **cubease**: closed-form cubic Bézier easing.
//!
//! An easing curve maps normalized time `x ∈ [0,1]` to eased progress.  Here
//! every curve is a CSS-style cubic Bézier anchored at `(0,0)` and `(1,1)`;
//! evaluating it means inverting the x-polynomial for the curve parameter
//! `t`, then sampling y at `t`.  The inversion is done analytically, so
//! evaluation is allocation-free and takes the same time every call.
//!
//! # Architecture
//!
//! * [`bezier::CubicBezier`]: the curve value type (`solve_t`, `sample_x`,
//!   `sample_y`, `evaluate`, `lerp`).
//! * [`preset`]: the static table of named reference curves.
//! * [`traits::CurveCatalog`]: abstracts where named curves come from, so
//!   consumers are not coupled to the built-in table.
//! * [`catalog::Catalog`]: built-ins layered under user curves from
//!   [`config`].
//! * [`command`]: the `cubease` command-line front-end.
//!
//! Everything is a pure function of by-value inputs and read-only tables,
//! so curves and catalogs can be shared across threads freely.
//!
//! ```
//! use cubease::preset::Preset;
//!
//! let ease = Preset::EaseInOutCubic.curve();
//! let y = ease.lerp(0.0, 100.0, 0.5).unwrap();
//! assert!((y - 50.0).abs() < 1e-6);
//! ```

pub mod bezier;
pub mod catalog;
pub mod command;
pub mod config;
pub mod preset;
pub mod traits;

pub use bezier::{CubicBezier, EaseError};
pub use preset::{lookup_preset, Preset};
