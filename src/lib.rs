#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Pole-zero plots of discrete-time transfer functions.
//!
//! Given any transfer-function representation that can be decomposed into
//! zeros, poles and gain, [`plot_pz`] draws the poles and zeros on the
//! complex plane together with the unit circle, for visual stability
//! inspection. Rendering goes through the [`plotly`] crate: the caller owns
//! the [`plotly::Plot`] and decides whether to show it, embed it or write it
//! to disk.
//!
//! The decomposition itself is a seam, not a feature: this crate performs no
//! root finding and no filter math. Anything implementing [`ToZpk`] can be
//! plotted, and coefficient or state-space representations are expected to
//! bring their own conversion.
//!
//! ```
//! use num::complex::Complex64;
//! use plotly::{color::NamedColor, Plot};
//! use pzmap::{plot_pz, Zpk};
//!
//! let h = Zpk::new(
//!     vec![Complex64::new(-1.0, 0.0)],
//!     vec![Complex64::new(0.5, 0.3), Complex64::new(0.5, -0.3)],
//!     1.0,
//! );
//! let mut plot = Plot::new();
//! plot_pz(&mut plot, &h, NamedColor::Blue, 5, false).unwrap();
//! ```

mod error;
pub use error::Error;

mod zpk;
pub use zpk::{ToZpk, Zpk};

mod pzmap;
pub use pzmap::{plot_pz, ColorSpec};

pub(crate) mod util;
