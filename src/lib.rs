//! This library implements covariance functions (aka kernels) used as prior covariance of
//! [Gaussian Process](https://en.wikipedia.org/wiki/Gaussian_process) models.
//!
//! Point sets are given as (dim, npoints) [ndarray] arrays where each column is a point.
//! Evaluating a covariance model between a (dim, n1) and a (dim, n2) point sets
//! gives a (n1, n2) covariance matrix, see [CovarianceModel].
//!
//! The following covariance models are available:
//! * [SquaredExponentialKernel]: isotropic squared exponential,
//! * [NoiseKernel]: independent noise,
//! * [CovSum]: sum of two covariance models built with [combine] or the `+` operator.
//!
//! Kernels are built directly from their hyperparameters or through their parameters
//! builders ([SquaredExponentialParams], [NoiseParams]) which can be checked
//! using [linfa::ParamGuard].
//!
//! Squared euclidean distances between points, used by distance based kernels,
//! are computed by functions of the [distances] module.
//!
//! ```
//! use bayes_gp::{CovarianceModel, NoiseKernel, SquaredExponentialKernel};
//! use linfa::ParamGuard;
//! use ndarray::array;
//!
//! let iso = SquaredExponentialKernel::params()
//!     .scale(1.)
//!     .length(500.)
//!     .check()
//!     .expect("valid kernel parameters");
//! let kernel = NoiseKernel::new(3.52) + iso + iso;
//!
//! let xa = array![[7.2, 0.], [0., 7.2], [0., 0.]];
//! let xb = array![[7.2, 0., 0.], [0., 7.2, 0.], [0., 0., 7.2]];
//! let cov = kernel.evaluate(&xa, &xb).expect("covariance matrix");
//! assert_eq!((2, 3), cov.dim());
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
pub mod covariance_models;
pub mod distances;
mod errors;
mod parameters;
mod utils;

pub use covariance_models::{
    CovSum, CovarianceModel, NoiseKernel, SquaredExponentialKernel, combine,
};
pub use distances::{point_sqdist, sqdist, sqdist_into, sqdist_self};
pub use errors::*;
pub use parameters::*;
