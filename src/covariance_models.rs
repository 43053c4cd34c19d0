//! A module for covariance models (aka kernels) used as prior covariance of GP models.
//!
//! Points are given as columns of (dim, npoints) arrays, the covariance between
//! a (dim, n1) and a (dim, n2) point sets is a (n1, n2) matrix.
//!
//! The following models are implemented:
//! * isotropic squared exponential,
//! * independent noise,
//! * sum of two covariance models.
//!
//! Covariance models can be summed up with the `+` operator:
//!
//! ```
//! use bayes_gp::{CovarianceModel, NoiseKernel, SquaredExponentialKernel};
//! use ndarray::array;
//!
//! let kernel = SquaredExponentialKernel::new(2., 0.5) + NoiseKernel::new(0.1);
//! let x = array![[0., 1., 2.]];
//! let cov = kernel.evaluate_self(&x).unwrap();
//! assert_eq!((3, 3), cov.dim());
//! ```

use crate::distances::sqdist;
use crate::errors::Result;
use crate::parameters::{NoiseParams, SquaredExponentialParams};
use crate::utils::{check_output_shape, cross_shape};
use linfa::Float;
use log::{debug, warn};
use ndarray::{Array2, ArrayBase, Data, DataMut, Ix2};
use std::fmt;
use std::ops::Add;

/// A trait for covariance models
pub trait CovarianceModel<F: Float>: Clone + fmt::Display + Sync {
    /// Compute covariance matrix k(xa, xb) between `xa` (dim, n1) and `xb` (dim, n2)
    /// point sets resulting in a (n1, n2) matrix.
    ///
    /// Fails when `xa` and `xb` points do not have the same dimension.
    fn evaluate(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>>;

    /// Compute covariance matrix k(x, x) between each pair of `x` points
    fn evaluate_self(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<Array2<F>> {
        self.evaluate(x, x)
    }

    /// Compute covariance matrix k(xa, xb) into a pre-allocated (n1, n2) `out` array.
    /// Any other `out` shape is an error and `out` is left untouched.
    fn evaluate_into(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
        out: &mut ArrayBase<impl DataMut<Elem = F>, Ix2>,
    ) -> Result<()> {
        check_output_shape(out, cross_shape(xa, xb)?)?;
        out.assign(&self.evaluate(xa, xb)?);
        Ok(())
    }
}

/// Builds the sum of two covariance models
pub fn combine<A, B>(first: A, second: B) -> CovSum<A, B> {
    CovSum::new(first, second)
}

/// Isotropic squared exponential covariance model
///
/// The scale is stored as its logarithm which keeps it positive whatever
/// the value set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquaredExponentialKernel<F: Float> {
    /// Log of the covariance scale
    log_scale: F,
    /// Length scale
    length: F,
}

impl<F: Float> Default for SquaredExponentialKernel<F> {
    fn default() -> SquaredExponentialKernel<F> {
        SquaredExponentialKernel::new(F::one(), F::one())
    }
}

impl<F: Float> SquaredExponentialKernel<F> {
    /// Constructor given covariance `scale` and `length` scale.
    /// Values are not checked, use [`SquaredExponentialKernel::params`] for that.
    pub fn new(scale: F, length: F) -> SquaredExponentialKernel<F> {
        SquaredExponentialKernel {
            log_scale: scale.ln(),
            length,
        }
    }

    /// Parameters builder with default values scale = 1 and length = 1
    pub fn params() -> SquaredExponentialParams<F> {
        SquaredExponentialParams::default()
    }

    /// Covariance scale
    pub fn scale(&self) -> F {
        self.log_scale.exp()
    }

    /// Log of the covariance scale as internally stored
    pub fn log_scale(&self) -> F {
        self.log_scale
    }

    /// Set the covariance scale
    pub fn set_scale(&mut self, scale: F) {
        self.log_scale = scale.ln();
    }

    /// Length scale
    pub fn length(&self) -> F {
        self.length
    }

    /// Set the length scale
    pub fn set_length(&mut self, length: F) {
        self.length = length;
    }
}

impl<F: Float> CovarianceModel<F> for SquaredExponentialKernel<F> {
    /// k(xa, xb) = exp( log_scale - |xa - xb|^2 / length )
    fn evaluate(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>> {
        let dist = sqdist(xa, xb)?;
        debug!("{} covariance of {:?} matrix", self, dist.dim());
        if self.length <= F::zero() {
            warn!(
                "Non positive length scale ({}) leads to non finite covariance",
                self.length
            );
        }
        let (log_scale, length) = (self.log_scale, self.length);
        Ok(dist.mapv_into(|d| F::exp(log_scale - d / length)))
    }
}

impl<F: Float> fmt::Display for SquaredExponentialKernel<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SquaredExponential(scale={}, length={})",
            self.scale(),
            self.length
        )
    }
}

/// Independent noise covariance model
///
/// The covariance is the noise variance between a point and itself, zero otherwise.
/// Points are identified by their index in the given point sets, coordinates are
/// not taken into account: k(xa, xb)[i, j] = variance if i == j, 0 otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseKernel<F: Float> {
    variance: F,
}

impl<F: Float> Default for NoiseKernel<F> {
    fn default() -> NoiseKernel<F> {
        NoiseKernel::new(F::one())
    }
}

impl<F: Float> NoiseKernel<F> {
    /// Constructor given the noise `variance` (not checked)
    pub fn new(variance: F) -> NoiseKernel<F> {
        NoiseKernel { variance }
    }

    /// Parameters builder with default variance = 1
    pub fn params() -> NoiseParams<F> {
        NoiseParams::default()
    }

    /// Noise variance
    pub fn variance(&self) -> F {
        self.variance
    }

    /// Set the noise variance
    pub fn set_variance(&mut self, variance: F) {
        self.variance = variance;
    }
}

impl<F: Float> CovarianceModel<F> for NoiseKernel<F> {
    fn evaluate(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>> {
        let shape = cross_shape(xa, xb)?;
        debug!("{} covariance of {:?} matrix", self, shape);
        let mut cov = Array2::zeros(shape);
        cov.diag_mut().fill(self.variance);
        Ok(cov)
    }
}

impl<F: Float> fmt::Display for NoiseKernel<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Noise(variance={})", self.variance)
    }
}

/// Covariance model defined as the sum of two covariance models
///
/// Both summands have to implement [CovarianceModel] for the sum to be evaluated,
/// the `+` operator on a sum does not check it:
///
/// ```compile_fail
/// use bayes_gp::{CovarianceModel, NoiseKernel, SquaredExponentialKernel};
/// use ndarray::array;
///
/// let sum = (SquaredExponentialKernel::new(1., 1.) + NoiseKernel::new(0.1)) + 3.0f64;
/// sum.evaluate_self(&array![[0., 1.]]).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CovSum<A, B> {
    first: A,
    second: B,
}

impl<A, B> CovSum<A, B> {
    /// Constructor taking ownership of both covariance models
    pub fn new(first: A, second: B) -> CovSum<A, B> {
        CovSum { first, second }
    }

    /// First covariance model
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Second covariance model
    pub fn second(&self) -> &B {
        &self.second
    }

    /// First covariance model, mutable to allow hyperparameters tuning
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Second covariance model, mutable to allow hyperparameters tuning
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}

impl<F: Float, A: CovarianceModel<F>, B: CovarianceModel<F>> CovarianceModel<F>
    for CovSum<A, B>
{
    /// k(xa, xb) = k1(xa, xb) + k2(xa, xb)
    fn evaluate(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>> {
        let cov = self.first.evaluate(xa, xb)?;
        Ok(cov + self.second.evaluate(xa, xb)?)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for CovSum<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

impl<A, B, K> Add<K> for CovSum<A, B> {
    type Output = CovSum<CovSum<A, B>, K>;

    fn add(self, rhs: K) -> Self::Output {
        CovSum::new(self, rhs)
    }
}

macro_rules! impl_covariance_add {
    ($($kernel:ident),+) => {
        $(
            impl<F: Float, K: CovarianceModel<F>> Add<K> for $kernel<F> {
                type Output = CovSum<$kernel<F>, K>;

                fn add(self, rhs: K) -> Self::Output {
                    CovSum::new(self, rhs)
                }
            }
        )+
    };
}

impl_covariance_add!(SquaredExponentialKernel, NoiseKernel);
