use crate::covariance_models::{NoiseKernel, SquaredExponentialKernel};
use crate::errors::{KernelError, Result};
use linfa::{Float, ParamGuard};

/// The set of hyperparameters that can be specified for building
/// a [squared exponential kernel](SquaredExponentialKernel).
///
/// Checked parameters ensure a strictly positive finite scale and length.
#[derive(Clone, Debug, PartialEq)]
pub struct SquaredExponentialParams<F: Float>(SquaredExponentialKernel<F>);

impl<F: Float> Default for SquaredExponentialParams<F> {
    fn default() -> SquaredExponentialParams<F> {
        SquaredExponentialParams(SquaredExponentialKernel::default())
    }
}

impl<F: Float> SquaredExponentialParams<F> {
    /// A constructor for kernel parameters given `scale` and `length`
    pub fn new(scale: F, length: F) -> SquaredExponentialParams<F> {
        SquaredExponentialParams(SquaredExponentialKernel::new(scale, length))
    }

    /// Set the covariance scale
    pub fn scale(mut self, scale: F) -> Self {
        self.0.set_scale(scale);
        self
    }

    /// Set the length scale
    pub fn length(mut self, length: F) -> Self {
        self.0.set_length(length);
        self
    }
}

impl<F: Float> From<SquaredExponentialKernel<F>> for SquaredExponentialParams<F> {
    fn from(kernel: SquaredExponentialKernel<F>) -> Self {
        SquaredExponentialParams(kernel)
    }
}

impl<F: Float> ParamGuard for SquaredExponentialParams<F> {
    type Checked = SquaredExponentialKernel<F>;
    type Error = KernelError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_positive("scale", self.0.scale())?;
        check_positive("length", self.0.length())?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// The set of hyperparameters that can be specified for building
/// a [noise kernel](NoiseKernel).
///
/// Checked parameters ensure a non negative finite variance.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams<F: Float>(NoiseKernel<F>);

impl<F: Float> Default for NoiseParams<F> {
    fn default() -> NoiseParams<F> {
        NoiseParams(NoiseKernel::default())
    }
}

impl<F: Float> NoiseParams<F> {
    /// A constructor for kernel parameters given noise `variance`
    pub fn new(variance: F) -> NoiseParams<F> {
        NoiseParams(NoiseKernel::new(variance))
    }

    /// Set the noise variance
    pub fn variance(mut self, variance: F) -> Self {
        self.0.set_variance(variance);
        self
    }
}

impl<F: Float> From<NoiseKernel<F>> for NoiseParams<F> {
    fn from(kernel: NoiseKernel<F>) -> Self {
        NoiseParams(kernel)
    }
}

impl<F: Float> ParamGuard for NoiseParams<F> {
    type Checked = NoiseKernel<F>;
    type Error = KernelError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let variance = self.0.variance();
        if !variance.is_finite() || variance < F::zero() {
            return Err(KernelError::InvalidValueError(format!(
                "`variance` should be a non negative finite value, got {variance}"
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

fn check_positive<F: Float>(name: &str, value: F) -> Result<()> {
    // NaN fails here too
    if !(value.is_finite() && value > F::zero()) {
        return Err(KernelError::InvalidValueError(format!(
            "`{name}` should be a strictly positive finite value, got {value}"
        )));
    }
    Ok(())
}
