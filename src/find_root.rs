use num_traits::Float;

use crate::point::Point;
use crate::roots::{root_bisection, root_newton_raphson, RootFindingError};
use crate::scalar;

pub trait FindRoot<P: Point> {
    /// Return the inclusive parameter domain for the curve.
    fn parameter_domain(&self) -> (P::Scalar, P::Scalar);

    /// Evaluate the curve along one axis.
    fn axis_value(&self, t: P::Scalar, axis: usize) -> Result<P::Scalar, RootFindingError>;

    /// Evaluate the curve's derivative along one axis.
    fn axis_derivative(&self, t: P::Scalar, axis: usize) -> Result<P::Scalar, RootFindingError>;

    /// Find the parameter t at which the curve takes `value` on `axis`,
    /// using Newton-Raphson on the scalar axis function.
    fn root_newton_axis(
        &self,
        value: P::Scalar,
        axis: usize,
        start: P::Scalar,
        eps: Option<P::Scalar>,
        max_iter: Option<usize>,
    ) -> Result<P::Scalar, RootFindingError> {
        let eps = eps.unwrap_or_else(|| scalar(1e-6));
        let max_iter = max_iter.unwrap_or(64);
        let (kmin, kmax) = self.parameter_domain();
        let clamp_t = |t: P::Scalar| t.max(kmin).min(kmax);

        let t = root_newton_raphson(
            clamp_t(start),
            |t| Ok(self.axis_value(clamp_t(t), axis)? - value),
            |t| self.axis_derivative(clamp_t(t), axis),
            eps,
            max_iter,
        )?;
        Ok(clamp_t(t))
    }

    /// Find the parameter t at which the curve takes `value` on `axis` by
    /// bisecting the parameter domain. Slower than Newton-Raphson but only
    /// requires the axis function to change sign over the domain.
    fn root_bisect_axis(
        &self,
        value: P::Scalar,
        axis: usize,
        eps: Option<P::Scalar>,
        max_iter: Option<usize>,
    ) -> Result<P::Scalar, RootFindingError> {
        let eps = eps.unwrap_or_else(|| scalar(1e-6));
        let max_iter = max_iter.unwrap_or(128);
        let (kmin, kmax) = self.parameter_domain();
        root_bisection(
            kmin,
            kmax,
            |t| Ok(self.axis_value(t, axis)? - value),
            eps,
            max_iter,
        )
    }
}
