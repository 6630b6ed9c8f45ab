//! Scalar root finding helpers.
//!
//! Available functions:
//! - `root_newton_raphson()`
//! - `root_bisection()`
use core::fmt;

use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootFindingError {
    NoRootsFound,
    FailedToConverge,
    MaxIterationsReached,
    ZeroDerivative,
}

impl fmt::Display for RootFindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootFindingError::NoRootsFound => write!(f, "no root in the search interval"),
            RootFindingError::FailedToConverge => write!(f, "root search diverged"),
            RootFindingError::MaxIterationsReached => {
                write!(f, "root search hit the iteration limit")
            }
            RootFindingError::ZeroDerivative => write!(f, "derivative vanished during root search"),
        }
    }
}

impl core::error::Error for RootFindingError {}

/// Find a single (any) root of the function f(x) = 0 close to a given a start value, f and its derivative f'.
/// This function cannot predict which root is going to be found.
pub(crate) fn root_newton_raphson<F, Func, Deriv>(
    start: F,
    f: Func,
    d: Deriv,
    eps: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Float,
    Func: Fn(F) -> Result<F, RootFindingError>,
    Deriv: Fn(F) -> Result<F, RootFindingError>,
{
    let mut x = start;
    for _ in 0..max_iter {
        let fx = f(x)?;
        if fx.abs() <= eps {
            return Ok(x);
        }
        let dx = d(x)?;
        if dx.abs() <= eps {
            return Err(RootFindingError::ZeroDerivative);
        }
        let x1 = x - fx / dx;
        if (x1 - x).abs() <= eps {
            return Ok(x1);
        }
        if x1.is_nan() {
            return Err(RootFindingError::FailedToConverge);
        }
        x = x1;
    }
    Err(RootFindingError::MaxIterationsReached)
}

/// Find a root of f(x) = 0 inside [lo, hi] by halving the interval.
/// f(lo) and f(hi) must have opposite signs (or one of them be zero).
pub(crate) fn root_bisection<F, Func>(
    mut lo: F,
    mut hi: F,
    f: Func,
    eps: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Float,
    Func: Fn(F) -> Result<F, RootFindingError>,
{
    let mut f_lo = f(lo)?;
    let f_hi = f(hi)?;
    if f_lo.abs() <= eps {
        return Ok(lo);
    }
    if f_hi.abs() <= eps {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(RootFindingError::NoRootsFound);
    }

    let two = F::one() + F::one();
    for _ in 0..max_iter {
        let mid = lo + (hi - lo) / two;
        let f_mid = f(mid)?;
        if f_mid.abs() <= eps || (hi - lo) <= eps {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Err(RootFindingError::MaxIterationsReached)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_finds_square_root() {
        let root = root_newton_raphson(1.0f64, |x| Ok(x * x - 2.0), |x| Ok(2.0 * x), 1e-12, 64)
            .unwrap();
        assert!((root - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn newton_reports_flat_derivative() {
        let res = root_newton_raphson(0.0f64, |x| Ok(x * x + 1.0), |x| Ok(2.0 * x), 1e-12, 64);
        assert_eq!(res, Err(RootFindingError::ZeroDerivative));
    }

    #[test]
    fn bisection_finds_root_in_interval() {
        let root = root_bisection(0.0f64, 2.0, |x| Ok(x * x * x - 1.0), 1e-10, 200).unwrap();
        assert!((root - 1.0).abs() < 1e-8);
    }

    #[test]
    fn bisection_requires_sign_change() {
        let res = root_bisection(2.0f64, 3.0, |x| Ok(x - 1.0), 1e-10, 200);
        assert_eq!(res, Err(RootFindingError::NoRootsFound));
    }
}
