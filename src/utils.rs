use crate::errors::{KernelError, Result};
use ndarray::{ArrayBase, Data, Ix2, RawData};

/// Checks that `xa` (d, n1) and `xb` (d', n2) point sets share the same dimension
/// (ie d == d') and returns the (n1, n2) shape of their cross covariance matrix.
pub(crate) fn cross_shape<A, B>(
    xa: &ArrayBase<A, Ix2>,
    xb: &ArrayBase<B, Ix2>,
) -> Result<(usize, usize)>
where
    A: Data,
    B: Data,
{
    check_same_dim(xa.nrows(), xb.nrows())?;
    Ok((xa.ncols(), xb.ncols()))
}

/// Checks point dimensions agreement
pub(crate) fn check_same_dim(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(KernelError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Checks that a caller-allocated `out` array has exactly the `expected` shape
pub(crate) fn check_output_shape<S: RawData>(
    out: &ArrayBase<S, Ix2>,
    expected: (usize, usize),
) -> Result<()> {
    let actual = out.dim();
    if actual != expected {
        return Err(KernelError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_cross_shape() {
        let xa = Array2::<f64>::zeros((3, 5));
        let xb = Array2::<f64>::zeros((3, 2));
        assert_eq!((5, 2), cross_shape(&xa, &xb).unwrap());
        assert_eq!((2, 5), cross_shape(&xb, &xa).unwrap());
    }

    #[test]
    fn test_cross_shape_dim_mismatch() {
        let xa = array![[1., 2.], [3., 4.]];
        let xb = array![[1., 2.]];
        assert_eq!(
            Err(KernelError::DimensionMismatch { left: 2, right: 1 }),
            cross_shape(&xa, &xb)
        );
    }

    #[test]
    fn test_check_output_shape() {
        let out = Array2::<f64>::zeros((3, 4));
        assert!(check_output_shape(&out, (3, 4)).is_ok());
        assert_eq!(
            Err(KernelError::ShapeMismatch {
                expected: (4, 3),
                actual: (3, 4)
            }),
            check_output_shape(&out, (4, 3))
        );
    }
}
