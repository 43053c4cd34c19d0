//! Squared euclidean distances between points.
//!
//! Point sets are given as (dim, npoints) arrays, each column being a point.
//! Distances between a (dim, n1) and a (dim, n2) point sets are returned
//! as a (n1, n2) matrix.

use crate::errors::Result;
use crate::utils::{check_output_shape, check_same_dim, cross_shape};
use linfa::Float;
use ndarray::{Array2, ArrayBase, Data, DataMut, Ix1, Ix2, Zip};

/// Computes squared distances between each column of `xa` (dim, n1)
/// and each column of `xb` (dim, n2) resulting in a (n1, n2) matrix
/// where `d[[i, j]] = sum_k (xa[[k, i]] - xb[[k, j]])^2`.
///
/// Fails with [`KernelError::DimensionMismatch`](crate::KernelError) when row numbers differ.
pub fn sqdist<F: Float>(
    xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
    xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<Array2<F>> {
    let mut dist = Array2::zeros(cross_shape(xa, xb)?);
    fill_sqdist(xa, xb, &mut dist);
    Ok(dist)
}

/// Computes squared distances between each pair of columns of `x` (dim, n).
///
/// Same as `sqdist(x, x)`, the (n, n) result is symmetric with a zero diagonal.
pub fn sqdist_self<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<Array2<F>> {
    let n = x.ncols();
    let mut dist = Array2::zeros((n, n));
    for (i, x_i) in x.columns().into_iter().enumerate() {
        for j in i..n {
            let d = column_sqdist(&x_i, &x.column(j));
            dist[[i, j]] = d;
            dist[[j, i]] = d;
        }
    }
    Ok(dist)
}

/// Computes squared distances between columns of `xa` (dim, n1) and `xb` (dim, n2)
/// into a pre-allocated `out` array.
///
/// `out` has to be exactly (n1, n2) shaped, it is left untouched otherwise.
pub fn sqdist_into<F: Float>(
    xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
    xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    out: &mut ArrayBase<impl DataMut<Elem = F>, Ix2>,
) -> Result<()> {
    let shape = cross_shape(xa, xb)?;
    check_output_shape(out, shape)?;
    fill_sqdist(xa, xb, out);
    Ok(())
}

/// Computes the squared distance between two single points `x` and `y`
/// given as (dim,) vectors.
pub fn point_sqdist<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix1>,
    y: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<F> {
    check_same_dim(x.len(), y.len())?;
    Ok(column_sqdist(x, y))
}

/// Shapes are expected to be checked by the caller
fn fill_sqdist<F: Float>(
    xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
    xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    out: &mut ArrayBase<impl DataMut<Elem = F>, Ix2>,
) {
    Zip::from(out.rows_mut())
        .and(xa.columns())
        .for_each(|mut out_i, xa_i| {
            Zip::from(&mut out_i)
                .and(xb.columns())
                .for_each(|d_ij, xb_j| {
                    *d_ij = column_sqdist(&xa_i, &xb_j);
                });
        });
}

fn column_sqdist<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix1>,
    y: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    x.iter().zip(y.iter()).fold(F::zero(), |acc, (&a, &b)| {
        let diff = a - b;
        acc + diff * diff
    })
}
