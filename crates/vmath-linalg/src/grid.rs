//! Row-major square grids backing the matrix types.
//!
//! `grid[r][c]` is the element in row `r`, column `c`. Flat indices run
//! row by row: `index = r * N + c`.

use vmath_core::{Result, Scalar, check_index, check_len};

pub(crate) type Grid<T, const N: usize> = [[T; N]; N];

/// Identity grid.
pub(crate) const fn identity<T: Scalar, const N: usize>() -> Grid<T, N> {
    let mut m = [[T::ZERO; N]; N];
    let mut i = 0;
    while i < N {
        m[i][i] = T::ONE;
        i += 1;
    }
    m
}

#[inline]
pub(crate) fn map<T: Scalar, const N: usize>(a: &Grid<T, N>, f: impl Fn(T) -> T) -> Grid<T, N> {
    let mut out = *a;
    out.iter_mut().flatten().for_each(|v| *v = f(*v));
    out
}

#[inline]
pub(crate) fn zip<T: Scalar, const N: usize>(
    a: &Grid<T, N>,
    b: &Grid<T, N>,
    f: impl Fn(T, T) -> T,
) -> Grid<T, N> {
    let mut out = *a;
    for (o, v) in out.iter_mut().flatten().zip(b.iter().flatten()) {
        *o = f(*o, *v);
    }
    out
}

#[inline]
pub(crate) fn all<T: Scalar, const N: usize>(
    a: &Grid<T, N>,
    b: &Grid<T, N>,
    f: impl Fn(T, T) -> bool,
) -> bool {
    a.iter().flatten().zip(b.iter().flatten()).all(|(x, y)| f(*x, *y))
}

/// Row-by-column product.
pub(crate) fn mul<T: Scalar, const N: usize>(a: &Grid<T, N>, b: &Grid<T, N>) -> Grid<T, N> {
    let mut out = [[T::ZERO; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let mut sum = T::ZERO;
            for k in 0..N {
                sum += a[i][k] * b[k][j];
            }
            *cell = sum;
        }
    }
    out
}

/// Grid times column vector.
#[inline]
pub(crate) fn mul_vec<T: Scalar, const N: usize>(a: &Grid<T, N>, v: [T; N]) -> [T; N] {
    let mut out = [T::ZERO; N];
    for (o, row) in out.iter_mut().zip(a) {
        let mut sum = T::ZERO;
        for (m, x) in row.iter().zip(&v) {
            sum += *m * *x;
        }
        *o = sum;
    }
    out
}

pub(crate) fn transpose<T: Scalar, const N: usize>(a: &Grid<T, N>) -> Grid<T, N> {
    let mut out = *a;
    for (i, row) in a.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            out[j][i] = *v;
        }
    }
    out
}

#[inline]
pub(crate) fn trace<T: Scalar, const N: usize>(a: &Grid<T, N>) -> T {
    let mut sum = T::ZERO;
    for (i, row) in a.iter().enumerate() {
        sum += row[i];
    }
    sum
}

#[inline]
pub(crate) fn column<T: Scalar, const N: usize>(a: &Grid<T, N>, col: usize) -> [T; N] {
    let mut out = [T::ZERO; N];
    for (o, row) in out.iter_mut().zip(a) {
        *o = row[col];
    }
    out
}

/// Reads `N * N` elements in row-major order; extra elements are ignored.
pub(crate) fn from_slice<T: Scalar, const N: usize>(s: &[T]) -> Result<Grid<T, N>> {
    check_len(s, N * N)?;
    let mut out = [[T::ZERO; N]; N];
    for (i, v) in s.iter().take(N * N).enumerate() {
        out[i / N][i % N] = *v;
    }
    Ok(out)
}

#[inline]
pub(crate) fn get<T: Scalar, const N: usize>(a: &Grid<T, N>, index: usize) -> Result<T> {
    check_index(index, N * N)?;
    Ok(a[index / N][index % N])
}

#[inline]
pub(crate) fn set<T: Scalar, const N: usize>(a: &mut Grid<T, N>, index: usize, value: T) -> Result<()> {
    check_index(index, N * N)?;
    a[index / N][index % N] = value;
    Ok(())
}

#[inline]
pub(crate) fn get_at<T: Scalar, const N: usize>(a: &Grid<T, N>, row: usize, col: usize) -> Result<T> {
    check_index(row, N)?;
    check_index(col, N)?;
    Ok(a[row][col])
}

#[inline]
pub(crate) fn set_at<T: Scalar, const N: usize>(
    a: &mut Grid<T, N>,
    row: usize,
    col: usize,
    value: T,
) -> Result<()> {
    check_index(row, N)?;
    check_index(col, N)?;
    a[row][col] = value;
    Ok(())
}

/// Sign of the cofactor at `(row, col)`.
#[inline]
pub(crate) fn cofactor_sign<T: Scalar>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 { T::ONE } else { -T::ONE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_trace() {
        let i: Grid<f64, 4> = identity();
        assert_eq!(trace(&i), 4.0);
        assert_eq!(i[2][2], 1.0);
        assert_eq!(i[2][1], 0.0);
    }

    #[test]
    fn test_mul_row_by_column() {
        let a = [[1.0, 2.0], [3.0, 4.0]];
        let b = [[5.0, 6.0], [7.0, 8.0]];
        assert_eq!(mul(&a, &b), [[19.0, 22.0], [43.0, 50.0]]);
        assert_eq!(mul_vec(&a, [1.0, 1.0]), [3.0, 7.0]);
    }

    #[test]
    fn test_flat_access_is_row_major() {
        let mut g: Grid<f32, 3> = from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(get(&g, 5).unwrap(), 5.0);
        assert_eq!(get_at(&g, 1, 2).unwrap(), 5.0);
        assert!(get(&g, 9).is_err());
        assert!(get_at(&g, 0, 3).is_err());
        set(&mut g, 0, 10.0).unwrap();
        assert_eq!(g[0][0], 10.0);
        assert_eq!(column(&g, 1), [1.0, 4.0, 7.0]);
        assert!(from_slice::<f32, 3>(&[1.0; 8]).is_err());
    }
}
