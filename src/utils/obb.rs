use crate::bounding_volume::Obb;
use crate::math::{Matrix, Point, Real, Rotation, Vector, DIM};

/// Computes an oriented bounding box for the given set of points.
///
/// The box axes are the eigenvectors of the covariance matrix of the points. The returned OBB is
/// not guaranteed to be the smallest enclosing OBB. It should be a pretty good one for most
/// purposes.
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn obb(pts: &[Point<Real>]) -> Obb {
    let cov = crate::utils::cov(pts);
    let mut eigv = cov.symmetric_eigen().eigenvectors;

    if !eigv.iter().all(|x| x.is_finite()) {
        eigv = Matrix::identity();
    } else if eigv.determinant() < 0.0 {
        eigv = -eigv;
    }

    let rot = Rotation::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(eigv));

    // The extents are measured along the axes of the (renormalized) quaternion rather than
    // along the raw eigenvectors so the box encloses every point exactly.
    let axes = [
        rot * Vector::x(),
        rot * Vector::y(),
        rot * Vector::z(),
    ];
    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in pts {
        for i in 0..DIM {
            let dot = axes[i].dot(&pt.coords);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    let local_center = (maxs + mins) / 2.0;

    Obb::new(
        Point::from(rot * local_center),
        rot,
        (maxs - mins) / 2.0,
    )
}
