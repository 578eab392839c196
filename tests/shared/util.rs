use ::hgmatch::Matrix;
use ::rand::Rng;

/// Random dimensions, each in `1..max`.
pub fn random_dims(max: usize) -> (usize, usize) {
    let mut rng = ::rand::thread_rng();
    (rng.gen_range(1, max), rng.gen_range(1, max))
}

/// Matrix with elements uniform in `[-10, 10)`.
pub fn random_matrix((rows, cols): (usize, usize)) -> Matrix {
    let data = (0..rows * cols).map(|_| 20.0 * ::rand::random::<f64>() - 10.0).collect();
    Matrix::from_row_major_data((rows, cols), data)
}

/// Output buffer full of NaN, so that unwritten elements stand out.
pub fn nan_matrix(dims: (usize, usize)) -> Matrix {
    Matrix::new_filled(dims, &::std::f64::NAN)
}
