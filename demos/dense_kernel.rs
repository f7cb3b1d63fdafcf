use faer::Mat;
use krystal::{cholesky, cross, kron, lower_triangular, rank, ranks};
use rand::Rng;

fn main() -> Result<(), krystal::LinalgError> {
    let n = 4;
    // build a random SPD matrix: A = MᵀM + I
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let m = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    let m_t = m.transpose();
    let spd = &m_t * &m + Mat::<f64>::identity(n, n);
    // mirror the lower triangle so the matrix is exactly symmetric
    let a = Mat::from_fn(n, n, |i, j| if j <= i { spd[(i, j)] } else { spd[(j, i)] });

    let l = cholesky(&a)?;
    println!("L = {:?}", l);
    println!("rank(A) = {}", rank(&a, None)?);
    println!("lower(M) = {:?}", lower_triangular(&m)?);

    let b = Mat::from_fn(2, 2, |i, j| (i + j) as f64);
    println!("I ⊗ B = {:?}", kron(&Mat::<f64>::identity(2, 2), &b));

    println!("e1 × e2 = {:?}", cross(&[1, 0, 0], &[0, 1, 0])?);
    println!("ranks = {:?}", ranks(&[10, 20, 20, 30]));
    Ok(())
}
