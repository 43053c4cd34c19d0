use bayes_gp::{
    CovSum, CovarianceModel, NoiseKernel, SquaredExponentialKernel, sqdist, sqdist_self,
};
use ndarray::{Array2, s};

fn identity_points(dim: usize, n: usize, factor: f64) -> Array2<f64> {
    Array2::<f64>::eye(dim).slice(s![.., ..n]).mapv(|v| factor * v)
}

fn main() {
    env_logger::init();

    // Squared distances
    let xa = identity_points(5, 3, 1.);
    let xb = identity_points(5, 4, 2.1);
    println!("Squared distance xb, xb:\n{}", sqdist_self(&xb).expect("squared distances"));
    println!("Squared distance xa, xb:\n{}", sqdist(&xa, &xb).expect("squared distances"));

    // Squared exponential
    let xa = identity_points(4, 3, 1.);
    let xb = identity_points(4, 1, 2.5);
    let mut iso = SquaredExponentialKernel::new(2.1, 3.2);
    println!("{iso} covariance:\n{}", iso.evaluate(&xa, &xb).expect("covariance"));
    iso.set_scale(1.);
    iso.set_length(3.);
    println!("{iso} self covariance:\n{}", iso.evaluate_self(&xa).expect("covariance"));

    // Noise and sums
    let xa = identity_points(10, 2, 7.2);
    let xb = identity_points(10, 7, 7.2);
    let noise = NoiseKernel::new(3.52);
    let iso = SquaredExponentialKernel::new(1., 500.);
    let sum = CovSum::new(noise, iso);
    let sum2 = noise + iso + iso;
    println!("{noise} covariance:\n{}", noise.evaluate(&xa, &xb).expect("covariance"));
    println!("{sum} covariance:\n{}", sum.evaluate(&xa, &xb).expect("covariance"));
    println!("{sum2} covariance:\n{}", sum2.evaluate(&xa, &xb).expect("covariance"));
}
