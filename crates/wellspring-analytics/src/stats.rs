//! Least-squares fitting and the small amount of distribution math the trend
//! analyzer needs for significance testing.

pub(crate) struct Regression {
    pub slope: f64,
    pub r_squared: f64,
    pub p_value: f64,
}

/// Ordinary least squares of `ys` against `xs`. Degenerate inputs (fewer
/// than two points, or zero variance in `xs`) yield a flat, insignificant
/// fit rather than NaN.
pub(crate) fn linear_regression(xs: &[f64], ys: &[f64]) -> Regression {
    let n = xs.len();
    debug_assert_eq!(n, ys.len());
    if n < 2 {
        return Regression {
            slope: 0.0,
            r_squared: 0.0,
            p_value: 1.0,
        };
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
        syy += (y - mean_y) * (y - mean_y);
    }

    if sxx <= f64::EPSILON {
        return Regression {
            slope: 0.0,
            r_squared: 0.0,
            p_value: 1.0,
        };
    }

    let slope = sxy / sxx;
    let r_squared = if syy <= f64::EPSILON {
        0.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    // Two-sided t-test on the slope. With two points the fit is exact and
    // carries no evidence; with zero residual variance the trend is taken
    // as certain.
    let p_value = if n <= 2 {
        1.0
    } else {
        let df = nf - 2.0;
        let residual = (syy - slope * sxy).max(0.0);
        if residual <= f64::EPSILON {
            0.0
        } else {
            let se = (residual / df / sxx).sqrt();
            let t = slope / se;
            student_t_two_sided_p(t.abs(), df)
        }
    };

    Regression {
        slope,
        r_squared,
        p_value,
    }
}

/// Sample standard deviation.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}

/// P(|T| > t) for a Student t with `df` degrees of freedom, via the
/// regularized incomplete beta identity I_{df/(df+t²)}(df/2, 1/2).
fn student_t_two_sided_p(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    incomplete_beta(df / 2.0, 0.5, x).clamp(0.0, 1.0)
}

/// Regularized incomplete beta function I_x(a, b), continued-fraction form.
fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Lentz's algorithm for the continued fraction of the incomplete beta.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITER: usize = 200;
    const TINY: f64 = 1e-30;
    const EPS: f64 = 1e-12;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < TINY {
        d = TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITER {
        let mf = m as f64;
        let m2 = 2.0 * mf;

        let aa = mf * (b - mf) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(a + mf) * (qab + mf) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;

        if (del - 1.0).abs() < EPS {
            break;
        }
    }
    h
}

/// Lanczos approximation of ln Γ(x).
fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        76.18009172947146,
        -86.50532032941677,
        24.01409824083091,
        -1.231739572450155,
        0.1208650973866179e-2,
        -0.5395239384953e-5,
    ];

    let mut y = x;
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();
    let mut ser = 1.000000000190015;
    for c in COEFFS {
        y += 1.0;
        ser += c / y;
    }
    -tmp + (2.5066282746310005 * ser / x).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive_fit() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [10.0, 12.0, 14.0, 16.0];
        let reg = linear_regression(&xs, &ys);
        assert!((reg.slope - 2.0).abs() < 1e-9);
        assert!((reg.r_squared - 1.0).abs() < 1e-9);
        assert!(reg.p_value < 1e-6);
    }

    #[test]
    fn two_points_carry_no_significance() {
        let reg = linear_regression(&[0.0, 7.0], &[40.0, 60.0]);
        assert!((reg.slope - 20.0 / 7.0).abs() < 1e-9);
        assert!((reg.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let reg = linear_regression(&[0.0, 1.0, 2.0], &[50.0, 50.0, 50.0]);
        assert_eq!(reg.slope, 0.0);
        assert_eq!(reg.r_squared, 0.0);
    }

    #[test]
    fn noisy_series_has_large_p() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [50.0, 55.0, 48.0, 53.0, 49.0, 54.0];
        let reg = linear_regression(&xs, &ys);
        assert!(reg.p_value > 0.3, "p = {}", reg.p_value);
    }

    #[test]
    fn ln_gamma_matches_known_values() {
        // Γ(5) = 24
        assert!((ln_gamma(5.0) - 24f64.ln()).abs() < 1e-9);
        // Γ(0.5) = √π
        assert!((ln_gamma(0.5) - std::f64::consts::PI.sqrt().ln()).abs() < 1e-9);
    }

    #[test]
    fn std_dev_of_known_sample() {
        let sd = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.138089935299395).abs() < 1e-9);
    }
}
