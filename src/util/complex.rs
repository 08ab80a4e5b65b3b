// internal utilities for dealing with Complex annoyances

use num::complex::Complex64;

/// round to `digits` decimal places
pub(crate) fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (v * scale).round() / scale
}

// decimal rounding of both components
pub(crate) fn c_round(z: Complex64, digits: i32) -> Complex64 {
    Complex64::new(round_to(z.re, digits), round_to(z.im, digits))
}

// collapse to a pure real when the imaginary part is within 100 machine
// epsilons of zero
pub(crate) fn real_if_close(z: Complex64) -> Complex64 {
    if z.im.abs() <= 100.0 * f64::EPSILON {
        Complex64::new(z.re, 0.0)
    } else {
        z
    }
}

/// Round roots to 5 decimal places and collapse numerically-real ones,
/// suppressing the spurious imaginary noise root finders leave behind.
pub(crate) fn clean_for_display(roots: &[Complex64]) -> Vec<Complex64> {
    roots.iter().map(|&z| real_if_close(c_round(z, 5))).collect()
}

/// Legend text for a root: `+0.7000` on the real axis, `+0.5000 +/- j0.3000`
/// for a conjugate pair. The root stands in for its conjugate, so only the
/// magnitude of the imaginary part is shown.
pub(crate) fn legend_label(z: Complex64) -> String {
    if z.im.abs() < 1e-5 {
        format!("{:+.4}", z.re)
    } else {
        format!("{:+.4} +/- j{:.4}", z.re, z.im.abs())
    }
}

#[cfg(test)]
mod test {
    use super::{c_round, clean_for_display, legend_label, real_if_close};
    use num::complex::Complex64;

    #[test]
    fn rounding_is_componentwise() {
        let z = c_round(Complex64::new(0.123_456, -0.987_654), 5);
        assert_eq!(z, Complex64::new(0.12346, -0.98765));
    }

    #[test]
    fn noise_below_epsilon_collapses() {
        let z = real_if_close(Complex64::new(0.7, 1e-15));
        assert_eq!(z.im, 0.0);
        // genuine imaginary parts survive
        let z = real_if_close(Complex64::new(0.7, 1e-3));
        assert_eq!(z.im, 1e-3);
    }

    #[test]
    fn cleanup_rounds_then_collapses() {
        let roots = [Complex64::new(0.5, 1e-6), Complex64::new(0.5, 0.3)];
        let cleaned = clean_for_display(&roots);
        assert_eq!(cleaned[0], Complex64::new(0.5, 0.0));
        assert_eq!(cleaned[1], Complex64::new(0.5, 0.3));
    }

    #[test]
    fn real_root_label_has_no_imaginary_suffix() {
        assert_eq!(legend_label(Complex64::new(0.7, 0.0)), "+0.7000");
    }

    #[test]
    fn near_real_root_is_listed_as_real() {
        // below the 1e-5 imaginary tolerance
        assert_eq!(legend_label(Complex64::new(0.7, 1e-6)), "+0.7000");
    }

    #[test]
    fn conjugate_pair_label() {
        assert_eq!(
            legend_label(Complex64::new(0.5, 0.3)),
            "+0.5000 +/- j0.3000"
        );
        assert_eq!(
            legend_label(Complex64::new(-0.25, 0.125)),
            "-0.2500 +/- j0.1250"
        );
    }

    #[test]
    fn lower_half_plane_root_shows_imaginary_magnitude() {
        // the label stands for the whole conjugate pair, so no sign leaks in
        assert_eq!(
            legend_label(Complex64::new(0.5, -0.3)),
            "+0.5000 +/- j0.3000"
        );
    }
}
