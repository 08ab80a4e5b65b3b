//! Zero-pole-gain decompositions and the conversion seam used by the plotting
//! routines.

use num::complex::Complex64;

use crate::Error;

/// A transfer function in zero-pole-gain form: the roots of its numerator,
/// the roots of its denominator, and a scalar gain.
#[derive(Clone, Debug, PartialEq)]
pub struct Zpk {
    zeros: Vec<Complex64>,
    poles: Vec<Complex64>,
    gain: f64,
}

impl Zpk {
    #[must_use]
    pub const fn new(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self { zeros, poles, gain }
    }

    #[must_use]
    pub fn zeros(&self) -> &[Complex64] {
        &self.zeros
    }

    #[must_use]
    pub fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    #[must_use]
    pub const fn gain(&self) -> f64 {
        self.gain
    }

    pub(crate) fn into_parts(self) -> (Vec<Complex64>, Vec<Complex64>, f64) {
        (self.zeros, self.poles, self.gain)
    }
}

/// Conversion of a transfer-function representation into zero-pole-gain form.
///
/// This is the seam between plotting and filter math: [`plot_pz`] accepts
/// anything implementing this trait and calls [`to_zpk`] exactly once per
/// render. Coefficient (num/den) or state-space representations should
/// implement it on top of their own root finder; this crate deliberately
/// ships none.
///
/// [`plot_pz`]: crate::plot_pz
/// [`to_zpk`]: ToZpk::to_zpk
pub trait ToZpk {
    /// Decompose into zeros, poles and gain.
    ///
    /// # Errors
    /// [`Error::Conversion`] when the representation cannot be interpreted.
    fn to_zpk(&self) -> Result<Zpk, Error>;
}

impl ToZpk for Zpk {
    fn to_zpk(&self) -> Result<Zpk, Error> {
        Ok(self.clone())
    }
}

/// An explicit `(zeros, poles, gain)` tuple is already in zpk form.
impl ToZpk for (Vec<Complex64>, Vec<Complex64>, f64) {
    fn to_zpk(&self) -> Result<Zpk, Error> {
        Ok(Zpk::new(self.0.clone(), self.1.clone(), self.2))
    }
}

impl<T: ToZpk + ?Sized> ToZpk for &T {
    fn to_zpk(&self) -> Result<Zpk, Error> {
        (**self).to_zpk()
    }
}

#[cfg(test)]
mod test {
    use super::{ToZpk, Zpk};
    use num::complex::Complex64;

    #[test]
    fn tuple_is_identity() {
        let h = (
            vec![Complex64::new(-1.0, 0.0)],
            vec![Complex64::new(0.5, 0.3)],
            2.0,
        );
        let zpk = h.to_zpk().unwrap();
        assert_eq!(zpk.zeros(), &h.0[..]);
        assert_eq!(zpk.poles(), &h.1[..]);
        assert_eq!(zpk.gain(), 2.0);
    }
}
