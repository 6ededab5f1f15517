use web_sys::js_sys::Math;

/// Uniform random numbers for layout scattering.
///
/// Everything that places things randomly on the page (floating hearts,
/// particle bursts, the evasive button) draws from one of these so tests can
/// swap in a deterministic source.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    fn between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    fn percent(&mut self) -> f64 {
        self.next_unit() * 100.0
    }
}

/// `Math.random()` from the host page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        Math::random()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Scripted, Seeded};
    use super::RandomSource;

    #[test]
    fn scripted_values_wrap() {
        let mut rng = Scripted::new(&[0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
    }

    #[test]
    fn between_maps_unit_interval() {
        let mut rng = Scripted::new(&[0.0, 0.5]);
        assert_eq!(rng.between(5.0, 15.0), 5.0);
        assert_eq!(rng.between(5.0, 15.0), 10.0);
    }

    #[test]
    fn seeded_stays_in_unit_range_and_repeats() {
        let mut a = Seeded::new(42);
        let mut b = Seeded::new(42);
        for _ in 0..1000 {
            let v = a.next_unit();
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, b.next_unit());
        }
    }
}
