//! Fuente de aleatoriedad de la maquina. Se inyecta para poder controlarla en los tests.

use rand::{rngs::ThreadRng, thread_rng, Rng};
use rand_distr::StandardNormal;

/// Estrategia de muestreo gaussiano que usa la evaluacion de fallas.
pub trait GaussianGenerator {
    fn next_gaussian(&mut self) -> f64;
}

/// Generador por defecto, muestrea una normal estandar con el rng del thread.
pub struct RandomGenerator {
    rng: ThreadRng,
}

impl RandomGenerator {
    pub fn new() -> RandomGenerator {
        RandomGenerator { rng: thread_rng() }
    }
}

impl GaussianGenerator for RandomGenerator {
    fn next_gaussian(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Generador que devuelve siempre el mismo valor, para los tests.
#[cfg(test)]
pub struct FixedGenerator {
    value: f64,
}

#[cfg(test)]
impl FixedGenerator {
    pub fn new(value: f64) -> FixedGenerator {
        FixedGenerator { value }
    }
}

#[cfg(test)]
impl GaussianGenerator for FixedGenerator {
    fn next_gaussian(&mut self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_sample_a_finite_value() {
        let mut generator = RandomGenerator::new();
        let sample = generator.next_gaussian();
        assert_eq!(true, sample.is_finite());
    }

    #[test]
    fn should_return_the_fixed_value() {
        let mut generator = FixedGenerator::new(0.6);
        assert_eq!(0.6, generator.next_gaussian());
        assert_eq!(0.6, generator.next_gaussian());
    }
}
