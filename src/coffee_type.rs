//! Variedades de cafe que puede preparar la maquina

use serde::Deserialize;

/// Variedad de cafe. Las variantes `*Crema` requieren una maquina con
/// capacidad de crema, la maquina simple las rechaza.
#[derive(Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoffeeType {
    Arabica,
    ArabicaCrema,
    Robusta,
    RobustaCrema,
    Moka,
    Bahia,
}

impl CoffeeType {
    pub fn has_crema(&self) -> bool {
        matches!(self, CoffeeType::ArabicaCrema | CoffeeType::RobustaCrema)
    }
}
