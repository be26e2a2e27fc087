//! Recipientes que entran y salen de la maquina

use crate::coffee_type::CoffeeType;

/// Capacidad comun de los recipientes: cuanto les entra, si estan vacios,
/// y que variedad contienen. La variedad solo tiene sentido si el recipiente no esta vacio.
pub trait Container {
    fn capacity(&self) -> f64;
    fn is_empty(&self) -> bool;
    fn coffee_type(&self) -> Option<CoffeeType>;
}

/// Taza que entrega el cliente. Tiene que estar vacia para pedir un cafe.
#[derive(Debug)]
pub struct Cup {
    pub capacity: f64,
    pub empty: bool,
}

impl Cup {
    pub fn new(capacity: f64) -> Cup {
        Cup {
            capacity,
            empty: true,
        }
    }
}

impl Container for Cup {
    fn capacity(&self) -> f64 {
        self.capacity
    }

    fn is_empty(&self) -> bool {
        self.empty
    }

    fn coffee_type(&self) -> Option<CoffeeType> {
        None
    }
}

/// Cafe servido por la maquina. Nunca esta vacio y conserva la capacidad
/// del recipiente que se le dio a la maquina.
#[derive(Debug, PartialEq)]
pub struct CoffeeContainer {
    pub capacity: f64,
    pub coffee_type: CoffeeType,
}

impl CoffeeContainer {
    pub fn new(capacity: f64, coffee_type: CoffeeType) -> CoffeeContainer {
        CoffeeContainer {
            capacity,
            coffee_type,
        }
    }
}

impl Container for CoffeeContainer {
    fn capacity(&self) -> f64 {
        self.capacity
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn coffee_type(&self) -> Option<CoffeeType> {
        Some(self.coffee_type)
    }
}
