//! Tanques de recursos de la maquina. El volumen siempre queda dentro de los limites.

use crate::coffee_type::CoffeeType;
use crate::errors::CoffeeMachineError;

/// Deposito acotado de un recurso. Los limites quedan fijos al construirlo,
/// el volumen actual solo se mueve dentro de `[min_volume, max_volume]`.
pub struct Tank {
    min_volume: f64,
    max_volume: f64,
    actual_volume: f64,
}

impl Tank {
    pub fn new(min_volume: f64, max_volume: f64, initial_volume: f64) -> Tank {
        Tank {
            min_volume,
            max_volume,
            actual_volume: initial_volume,
        }
    }

    /// Agrega `amount` al tanque. Si el resultado supera el maximo no se modifica nada.
    pub fn increase_volume(&mut self, amount: f64) -> Result<(), CoffeeMachineError> {
        if self.actual_volume + amount > self.max_volume {
            return Err(CoffeeMachineError::InvalidVolume);
        }
        self.actual_volume += amount;
        Ok(())
    }

    /// Saca `amount` del tanque. Si el resultado queda debajo del minimo no se modifica nada.
    pub fn decrease_volume(&mut self, amount: f64) -> Result<(), CoffeeMachineError> {
        if self.actual_volume - amount < self.min_volume {
            return Err(CoffeeMachineError::InvalidVolume);
        }
        self.actual_volume -= amount;
        Ok(())
    }

    pub fn actual_volume(&self) -> f64 {
        self.actual_volume
    }

    pub fn min_volume(&self) -> f64 {
        self.min_volume
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }
}

/// Tanque de granos. Ademas del volumen recuerda la variedad cargada,
/// puede haber una sola variedad a la vez.
pub struct BeanTank {
    tank: Tank,
    coffee_type: Option<CoffeeType>,
}

impl BeanTank {
    pub fn new(min_volume: f64, max_volume: f64, initial_volume: f64) -> BeanTank {
        BeanTank {
            tank: Tank::new(min_volume, max_volume, initial_volume),
            coffee_type: None,
        }
    }

    /// Carga granos de la variedad `coffee_type`, pisando la variedad anterior.
    /// Si el volumen no entra en el tanque no se carga nada y la variedad no cambia.
    pub fn load_beans(
        &mut self,
        amount: f64,
        coffee_type: CoffeeType,
    ) -> Result<(), CoffeeMachineError> {
        self.tank.increase_volume(amount)?;
        self.coffee_type = Some(coffee_type);
        Ok(())
    }

    pub fn decrease_volume(&mut self, amount: f64) -> Result<(), CoffeeMachineError> {
        self.tank.decrease_volume(amount)
    }

    pub fn actual_volume(&self) -> f64 {
        self.tank.actual_volume()
    }

    pub fn min_volume(&self) -> f64 {
        self.tank.min_volume()
    }

    pub fn max_volume(&self) -> f64 {
        self.tank.max_volume()
    }

    pub fn coffee_type(&self) -> Option<CoffeeType> {
        self.coffee_type
    }
}
