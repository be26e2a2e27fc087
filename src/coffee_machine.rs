//! La maquina de cafe. Procesa los pedidos de cafe validando las precondiciones,
//! consumiendo de los tanques y evaluando si la maquina queda fuera de servicio.

use log::{debug, info};

use crate::{
    coffee_type::CoffeeType,
    constants::{COFFEE_NEEDED_PER_COFFEE, FAILURE_THRESHOLD, WATER_NEEDED_PER_COFFEE},
    container::{CoffeeContainer, Container},
    errors::CoffeeMachineError,
    random_generator::{GaussianGenerator, RandomGenerator},
    tank::{BeanTank, Tank},
};

/// Maquina de cafe simple. Es dueña de sus dos tanques, los demas actores
/// solo los tocan a traves de sus operaciones publicas.
pub struct CoffeeMachine {
    plugged: bool,
    out_of_order: bool,
    nb_coffee_made: u32,
    water_tank: Tank,
    bean_tank: BeanTank,
    random_generator: Box<dyn GaussianGenerator>,
    pumping_capacity: f64,
}

impl CoffeeMachine {
    /// Crea la maquina desenchufada, sin fallas y con ambos tanques en su volumen minimo.
    pub fn new(
        min_water_volume: f64,
        max_water_volume: f64,
        min_bean_volume: f64,
        max_bean_volume: f64,
        pumping_capacity: f64,
    ) -> CoffeeMachine {
        CoffeeMachine {
            plugged: false,
            out_of_order: false,
            nb_coffee_made: 0,
            water_tank: Tank::new(min_water_volume, max_water_volume, min_water_volume),
            bean_tank: BeanTank::new(min_bean_volume, max_bean_volume, min_bean_volume),
            random_generator: Box::new(RandomGenerator::new()),
            pumping_capacity,
        }
    }

    /// Enchufa la maquina. Volver a enchufarla no cambia nada.
    pub fn plug_in(&mut self) {
        self.plugged = true;
    }

    pub fn is_plugged(&self) -> bool {
        self.plugged
    }

    pub fn is_out_of_order(&self) -> bool {
        self.out_of_order
    }

    pub fn nb_coffee_made(&self) -> u32 {
        self.nb_coffee_made
    }

    pub fn pumping_capacity(&self) -> f64 {
        self.pumping_capacity
    }

    pub fn random_generator(&self) -> &dyn GaussianGenerator {
        self.random_generator.as_ref()
    }

    /// Reemplaza la fuente de aleatoriedad de la evaluacion de fallas.
    pub fn set_random_generator(&mut self, random_generator: Box<dyn GaussianGenerator>) {
        self.random_generator = random_generator;
    }

    /// Saca la maquina del estado fuera de servicio y pone el contador de cafes en cero.
    /// Los tanques quedan como estaban.
    pub fn reset(&mut self) {
        self.out_of_order = false;
        self.nb_coffee_made = 0;
    }

    /// Toma una muestra gaussiana y si su magnitud supera el umbral
    /// la maquina queda fuera de servicio hasta un `reset`.
    pub fn evaluate_failure(&mut self) {
        let sample = self.random_generator.next_gaussian();
        if sample.abs() > FAILURE_THRESHOLD {
            info!("[MACHINE] The machine is now out of order");
            self.out_of_order = true;
        }
    }

    /// Agrega agua al tanque de agua.
    pub fn add_water(&mut self, amount: f64) -> Result<(), CoffeeMachineError> {
        self.water_tank.increase_volume(amount)?;
        debug!("[MACHINE] Added {} of water to the tank", amount);
        Ok(())
    }

    /// Carga granos de la variedad indicada en el tanque de granos.
    pub fn add_beans(
        &mut self,
        amount: f64,
        coffee_type: CoffeeType,
    ) -> Result<(), CoffeeMachineError> {
        self.bean_tank.load_beans(amount, coffee_type)?;
        debug!("[MACHINE] Added {} of {:?} beans to the tank", amount, coffee_type);
        Ok(())
    }

    /// Prepara un cafe de la variedad pedida en un recipiente con la capacidad
    /// del que entrega el cliente. Las validaciones cortan en el primer error
    /// y no dejan ningun estado a medias. La evaluacion de fallas posterior
    /// puede dejar la maquina fuera de servicio, pero el cafe ya esta servido.
    pub fn make_coffee(
        &mut self,
        container: &dyn Container,
        coffee_type: CoffeeType,
    ) -> Result<CoffeeContainer, CoffeeMachineError> {
        if !self.plugged {
            return Err(CoffeeMachineError::MachineNotPlugged);
        }
        if !container.is_empty() {
            return Err(CoffeeMachineError::CupNotEmpty);
        }
        if coffee_type.has_crema() {
            return Err(CoffeeMachineError::UnsupportedFeature);
        }
        if self.water_tank.actual_volume() - WATER_NEEDED_PER_COFFEE < self.water_tank.min_volume()
        {
            return Err(CoffeeMachineError::LackOfWater);
        }
        if self.bean_tank.coffee_type() != Some(coffee_type) {
            return Err(CoffeeMachineError::CoffeeTypeMismatch);
        }
        if self.bean_tank.actual_volume() - COFFEE_NEEDED_PER_COFFEE < self.bean_tank.min_volume()
        {
            return Err(CoffeeMachineError::LackOfBeans);
        }

        self.water_tank.decrease_volume(WATER_NEEDED_PER_COFFEE)?;
        self.bean_tank.decrease_volume(COFFEE_NEEDED_PER_COFFEE)?;
        let coffee = CoffeeContainer::new(container.capacity(), coffee_type);
        self.nb_coffee_made += 1;
        debug!(
            "[MACHINE] Made a {:?} coffee, {} made so far",
            coffee_type, self.nb_coffee_made
        );
        self.evaluate_failure();
        Ok(coffee)
    }

    pub fn water_tank(&self) -> &Tank {
        &self.water_tank
    }

    /// Acceso directo al tanque de agua. Saltea la contabilidad de la maquina,
    /// esta pensado para armar escenarios en los tests.
    pub fn water_tank_mut(&mut self) -> &mut Tank {
        &mut self.water_tank
    }

    pub fn bean_tank(&self) -> &BeanTank {
        &self.bean_tank
    }

    /// Acceso directo al tanque de granos. Saltea la contabilidad de la maquina,
    /// esta pensado para armar escenarios en los tests.
    pub fn bean_tank_mut(&mut self) -> &mut BeanTank {
        &mut self.bean_tank
    }
}
