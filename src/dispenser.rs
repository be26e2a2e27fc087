//! Dispenser de la cafetera. Sirve los pedidos contra la maquina y repone
//! los tanques cuando un pedido se queda sin recursos.

use log::{debug, error, info};

use crate::{
    coffee_machine::CoffeeMachine,
    constants::MAX_ATTEMPTS_PER_ORDER,
    container::{Container, Cup},
    errors::CoffeeMachineError,
    order::Order,
};

/// Sirve los pedidos de a uno. Si la maquina queda fuera de servicio despues
/// de un pedido la resetea antes de seguir. Devuelve la cantidad de pedidos servidos.
pub fn serve_orders(machine: &mut CoffeeMachine, orders: Vec<Order>) -> u64 {
    let mut served = 0;
    for order in orders {
        if serve_order(machine, &order) {
            served += 1;
        }
        if machine.is_out_of_order() {
            info!("[DISPENSER] The machine broke down, resetting it");
            machine.reset();
        }
    }
    info!("[DISPENSER] Served {} orders", served);
    served
}

fn serve_order(machine: &mut CoffeeMachine, order: &Order) -> bool {
    for _ in 0..MAX_ATTEMPTS_PER_ORDER {
        let cup = Cup::new(order.cup_capacity);
        match machine.make_coffee(&cup, order.coffee_type) {
            Ok(coffee) => {
                debug!(
                    "[DISPENSER] Order {} served, a {:?} of {} liters",
                    order.id,
                    order.coffee_type,
                    coffee.capacity()
                );
                return true;
            }
            Err(CoffeeMachineError::LackOfWater) => {
                info!("[DISPENSER] Not enough water for order {}, refilling the tank", order.id);
                refill_water(machine);
            }
            Err(CoffeeMachineError::CoffeeTypeMismatch) | Err(CoffeeMachineError::LackOfBeans) => {
                info!(
                    "[DISPENSER] Loading {:?} beans in the tank for order {}",
                    order.coffee_type, order.id
                );
                load_beans(machine, order);
            }
            Err(error) => {
                error!("[DISPENSER] Skipped order {}, {}", order.id, error);
                return false;
            }
        }
    }
    error!(
        "[DISPENSER] Skipped order {} after {} attempts",
        order.id, MAX_ATTEMPTS_PER_ORDER
    );
    false
}

fn refill_water(machine: &mut CoffeeMachine) {
    let amount = machine.water_tank().max_volume() - machine.water_tank().actual_volume();
    if let Err(error) = machine.add_water(amount) {
        error!("[DISPENSER] Error refilling the water tank, {}", error);
    }
}

fn load_beans(machine: &mut CoffeeMachine, order: &Order) {
    let amount = machine.bean_tank().max_volume() - machine.bean_tank().actual_volume();
    if let Err(error) = machine.add_beans(amount, order.coffee_type) {
        error!("[DISPENSER] Error loading the bean tank, {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coffee_type::CoffeeType;
    use crate::random_generator::FixedGenerator;

    fn machine_under_test() -> CoffeeMachine {
        let mut machine = CoffeeMachine::new(0.0, 10.0, 0.0, 10.0, 700.0);
        machine.set_random_generator(Box::new(FixedGenerator::new(0.0)));
        machine.plug_in();
        machine
    }

    #[test]
    fn should_serve_every_order_refilling_the_empty_machine() {
        let mut machine = machine_under_test();
        let orders = vec![
            Order::new(0, CoffeeType::Arabica, 0.25),
            Order::new(1, CoffeeType::Arabica, 0.25),
            Order::new(2, CoffeeType::Moka, 0.3),
        ];

        let served = serve_orders(&mut machine, orders);

        assert_eq!(3, served);
        assert_eq!(3, machine.nb_coffee_made());
    }

    #[test]
    fn should_skip_crema_orders_and_serve_the_rest() {
        let mut machine = machine_under_test();
        let orders = vec![
            Order::new(0, CoffeeType::ArabicaCrema, 0.25),
            Order::new(1, CoffeeType::Bahia, 0.25),
        ];

        let served = serve_orders(&mut machine, orders);

        assert_eq!(1, served);
        assert_eq!(1, machine.nb_coffee_made());
    }

    #[test]
    fn should_not_serve_anything_with_the_machine_unplugged() {
        let mut machine = CoffeeMachine::new(0.0, 10.0, 0.0, 10.0, 700.0);
        let orders = vec![Order::new(0, CoffeeType::Arabica, 0.25)];

        let served = serve_orders(&mut machine, orders);

        assert_eq!(0, served);
        assert_eq!(0, machine.nb_coffee_made());
    }

    #[test]
    fn should_reset_the_machine_when_a_brew_leaves_it_out_of_order() {
        let mut machine = machine_under_test();
        machine.set_random_generator(Box::new(FixedGenerator::new(1.0)));
        let orders = vec![
            Order::new(0, CoffeeType::Arabica, 0.25),
            Order::new(1, CoffeeType::Arabica, 0.25),
        ];

        let served = serve_orders(&mut machine, orders);

        assert_eq!(2, served);
        assert_eq!(false, machine.is_out_of_order());
    }
}
