pub mod coffee_machine;
pub mod coffee_type;
pub mod constants;
pub mod container;
pub mod dispenser;
pub mod errors;
pub mod order;
pub mod orders_reader;
pub mod random_generator;
pub mod statistics;
pub mod tank;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use crate::{
    coffee_machine::CoffeeMachine,
    constants::{
        MAX_COFFEE_STORAGE, MAX_WATER_STORAGE, MIN_COFFEE_STORAGE, MIN_WATER_STORAGE, ORDERS_FILE,
        PUMPING_CAPACITY,
    },
    dispenser::serve_orders,
    orders_reader::read_orders,
    statistics::print_statistics,
};

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("Error al inicializar el logger");

    let mut machine = CoffeeMachine::new(
        MIN_WATER_STORAGE,
        MAX_WATER_STORAGE,
        MIN_COFFEE_STORAGE,
        MAX_COFFEE_STORAGE,
        PUMPING_CAPACITY,
    );
    machine.plug_in();

    let orders = match read_orders(ORDERS_FILE) {
        Ok(orders) => orders,
        Err(e) => {
            error!("[MAIN] {}", e);
            return;
        }
    };

    serve_orders(&mut machine, orders);
    print_statistics(&machine);
}
