use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::coffee_type::CoffeeType;
use crate::errors::CoffeeMachineError;
use crate::order::Order;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    coffee_type: CoffeeType,
    cup_capacity: f64,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn get_orders_from_json(json_orders: Vec<JsonOrder>) -> Vec<Order> {
    let mut orders = Vec::new();
    for (id, order) in json_orders.into_iter().enumerate() {
        debug!("[READER] Read order {} for a {:?}", id, order.coffee_type);
        orders.push(Order::new(id, order.coffee_type, order.cup_capacity));
    }
    orders
}

/// Lee los pedidos del archivo indicado y los numera en orden de aparicion.
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, CoffeeMachineError> {
    match read_orders_from_file(path) {
        Ok(json_orders) => {
            let orders = get_orders_from_json(json_orders);
            info!("[READER] {} orders to prepare", orders.len());
            Ok(orders)
        }
        Err(_) => Err(CoffeeMachineError::FileReader),
    }
}
