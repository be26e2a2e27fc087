//! Resumen del estado de la maquina al final de la corrida

use crate::coffee_machine::CoffeeMachine;

/// Arma el resumen con los cafes hechos, el nivel de cada tanque y el estado de falla.
pub fn statistics_summary(machine: &CoffeeMachine) -> String {
    let mut statistics = format!(
        "[STATISTICS] Coffees made={} | Tank=(actual, max) |",
        machine.nb_coffee_made()
    );
    statistics.push_str(&format!(
        " Water=({:.2},{:.2}) ",
        machine.water_tank().actual_volume(),
        machine.water_tank().max_volume()
    ));
    statistics.push_str(&format!(
        " Beans=({:.2},{:.2},{:?}) ",
        machine.bean_tank().actual_volume(),
        machine.bean_tank().max_volume(),
        machine.bean_tank().coffee_type()
    ));
    statistics.push_str(&format!("| Out of order={}", machine.is_out_of_order()));
    statistics
}

pub fn print_statistics(machine: &CoffeeMachine) {
    println!("{}", statistics_summary(machine));
}
