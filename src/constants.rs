//! Parametros de configuracion de la maquina de cafe

/// Volumen minimo del tanque de agua (en litros)
pub const MIN_WATER_STORAGE: f64 = 0.0;

/// Volumen maximo del tanque de agua (en litros)
pub const MAX_WATER_STORAGE: f64 = 10.0;

/// Volumen minimo del tanque de granos
pub const MIN_COFFEE_STORAGE: f64 = 0.0;

/// Volumen maximo del tanque de granos
pub const MAX_COFFEE_STORAGE: f64 = 10.0;

/// Agua que consume la preparacion de un cafe (en litros)
pub const WATER_NEEDED_PER_COFFEE: f64 = 0.2;

/// Granos que consume la preparacion de un cafe
pub const COFFEE_NEEDED_PER_COFFEE: f64 = 0.1;

/// Magnitud de la muestra gaussiana a partir de la cual la maquina queda fuera de servicio
pub const FAILURE_THRESHOLD: f64 = 0.7;

/// Capacidad de bombeo de la bomba de agua (litros por hora)
pub const PUMPING_CAPACITY: f64 = 700.0;

/// Cantidad de intentos que hace el dispenser por pedido antes de descartarlo
pub const MAX_ATTEMPTS_PER_ORDER: usize = 3;

/// Archivo del que se leen los pedidos
pub const ORDERS_FILE: &str = "orders.json";
