use thiserror::Error;

/// Errores que pueden devolver las operaciones de la maquina y del harness.
/// Cada variante señala una precondicion incumplida, ninguna se reintenta internamente.
#[derive(Error, Debug, PartialEq)]
pub enum CoffeeMachineError {
    #[error("The volume of the tank cannot go beyond its bounds.")]
    InvalidVolume,
    #[error("The coffee machine is not plugged to an electrical plug.")]
    MachineNotPlugged,
    #[error("The container given to the machine is not empty.")]
    CupNotEmpty,
    #[error("You cannot make a coffee with crema with a simple coffee machine.")]
    UnsupportedFeature,
    #[error("You must add more water in the water tank.")]
    LackOfWater,
    #[error("The type of coffee to be made in the cup is different from that in the tank.")]
    CoffeeTypeMismatch,
    #[error("You must add more coffee beans in the bean tank.")]
    LackOfBeans,
    #[error("Error while reading the orders file.")]
    FileReader,
}
