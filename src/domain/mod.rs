// Domain layer: holdings, the optimizer and the roster port. No external dependencies beyond serde.

pub mod model;
pub mod ports;
pub mod services;
