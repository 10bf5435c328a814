// Domain layer: models, pricing rules and ports. No I/O.

pub mod model;
pub mod ports;
pub mod pricing;
