// Domain layer: record model and ports (interfaces) shared by the core, adapters and skills.

pub mod model;
pub mod ports;
