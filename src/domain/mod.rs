// Domain layer: records and ports (interfaces) for the matching pipeline.

pub mod model;
pub mod ports;
