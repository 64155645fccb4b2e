// Domain layer: core models and ports (interfaces). No file or CSV handling here.

pub mod model;
pub mod ports;
