// Domain layer: tabular model and the ports the pipeline stages talk through.

pub mod model;
pub mod ports;
