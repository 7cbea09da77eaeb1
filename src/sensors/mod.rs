pub mod generator;
pub mod service;

pub use service::SimulationService;
