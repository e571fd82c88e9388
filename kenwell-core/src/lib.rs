pub use kenwell_entities as entities;

pub mod authorization;
pub mod gateways;
pub mod repositories;
pub mod usecases;
