pub mod faas;
pub mod faas_provider;
