mod error;
mod openfaas;
pub use openfaas::*;

pub use error::*;

/// label a function carries to opt in to scale to zero
pub const SCALE_ZERO_LABEL: &str = "com.openfaas.scale.zero";
