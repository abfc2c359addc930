//! Storage module for persisting simulation parameters.
//!
//! Parameters live in a small flat text file: five newline-separated
//! decimals in fixed order, written with four decimal places.

mod parameter_store;

pub use parameter_store::{LoadedParameters, ParameterOrigin, ParameterStore, StoreError};
