// Module declarations
pub(crate) mod caps_errors;
pub(crate) mod caps_model;
pub(crate) mod caps_service;
pub(crate) mod caps_traits;

#[cfg(test)]
pub(crate) mod caps_service_tests;

// Re-export the public interface
pub use caps_model::{BeerCap, CapUpdate};
pub use caps_service::CapService;
pub use caps_traits::{CapRepositoryTrait, CapServiceTrait};

// Re-export error types for convenience
pub use caps_errors::CapError;
