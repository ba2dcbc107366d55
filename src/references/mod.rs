// Module declarations
pub(crate) mod references_errors;
pub(crate) mod references_model;
pub(crate) mod references_service;
pub(crate) mod references_traits;

// Re-export the public interface
pub use references_model::{
    Beer, BeerBrand, BrandUpdate, Country, CountryUpdate, NewBrand, NewCountry,
};
pub use references_service::ReferenceService;
pub use references_traits::{ReferenceRepositoryTrait, ReferenceServiceTrait};

// Re-export error types for convenience
pub use references_errors::ReferenceError;
