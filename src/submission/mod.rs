// Module declarations
pub(crate) mod submission_builder;
pub(crate) mod submission_model;
pub(crate) mod submission_resolver;
pub(crate) mod submission_validation;

// Re-export the public interface
pub use submission_builder::{build_create_request, canonical_date, canonical_local_date};
pub use submission_model::{
    BeerChoice, BeerResolution, BrandChoice, BrandResolution, CapForm, CapImage, CountryChoice,
    CountryResolution, CreateCapRequest,
};
pub use submission_resolver::resolve;
pub use submission_validation::{validate, ValidationErrors};
