//! Application services for priority reference handling.

mod normalizer;

pub use normalizer::{
    PRIORITY_FIELD, PriorityNormalizer, PriorityResolution, PriorityResolutionError,
    PriorityResolutionResult,
};
