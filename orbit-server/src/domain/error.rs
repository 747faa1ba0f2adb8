//! Domain error types.
//!
//! These errors represent invariant violations when building domain values.
//! They are distinct from validation of user input and from catalog I/O.

use super::{OrbitId, Suburb};

/// Domain-level errors for construction of network values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Orbit distance must be positive
    #[error("orbit {0} must have a positive distance")]
    InvalidDistance(OrbitId),

    /// Route has no orbits
    #[error("route must have at least one orbit")]
    EmptyRoute,

    /// Consecutive orbits don't connect
    #[error("orbit ending at {0} does not connect to orbit starting at {1}")]
    BrokenChain(Suburb, Suburb),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidDistance(OrbitId::parse("Orbit1").unwrap());
        assert_eq!(err.to_string(), "orbit Orbit1 must have a positive distance");

        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one orbit");

        let err = DomainError::BrokenChain(
            Suburb::parse("Hallitharam").unwrap(),
            Suburb::parse("Bark").unwrap(),
        );
        assert_eq!(
            err.to_string(),
            "orbit ending at Hallitharam does not connect to orbit starting at Bark"
        );
    }
}
