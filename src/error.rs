use thiserror::Error;

/// Failures surfaced by the fitting engine.
///
/// `ClubNotFound`/`ShaftNotFound` mean the caller passed an id that does not
/// resolve against the catalog; retrying with the same arguments will fail
/// again. `CatalogIntegrity` means the built-in catalog and the strategy
/// tables have drifted apart, which is a maintenance bug rather than bad
/// caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("club id {0} not found in catalog")]
    ClubNotFound(i32),
    #[error("shaft id {0} not found in catalog")]
    ShaftNotFound(i32),
    #[error("catalog integrity: {0}")]
    CatalogIntegrity(String),
}
