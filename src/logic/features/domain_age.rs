//! Domain Age - pluggable provider for the `domain_age` feature slot
//!
//! No registry lookup is performed; the default provider derives a proxy
//! value from the host string alone. A registry-backed provider can replace
//! it without changing the vector schema.

/// Source of the `domain_age` feature, in [0, 1].
pub trait DomainAgeProvider: Send + Sync {
    fn domain_age(&self, host: &str) -> f64;
}

/// Host-length proxy: `min(len(host) / 20, 1.0)`.
///
/// Placeholder heuristic, not a registration age.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostLengthProxy;

/// Host length at which the proxy saturates
pub const HOST_LENGTH_SATURATION: f64 = 20.0;

impl DomainAgeProvider for HostLengthProxy {
    fn domain_age(&self, host: &str) -> f64 {
        (host.chars().count() as f64 / HOST_LENGTH_SATURATION).min(1.0)
    }
}
