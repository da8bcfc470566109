//! Locality predicate — which country edition of the app is running.
//!
//! Several study prompts are offered only in the GB edition; the eligibility
//! checks short-circuit on this predicate before issuing any remote call.

/// The locality seam consulted by eligibility gating.
pub trait Locality: Send + Sync {
  fn is_gb_country(&self) -> bool;
}

/// A locality fixed to one ISO 3166-1 alpha-2 country code for the lifetime
/// of the session (the app edition does not change while signed in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoCountry(pub String);

impl IsoCountry {
  pub fn new(code: impl Into<String>) -> Self { Self(code.into()) }
}

impl Locality for IsoCountry {
  fn is_gb_country(&self) -> bool { self.0.eq_ignore_ascii_case("GB") }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gb_matches_case_insensitively() {
    assert!(IsoCountry::new("GB").is_gb_country());
    assert!(IsoCountry::new("gb").is_gb_country());
  }

  #[test]
  fn other_countries_do_not_match() {
    assert!(!IsoCountry::new("US").is_gb_country());
    assert!(!IsoCountry::new("SE").is_gb_country());
  }
}
