//! The assessment-wizard screens and the navigation seam.
//!
//! Screens form a fixed forward order; conditional skips over this order are
//! computed in `salus-assessment`. "Back" affordances belong to the host
//! navigation layer and are out of scope here.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The screens of the assessment wizard, in wizard order.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Screen {
  HealthWorkerExposure,
  HowYouFeel,
  DescribeSymptoms,
  WhereAreYou,
  TreatmentSelection,
  TreatmentOther,
  /// Terminal: the assessment has been submitted. No successor exists.
  ThankYou,
}

impl Screen {
  pub fn is_terminal(&self) -> bool { matches!(self, Self::ThankYou) }
}

/// The navigation seam implemented by the host UI shell.
pub trait Navigator: Send {
  fn navigate_to(&mut self, screen: Screen);
}
