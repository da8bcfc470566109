//! Next-screen computation and navigation.
//!
//! Screens advance forward-only through a fixed order; a step whose
//! precondition is not met by the session's answers is skipped. "Back"
//! affordances are the host navigation layer's concern.

use salus_core::{
  Error, Result,
  assessment::{AssessmentSession, HealthStatus, TreatmentChoice},
  screen::{Navigator, Screen},
};

/// Compute the screen that follows `current`, given the session's answers.
///
/// Pure — no I/O, no mutation. Skip rules:
/// - a healthy answer skips the symptom and treatment steps entirely;
/// - the treatment steps are skipped unless the location answer is
///   hospital-related;
/// - the free-text treatment screen is reached only via an "other"
///   treatment choice.
pub fn next_screen(
  current: Screen,
  session: &AssessmentSession,
) -> Result<Screen> {
  if current.is_terminal() {
    return Err(Error::Invariant("no screen follows the terminal screen"));
  }

  let next = match current {
    Screen::HealthWorkerExposure => Screen::HowYouFeel,

    Screen::HowYouFeel => match session.answers.health_status {
      Some(HealthStatus::Healthy) => Screen::ThankYou,
      _ => Screen::DescribeSymptoms,
    },

    Screen::DescribeSymptoms => Screen::WhereAreYou,

    Screen::WhereAreYou => match session.answers.location {
      Some(location) if location.is_hospital_related() => {
        Screen::TreatmentSelection
      }
      _ => Screen::ThankYou,
    },

    Screen::TreatmentSelection => match session.answers.treatment {
      Some(TreatmentChoice::Other) => Screen::TreatmentOther,
      _ => Screen::ThankYou,
    },

    Screen::TreatmentOther | Screen::ThankYou => Screen::ThankYou,
  };
  Ok(next)
}

/// Drives wizard navigation for one assessment run.
///
/// Holds the navigation context established by [`reset_navigation`]
/// (re-established for every fresh assessment); the session itself lives
/// with the caller and is passed into each step.
///
/// [`reset_navigation`]: AssessmentCoordinator::reset_navigation
pub struct AssessmentCoordinator<N: Navigator> {
  navigator: Option<N>,
}

impl<N: Navigator> Default for AssessmentCoordinator<N> {
  fn default() -> Self { Self::new() }
}

impl<N: Navigator> AssessmentCoordinator<N> {
  pub fn new() -> Self { Self { navigator: None } }

  /// Establish (or replace) the navigation context for a fresh wizard run.
  pub fn reset_navigation(&mut self, navigator: N) {
    self.navigator = Some(navigator);
  }

  /// Advance from `current` to the next applicable screen.
  ///
  /// Requires an allocated assessment id: advancing without one could
  /// silently corrupt the eventual submission, so it fails loudly instead.
  pub fn goto_next_screen(
    &mut self,
    current: Screen,
    session: &AssessmentSession,
  ) -> Result<Screen> {
    if session.assessment_id.is_none() {
      tracing::error!(
        %current,
        "asked to advance the wizard with no assessment id allocated"
      );
      return Err(Error::Invariant(
        "cannot advance the wizard without an assessment id",
      ));
    }

    let next = next_screen(current, session)?;
    tracing::debug!(%current, %next, "advancing assessment wizard");

    let navigator = self
      .navigator
      .as_mut()
      .ok_or(Error::Invariant("navigation context not established"))?;
    navigator.navigate_to(next);
    Ok(next)
  }
}
