//! Assessment wizard coordination.
//!
//! [`AssessmentService`] drives the remote lifecycle of an assessment
//! (start, incremental save, completion) with stale-result guarding;
//! [`AssessmentCoordinator`] computes the next wizard screen from the
//! session state and drives the host navigation seam. The next-screen
//! computation itself is a pure function, independently testable.

pub mod coordinator;
pub mod service;

pub use coordinator::{AssessmentCoordinator, next_screen};
pub use service::AssessmentService;
