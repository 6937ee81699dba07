// Domain types and value objects
// These modules contain pure business logic independent of UI/visualization

pub mod candidate;
pub mod interest;
pub mod query;
pub mod reset;
pub mod wizard;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateId, MapPoint};
pub use interest::Interest;
pub use query::DiscoveryQuery;
pub use reset::{PasswordResetFlow, ResetAction, ResetPhase};
pub use wizard::{RegistrationWizard, WizardOutcome, WizardStep, ETHNICITIES};
