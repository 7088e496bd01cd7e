pub mod forms;
pub mod password;
pub mod toggle;

pub use forms::{validate_registration, validate_review, RegistrationForm, RegistrationIssue, ReviewIssue};
pub use password::{PasswordCheck, PasswordRequirement, SPECIAL_CHARACTERS};
pub use toggle::{OptimisticToggle, ToggleState};
