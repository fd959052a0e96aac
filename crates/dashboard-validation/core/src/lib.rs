//! Dashboard Validation Core
//!
//! Pure Rust field validation for the dashboard forms, plus the
//! presentation and controller logic that applies outcomes to fields.
//! Used natively in tests and by the WASM bindings in the browser.

pub mod codes;
pub mod config;
pub mod controller;
pub mod descriptor;
pub mod email;
pub mod error;
pub mod format;
pub mod notice;
pub mod numeric;
pub mod outcome;
pub mod password;
pub mod presenter;
pub mod rules;
pub mod storage;
pub mod string;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod username;
pub mod validator;

// Re-export all validators
pub use codes::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
pub use username::*;

pub use config::DashboardConfig;
pub use controller::{on_blur, on_input, on_submit, validate_view, SubmitVerdict};
pub use descriptor::{Constraints, FieldAttributes, FieldDescriptor, FieldKind};
pub use error::{StorageError, StorageResult};
pub use format::{format_currency, format_date_time, format_number, sanitize_input};
pub use notice::{Notice, NoticeLevel};
pub use outcome::ValidationOutcome;
pub use presenter::{present, FieldState, FieldView};
pub use rules::{Rule, RULES};
pub use storage::{MemoryStorage, StorageBackend};
pub use validator::{validate, validate_all};
