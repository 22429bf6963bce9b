/// Diagnostic artifacts for percii.
///
/// Nothing here runs unless explicitly invoked: fitting stays a pure
/// function, plotting is a separate opt-in step.

pub mod histogram;

pub use histogram::write_histogram;
