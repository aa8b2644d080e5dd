/// Development utilities module
///
/// In-memory stand-in for the settings service, used by tests and by the
/// `--mock` flag of development builds.

pub mod mock_service;

pub use mock_service::{MockCall, MockSettingsService};
