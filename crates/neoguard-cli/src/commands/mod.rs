//! Command implementations.

pub mod analyze;
pub mod batch;
pub mod history;
pub mod profile;
pub mod report;
pub mod verify;

pub use self::analyze::execute_analyze;
pub use self::batch::execute_batch;
pub use self::history::execute_history;
pub use self::profile::execute_profile;
pub use self::report::execute_report;
pub use self::verify::execute_verify;
