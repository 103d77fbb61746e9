//! Shared test utilities and re-exports for the command integration test suite.

use custom_commands::{
    CustomCommands, Preprocess,
    internal::namespace::Namespace,
    utils::test::{self, RecordingSender},
};
use tempfile::tempdir;

mod lifecycle_test;
mod preprocess_test;
