pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

/// Creates a test context with all application tables.
///
/// Expands to `TestBuilder::new().with_tables().build().await`, so it must be
/// used inside an async test and unwrapped with `?`.
#[macro_export]
macro_rules! test_setup {
    () => {
        $crate::TestBuilder::new().with_tables().build().await
    };
}

pub mod prelude {
    pub use crate::{test_setup, TestBuilder, TestContext, TestError};
}
