//! Declarative test builder.
//!
//! Configures a test environment before execution; all operations are queued
//! and executed during the final `build()` call.

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            include_tables: false,
        }
    }

    /// Create all application tables during `build()`.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Build the configured test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - In-memory database (with tables when requested)
    ///   and a fresh session
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.include_tables {
            context.create_tables().await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
