//! Common test utilities and helpers

/// Test helper functions
pub mod helpers {
    /// Exact stdout produced by one run of the component
    pub fn expected_stdout() -> String {
        format!(
            "OBD2 Tool - Component\nInitializing OBD2 Tool Component v{}\nApplication initialized successfully\n",
            obd2_tool::VERSION
        )
    }
}
