// Test modules for chinese-name-generator crate
//
// Each source file has a corresponding test file that focuses on business
// logic verification.

// Test helper utilities
pub mod helpers;
