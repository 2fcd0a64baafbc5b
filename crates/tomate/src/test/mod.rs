// Test module organization
pub mod test_compile;
