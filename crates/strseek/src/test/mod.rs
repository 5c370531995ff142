// Test module organization
pub mod test_index_byte;
