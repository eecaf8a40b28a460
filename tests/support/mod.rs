pub mod fake_codec;
pub mod recording_tio;
