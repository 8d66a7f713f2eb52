use std::path::PathBuf;

/// Input read by `-e` when no path follows it.
pub const ENCODE_INPUT: &str = "testFile.txt";
/// Input read by `-d` when no path follows it.
pub const DECODE_INPUT: &str = "outputImage.png";
pub const ENCODE_OUTPUT: &str = "outputImage.png";
pub const DECODE_OUTPUT: &str = "outputText.txt";

/// Output paths used when `-o` and `IMAGEIFY_OUTPUT` are both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub encode_output: PathBuf,
    pub decode_output: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            encode_output: PathBuf::from(ENCODE_OUTPUT),
            decode_output: PathBuf::from(DECODE_OUTPUT),
        }
    }
}
