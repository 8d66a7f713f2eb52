use imageify_frame::MAX_PAYLOAD;

/// Limits applied by the encode and decode pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Largest payload accepted in either direction. Default: `u32::MAX` bytes.
    pub max_payload_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD,
        }
    }
}
