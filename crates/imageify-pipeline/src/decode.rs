use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

use imageify_frame::{parse_frame, unpack, FrameLayout, HEADER_SIZE};
use imageify_raster::RasterCodec;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result, Stage};
use crate::report::{Direction, Report};
use crate::sink::OutputFile;
use crate::validate::{check_readable, check_writable};

/// A payload recovered from an image, with the layout it was stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub payload: Vec<u8>,
    pub layout: FrameLayout,
}

/// Load an image from `src` and recover its payload.
///
/// Width and height come from the image. The length header decides how many
/// bytes are payload; everything after it is padding.
pub fn decode_from_reader<C>(
    codec: &C,
    config: &PipelineConfig,
    src: &mut dyn Read,
) -> Result<Decoded>
where
    C: RasterCodec + ?Sized,
{
    let grid = codec
        .decode(src)
        .map_err(PipelineError::raster(Stage::LoadRaster))?;
    let dimensions = grid.dimensions();
    debug!(
        stage = %Stage::LoadRaster,
        codec = codec.name(),
        width = dimensions.width,
        height = dimensions.height,
        "loaded raster"
    );

    let mut frame = unpack(&grid).map_err(PipelineError::frame(Stage::UnpackPixels))?;
    drop(grid);
    debug!(stage = %Stage::UnpackPixels, frame_len = frame.len(), "unpacked pixels");

    let payload_len = parse_frame(&frame, dimensions.width, dimensions.height)
        .map_err(PipelineError::frame(Stage::ParseFrame))?
        .len();
    if payload_len > config.max_payload_size {
        return Err(PipelineError::PayloadLimit {
            stage: Stage::ParseFrame,
            size: payload_len,
            max: config.max_payload_size,
        });
    }
    let layout = FrameLayout::new(dimensions, payload_len)
        .map_err(PipelineError::frame(Stage::ParseFrame))?;
    debug!(stage = %Stage::ParseFrame, payload_len, padding = layout.padding(), "parsed frame");

    frame.truncate(HEADER_SIZE + payload_len);
    frame.drain(..HEADER_SIZE);
    Ok(Decoded {
        payload: frame,
        layout,
    })
}

/// Result of [`decode_file`]: the run summary plus the bytes written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub report: Report,
    pub payload: Vec<u8>,
}

/// Decode the image at `input` and write its payload to `output`.
///
/// On failure `output` is left as it was before the call.
pub fn decode_file<C>(
    input: &Path,
    output: &Path,
    codec: &C,
    config: &PipelineConfig,
) -> Result<DecodeOutcome>
where
    C: RasterCodec + ?Sized,
{
    let started = Instant::now();
    check_readable(input)?;
    check_writable(output)?;

    let file =
        File::open(input).map_err(|err| PipelineError::read(Stage::ValidateInput, input, err))?;
    let mut reader = BufReader::new(file);
    let Decoded { payload, layout } = decode_from_reader(codec, config, &mut reader)?;

    let write_err = |err| PipelineError::write(Stage::EmitPayload, output, err);
    let mut sink = OutputFile::create(output).map_err(write_err)?;
    sink.write_all(&payload).map_err(write_err)?;
    sink.commit().map_err(write_err)?;
    debug!(stage = %Stage::EmitPayload, bytes = payload.len(), "wrote payload");

    let report = Report::new(
        Direction::Decode,
        codec.name(),
        input,
        output,
        &layout,
        started.elapsed(),
    );
    info!(
        input = %input.display(),
        output = %output.display(),
        payload_bytes = report.payload_bytes,
        width = report.width,
        height = report.height,
        "decoded file"
    );
    Ok(DecodeOutcome { report, payload })
}
