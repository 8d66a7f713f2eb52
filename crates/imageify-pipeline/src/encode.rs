use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use imageify_frame::{build_frame, pack, pad_frame, FrameLayout, RasterGrid};
use imageify_raster::RasterCodec;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result, Stage};
use crate::report::{Direction, Report};
use crate::sink::OutputFile;
use crate::validate::{check_readable, check_writable};

/// A payload laid out as a pixel grid, ready for a raster codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub grid: RasterGrid,
    pub layout: FrameLayout,
}

/// Frame, plan, pad and pack `payload` into a grid.
pub fn encode_grid(payload: &[u8], config: &PipelineConfig) -> Result<Encoded> {
    if payload.len() > config.max_payload_size {
        return Err(PipelineError::PayloadLimit {
            stage: Stage::BuildFrame,
            size: payload.len(),
            max: config.max_payload_size,
        });
    }

    let mut frame = Vec::new();
    build_frame(payload, &mut frame).map_err(PipelineError::frame(Stage::BuildFrame))?;
    debug!(stage = %Stage::BuildFrame, frame_len = frame.len(), "framed payload");

    let layout = FrameLayout::for_payload(payload.len())
        .map_err(PipelineError::frame(Stage::PlanDimensions))?;
    let dimensions = layout.dimensions;
    debug!(
        stage = %Stage::PlanDimensions,
        width = dimensions.width,
        height = dimensions.height,
        capacity = layout.capacity,
        "planned grid"
    );

    pad_frame(&mut frame, layout.capacity).map_err(PipelineError::frame(Stage::PadFrame))?;
    debug!(stage = %Stage::PadFrame, padding = layout.padding(), "padded frame");

    let grid = pack(&frame, dimensions.width, dimensions.height)
        .map_err(PipelineError::frame(Stage::PackPixels))?;
    debug!(stage = %Stage::PackPixels, pixels = grid.pixels().len(), "packed pixels");

    Ok(Encoded { grid, layout })
}

/// Encode `payload` and write the image to `dst`.
pub fn encode_to_writer<C>(
    payload: &[u8],
    codec: &C,
    config: &PipelineConfig,
    dst: &mut dyn Write,
) -> Result<FrameLayout>
where
    C: RasterCodec + ?Sized,
{
    let Encoded { grid, layout } = encode_grid(payload, config)?;
    codec
        .encode(&grid, dst)
        .map_err(PipelineError::raster(Stage::EmitRaster))?;
    debug!(stage = %Stage::EmitRaster, codec = codec.name(), "emitted raster");
    Ok(layout)
}

/// Encode the file at `input` into an image at `output`.
///
/// On failure `output` is left as it was before the call.
pub fn encode_file<C>(
    input: &Path,
    output: &Path,
    codec: &C,
    config: &PipelineConfig,
) -> Result<Report>
where
    C: RasterCodec + ?Sized,
{
    let started = Instant::now();
    check_readable(input)?;
    check_writable(output)?;
    check_payload_size(input, config)?;

    let payload =
        fs::read(input).map_err(|err| PipelineError::read(Stage::ValidateInput, input, err))?;
    debug!(stage = %Stage::ValidateInput, bytes = payload.len(), "read input");

    let mut sink = OutputFile::create(output)
        .map_err(|err| PipelineError::write(Stage::EmitRaster, output, err))?;
    let layout = encode_to_writer(&payload, codec, config, &mut sink)?;
    sink.commit()
        .map_err(|err| PipelineError::write(Stage::EmitRaster, output, err))?;

    let report = Report::new(
        Direction::Encode,
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
        "encoded file"
    );
    Ok(report)
}

fn check_payload_size(input: &Path, config: &PipelineConfig) -> Result<()> {
    let len = fs::metadata(input)
        .map_err(|err| PipelineError::read(Stage::ValidateInput, input, err))?
        .len();
    let max = config.max_payload_size;
    if len > max as u64 {
        return Err(PipelineError::PayloadLimit {
            stage: Stage::ValidateInput,
            size: usize::try_from(len).unwrap_or(usize::MAX),
            max,
        });
    }
    Ok(())
}
