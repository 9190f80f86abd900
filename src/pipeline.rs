use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use log::warn;
use thiserror::Error;

use crate::convert::{self, Mode};

/// One conversion job: which image to load and how to remap it.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Filename resolved under the source directory.
    pub source_img: String,
    /// Edge length of the primary square output.
    pub size: u32,
    /// Optional multiplier for a second, higher-resolution output.
    pub dynamic: Option<u32>,
    pub mode: Mode,
}

impl ConversionRequest {
    /// Output edge lengths, primary first.
    pub fn sizes(&self) -> Vec<u32> {
        let mut sizes = vec![self.size];
        if let Some(factor) = self.dynamic {
            sizes.push(self.size * factor);
        }
        sizes
    }

    /// `castle.png` at height 64 becomes `castle_64.out.png`.
    pub fn output_name(&self, height: u32) -> String {
        let stem = Path::new(&self.source_img)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_img.clone());
        format!("{stem}_{height}.out.png")
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads the source image, produces the resized copies, remaps and writes
/// them. Returns the written paths, primary output first.
pub fn run(
    request: &ConversionRequest,
    source_dir: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PipelineError> {
    let source_path = source_dir.join(&request.source_img);
    let source = image::open(&source_path)
        .map_err(|source| PipelineError::Open {
            path: source_path.clone(),
            source,
        })?
        .to_rgb8();

    if source.width() != source.height() {
        warn!(
            "source image {} is not square ({}x{}); output will be squashed to fit",
            request.source_img,
            source.width(),
            source.height()
        );
    }

    fs::create_dir_all(out_dir).map_err(|source| PipelineError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(2);
    for size in request.sizes() {
        let resized = imageops::resize(&source, size, size, FilterType::Lanczos3);
        let output = convert::apply(request.mode, resized);
        let out_path = out_dir.join(request.output_name(output.height()));
        output.save(&out_path).map_err(|source| PipelineError::Save {
            path: out_path.clone(),
            source,
        })?;
        written.push(out_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source_img: &str, size: u32, dynamic: Option<u32>) -> ConversionRequest {
        ConversionRequest {
            source_img: source_img.to_string(),
            size,
            dynamic,
            mode: Mode::Resize,
        }
    }

    #[test]
    fn sizes_without_dynamic() {
        assert_eq!(request("a.png", 8, None).sizes(), vec![8]);
    }

    #[test]
    fn sizes_with_dynamic() {
        assert_eq!(request("a.png", 8, Some(4)).sizes(), vec![8, 32]);
    }

    #[test]
    fn output_name_strips_extension() {
        assert_eq!(request("castle.png", 8, None).output_name(64), "castle_64.out.png");
    }

    #[test]
    fn output_name_keeps_inner_dots() {
        // Only the final extension comes off, matching path stem semantics.
        assert_eq!(
            request("dungeon.map.png", 8, None).output_name(16),
            "dungeon.map_16.out.png"
        );
    }

    #[test]
    fn output_name_without_extension() {
        assert_eq!(request("castle", 8, None).output_name(8), "castle_8.out.png");
    }
}
