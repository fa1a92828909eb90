use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// A 2D map of per-pixel segmentation class ids, row-major.
/// One cell per pixel; degenerate 0-size grids are legal values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelGrid {
    /// Row-major class ids.
    pub data: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

impl LabelGrid {
    /// Create a new LabelGrid filled with the given class id.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: u32) {
        self.data[row * self.width + col] = val;
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decode a label map from a PNG file.
    ///
    /// Raw sample values are kept as class ids: grayscale frames yield their
    /// luma values, indexed frames yield palette indices rather than
    /// resolved colours. Accepted formats are 8-bit grayscale, 16-bit
    /// grayscale (big-endian) and 8-bit indexed; anything else cannot carry
    /// integer class ids and is rejected.
    pub fn from_png(path: &Path) -> Result<Self, TagError> {
        let file = File::open(path).map_err(|source| TagError::MissingLabel {
            path: path.to_path_buf(),
            source,
        })?;

        let mut decoder = png::Decoder::new(BufReader::new(file));
        // No palette expansion: indexed PNGs must decode to their indices.
        decoder.set_transformations(png::Transformations::IDENTITY);

        let mut reader = decoder.read_info().map_err(|source| TagError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).map_err(|source| TagError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = &buf[..info.buffer_size()];

        let data: Vec<u32> = match (info.color_type, info.bit_depth) {
            (png::ColorType::Grayscale | png::ColorType::Indexed, png::BitDepth::Eight) => {
                bytes.iter().map(|&b| u32::from(b)).collect()
            }
            (png::ColorType::Grayscale, png::BitDepth::Sixteen) => bytes
                .chunks_exact(2)
                .map(|pair| u32::from(u16::from_be_bytes([pair[0], pair[1]])))
                .collect(),
            (color_type, bit_depth) => {
                return Err(TagError::UnsupportedLabelFormat {
                    path: path.to_path_buf(),
                    color_type,
                    bit_depth,
                })
            }
        };

        Ok(Self {
            data,
            width: info.width as usize,
            height: info.height as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn write_png(
        path: &Path,
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        palette: Option<&[u8]>,
        data: &[u8],
    ) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        if let Some(palette) = palette {
            encoder.set_palette(palette.to_vec());
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn get_set_roundtrip() {
        let mut grid = LabelGrid::new(3, 2, 0);
        grid.set(1, 2, 7);
        assert_eq!(grid.get(1, 2), 7);
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn decode_grayscale8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");
        write_png(
            &path,
            2,
            2,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            None,
            &[0, 7, 1, 2],
        );

        let grid = LabelGrid::from_png(&path).unwrap();
        assert_eq!((grid.width, grid.height), (2, 2));
        assert_eq!(grid.data, vec![0, 7, 1, 2]);
    }

    #[test]
    fn decode_indexed_keeps_palette_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");
        // 4-entry palette; pixel values must come back as indices, not RGB.
        let palette = [0u8, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255];
        write_png(
            &path,
            2,
            2,
            png::ColorType::Indexed,
            png::BitDepth::Eight,
            Some(&palette),
            &[1, 2, 0, 3],
        );

        let grid = LabelGrid::from_png(&path).unwrap();
        assert_eq!(grid.data, vec![1, 2, 0, 3]);
    }

    #[test]
    fn decode_grayscale16_big_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");
        // Samples 0 and 300 as big-endian u16 pairs.
        write_png(
            &path,
            2,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Sixteen,
            None,
            &[0, 0, 1, 44],
        );

        let grid = LabelGrid::from_png(&path).unwrap();
        assert_eq!(grid.data, vec![0, 300]);
    }

    #[test]
    fn decode_rgb_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");
        write_png(
            &path,
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &[10, 20, 30],
        );

        match LabelGrid::from_png(&path) {
            Err(TagError::UnsupportedLabelFormat { color_type, .. }) => {
                assert_eq!(color_type, png::ColorType::Rgb);
            }
            other => panic!("expected UnsupportedLabelFormat, got {:?}", other),
        }
    }

    #[test]
    fn decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        match LabelGrid::from_png(&path) {
            Err(TagError::MissingLabel { .. }) => {}
            other => panic!("expected MissingLabel, got {:?}", other),
        }
    }

    #[test]
    fn decode_garbage_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        match LabelGrid::from_png(&path) {
            Err(TagError::Decode { .. }) => {}
            other => panic!("expected Decode, got {:?}", other),
        }
    }
}
