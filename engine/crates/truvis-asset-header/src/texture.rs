//! 贴图 -> 头文件
//!
//! 图片解码后先上下翻转：OpenGL 的纹理坐标原点在左下角，而解码结果的原点在左上角。

use crate::chunk::padded_chunks;
use crate::emit::HeaderWriter;
use crate::error::{AssetHeaderError, Result};
use crate::identity::{ResourceIdentity, ResourceKind};
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use itertools::Itertools;
use std::io::Cursor;
use std::path::Path;

/// 每行输出的像素数
const PIXELS_PER_ROW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgb,
    Rgba,
}

impl TextureFormat {
    /// 只接受 8 位的 RGB / RGBA，其余一律报错
    pub fn from_color_type(color: ColorType) -> Result<Self> {
        match color {
            ColorType::Rgb8 => Ok(TextureFormat::Rgb),
            ColorType::Rgba8 => Ok(TextureFormat::Rgba),
            other => Err(AssetHeaderError::UnknownTextureFormat {
                format: mode_name(other),
            }),
        }
    }

    /// `texture.h` 中对应的枚举名
    pub fn format_constant(self) -> &'static str {
        match self {
            TextureFormat::Rgb => "TEXTURE_FORMAT_RGB",
            TextureFormat::Rgba => "TEXTURE_FORMAT_RGBA",
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            TextureFormat::Rgb => 3,
            TextureFormat::Rgba => 4,
        }
    }

    /// 每行输出的字节数：4 个像素
    pub fn row_size(self) -> usize {
        self.bytes_per_pixel() * PIXELS_PER_ROW
    }
}

/// 像素格式的通用叫法，用于报错信息
pub fn mode_name(color: ColorType) -> String {
    let name = match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F32",
        ColorType::Rgba32F => "RGBA;F32",
        other => return format!("{other:?}"),
    };
    name.to_string()
}

/// 翻转后的像素数据
#[derive(Debug, Clone)]
pub struct EncodedTexture {
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
    /// 行优先，原点在左下角
    pub pixels: Vec<u8>,
}

impl EncodedTexture {
    /// 上下翻转后按行展开
    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let flipped = image.flipv();
        let format = TextureFormat::from_color_type(flipped.color())?;
        let (width, height) = flipped.dimensions();

        Ok(Self {
            format,
            width,
            height,
            pixels: flipped.into_bytes(),
        })
    }

    pub fn write_header(&self, identity: &ResourceIdentity, invocation: &str) -> String {
        let rows = padded_chunks(self.pixels.iter().copied().map(Some), self.format.row_size(), None)
            .map(|group| group.into_iter().flatten().map(|b| format!("0x{b:02x}")).join(", "));

        HeaderWriter::new(identity, invocation)
            .path_const()
            .int_const("FORMAT", self.format.format_constant())
            .long_const("WIDTH", self.width)
            .long_const("HEIGHT", self.height)
            .array("unsigned char", "PIXELS", rows)
            .finish()
    }
}

/// 调色板 PNG 在解码时会被展开成 RGB / RGBA，只能在文件头里看出来
pub fn reject_indexed_png(bytes: &[u8]) -> Result<()> {
    match png::Decoder::new(Cursor::new(bytes)).read_info() {
        Ok(reader) if reader.info().color_type == png::ColorType::Indexed => {
            Err(AssetHeaderError::UnknownTextureFormat { format: "P".to_string() })
        }
        Ok(_) => Ok(()),
        // 坏文件交给后面的解码报错
        Err(e) => {
            log::debug!("png header not read: {}", e);
            Ok(())
        }
    }
}

/// 解码图片并生成头文件文本
pub fn compile_texture(path: &Path, invocation: &str) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let reader = image::ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
    if reader.format() == Some(ImageFormat::Png) {
        reject_indexed_png(&bytes)?;
    }

    let encoded = EncodedTexture::from_image(reader.decode()?)?;
    log::debug!(
        "{:?}: {}x{} {:?}",
        path,
        encoded.width,
        encoded.height,
        encoded.format
    );

    let identity = ResourceIdentity::new(ResourceKind::Texture, path);
    Ok(encoded.write_header(&identity, invocation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage, RgbaImage};

    #[test]
    fn test_rows_are_flipped() {
        // 1x2：上面一行红，下面一行蓝
        let image = RgbImage::from_raw(1, 2, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let encoded = EncodedTexture::from_image(DynamicImage::ImageRgb8(image)).unwrap();

        assert_eq!(encoded.format, TextureFormat::Rgb);
        assert_eq!((encoded.width, encoded.height), (1, 2));
        assert_eq!(encoded.pixels, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_columns_unchanged() {
        let image = RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let encoded = EncodedTexture::from_image(DynamicImage::ImageRgb8(image)).unwrap();
        assert_eq!(encoded.pixels, vec![1, 2, 3, 4, 5, 6]);

        let id = ResourceIdentity::new(ResourceKind::Texture, Path::new("res/textures/dot.png"));
        let text = encoded.write_header(&id, "x");
        assert!(text.contains("static const long TEXTURE_DOT_WIDTH = 2;\n"));
        assert!(text.contains("static const long TEXTURE_DOT_HEIGHT = 1;\n"));
        assert!(text.contains("PIXELS[] = {\n    0x01, 0x02, 0x03, 0x04, 0x05, 0x06,\n};\n"));
    }

    #[test]
    fn test_four_pixels_per_row() {
        let raw: Vec<u8> = (0..6 * 4).collect();
        let image = RgbaImage::from_raw(6, 1, raw).unwrap();
        let encoded = EncodedTexture::from_image(DynamicImage::ImageRgba8(image)).unwrap();
        assert_eq!(encoded.format.row_size(), 16);

        let id = ResourceIdentity::new(ResourceKind::Texture, Path::new("strip.png"));
        let text = encoded.write_header(&id, "x");
        assert!(text.contains("static const int TEXTURE_STRIP_FORMAT = TEXTURE_FORMAT_RGBA;\n"));

        let body = text.split_once("PIXELS[] = {\n").unwrap().1.split_once("};").unwrap().0;
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches("0x").count(), 16);
        assert_eq!(lines[1].matches("0x").count(), 8);
        assert!(lines[1].ends_with("0x16, 0x17,"));
    }

    #[test]
    fn test_unknown_mode() {
        let image = GrayImage::new(2, 2);
        let err = EncodedTexture::from_image(DynamicImage::ImageLuma8(image)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown texture format: L");

        assert_eq!(mode_name(ColorType::Rgba16), "RGBA;16");
        assert!(TextureFormat::from_color_type(ColorType::La8).is_err());
    }

    fn indexed_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 1]).unwrap();
        writer.finish().unwrap();
        bytes
    }

    #[test]
    fn test_indexed_png_is_rejected() {
        let err = reject_indexed_png(&indexed_png()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown texture format: P");

        let mut rgb = Vec::new();
        RgbImage::new(2, 1)
            .write_to(&mut Cursor::new(&mut rgb), ImageFormat::Png)
            .unwrap();
        assert!(reject_indexed_png(&rgb).is_ok());
    }
}
