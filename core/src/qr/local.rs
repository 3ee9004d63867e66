//! Strategy B: encode the QR symbol in-process

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{render::svg, QrCode};

use super::{ProviderKind, QrImage, QrImageProvider};
use crate::contact::DeepLink;
use crate::Result;

/// Encodes deep links locally and serialises them as PNG.
///
/// Output is deterministic for a given link and size. No network access,
/// so the contact number never leaves the process.
#[derive(Debug, Clone, Copy)]
pub struct LocalQrProvider {
    size: u32,
}

impl LocalQrProvider {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    fn encode(link: &DeepLink) -> Result<QrCode> {
        Ok(QrCode::new(link.as_str().as_bytes())?)
    }

    /// PNG bytes of the QR symbol, at least `size` pixels wide, quiet zone included
    pub fn render_png(&self, link: &DeepLink) -> Result<Vec<u8>> {
        let code = Self::encode(link)?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.size, self.size)
            .build();

        let mut buf = Vec::new();
        image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

        tracing::debug!(
            "rendered {}x{} QR png ({} bytes) for {}",
            image.width(),
            image.height(),
            buf.len(),
            link
        );
        Ok(buf)
    }

    /// SVG document of the QR symbol
    pub fn render_svg(&self, link: &DeepLink) -> Result<String> {
        let code = Self::encode(link)?;
        let svg = code
            .render::<svg::Color>()
            .min_dimensions(self.size, self.size)
            .build();

        Ok(svg)
    }
}

impl QrImageProvider for LocalQrProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LocalGeneration
    }

    fn provide(&self, link: &DeepLink) -> Result<QrImage> {
        self.render_png(link).map(QrImage::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{build_deep_link, PhoneNumber};

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn link(phone: &str) -> DeepLink {
        build_deep_link(&PhoneNumber::parse(phone).unwrap())
    }

    fn decode_png(bytes: &[u8]) -> String {
        let image = image::load_from_memory(bytes).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR symbol");
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_png_decodes_to_deep_link() {
        let link = link("+15551540430");
        let image = LocalQrProvider::new(200).provide(&link).unwrap();

        let QrImage::Png(bytes) = image else {
            panic!("local provider must return png bytes");
        };
        assert!(bytes.starts_with(PNG_SIGNATURE));
        assert_eq!(decode_png(&bytes), "https://wa.me/15551540430");
    }

    #[test]
    fn test_png_respects_min_size() {
        let link = link("+15551540430");
        for size in [64, 200, 480] {
            let bytes = LocalQrProvider::new(size).render_png(&link).unwrap();
            let image = image::load_from_memory(&bytes).unwrap();
            assert!(image.width() >= size);
            assert_eq!(image.width(), image.height());
        }
    }

    #[test]
    fn test_png_deterministic() {
        let link = link("+4915112345678");
        let provider = LocalQrProvider::new(200);
        assert_eq!(provider.render_png(&link).unwrap(), provider.render_png(&link).unwrap());
    }

    #[test]
    fn test_svg_output() {
        let svg = LocalQrProvider::new(200).render_svg(&link("+15551540430")).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }
}
