//! Qr command implementation.

use std::path::Path;

use anyhow::Context;
use msgscan_core::{Config, ContactService, QrImage};

/// Write the QR image to `output`, or print its URL for the remote provider.
pub fn write_qr(config: Config, output: &Path) -> anyhow::Result<()> {
    let service = ContactService::new(config);

    match service.qr_image()? {
        QrImage::Png(bytes) => {
            std::fs::write(output, &bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(
                "\x1b[1;32m✓\x1b[0m Wrote {} ({} bytes) encoding {}",
                output.display(),
                bytes.len(),
                service.deep_link()
            );
        }
        QrImage::Remote(url) => {
            println!("{}", url);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgscan_core::ProviderKind;

    fn decode(path: &Path) -> String {
        let image = image::open(path).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("contact.png");

        write_qr(Config::default(), &output).unwrap();

        assert_eq!(decode(&output), "https://wa.me/15551540430");
    }

    #[test]
    fn test_remote_provider_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("contact.png");
        let config = Config {
            qr_provider: ProviderKind::RemoteDelegation,
            ..Config::default()
        };

        write_qr(config, &output).unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("contact.png");

        let err = write_qr(Config::default(), &output).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
