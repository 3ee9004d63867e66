//! Link command implementation.

use msgscan_core::{Config, ContactService, QrImage};

use crate::ui::print_qr_code;

/// Display the contact deep link and its QR code.
pub fn show_link(config: Config) {
    let service = ContactService::new(config);

    println!("\n\x1b[1mContact Link\x1b[0m");
    println!("═══════════════════════════════════════");
    println!("\x1b[1mPhone:\x1b[0m    {}", service.phone_number());
    println!("\x1b[1mLink:\x1b[0m     {}", service.deep_link());
    println!("\x1b[1mQR:\x1b[0m       {}", service.provider_kind());

    if let Ok(QrImage::Remote(url)) = service.qr_image() {
        println!("\x1b[1mImage:\x1b[0m    {}", url);
    }

    println!("\n\x1b[1;33mScan to start a chat:\x1b[0m\n");
    print_qr_code(service.deep_link().as_str());
}
