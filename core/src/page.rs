//! HTML rendering of the contact page

use crate::constants::LOCAL_QR_ROUTE;
use crate::contact::DeepLink;
use crate::qr::QrImage;

/// Static text shown on the page
#[derive(Debug, Clone)]
pub struct PageContent {
    pub title: String,
    pub icon: String,
    pub about_heading: String,
    pub about: Vec<String>,
    pub capabilities_intro: String,
    pub capabilities: Vec<String>,
    pub contact_heading: String,
    pub contact_prompt: String,
    pub link_text: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Message Scanning Project".to_string(),
            icon: "📩".to_string(),
            about_heading: "About Our Project".to_string(),
            about: vec![
                "We are building a system to scan and analyze messages for security, compliance, and automation."
                    .to_string(),
                "This helps organizations protect sensitive data, detect threats, and improve communication workflows."
                    .to_string(),
            ],
            capabilities_intro: "Our solution can:".to_string(),
            capabilities: vec![
                "🔍 Automatically scan messages for keywords, risks, or compliance issues".to_string(),
                "🤖 Integrate with automation workflows for alerts and responses".to_string(),
                "📊 Provide reports and dashboards for visibility".to_string(),
            ],
            contact_heading: "📞 Contact Us".to_string(),
            contact_prompt: "Have questions or want a demo?".to_string(),
            link_text: "Chat with us on WhatsApp".to_string(),
        }
    }
}

/// Render the full HTML document, showing the QR image at `qr_size` pixels.
///
/// A remote image falls back once to the locally generated PNG if the
/// browser fails to load it.
pub fn render_page(content: &PageContent, link: &DeepLink, image: &QrImage, qr_size: u32) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&content.title)));
    html.push_str(&format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>\">\n",
        escape_html(&content.icon)
    ));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&format!(
        "<h1>{} {}</h1>\n",
        escape_html(&content.icon),
        escape_html(&content.title)
    ));

    html.push_str("<section class=\"about\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(&content.about_heading)));
    for paragraph in &content.about {
        html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str(&format!("<p>{}</p>\n<ul>\n", escape_html(&content.capabilities_intro)));
    for item in &content.capabilities {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n</section>\n<hr>\n");

    let href = escape_html(link.as_str());
    html.push_str("<section class=\"contact\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(&content.contact_heading)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&content.contact_prompt)));
    html.push_str(&format!(
        "<p>👉 <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>\n",
        href,
        escape_html(&content.link_text)
    ));

    let src = escape_html(&image.to_img_src());
    let alt = format!("QR code for {}", href);
    let dims = format!("width=\"{}\" height=\"{}\"", qr_size, qr_size);
    if image.is_remote() {
        html.push_str(&format!(
            "<img class=\"qr\" src=\"{}\" alt=\"{}\" {} onerror=\"this.onerror=null;this.src='{}';\">\n",
            src, alt, dims, LOCAL_QR_ROUTE
        ));
    } else {
        html.push_str(&format!("<img class=\"qr\" src=\"{}\" alt=\"{}\" {}>\n", src, alt, dims));
    }
    html.push_str("</section>\n</main>\n</body>\n</html>\n");

    html
}

const STYLE: &str = "<style>\n\
body{font-family:system-ui,sans-serif;margin:0;color:#262730;background:#fff}\n\
main{max-width:730px;margin:0 auto;padding:3rem 1rem}\n\
hr{border:none;border-top:1px solid #e6e6e6;margin:2rem 0}\n\
img.qr{display:block;margin-top:1rem}\n\
</style>\n";

/// Escape text for HTML element content and double- or single-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
