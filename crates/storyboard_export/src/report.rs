//! Self-contained HTML report.

use storyboard_core::Scene;

const JSZIP_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/jszip/3.10.1/jszip.min.js";

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; background: #f0f2f5; padding: 40px; color: #1a1a1a; margin: 0; }
        .container { max-width: 1400px; margin: 0 auto; }
        .header { text-align: center; margin-bottom: 40px; background: white; padding: 30px; border-radius: 20px; }
        .header h1 { font-weight: 900; font-size: 28px; margin: 0; }
        .toolbar { display: flex; justify-content: center; margin-bottom: 30px; }
        .btn-download { background: #2563eb; color: white; border: none; padding: 12px 24px; border-radius: 12px; font-weight: 800; cursor: pointer; }
        .board-table { width: 100%; border-collapse: separate; border-spacing: 0 15px; table-layout: fixed; }
        .board-table th { padding: 15px; text-align: left; font-size: 11px; color: #888; text-transform: uppercase; }
        .col-no { width: 60px; }
        .col-img { width: 420px; }
        .scene-row { background: white; }
        .scene-row td { padding: 25px; vertical-align: top; }
        .no-cell { font-weight: 900; color: #2563eb; font-size: 24px; text-align: center; }
        .img-cell img { width: 100%; border-radius: 12px; display: block; }
        .img-missing { padding: 60px 0; text-align: center; color: #aaa; border: 2px dashed #ddd; border-radius: 12px; }
        .script-cell { font-weight: 700; font-size: 16px; line-height: 1.6; white-space: pre-wrap; }
        .meta-label { font-size: 10px; font-weight: 900; color: #2563eb; text-transform: uppercase; display: block; margin-bottom: 8px; }
        .meta-localized { font-size: 14px; font-weight: 700; margin-bottom: 15px; line-height: 1.5; }
        .meta-english { font-size: 12px; color: #777; font-style: italic; background: #f8fafc; padding: 12px; border-radius: 8px; }
        @media print { .toolbar { display: none; } body { background: white; padding: 0; } }
"#;

const SCRIPT: &str = r#"
        async function downloadAllImages() {
            const zip = new JSZip();
            const btn = document.querySelector('.btn-download');
            const label = btn.innerHTML;
            btn.innerHTML = 'Compressing...';
            btn.disabled = true;

            for (const img of document.querySelectorAll('img[data-entry]')) {
                zip.file(img.dataset.entry, img.src.split(',')[1], { base64: true });
            }

            const content = await zip.generateAsync({ type: 'blob' });
            const link = document.createElement('a');
            link.href = URL.createObjectURL(content);
            link.download = `storyboard_images_${Date.now()}.zip`;
            link.click();

            btn.innerHTML = label;
            btn.disabled = false;
        }
"#;

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_row(html: &mut String, index: usize, scene: &Scene) {
    let number = index + 1;
    html.push_str("                <tr class=\"scene-row\">\n");
    html.push_str(&format!("                    <td class=\"no-cell\">{}</td>\n", number));
    html.push_str("                    <td class=\"img-cell\">");
    match scene.image() {
        Some(image) => html.push_str(&format!(
            "<img src=\"{}\" alt=\"Scene {}\" data-entry=\"{}\">",
            escape_html(&image.to_data_url()),
            number,
            escape_html(&crate::image_entry_name(index, image)),
        )),
        None => html.push_str("<div class=\"img-missing\">No image</div>"),
    }
    html.push_str("</td>\n");
    html.push_str(&format!(
        "                    <td class=\"script-cell\">{}</td>\n",
        escape_html(scene.script_segment())
    ));
    html.push_str("                    <td class=\"desc-cell\">\n");
    html.push_str("                        <span class=\"meta-label\">Direction (localized)</span>\n");
    html.push_str(&format!(
        "                        <div class=\"meta-localized\">{}</div>\n",
        escape_html(scene.prompt_localized())
    ));
    html.push_str("                        <span class=\"meta-label\">Prompt (English)</span>\n");
    html.push_str(&format!(
        "                        <div class=\"meta-english\">{}</div>\n",
        escape_html(scene.prompt_english())
    ));
    html.push_str("                    </td>\n");
    html.push_str("                </tr>\n");
}

/// Render the storyboard as one HTML page.
///
/// Images are embedded as data URLs. All scene text is escaped. A toolbar
/// button re-packs the embedded images into a zip in the browser.
///
/// # Examples
///
/// ```
/// use storyboard_core::{RawScene, Scene};
/// use storyboard_export::report_html;
///
/// let scene = Scene::pending(RawScene {
///     script_segment: "Tom & Jerry <run>".into(),
///     prompt_english: "chase".into(),
///     prompt_localized: "추격".into(),
/// });
///
/// let html = report_html(&[scene]);
/// assert!(html.contains("Tom &amp; Jerry &lt;run&gt;"));
/// assert!(html.contains("No image"));
/// ```
pub fn report_html(scenes: &[Scene]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <title>Storyboard Report</title>\n");
    html.push_str(&format!("    <script src=\"{}\"></script>\n", JSZIP_CDN));
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str("        <div class=\"header\">\n");
    html.push_str("            <h1>STORYBOARD PROJECT REPORT</h1>\n");
    html.push_str(&format!("            <p>{} SCENES</p>\n", scenes.len()));
    html.push_str("        </div>\n");
    html.push_str("        <div class=\"toolbar\">\n");
    html.push_str(
        "            <button class=\"btn-download\" onclick=\"downloadAllImages()\">Download all images (ZIP)</button>\n",
    );
    html.push_str("        </div>\n");
    html.push_str("        <table class=\"board-table\">\n");
    html.push_str("            <colgroup><col class=\"col-no\"><col class=\"col-img\"><col><col></colgroup>\n");
    html.push_str(
        "            <thead><tr><th>No</th><th>Visual</th><th>Script</th><th>Production detail</th></tr></thead>\n",
    );
    html.push_str("            <tbody>\n");
    for (index, scene) in scenes.iter().enumerate() {
        push_row(&mut html, index, scene);
    }
    html.push_str("            </tbody>\n");
    html.push_str("        </table>\n");
    html.push_str("    </div>\n");
    html.push_str("    <script>");
    html.push_str(SCRIPT);
    html.push_str("    </script>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
