use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::{AssetMap, HtmlTag};

/// Writes every asset below `out_dir`, creating parent directories.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The files written, in asset-map order
/// * `Err` - If a directory or file cannot be written
pub fn write_assets<P: AsRef<Path>>(out_dir: P, assets: &AssetMap) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let mut written = Vec::with_capacity(assets.len());

    for (name, asset) in assets {
        let target = out_dir.join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, asset.source())?;
        written.push(target);
    }

    Ok(written)
}

/// Inserts rendered `tags` into an HTML document.
///
/// The tags go in front of the first existing `<script`, otherwise right
/// before `</body>`, otherwise at the end of the document.
pub fn inject_into_html(html: &str, tags: &[HtmlTag]) -> String {
    let rendered: String = tags.iter().map(|tag| tag.to_string()).collect();
    // ASCII lowercasing keeps byte offsets intact.
    let lower = html.to_ascii_lowercase();

    let at = lower
        .find("<script")
        .or_else(|| lower.rfind("</body>"))
        .unwrap_or(html.len());

    let mut out = String::with_capacity(html.len() + rendered.len());
    out.push_str(&html[..at]);
    out.push_str(&rendered);
    out.push_str(&html[at..]);
    out
}

/// Reads `path`, injects `tags` and writes the result back.
pub fn inject_into_html_file<P: AsRef<Path>>(path: P, tags: &[HtmlTag]) -> Result<()> {
    let path = path.as_ref();
    let html = fs::read_to_string(path)?;
    fs::write(path, inject_into_html(&html, tags))?;
    Ok(())
}
