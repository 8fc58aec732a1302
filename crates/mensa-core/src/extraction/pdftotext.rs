use crate::error::MensaError;
use crate::extraction::{PosterPage, Rect};
use std::io::Write;
use std::process::Command;

/// Poster page backend using pdftotext (from poppler-utils).
///
/// `pdftotext -bbox-layout` emits per-line bounding boxes, which is exactly
/// what the frame extractor needs to answer rectangle queries. Coordinates
/// in that output have their origin at the top-left of the page; they are
/// flipped to the bottom-left origin the `PosterPage` contract uses.
pub struct PdftotextPoster;

impl PdftotextPoster {
    pub fn new() -> Self {
        PdftotextPoster
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    /// Render the first (and for posters, only) page of a PDF into a
    /// queryable page.
    pub fn load_page(&self, pdf_bytes: &[u8]) -> Result<PdftotextPage, MensaError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| MensaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| MensaError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    MensaError::PdftotextNotFound
                } else {
                    MensaError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(MensaError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        parse_first_page(&xml).ok_or(MensaError::NoPosterPage)
    }
}

impl Default for PdftotextPoster {
    fn default() -> Self {
        Self::new()
    }
}

/// A single parsed page with line-level bounding boxes, ready for rectangle
/// queries.
#[derive(Debug, Clone)]
pub struct PdftotextPage {
    width: f32,
    height: f32,
    lines: Vec<PageLine>,
}

#[derive(Debug, Clone)]
struct PageLine {
    text: String,
    bbox: Rect,
}

impl PosterPage for PdftotextPage {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn text_in(&self, rect: &Rect) -> String {
        let mut hits: Vec<&PageLine> = self
            .lines
            .iter()
            .filter(|line| line.bbox.intersects(rect))
            .collect();
        // Reading order: top of the page first, then left to right.
        hits.sort_by(|a, b| {
            b.bbox
                .y_max
                .partial_cmp(&a.bbox.y_max)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    a.bbox
                        .x_min
                        .partial_cmp(&b.bbox.x_min)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });
        hits.iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse the first `<page>` element of pdftotext's bbox XML. Further pages
/// are ignored; the poster template is a single page.
fn parse_first_page(xml: &str) -> Option<PdftotextPage> {
    let mut page: Option<PdftotextPage> = None;
    let mut current_bbox: Option<(f32, f32, f32, f32)> = None;
    let mut current_words: Vec<String> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            if page.is_some() {
                break;
            }
            page = Some(PdftotextPage {
                width: parse_attr_f32(line, "width")?,
                height: parse_attr_f32(line, "height")?,
                lines: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<line ") {
            current_bbox = parse_line_bbox(line);
            current_words.clear();
            continue;
        }

        if line.starts_with("<word ") {
            if let Some(word_text) = parse_word_text(line) {
                let w = decode_xml_entities(&word_text).trim().to_string();
                if !w.is_empty() {
                    current_words.push(w);
                }
            }
            continue;
        }

        if line.starts_with("</line>") {
            if let (Some(page), Some((x_min, y_min, x_max, y_max))) =
                (page.as_mut(), current_bbox.take())
            {
                let text = current_words.join(" ");
                if !text.is_empty() {
                    // Flip the top-left-origin bbox into bottom-left space.
                    page.lines.push(PageLine {
                        text,
                        bbox: Rect {
                            x_min,
                            x_max,
                            y_min: page.height - y_max,
                            y_max: page.height - y_min,
                        },
                    });
                }
            }
            current_words.clear();
        }
    }

    page
}

fn parse_line_bbox(tag: &str) -> Option<(f32, f32, f32, f32)> {
    Some((
        parse_attr_f32(tag, "xMin")?,
        parse_attr_f32(tag, "yMin")?,
        parse_attr_f32(tag, "xMax")?,
        parse_attr_f32(tag, "yMax")?,
    ))
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    rest[..end].parse().ok()
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
