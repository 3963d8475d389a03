use std::{
    borrow::Cow,
    io::{self, BufWriter, Write},
    path::Path,
};

use fs_err as fs;
use serde::Serialize;
use shelfpack::Layout;

use crate::options::OutputFormat;

/// Writes `layout` to `path`, creating its parent folder if needed.
pub fn write_layout(layout: &Layout, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(fs::File::create(path)?);

    match format {
        OutputFormat::Html => write_html(layout, &mut file)?,
        OutputFormat::Json => write_json(layout, &mut file)?,
    }

    file.flush()?;

    log::info!("Wrote {} images to {}", layout.images().len(), path.display());

    Ok(())
}

/// Writes one absolutely positioned `<img>` tag per image, in layout order.
pub fn write_html<W: Write>(layout: &Layout, mut output: W) -> io::Result<()> {
    for image in layout.images() {
        writeln!(
            output,
            "<img src=\"{}\" style=\"position:absolute;left:{}px;top:{}px\"/>",
            escape_attribute(image.name().as_ref()),
            image.left(),
            image.top()
        )?;
    }

    Ok(())
}

pub fn write_json<W: Write>(layout: &Layout, output: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(output, &JsonLayout::new(layout))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLayout<'a> {
    width: u32,
    height: u32,
    area: u64,
    input_area: u64,
    images: Vec<JsonImage<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonImage<'a> {
    name: &'a str,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl<'a> JsonLayout<'a> {
    fn new(layout: &'a Layout) -> Self {
        let images = layout
            .images()
            .iter()
            .map(|image| JsonImage {
                name: image.name().as_ref(),
                left: image.left(),
                top: image.top(),
                width: image.width(),
                height: image.height(),
            })
            .collect();

        Self {
            width: layout.width(),
            height: layout.height(),
            area: layout.area(),
            input_area: layout.input_area(),
            images,
        }
    }
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(|c: char| matches!(c, '&' | '"' | '<' | '>')) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod test {
    use super::*;

    use shelfpack::{InputImage, Offset, PlacedImage};

    fn sample_layout() -> Layout {
        Layout::new(vec![
            PlacedImage::new(InputImage::new("a.png", 3, 2), Offset::new(0, 0)),
            PlacedImage::new(InputImage::new("b \"quoted\" & <b>.png", 3, 2), Offset::new(3, 0)),
            PlacedImage::new(InputImage::new("c.png", 6, 2), Offset::new(0, 2)),
        ])
        .unwrap()
    }

    #[test]
    fn html_tags_in_layout_order() {
        let mut output = Vec::new();
        write_html(&sample_layout(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<img src=\"a.png\" style=\"position:absolute;left:0px;top:0px\"/>\n\
             <img src=\"b &quot;quoted&quot; &amp; &lt;b&gt;.png\" style=\"position:absolute;left:3px;top:0px\"/>\n\
             <img src=\"c.png\" style=\"position:absolute;left:0px;top:2px\"/>\n"
        );
    }

    #[test]
    fn json_document() {
        let mut output = Vec::new();
        write_json(&sample_layout(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["width"], 6);
        assert_eq!(value["height"], 4);
        assert_eq!(value["area"], 24);
        assert_eq!(value["inputArea"], 24);
        assert_eq!(value["images"].as_array().unwrap().len(), 3);
        assert_eq!(value["images"][2]["name"], "c.png");
        assert_eq!(value["images"][2]["top"], 2);
        assert_eq!(value["images"][1]["left"], 3);
    }

    #[test]
    fn creates_parent_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images").join("imagemap.html");

        write_layout(&sample_layout(), &path, OutputFormat::Html).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
