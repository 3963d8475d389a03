use std::path::PathBuf;

use shelfpack::ShelfPacker;

use crate::{
    config::Config,
    input::read_listing,
    options::{GlobalOptions, OutputFormat, PackOptions},
    output::write_layout,
    report::InputStats,
};

pub fn pack(global: GlobalOptions, options: PackOptions) -> anyhow::Result<()> {
    let config = Config::load(global.config.as_deref())?;
    let settings = PackSettings::new(config, options);

    run_pack(&settings)
}

/// Everything a single run of 'imagemap pack' needs, after command line flags
/// have been applied over the config file.
#[derive(Debug, Clone, PartialEq)]
struct PackSettings {
    input: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    border: u32,
    transpose: bool,
    collapse: bool,
}

impl PackSettings {
    fn new(config: Config, options: PackOptions) -> Self {
        Self {
            input: options.input.unwrap_or(config.input),
            output: options.output.unwrap_or(config.output),
            format: options.format.unwrap_or(config.format),
            border: options.border.unwrap_or(config.border),
            transpose: config.transpose && !options.no_transpose,
            collapse: config.collapse && !options.no_collapse,
        }
    }
}

fn run_pack(settings: &PackSettings) -> anyhow::Result<()> {
    let images = read_listing(&settings.input, settings.border)?;
    InputStats::new(&images).log();

    let layout = ShelfPacker::new()
        .collapse(settings.collapse)
        .transpose(settings.transpose)
        .pack(&images)?;

    log::info!(
        "Packed {} images into {}x{} ({} pixels, {:.1}% covered)",
        layout.images().len(),
        layout.width(),
        layout.height(),
        layout.area(),
        layout.efficiency() * 100.0
    );

    write_layout(&layout, &settings.output, settings.format)
}
