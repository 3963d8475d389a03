use crate::{
    config::Config,
    input::read_listing,
    options::{GlobalOptions, StatsOptions},
    report::InputStats,
};

pub fn stats(global: GlobalOptions, options: StatsOptions) -> anyhow::Result<()> {
    let config = Config::load(global.config.as_deref())?;

    let input = options.input.unwrap_or(config.input);
    let border = options.border.unwrap_or(config.border);

    let images = read_listing(&input, border)?;
    print!("{}", InputStats::new(&images));

    Ok(())
}
