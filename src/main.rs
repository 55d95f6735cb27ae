mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use uc_quote::adapters::outbound::console::StderrProgressReporter;
use uc_quote::application::dto::{OutputFormat, QuoteRequest};
use uc_quote::application::factories::{
    CatalogReaderFactory, CatalogSource, FormatterFactory, PresenterFactory, PresenterType,
};
use uc_quote::application::read_models::QuoteReadModelBuilder;
use uc_quote::application::use_cases::GenerateQuoteUseCase;
use uc_quote::quoting::domain::OptionGroupKind;
use uc_quote::quoting::services::FilterCriteria;
use uc_quote::shared::error::ExitCode;
use uc_quote::shared::Result;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Everything a run needs, after merging the config file under the CLI flags
#[derive(Debug)]
struct Settings {
    source: CatalogSource,
    format: OutputFormat,
    output: Option<PathBuf>,
    quiet: bool,
    request: QuoteRequest,
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = merge_settings(args, config.unwrap_or_default())?;

    // Create adapters (Dependency Injection)
    let catalog_reader = CatalogReaderFactory::create(settings.source)?;
    let progress_reporter = StderrProgressReporter::with_quiet(settings.quiet);

    let use_case = GenerateQuoteUseCase::new(catalog_reader, progress_reporter);
    let response = use_case.execute(settings.request).await?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let colored = settings.format == OutputFormat::Text
        && settings.output.is_none()
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let formatter = FormatterFactory::create(settings.format, colored);
    let model = QuoteReadModelBuilder::build(&response);
    let formatted_output = formatter.format(&model)?;

    let presenter = PresenterFactory::create(match settings.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    });
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads `--config`, or `uc-quote.config.yml` from the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(&PathBuf::from(path)).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// Applies CLI flags on top of config file values
fn merge_settings(args: Args, config: ConfigFile) -> Result<Settings> {
    let source = args
        .catalog
        .or(config.catalog)
        .map(|value| CatalogSource::parse(&value))
        .unwrap_or_default();

    let format = match (args.format, &config.format) {
        (Some(format), _) => format,
        (None, Some(value)) => OutputFormat::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let criteria = match (args.manufacturer, config.filter) {
        (Some(manufacturer), _) => Some(FilterCriteria::new(
            args.platform.unwrap_or_default(),
            manufacturer,
            args.configuration.unwrap_or_default(),
        )),
        (None, Some(filter)) => Some(FilterCriteria::new(
            filter.platform,
            filter.manufacturer,
            filter.configuration,
        )),
        (None, None) => None,
    };

    let mut selections = config
        .selections
        .map(|selections| selections.to_selections())
        .unwrap_or_default();
    for (group, key) in [
        (OptionGroupKind::Display, args.display),
        (OptionGroupKind::Audio, args.audio),
        (OptionGroupKind::Camera, args.camera),
        (OptionGroupKind::MediaSource, args.source),
    ] {
        if key.is_some() {
            selections.set(group, key);
        }
    }

    let mut builder = QuoteRequest::builder()
        .selections(selections)
        .strict(args.strict || config.strict.unwrap_or(false))
        .pricing(config.pricing.unwrap_or_default());
    if let Some(criteria) = criteria {
        builder = builder.criteria(criteria);
    }
    if let Some(name) = args.name {
        builder = builder.name(name);
    }

    Ok(Settings {
        source,
        format,
        output: args.output.map(PathBuf::from),
        quiet: args.quiet,
        request: builder.build()?,
    })
}
