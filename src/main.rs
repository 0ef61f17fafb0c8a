use clap::Parser;
use hummingbird_catalog::adapters::outbound::console::StderrProgressReporter;
use hummingbird_catalog::adapters::outbound::fixtures::FixtureCatalogRepository;
use hummingbird_catalog::application::dto::OutputFormat;
use hummingbird_catalog::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use hummingbird_catalog::application::read_models::PanelPage;
use hummingbird_catalog::application::state::{ScanTicker, DEFAULT_SCAN_INTERVAL};
use hummingbird_catalog::application::use_cases::{
    BrowseCatalogUseCase, ShowControlPanelUseCase, ShowItemDetailUseCase,
};
use hummingbird_catalog::application::AppShell;
use hummingbird_catalog::catalog::domain::MetadataToggles;
use hummingbird_catalog::cli::{Args, Command, DetailArgs, ListArgs};
use hummingbird_catalog::config::{discover_config, load_config_from_path, CatalogConfig};
use hummingbird_catalog::ports::outbound::{CatalogFormatter, OutputPresenter, ProgressReporter};
use hummingbird_catalog::shared::error::ExitCode;
use hummingbird_catalog::shared::Result;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let format = args.format.or(config.format).unwrap_or_default();

    // Keep the shell alive for the whole run so views can reach the store
    let shell = AppShell::mount(MetadataToggles::default());
    shell.apply_overrides(config.toggles.iter().copied());

    let toggle_reporter = StderrProgressReporter::new();
    shell.store().subscribe(move |toggles, key| {
        toggle_reporter.report(&format!("🔀 Toggle {} set to {}", key, toggles.get(key)));
    });
    shell.apply_overrides(args.toggles.iter().map(|o| (o.key, o.value)));

    let formatter = FormatterFactory::create(format);
    let presenter = PresenterFactory::create(PresenterType::for_output(args.output));

    match &args.command {
        Command::List(list) => {
            run_list(list, &config, &shell, formatter.as_ref(), presenter.as_ref(), format)
        }
        Command::Detail(detail) => {
            run_detail(detail, &config, &shell, formatter.as_ref(), presenter.as_ref(), format)
                .await
        }
        Command::Toggles(toggles) => {
            let page = if toggles.detail {
                PanelPage::Detail
            } else {
                PanelPage::Catalog
            };
            let view = ShowControlPanelUseCase::new().execute(page);
            eprintln!("{}", FormatterFactory::progress_message(format));
            presenter.present(&formatter.format_control_panel(&view)?)
        }
    }
}

fn run_list(
    list: &ListArgs,
    config: &CatalogConfig,
    shell: &AppShell,
    formatter: &dyn CatalogFormatter,
    presenter: &dyn OutputPresenter,
    format: OutputFormat,
) -> Result<()> {
    let use_case = BrowseCatalogUseCase::new(
        FixtureCatalogRepository::new(),
        StderrProgressReporter::new(),
        shell.store().clone(),
    );
    let request = list.to_request(
        config.page_size.unwrap_or_default(),
        config.sort.unwrap_or_default(),
        config.view.unwrap_or_default(),
    );
    let view = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    presenter.present(&formatter.format_catalog(&view)?)
}

async fn run_detail(
    detail: &DetailArgs,
    config: &CatalogConfig,
    shell: &AppShell,
    formatter: &dyn CatalogFormatter,
    presenter: &dyn OutputPresenter,
    format: OutputFormat,
) -> Result<()> {
    let use_case = ShowItemDetailUseCase::new(
        FixtureCatalogRepository::new(),
        StderrProgressReporter::new(),
        shell.store().clone(),
    );
    let mut request = detail.to_request();

    let view = use_case.execute(&request)?;
    eprintln!("{}", FormatterFactory::progress_message(format));
    presenter.present(&formatter.format_detail(&view)?)?;

    let Some(rounds) = detail.watch.filter(|rounds| *rounds > 0) else {
        return Ok(());
    };

    let period = detail
        .tick_seconds
        .map(Duration::from_secs)
        .or(config.scan_interval)
        .unwrap_or(DEFAULT_SCAN_INTERVAL);
    let reporter = StderrProgressReporter::new();
    let mut ticker = ScanTicker::start(period);

    for round in 0..rounds {
        reporter.report_progress(
            round as usize,
            rounds as usize,
            Some("waiting for the next scan tick"),
        );
        let Some(minutes) = ticker.changed().await else {
            break;
        };
        request = request.scanned_minutes(minutes);
        let view = use_case.execute(&request)?;
        presenter.present(&formatter.format_detail(&view)?)?;
    }

    ticker.stop();
    reporter.report_completion(&format!("✅ Watched {} scan ticks", ticker.ticks()));
    Ok(())
}
