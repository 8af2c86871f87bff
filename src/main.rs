use orgchart::adapters::outbound::console::StderrProgressReporter;
use orgchart::adapters::outbound::network::GitHubDirectoryService;
use orgchart::application::dto::ChartRequest;
use orgchart::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use orgchart::application::use_cases::BuildOrgChartUseCase;
use orgchart::cli::Args;
use orgchart::config::{discover_config, load_config_from_path, Settings};
use orgchart::shared::error::{ExitCode, OrgChartError};
use orgchart::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config_file = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(args, config_file)?;

    // Create adapters (Dependency Injection)
    let directory_service =
        GitHubDirectoryService::with_base_url(settings.token.as_str(), &settings.api_url)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = BuildOrgChartUseCase::new(directory_service, progress_reporter);
    let request = ChartRequest::new(settings.org.as_str(), settings.listing_mode);
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let chart = formatter.format(&response.model, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&chart)?;

    eprintln!("🎉 Done!");

    if settings.fail_on_orphans && response.has_orphans() {
        eprintln!(
            "⚠️  {} member(s) belong to no team (--fail-on-orphans)",
            response.model.members_without_team().len()
        );
        return Ok(ExitCode::OrphansDetected);
    }

    Ok(ExitCode::Success)
}

fn report_error(e: &anyhow::Error) {
    let banner = "❌ An error occurred:";
    if std::io::stderr().is_terminal() {
        eprintln!("\n{}\n", banner.red().bold());
    } else {
        eprintln!("\n{}\n", banner);
    }
    eprintln!("{}", e);

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
}

/// Configuration problems exit with 2, everything else with 3
fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<OrgChartError>() {
        Some(OrgChartError::InvalidConfig { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
