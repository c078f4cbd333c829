//! CLI entrypoint for workly
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration, the workspace store, the audit
//! log, and the use case behind each subcommand.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use workly_application::{
    AnalyzeTaskUseCase, AuditLog, ChangeHierarchyInput, ChangeHierarchyUseCase, NoAuditLog,
    PlanTodayUseCase, TaskStore,
};
use workly_domain::{ConfigIssue, HierarchyManager, Severity, TaskId};
use workly_infrastructure::{ConfigLoader, FileConfig, JsonWorkspaceStore, JsonlAuditLogger};
use workly_presentation::{Cli, Command, OutputFormatter, formatter_for};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let (policy, issues) = config.hierarchy.to_policy();
    report_config_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli.output.or(config.output.format).unwrap_or_default();
    let formatter: Box<dyn OutputFormatter> = formatter_for(format);

    // === Dependency Injection ===
    let workspace = config.workspace.resolve(cli.workspace.as_ref());
    info!("Using workspace {}", workspace.display());

    let store: Arc<dyn TaskStore> = Arc::new(JsonWorkspaceStore::new(&workspace));
    let manager = HierarchyManager::new(policy);

    match command {
        Command::Path { task_id } => {
            let report = AnalyzeTaskUseCase::new(store, manager)
                .execute(&TaskId::new(task_id))
                .await?;
            emit(&formatter.format_path(&report.task, &report.path));
        }

        Command::Analyze { task_id } => {
            let use_case = AnalyzeTaskUseCase::new(store, manager);
            match task_id {
                Some(id) => {
                    let report = use_case.execute(&TaskId::new(id)).await?;
                    emit(&formatter.format_report(&report));
                }
                None => {
                    let reports = use_case.execute_all().await?;
                    emit(&formatter.format_reports(&reports));
                }
            }
        }

        Command::Validate { task_id, target } => {
            let task_id = TaskId::new(task_id);
            let placement = target.placement();
            let validation = change_use_case(store, manager, &config, &workspace)
                .validate(&task_id, &placement)
                .await?;
            emit(&formatter.format_validation(&task_id, &placement, &validation));
        }

        Command::Today => {
            let view = PlanTodayUseCase::new(store, manager).execute().await?;
            emit(&formatter.format_today(&view));
        }

        Command::Change {
            task_id,
            target,
            dry_run,
        } => {
            let task_id = TaskId::new(task_id);
            let placement = target.placement();
            let input =
                ChangeHierarchyInput::new(task_id.clone(), placement.clone()).with_dry_run(dry_run);

            match change_use_case(store, manager, &config, &workspace)
                .execute(input)
                .await
            {
                Ok(output) => emit(&formatter.format_change(&output)),
                Err(err) => {
                    if let Some(validation) = err.validation() {
                        emit(&formatter.format_validation(&task_id, &placement, validation));
                    }
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing to a file.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace", // -vvv or more
        }
    };

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn report_config_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
}

fn change_use_case(
    store: Arc<dyn TaskStore>,
    manager: HierarchyManager,
    config: &FileConfig,
    workspace: &Path,
) -> ChangeHierarchyUseCase {
    ChangeHierarchyUseCase::new(store, manager)
        .with_link_verification(config.hierarchy.verify_links)
        .with_audit_log(audit_log(
            config.audit.resolve(workspace),
            config.audit.max_bytes,
        ))
}

fn audit_log(path: Option<PathBuf>, max_bytes: Option<u64>) -> Arc<dyn AuditLog> {
    match path.and_then(JsonlAuditLogger::new) {
        Some(logger) => {
            let logger = logger.with_max_bytes(max_bytes.unwrap_or(0));
            info!("Recording hierarchy changes to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAuditLog),
    }
}

fn emit(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
