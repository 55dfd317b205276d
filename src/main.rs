use anyhow::{Context, Result};
use deploy_pipeline::cli::commands::{RunCommand, ValidateCommand};
use deploy_pipeline::cli::output::*;
use deploy_pipeline::cli::{Cli, Command};
use deploy_pipeline::collaborators::{
    CommandNotifier, CommandProject, ConsoleNotifier, Notifier, ShellCommand, TracingLogger,
};
use deploy_pipeline::core::config::PipelineConfig;
use deploy_pipeline::core::{ExecutionStatus, Pipeline};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for reports
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Run(cmd) => run_pipeline(cmd)?,
        Command::Validate(cmd) => validate_pipeline(cmd)?,
    }

    Ok(())
}

fn run_pipeline(cmd: &RunCommand) -> Result<()> {
    let mut config = PipelineConfig::from_file(&cmd.file)
        .context("Failed to load pipeline config")?;

    if cmd.no_notify {
        config.disable_notifications();
    }

    if !cmd.json {
        println!(
            "{} Loaded pipeline: {}",
            INFO,
            style(&config.name).bold()
        );
    }

    let project = CommandProject::from_config(&config.project);
    let notifier: Box<dyn Notifier> = match &config.notifications.command {
        Some(command) => Box::new(CommandNotifier::new(
            ShellCommand::new(command.clone(), config.project.timeout_secs)
                .with_working_dir(config.project.working_dir.clone()),
        )),
        None => Box::new(ConsoleNotifier),
    };

    let pipeline = Pipeline::new(&config, notifier, TracingLogger);
    let report = pipeline.run(&project);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", format_run_report(&report));
    }

    // Print final status
    if report.status() == ExecutionStatus::Failed {
        if !cmd.json {
            println!(
                "\n{} {} {}",
                CROSS,
                style(&config.name).bold(),
                style(&report.message).red()
            );
        }
        std::process::exit(1);
    }

    if !cmd.json {
        println!(
            "\n{} {} {}",
            CHECK,
            style(&config.name).bold(),
            style(&report.message).green()
        );
    }

    Ok(())
}

fn validate_pipeline(cmd: &ValidateCommand) -> Result<()> {
    if !cmd.json {
        println!("{} Validating pipeline...", INFO);
    }

    let result = PipelineConfig::from_file(&cmd.file);

    match result {
        Ok(config) if cmd.json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Ok(config) => {
            println!("{} Pipeline configuration is valid!", CHECK);
            println!("  Name: {}", style(&config.name).bold());
            println!(
                "  Tests: {}",
                style(config.project.test_command.as_deref().unwrap_or("(none)")).cyan()
            );
            println!("  Deploy: {}", style(&config.project.deploy_command).cyan());
            println!(
                "  Notifications: {}",
                if config.notifications.enabled {
                    style("enabled").green()
                } else {
                    style("disabled").dim()
                }
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Validation failed:", CROSS);
            eprintln!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}
