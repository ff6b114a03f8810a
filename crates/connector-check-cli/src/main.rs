// crates/connector-check-cli/src/main.rs
// ============================================================================
// Module: Connector Check CLI Entry Point
// Description: Command dispatcher for connector and params validation.
// Purpose: Validate connector documents from files and report field errors.
// Dependencies: clap, connector-check-core, connector-check-config, serde, thiserror.
// ============================================================================

//! ## Overview
//! The `connector-check` binary validates connector documents and email send
//! parameters read from JSON files, printing the field-keyed result as pretty
//! JSON. Exit code 0 means every field passed, 1 means at least one field has
//! messages, and 2 means the command itself failed (bad input, bad config,
//! or an output error). Input files are untrusted and size-limited.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use connector_check_cli::t;
use connector_check_config::ConnectorCheckConfig;
use connector_check_core::ConnectorKind;
use connector_check_core::ConnectorValidation;
use connector_check_core::EmailActionParams;
use connector_check_core::EmailConnector;
use connector_check_core::EmailValidator;
use connector_check_core::ServiceNowConnector;
use connector_check_core::ServiceNowValidator;
use connector_check_core::ValidationResult;
use connector_check_core::email_services;
use connector_check_core::is_servicenow_update_ready;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a connector or params JSON input.
const MAX_INPUT_BYTES: usize = 1024 * 1024;
/// Exit code reported when at least one field has messages.
const EXIT_INVALID: u8 = 1;
/// Exit code reported when the command itself fails.
const EXIT_ERROR: u8 = 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "connector-check", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a connector document (`{"config": ..., "secrets": ...}`).
    Connector(ConnectorCommand),
    /// Validate email send action params.
    Params(ParamsCommand),
    /// List the selectable email services.
    Services(ServicesCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Connector types accepted by `--kind`.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConnectorKindArg {
    /// Email connector.
    Email,
    /// ServiceNow connector.
    Servicenow,
}

impl From<ConnectorKindArg> for ConnectorKind {
    fn from(value: ConnectorKindArg) -> Self {
        match value {
            ConnectorKindArg::Email => Self::Email,
            ConnectorKindArg::Servicenow => Self::ServiceNow,
        }
    }
}

/// Arguments for the `connector` command.
#[derive(Args, Debug)]
struct ConnectorCommand {
    /// Connector type to validate.
    #[arg(long, value_enum)]
    kind: ConnectorKindArg,
    /// Path to the connector document JSON.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Optional config file path (defaults to connector-check.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for the `params` command.
#[derive(Args, Debug)]
struct ParamsCommand {
    /// Path to the email params JSON.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Optional config file path (defaults to connector-check.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for the `services` command.
#[derive(Args, Debug)]
struct ServicesCommand {
    /// Optional config file path (defaults to connector-check.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a connector-check configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to connector-check.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// JSON report for a connector validation.
#[derive(Serialize)]
struct ConnectorReport<'a> {
    /// Connector type validated.
    connector: ConnectorKind,
    /// Whether every field passed.
    valid: bool,
    /// Config and secrets results.
    #[serde(flatten)]
    validation: &'a ConnectorValidation,
    /// ServiceNow only: whether the connector can be saved.
    #[serde(rename = "updateReady", skip_serializing_if = "Option::is_none")]
    update_ready: Option<bool>,
}

/// JSON report for an email params validation.
#[derive(Serialize)]
struct ParamsReport<'a> {
    /// Whether every field passed.
    valid: bool,
    /// Field results.
    #[serde(flatten)]
    result: &'a ValidationResult,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a rendered message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Connector(command) => command_connector(&command),
        Commands::Params(command) => command_params(&command),
        Commands::Services(command) => command_services(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Validation Commands
// ============================================================================

/// Executes the `connector` command.
fn command_connector(command: &ConnectorCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let audit = config
        .audit_sink()
        .map_err(|err| CliError::new(t!("config.audit_failed", error = err)))?;
    let kind = ConnectorKind::from(command.kind);
    let (validation, update_ready) = match kind {
        ConnectorKind::Email => {
            let connector: EmailConnector = read_json_input(&command.input)?;
            let validator = EmailValidator::new(config.classifier())
                .with_options(config.email_options())
                .with_audit_sink(audit);
            (validator.validate_connector(&connector.config, &connector.secrets), None)
        }
        ConnectorKind::ServiceNow => {
            let connector: ServiceNowConnector = read_json_input(&command.input)?;
            let validator = ServiceNowValidator::new().with_audit_sink(audit);
            let validation = validator.validate_connector(&connector.config, &connector.secrets);
            let ready =
                is_servicenow_update_ready(&connector.config, &connector.secrets, &validation);
            (validation, Some(ready))
        }
    };
    let valid = validation.is_valid();
    write_json_pretty(&ConnectorReport {
        connector: kind,
        valid,
        validation: &validation,
        update_ready,
    })?;
    Ok(validation_exit_code(valid))
}

/// Executes the `params` command.
fn command_params(command: &ParamsCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let audit = config
        .audit_sink()
        .map_err(|err| CliError::new(t!("config.audit_failed", error = err)))?;
    let params: EmailActionParams = read_json_input(&command.input)?;
    let validator = EmailValidator::new(config.classifier())
        .with_options(config.email_options())
        .with_audit_sink(audit);
    let result = validator.validate_params(&params);
    let valid = result.is_valid();
    write_json_pretty(&ParamsReport {
        valid,
        result: &result,
    })?;
    Ok(validation_exit_code(valid))
}

/// Executes the `services` command.
fn command_services(command: &ServicesCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    write_json_pretty(&email_services(config.email.cloud_enabled))?;
    Ok(ExitCode::SUCCESS)
}

/// Maps a validation outcome to the process exit code.
fn validation_exit_code(valid: bool) -> ExitCode {
    if valid { ExitCode::SUCCESS } else { ExitCode::from(EXIT_INVALID) }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads configuration with CLI error mapping.
fn load_config(path: Option<&Path>) -> CliResult<ConnectorCheckConfig> {
    ConnectorCheckConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads and decodes a size-limited JSON input file.
fn read_json_input<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let path_display = path.display();
    let bytes = read_bytes_with_limit(path, MAX_INPUT_BYTES).map_err(|err| match err {
        ReadLimitError::Io(error) => {
            CliError::new(t!("input.read_failed", path = path_display, error = error))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!("input.too_large", path = path_display, size = size, limit = limit)),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("input.parse_failed", path = path_display, error = err))
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes pretty JSON to stdout.
fn write_json_pretty<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns the error exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::from(EXIT_ERROR)
}
