//! Run rules against a problem set

use problint::adapters::documents::{
    self, INPUTS_PARSER_SCOPE, SOLUTION_PARSER_SCOPE, TASK_PARSER_SCOPE,
};
use problint::adapters::logger::{ConsoleIssueLogger, IssueRecorder};
use problint::config::ContestConfig;
use problint::core::models::SharedData;
use problint::core::ports::IssueLogger;
use problint::core::services::driver::LOGGER_SCOPE;
use problint::core::services::{Selection, execute_tests};
use problint::output::{CheckReport, OutputMode};

use crate::cli::app::CheckArgs;

/// Run the selected rules and report (exits with 1 on any ERROR)
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = ContestConfig::load(args.config.as_deref())?;
    let registry = problint::rules::builtin(&config)?;

    let selection = if args.run_only.is_empty() {
        if args.skip.is_empty() {
            Selection::All
        } else {
            Selection::Skip(args.skip.clone())
        }
    } else {
        Selection::Only(args.run_only.clone())
    };
    let selected = registry.select(&selection)?;

    // Human mode prints issues as they come; JSON mode collects them for the report
    let recorder = IssueRecorder::new();
    let run = match mode {
        OutputMode::Human => {
            let make_logger = |scope: &str| ConsoleIssueLogger::new(scope);
            let data = load_data(args, &config, make_logger)?;
            execute_tests(selected, &data, make_logger, args.strict)
        },
        OutputMode::Json => {
            let make_logger = |scope: &str| recorder.scoped(scope);
            let data = load_data(args, &config, make_logger)?;
            execute_tests(selected, &data, make_logger, args.strict)
        },
    };

    log::info!(target: LOGGER_SCOPE, "{}", run.tally);
    if run.tally.failed() {
        log::error!(target: LOGGER_SCOPE, "Failed overall");
    }

    let report = CheckReport::new(&run, args.strict, &recorder.issues());
    report.render(mode);

    if !report.passed {
        std::process::exit(run.tally.exit_code());
    }
    Ok(())
}

/// Parse every directory given on the command line
fn load_data<F, L>(
    args: &CheckArgs,
    config: &ContestConfig,
    make_logger: F,
) -> anyhow::Result<SharedData>
where
    F: Fn(&str) -> L,
    L: IssueLogger,
{
    let mut data = SharedData::new();

    if let Some(dir) = &args.tasks {
        let logger = make_logger(TASK_PARSER_SCOPE);
        data.tasks = Some(documents::load_tasks(&logger, dir, &config.document_glob)?);
        data.tasks_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.solutions {
        let logger = make_logger(SOLUTION_PARSER_SCOPE);
        data.solutions = Some(documents::load_solutions(&logger, dir, &config.document_glob)?);
        data.solutions_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.inputs {
        let logger = make_logger(INPUTS_PARSER_SCOPE);
        data.inputs = Some(documents::load_inputs(&logger, dir, config.task_count));
        data.inputs_dir = Some(dir.clone());
    }

    if data.is_empty() {
        log::warn!(target: LOGGER_SCOPE, "Nothing to check: give --tasks, --solutions or --inputs");
    }
    Ok(data)
}
