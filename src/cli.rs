// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    crate::detect_locale()
}

fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("ci")
                .about(t!("cmd_ci_about", locale = locale).to_string())
                .arg(
                    Arg::new("build")
                        .long("build")
                        .help(t!("arg_build", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("build_dir")
                        .long("build_dir")
                        .help(t!("arg_build_dir", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value("build")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("NAME")
                        .default_value("Debug")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("suite")
                .about(t!("cmd_suite_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_suite_dir", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("examples-dir")
                        .long("examples-dir")
                        .help(t!("arg_examples_dir", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .default_value("8")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("skip-build")
                        .long("skip-build")
                        .help(t!("arg_skip_build", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about(t!("cmd_compare_about", locale = locale).to_string())
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help(t!("arg_name", locale = locale).to_string())
                        .value_name("NAME")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("head")
                        .long("head")
                        .help(t!("arg_head", locale = locale).to_string())
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("expect-fail")
                        .long("expect-fail")
                        .help(t!("arg_expect_fail", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("examples-dir")
                        .long("examples-dir")
                        .help(t!("arg_examples_dir", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("target")
                        .help(t!("arg_target", locale = locale).to_string())
                        .value_name("TARGET")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("args")
                        .help(t!("arg_target_args", locale = locale).to_string())
                        .value_name("ARGS")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .trailing_var_arg(true)
                        .action(ArgAction::Append),
                ),
        )
}

pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("ci", ci_matches)) => {
            let build = ci_matches.get_flag("build");
            let build_dir = ci_matches
                .get_one::<PathBuf>("build_dir")
                .unwrap() // Has default
                .clone();
            let config = ci_matches
                .get_one::<String>("config")
                .unwrap() // Has default
                .clone();

            commands::ci::execute(build, build_dir, config).await
        }
        Some(("suite", suite_matches)) => {
            let opts = commands::suite::SuiteOptions {
                dir: suite_matches
                    .get_one::<PathBuf>("dir")
                    .unwrap() // Has default
                    .clone(),
                examples_dir: suite_matches.get_one::<PathBuf>("examples-dir").cloned(),
                jobs: suite_matches
                    .get_one::<usize>("jobs")
                    .copied()
                    .unwrap_or(8),
                skip_build: suite_matches.get_flag("skip-build"),
            };

            commands::suite::execute(opts).await
        }
        Some(("compare", compare_matches)) => {
            let opts = commands::compare::CompareOptions {
                name: compare_matches.get_one::<String>("name").unwrap().clone(),
                target: compare_matches.get_one::<String>("target").unwrap().clone(),
                args: compare_matches
                    .get_many::<String>("args")
                    .map(|vals| vals.cloned().collect())
                    .unwrap_or_default(),
                head: compare_matches.get_one::<usize>("head").copied(),
                expect_fail: compare_matches.get_flag("expect-fail"),
                examples_dir: compare_matches.get_one::<PathBuf>("examples-dir").cloned(),
            };

            commands::compare::execute(opts).await
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
            Ok(ExitCode::SUCCESS)
        }
    }
}
