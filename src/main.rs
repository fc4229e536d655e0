//! placename: translate Egyptian office and governorate names between
//! Arabic and English from the command line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placename::{ENG, Lang, PlaceKind, Translator, all_kinds};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "placename")]
#[command(version)]
#[command(about = "Translate Egyptian office and governorate names")]
struct Cli {
    /// Log at debug level to stderr, ignoring RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate names given as arguments, or one per line on stdin
    Translate {
        /// Which table to look names up in
        #[arg(short, long)]
        kind: PlaceKind,

        /// Output locale (`ar` returns names unchanged)
        #[arg(short, long, default_value_t = ENG)]
        locale: Lang,

        #[arg(value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print every entry of a table as `arabic<TAB>english`
    List {
        #[arg(short, long)]
        kind: PlaceKind,
    },

    /// Show the available tables
    Kinds,
}

/// `-v` wins over `RUST_LOG`; without it `RUST_LOG` applies, else `warn`.
fn log_directives(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "placename=debug".to_owned();
    }
    env.filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "warn".to_owned())
}

fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directives(verbose, env)))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Translate {
            kind,
            locale,
            names,
        } => {
            let translator = Translator::builder().lang(locale).build();
            debug!(%kind, %locale, "translating");
            if names.is_empty() {
                for line in input.lines() {
                    let line = line.context("failed to read name from stdin")?;
                    writeln!(out, "{}", translator.translate(kind, &line))?;
                }
            } else {
                for name in &names {
                    writeln!(out, "{}", translator.translate(kind, name))?;
                }
            }
        }
        Commands::List { kind } => {
            for (ar, en) in kind.entries() {
                writeln!(out, "{ar}\t{en}")?;
            }
        }
        Commands::Kinds => {
            for &kind in all_kinds() {
                writeln!(out, "{:<12} {:>3}  {}", kind.code(), kind.len(), kind.name())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, stdin.lock(), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placename::ARA;
    use std::io::Cursor;

    fn run_with(args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        run(cli, Cursor::new(stdin.as_bytes().to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn translate_defaults_to_english() {
        let cli = Cli::try_parse_from(["placename", "translate", "-k", "governorate", "القاهرة"])
            .unwrap();
        match cli.command {
            Commands::Translate {
                kind,
                locale,
                names,
            } => {
                assert_eq!(kind, PlaceKind::Governorate);
                assert_eq!(locale, ENG);
                assert_eq!(names, vec!["القاهرة".to_string()]);
            }
            _ => panic!("expected translate"),
        }
    }

    #[test]
    fn locale_and_kind_are_parsed() {
        let cli = Cli::try_parse_from([
            "placename", "-v", "translate", "--kind", "OFFICE", "--locale", "ar",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Translate { kind: PlaceKind::Office, locale, .. } if locale == ARA
        ));
    }

    #[test]
    fn rejects_unknown_locale_and_kind() {
        assert!(Cli::try_parse_from(["placename", "translate", "-k", "office", "-l", "fr"]).is_err());
        assert!(Cli::try_parse_from(["placename", "list", "-k", "city"]).is_err());
    }

    #[test]
    fn verbose_overrides_rust_log() {
        assert_eq!(log_directives(true, Some("warn".into())), "placename=debug");
        assert_eq!(log_directives(true, None), "placename=debug");
    }

    #[test]
    fn rust_log_applies_without_verbose() {
        assert_eq!(log_directives(false, Some("placename=trace".into())), "placename=trace");
        assert_eq!(log_directives(false, Some(" ".into())), "warn");
        assert_eq!(log_directives(false, None), "warn");
    }

    #[test]
    fn translates_arguments_in_default_locale() {
        let out = run_with(
            &["placename", "translate", "-k", "governorate", "القاهرة", "فلان"],
            "ignored\n",
        );
        assert_eq!(out, "Cairo\nفلان\n");
    }

    #[test]
    fn translates_stdin_lines() {
        let out = run_with(
            &["placename", "translate", "-k", "governorate"],
            "القاهرة\r\n\nفلان\nأسوان",
        );
        assert_eq!(out, "Cairo\n\nفلان\nAswan\n");
    }

    #[test]
    fn arabic_locale_echoes_stdin() {
        let out = run_with(
            &["placename", "translate", "-k", "office", "-l", "ar"],
            "شبرا فرعي\nاسكر\n",
        );
        assert_eq!(out, "شبرا فرعي\nاسكر\n");
    }

    #[test]
    fn lists_office_table() {
        let out = run_with(&["placename", "list", "-k", "office"], "");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "شبرا فرعي\tShubra Branch");
        assert!(rows.iter().all(|r| r.split('\t').count() == 2));
    }

    #[test]
    fn kinds_shows_sizes() {
        let out = run_with(&["placename", "kinds"], "");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("office") && rows[0].contains(" 6 "));
        assert!(rows[1].starts_with("governorate") && rows[1].contains(" 27 "));
    }
}
