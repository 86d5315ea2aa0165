use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use querybar::cli::CliArgs;
use querybar::commands::Cmd;
use querybar::model::QueryModel;
use querybar::session::{ScriptLine, Session};
use querybar::tracing::QuerySnapshot;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    querybar::tracing::init();

    let config = args.load_config().context("loading config")?;
    let source = args.load_suggestions().context("loading suggestions")?;
    let model = QueryModel::new(config).context("building operator vocabulary")?;
    let mut session = Session::new(model, Box::new(source));

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line.context("reading input")?;
        let directive = match line.parse::<ScriptLine>() {
            Ok(directive) => directive,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if directive == ScriptLine::Quit {
            break;
        }

        match session.run(&directive) {
            Ok(cmds) => {
                for cmd in cmds {
                    if let Cmd::RunSearch { query, .. } = cmd {
                        writeln!(out, "search: {}", query)?;
                    }
                }
            }
            Err(e) => eprintln!("{}", e),
        }

        print_state(&mut out, &session, args.json)?;
    }

    Ok(())
}

fn print_state(out: &mut impl Write, session: &Session, json: bool) -> Result<()> {
    let model = session.model();
    let snapshot = QuerySnapshot::from_model(model);
    writeln!(out, "chips: {}", snapshot.render())?;
    writeln!(out, "input: {:?}", session.surface())?;

    for (i, suggestion) in model.suggestions().iter().enumerate() {
        match &suggestion.description {
            Some(description) => writeln!(
                out,
                "  {}. {} ({}) - {}",
                i + 1,
                suggestion.value,
                suggestion.kind,
                description
            )?,
            None => writeln!(out, "  {}. {} ({})", i + 1, suggestion.value, suggestion.kind)?,
        }
    }

    if json {
        writeln!(out, "{}", model.query.to_json()?)?;
    }
    Ok(())
}
