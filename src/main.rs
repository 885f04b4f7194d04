use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use elcellomata::grid::Grid;
use elcellomata::render;
use elcellomata::rule::RuleTable;

const USAGE: &str = "\
Usage: elcellomata [OPTIONS] RULE

Visualize elementary cellular automata.

Arguments:
  RULE                 Rule for the cellular automaton (0-255)

Options:
  -o, --output FILE    Output SVG image to FILE. Default is \"ruleN.svg\",
                       where N is the rule number RULE
  -p, --print          Print the visualization to stdout
  -v, --version        Print version information and exit
  -h, --help           Print this help and exit";

struct Args {
    rule: u8,
    output: PathBuf,
    print: bool,
}

/// Parse the command line. `Ok(None)` means a version/help flag already
/// handled the invocation.
fn parse_args<I>(mut argv: I) -> Result<Option<Args>, String>
where
    I: Iterator<Item = String>,
{
    let mut rule = None;
    let mut output = None;
    let mut print = false;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let file = argv
                    .next()
                    .ok_or_else(|| format!("\"{arg}\" requires a FILE argument"))?;

                output = Some(PathBuf::from(file));
            }
            "-p" | "--print" => print = true,
            "-v" | "--version" => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

                return Ok(None);
            }
            "-h" | "--help" => {
                println!("{USAGE}");

                return Ok(None);
            }
            _ => {
                if rule.is_some() {
                    return Err(format!("unexpected argument \"{arg}\""));
                }

                let n: u16 = arg
                    .parse()
                    .map_err(|_| format!("invalid RULE \"{arg}\""))?;

                if n > 255 {
                    return Err(format!("RULE must be in 0..=255, got {n}"));
                }

                rule = Some(n as u8);
            }
        }
    }

    let Some(rule) = rule else {
        return Err("missing RULE argument".to_string());
    };

    let output = output.unwrap_or_else(|| PathBuf::from(format!("rule{rule}.svg")));

    Ok(Some(Args {
        rule,
        output,
        print,
    }))
}

fn run(args: &Args) -> anyhow::Result<()> {
    let rules = RuleTable::new(args.rule);
    debug!(rule = args.rule, table = ?rules.entries(), "built rule table");

    let mut rng = rand::rng();
    let grid = Grid::generate(render::GRID_WIDTH, render::GRID_HEIGHT, &rules, &mut rng)
        .context("automaton sweep failed")?;

    let canvas = render::render(&grid, &rules);
    canvas
        .write_to(&args.output)
        .with_context(|| format!("failed to write \"{}\"", args.output.display()))?;

    info!(rule = args.rule, output = %args.output.display(), "wrote image");

    if args.print {
        let stdout = io::stdout();
        grid.write_text(&mut stdout.lock())
            .context("failed to print the grid")?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");

            return ExitCode::from(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
