use clap::Parser;
use exprnode::{Bindings, Expression, Value};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// exprnode evaluates math expressions over single-letter variables, once or
/// element-wise over array inputs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Variable binding such as `a=2`, `t=1,2,3` or `t=[1,2,3]`. May be
    /// repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(char, Value)>,

    /// Print the token sequence instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the variables the expression references instead of evaluating.
    #[arg(long = "vars")]
    list_vars: bool,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    expression: String,
}

/// Parses one `NAME=VALUE` binding. Names are lowercased.
fn parse_binding(s: &str) -> Result<(char, Value), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;

    let name = name.trim().to_lowercase();
    let mut chars = name.chars();
    let name = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => c,
        _ => return Err(format!("variable names are single letters, found '{name}'")),
    };

    let value = value.trim();
    let is_array = value.contains(',') || value.starts_with('[');
    let numbers = value.trim_start_matches('[')
                       .trim_end_matches(']')
                       .split(',')
                       .map(str::trim)
                       .filter(|item| !item.is_empty())
                       .map(|item| {
                           item.parse::<f64>()
                               .map_err(|e| format!("invalid number '{item}' for '{name}': {e}"))
                       })
                       .collect::<Result<Vec<_>, _>>()?;

    match (is_array, numbers.as_slice()) {
        (false, [n]) => Ok((name, Value::Number(*n))),
        (false, _) => Err(format!("missing value for '{name}'")),
        (true, _) => Ok((name, Value::Array(numbers))),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(args.log_level,
                                     Config::default(),
                                     TerminalMode::Stderr,
                                     ColorChoice::Auto)
    {
        eprintln!("Failed to initialise logging: {e}");
    }

    // Uppercase input is normalised here, before the engine sees it.
    let source = args.expression.to_lowercase();

    let expression = Expression::parse(&source).unwrap_or_else(|e| {
                                                   eprintln!("{e}");
                                                   std::process::exit(1);
                                               });

    if args.tokens {
        for token in expression.tokens() {
            println!("{token}");
        }
        return;
    }

    if args.list_vars {
        let names = expression.variables().iter().map(char::to_string).collect::<Vec<_>>();
        println!("{}", names.join(" "));
        return;
    }

    let bindings = args.vars.into_iter().collect::<Bindings>();

    match expression.evaluate(&bindings) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
