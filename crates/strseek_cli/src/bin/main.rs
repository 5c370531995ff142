use std::env;
use std::process;
use std::sync::Once;

use strseek::stdlib::string_index;
use strseek::{MatchData, Regexp, RegexpOptions, SearchContext, Value};

const VERSION: &str = concat!("strseek ", env!("CARGO_PKG_VERSION"));

static TRACING_INIT: Once = Once::new();

fn print_usage() {
    eprintln!("usage: strseek [options] SUBJECT PATTERN [OFFSET]");
    eprintln!("Available options are:");
    eprintln!("  -r        treat PATTERN as a regular expression");
    eprintln!("  -b        treat PATTERN as a byte value (integer or single character)");
    eprintln!("  -f flags  regexp flags, any of 'i', 'm', 'x' (implies -r)");
    eprintln!("  -j        print the result as JSON");
    eprintln!("  -v        show version information");
    eprintln!("  -h        show this help");
    eprintln!("  --        stop handling options");
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum PatternMode {
    #[default]
    Literal,
    Byte,
    Regexp,
}

#[derive(Default)]
struct Options {
    mode: PatternMode,
    flags: String,
    json: bool,
    show_version: bool,
    show_help: bool,
    positional: Vec<String>,
}

/// Enable with `RUST_LOG=strseek=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Options::default();
    let mut i = 0;
    let mut stop_options = false;

    while i < args.len() {
        let arg = &args[i];

        let is_number = arg.parse::<i64>().is_ok();
        if !stop_options && !is_number && arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "-r" => opts.mode = PatternMode::Regexp,
                "-b" => opts.mode = PatternMode::Byte,
                "-f" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("'-f' needs argument".to_string());
                    }
                    opts.flags.push_str(&args[i]);
                    opts.mode = PatternMode::Regexp;
                }
                "-j" => opts.json = true,
                "-v" => opts.show_version = true,
                "-h" => opts.show_help = true,
                "--" => stop_options = true,
                _ => return Err(format!("unrecognized option '{}'", arg)),
            }
        } else {
            opts.positional.push(arg.clone());
        }
        i += 1;
    }

    Ok(opts)
}

fn pattern_value(mode: PatternMode, pattern: &str, flags: &str) -> Result<Value, String> {
    match mode {
        PatternMode::Literal => Ok(Value::from(pattern)),
        PatternMode::Byte => {
            if let Ok(value) = pattern.parse::<i64>() {
                Ok(Value::Int(value))
            } else if let [byte] = pattern.as_bytes() {
                Ok(Value::Int(*byte as i64))
            } else {
                Err(format!("'{}' is not a byte value", pattern))
            }
        }
        PatternMode::Regexp => {
            let options = RegexpOptions::from_flags(flags).map_err(|e| e.to_string())?;
            let regexp = Regexp::with_options(pattern, options).map_err(|e| e.to_string())?;
            Ok(Value::Regexp(regexp))
        }
    }
}

fn print_plain(result: &Value, last_match: Option<&MatchData>) {
    println!("{}", result);
    if let Some(data) = last_match {
        for (group, text) in data.summary().groups.iter().enumerate() {
            match text {
                Some(text) => println!("${}: {:?}", group, text),
                None => println!("${}: nil", group),
            }
        }
    }
}

#[cfg(feature = "serde")]
fn print_json(result: &Value, last_match: Option<&MatchData>) -> Result<(), String> {
    let report = serde_json::json!({
        "index": result.as_int(),
        "match": last_match.map(MatchData::summary),
    });
    let text = serde_json::to_string(&report).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_result: &Value, _last_match: Option<&MatchData>) -> Result<(), String> {
    Err("JSON output requires the 'serde' feature".to_string())
}

fn run(opts: &Options) -> Result<(), String> {
    let (subject, pattern, offset) = match opts.positional.as_slice() {
        [subject, pattern] => (subject, pattern, None),
        [subject, pattern, offset] => (subject, pattern, Some(offset)),
        _ => return Err("expected SUBJECT PATTERN [OFFSET]".to_string()),
    };

    let mut args = vec![pattern_value(opts.mode, pattern, &opts.flags)?];
    if let Some(offset) = offset {
        let offset = offset
            .parse::<i64>()
            .map_err(|_| format!("invalid offset '{}'", offset))?;
        args.push(Value::Int(offset));
    }

    tracing::debug!(mode = ?opts.mode, argc = args.len(), "running index search");
    let mut ctx = SearchContext::new();
    let result = string_index(&mut ctx, subject.as_bytes(), &args).map_err(|e| e.to_string())?;

    if opts.json {
        print_json(&result, ctx.last_match())
    } else {
        print_plain(&result, ctx.last_match());
        Ok(())
    }
}

fn main() {
    init_tracing();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("strseek: {}", e);
            print_usage();
            process::exit(1);
        }
    };

    if opts.show_help {
        print_usage();
        return;
    }
    if opts.show_version {
        println!("{}", VERSION);
        if opts.positional.is_empty() {
            return;
        }
    }

    if let Err(e) = run(&opts) {
        eprintln!("strseek: {}", e);
        process::exit(1);
    }
}
