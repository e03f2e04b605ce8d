mod debug_report;

use selector_assist::{Options, SourceField, SuggestionCatalog, suggest_verbose};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let opts = Options { max_rendered: config.limit };
    let res = suggest_verbose(&config.input, &config.catalog, &opts);
    debug_report::print_run(&res, config.color);

    if !config.keys.is_empty() {
        let mut field = SourceField::new(config.input.clone(), config.catalog.clone(), opts);
        field.on_focus();
        let steps = replay(&mut field, &config.keys);
        debug_report::print_replay(&steps, field.text(), config.color);
    }
}

struct CliConfig {
    input: String,
    catalog: SuggestionCatalog,
    limit: usize,
    keys: Vec<Key>,
    color: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Key {
    Up,
    Down,
    Enter,
    Blur,
    Focus,
}

impl Key {
    fn parse(name: &str) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            "enter" => Ok(Key::Enter),
            "blur" => Ok(Key::Blur),
            "focus" => Ok(Key::Focus),
            other => Err(format!("error: unknown key '{other}' (expected up, down, enter, blur, focus)")),
        }
    }
}

/// Apply `keys` to `field`, recording what each one did.
fn replay(field: &mut SourceField, keys: &[Key]) -> Vec<(Key, String)> {
    keys.iter()
        .map(|&key| {
            let outcome = match key {
                Key::Up => {
                    field.on_arrow_up();
                    active_label(field)
                }
                Key::Down => {
                    field.on_arrow_down();
                    active_label(field)
                }
                Key::Enter => match field.on_enter() {
                    Some(text) => format!("committed -> \"{text}\""),
                    None => "list closed, nothing committed".to_string(),
                },
                Key::Blur => {
                    field.on_blur();
                    "closed".to_string()
                }
                Key::Focus => {
                    field.on_focus();
                    active_label(field)
                }
            };
            (key, outcome)
        })
        .collect()
}

fn active_label(field: &SourceField) -> String {
    match field.state().active() {
        Some(s) => format!("active [{}] {}", field.state().active_index, s.value),
        None => "closed".to_string(),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut catalog_path: Option<String> = None;
    let mut limit = selector_assist::DEFAULT_MAX_RENDERED;
    let mut keys = Vec::new();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("selector-assist {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--catalog" => {
                let value = args.next().ok_or_else(|| "error: --catalog expects a path".to_string())?;
                catalog_path = Some(value);
            }
            "--limit" => {
                let value = args.next().ok_or_else(|| "error: --limit expects a value".to_string())?;
                limit = parse_limit(&value)?;
            }
            "--keys" => {
                let value = args.next().ok_or_else(|| "error: --keys expects a value".to_string())?;
                keys = parse_keys(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
            _ if arg.starts_with("--catalog=") => {
                catalog_path = Some(arg.trim_start_matches("--catalog=").to_string());
            }
            _ if arg.starts_with("--limit=") => {
                limit = parse_limit(arg.trim_start_matches("--limit="))?;
            }
            _ if arg.starts_with("--keys=") => {
                keys = parse_keys(arg.trim_start_matches("--keys="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    // Unlike a parser CLI, an empty expression is meaningful here: it shows
    // the opening suggestions. Only fall back to stdin when it is piped.
    let input = match input {
        Some(value) => value,
        None if !io::stdin().is_terminal() => read_stdin_input()?,
        None => String::new(),
    };

    let catalog = match catalog_path {
        Some(path) => load_catalog(&path)?,
        None => SuggestionCatalog::default(),
    };

    Ok(CliConfig { input, catalog, limit, keys, color })
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value.parse::<usize>().map_err(|_| format!("error: invalid --limit '{value}' (expected a non-negative integer)"))
}

fn parse_keys(value: &str) -> Result<Vec<Key>, String> {
    value.split(',').filter(|k| !k.trim().is_empty()).map(Key::parse).collect()
}

fn load_catalog(path: &str) -> Result<SuggestionCatalog, String> {
    let text =
        std::fs::read_to_string(path).map_err(|err| format!("error: failed to read catalog '{path}': {err}"))?;
    Ok(SuggestionCatalog::with_fallback(SuggestionCatalog::parse_values(&text)))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    // Single-line field: a trailing newline from a pipe is not part of the text.
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "selector-assist {version}

Inspect how a data-scrubbing selector expression is tokenized and what the
source field would suggest next.

Usage:
  selector-assist [OPTIONS] [--] <input...>
  selector-assist [OPTIONS] --input <text>

Options:
  -i, --input <text>         Expression to inspect. If omitted, reads remaining
                             args, or stdin when piped. Empty input is allowed.
  --catalog <file>           Value catalog, one `<selector> [description]` per
                             line. An empty file falls back to the defaults.
  --limit <n>                Maximum suggestions to render. Default: {limit}
  --keys <k1,k2,...>         Replay keys on the field after focusing it:
                             up, down, enter, blur, focus.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  SELECTOR_DEBUG=1           Print engine traces to stderr.

Exit codes:
  0  Success.
  2  Invalid arguments or unreadable input.
",
        version = env!("CARGO_PKG_VERSION"),
        limit = selector_assist::DEFAULT_MAX_RENDERED
    )
}
