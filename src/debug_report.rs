use crate::Key;
use selector_assist::{SuggestReport, Token, serialize};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &SuggestReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Source: \"{}\"", report.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    print_tokens(report, &palette);

    println!("\n{}", palette.paint("━━━ Next ━━━", ansi::GRAY));
    println!(
        "  {} {}  {} {}",
        palette.dim("category:"),
        palette.paint(report.resolution.category.as_str(), ansi::BLUE),
        palette.dim("│ fragment:"),
        palette.paint(format!("{:?}", report.resolution.fragment), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Suggestions ━━━", ansi::GRAY));
    print_suggestions(report, &palette);

    println!("\n{}", palette.paint("━━━ Round-trip ━━━", ansi::GRAY));
    let text = serialize(&report.sequence);
    let marker = if text == report.text { palette.paint("✓", ansi::GREEN) } else { palette.paint("≠", ansi::YELLOW) };
    println!("  {} {}", marker, palette.paint(format!("\"{}\"", text), ansi::CYAN));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Tokenize: {}  │  Resolve: {}  │  Filter: {}",
        palette.paint(format!("{:?}", report.metrics.total), ansi::GREEN),
        palette.dim(format!("{:?}", report.metrics.tokenize)),
        palette.dim(format!("{:?}", report.metrics.resolve)),
        palette.dim(format!("{:?}", report.metrics.filter)),
    );
    println!();
}

pub fn print_replay(steps: &[(Key, String)], text: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("{}", palette.paint("━━━ Keys ━━━", ansi::GRAY));
    for (key, outcome) in steps {
        println!("  {} {}", palette.paint(format!("{:<6}", format!("{:?}", key)), ansi::BLUE), outcome);
    }
    println!("\n  {} {}", palette.dim("text:"), palette.bold(palette.paint(format!("\"{}\"", text), ansi::GREEN)));
    println!();
}

fn print_tokens(report: &SuggestReport, palette: &ansi::Palette) {
    for (idx, token) in report.sequence.iter().enumerate() {
        let body = match token {
            Token::Scalar(s) => format!(
                "{} {}",
                palette.paint(s.kind.as_str(), ansi::BLUE),
                palette.paint(format!("{:?}", s.value), ansi::GREEN)
            ),
            Token::Compound { unary, inner } => format!(
                "{} {} {} {}",
                palette.paint("compound", ansi::MAGENTA),
                palette.paint(format!("{:?}", unary.value), ansi::GREEN),
                palette.paint(inner.kind.as_str(), ansi::BLUE),
                palette.paint(format!("{:?}", inner.value), ansi::GREEN),
            ),
        };
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), body);
    }
}

fn print_suggestions(report: &SuggestReport, palette: &ansi::Palette) {
    let state = &report.state;
    if state.suggestions.is_empty() {
        println!("{}", palette.dim("  No suggestions"));
        return;
    }
    if !state.is_open() {
        println!("{}", palette.dim("  (list hidden: fragment is an exact match)"));
    }

    for (idx, s) in state.suggestions.iter().enumerate() {
        let marker =
            if state.is_open() && idx == state.active_index { palette.paint("▶", ansi::YELLOW) } else { " ".to_string() };
        let description = s.description.as_deref().map(|d| palette.dim(format!("│ {d}"))).unwrap_or_default();
        println!(
            "  {} {} {} {}",
            marker,
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&s.value, ansi::GREEN)),
            description
        );
    }
}
