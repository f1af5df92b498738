use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

/// Tokenize and evaluate flat arithmetic expressions
#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING, version)]
pub struct Cli {
    /// Source file to evaluate; starts a REPL when no input is given
    pub file: Option<String>,

    /// Evaluate EXPR instead of reading a file
    #[arg(short, long, value_name = "EXPR", conflicts_with_all = ["file", "stdin"])]
    pub expr: Option<String>,

    /// Read input from stdin
    #[arg(long, default_value_t = false, conflicts_with = "file")]
    pub stdin: bool,

    /// Print the token sequence instead of evaluating it
    #[arg(long, default_value_t = false)]
    pub tokens: bool,

    /// Reject words that are not keywords
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Do not print diagnostics
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(HEADER)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(LITERAL)
    .invalid(AnsiColor::Yellow.on_default().effects(Effects::BOLD));

#[cfg(test)]
mod test {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn expr_conflicts_with_file() {
        assert!(Cli::try_parse_from(["tally", "-e", "1", "a.tl"]).is_err());
        let cli = Cli::try_parse_from(["tally", "-vv", "--tokens", "-e", "1+1"]).unwrap();
        assert_eq!(cli.expr.as_deref(), Some("1+1"));
        assert!(cli.tokens);
        assert_eq!(cli.log_level(), "trace");
    }
}
