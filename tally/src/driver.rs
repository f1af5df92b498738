use std::io::{IsTerminal, Read};
use std::process::ExitCode;

use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use log::info;
use tallyc::keyword::LexConfig;
use tallyc::{evaluate_all, tokenize_with};

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::Report;

/// Exit status for input that failed to tokenize or evaluate.
const FAILURE: u8 = 1;

/// Exit status for input that could not be read at all.
pub const IO_FAILURE: u8 = 2;

pub struct Driver {
    file:   Option<SimpleFile<String, String>>,
    config: &'static LexConfig,
    tokens: bool,
    quiet:  bool,
}

impl Driver {
    fn read_stdin() -> std::io::Result<String> {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }

    pub fn from_config(cfg: Cli) -> std::io::Result<Self> {
        let file = if let Some(expr) = cfg.expr {
            Some(SimpleFile::new("<expr>".to_string(), expr))
        } else if cfg.stdin {
            Some(SimpleFile::new("<stdin>".to_string(), Self::read_stdin()?))
        } else {
            match cfg.file {
                Some(path) => {
                    let source = std::fs::read_to_string(&path)?;
                    Some(SimpleFile::new(path, source))
                }
                None => None,
            }
        };

        let config = if cfg.strict {
            &LexConfig::STRICT
        } else {
            &LexConfig::DEFAULT
        };

        Ok(Self {
            file,
            config,
            tokens: cfg.tokens,
            quiet: cfg.quiet,
        })
    }

    pub fn run(self) -> ExitCode {
        match &self.file {
            Some(file) => {
                info!("running {}", file.name());
                match self.run_file(file) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(err) => {
                        self.report(&err, file);
                        ExitCode::from(FAILURE)
                    }
                }
            }
            None => match self.repl() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::from(IO_FAILURE)
                }
            },
        }
    }

    fn run_file(&self, file: &SimpleFile<String, String>) -> Result<(), tallyc::Error> {
        let tokens = tokenize_with(file.source(), self.config)?;

        if self.tokens {
            for token in &tokens {
                match token.span.decode(file.source()) {
                    Some((lo, _)) => println!("{lo}\t{token}"),
                    None => println!("?\t{token}"),
                }
            }
            return Ok(());
        }

        for value in evaluate_all(&tokens)? {
            println!("{value}");
        }
        Ok(())
    }

    fn report(&self, error: &tallyc::Error, file: &SimpleFile<String, String>) {
        if self.quiet {
            return;
        }

        let choice = if std::io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let writer = StandardStream::stderr(choice);
        let config = term::Config::default();

        let _ = term::emit(&mut writer.lock(), &config, file, &error.diagnose());
    }

    fn repl(&self) -> std::io::Result<()> {
        let mut editor = Editor::default();
        loop {
            let input = match editor.read()? {
                EditorRead::Read(input) => input,
                EditorRead::Break => break,
                EditorRead::Continue => continue,
            };

            let file = SimpleFile::new("<repl>".to_string(), input);
            if let Err(err) = self.run_file(&file) {
                self.report(&err, &file);
            }
        }

        Ok(())
    }
}
