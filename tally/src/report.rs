use codespan_reporting::diagnostic::{Diagnostic, Label};
use tallyc::evaluator::{EvalErrorKind, ParseErrorKind};
use tallyspan::Spand;

pub trait Report {
    fn diagnose(&self) -> Diagnostic<()>;
}

impl Report for tallyc::Error {
    fn diagnose(&self) -> Diagnostic<()> {
        let note = match self {
            Self::Parse(Spand {
                kind: ParseErrorKind::UnexpectedEnd { .. },
                ..
            }) => Some("the expression ends here"),
            Self::Eval(Spand {
                kind: EvalErrorKind::DivisionByZero,
                ..
            }) => Some("this divisor is zero"),
            _ => None,
        };

        let label = Label::primary((), self.span());
        let label = match note {
            Some(note) => label.with_message(note),
            None => label,
        };

        Diagnostic::error().with_message(self).with_label(label)
    }
}
