use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::Files;
use codespan_reporting::term::{self, Config};
use termcolor::{ColorChoice, StandardStream};

/// Errors that know which part of their source text is to blame.
pub trait Eprint<'a, F: Files<'a>> {
    fn emit_diagnostic<'f: 'a>(
        files: &'f F,
        out: &mut StandardStream,
        diagnostic: &Diagnostic<F::FileId>,
    ) {
        if let Err(e) = term::emit(out, &Config::default(), files, diagnostic) {
            eprintln!("Error while reporting error: {e}");
        }
    }

    fn eprint<'f: 'a>(&self, files: &'f F, out: &mut StandardStream);
}

/// Print an error with its source snippet to stderr.
pub fn eprint_error<'a, 'f: 'a, F, E>(files: &'f F, e: &E, color: ColorChoice)
where
    F: Files<'a>,
    E: Eprint<'a, F>,
{
    let mut out = StandardStream::stderr(color);
    e.eprint(files, &mut out);
}
