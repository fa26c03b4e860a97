//! Console loop: one word per line, an empty line quits.

use std::io::{self, BufRead, Write};

use crate::corrector::Corrector;
use crate::lookup::SuggestItem;
use crate::symspell::Verbosity;

pub fn run<R: BufRead, W: Write>(input: R, mut output: W, corrector: &Corrector) -> io::Result<()> {
    for line in input.lines() {
        let word = line?.trim().to_lowercase();
        if word.is_empty() {
            break;
        }

        let suggestions = corrector.correct(&word, corrector.language());
        report(&mut output, &suggestions, corrector.verbosity())?;
        output.flush()?;
    }
    Ok(())
}

/// Print `term distance frequency` per suggestion.
pub fn report<W: Write>(output: &mut W, suggestions: &[SuggestItem], verbosity: Verbosity) -> io::Result<()> {
    for suggestion in suggestions {
        writeln!(
            output,
            "{} {} {}",
            suggestion.term, suggestion.distance, suggestion.frequency
        )?;
    }
    if verbosity == Verbosity::All {
        writeln!(output, "{} suggestions", suggestions.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symspell::SymSpell;

    fn corrector(verbosity: Verbosity) -> Corrector {
        let mut symspell = SymSpell::new(2, verbosity);
        symspell.build_from_corpus("bank bank bank band", "en");
        Corrector::new(symspell, "en")
    }

    #[test]
    fn test_reports_until_empty_line() {
        let corrector = corrector(Verbosity::All);
        let mut output = Vec::new();
        run("Bnak\n\nbank\n".as_bytes(), &mut output, &corrector).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "bank 1 3\nband 2 1\n2 suggestions\n");
    }

    #[test]
    fn test_no_count_line_when_pruning() {
        let corrector = corrector(Verbosity::Top);
        let mut output = Vec::new();
        run("bank\n".as_bytes(), &mut output, &corrector).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "bank 0 3\n");
    }
}
