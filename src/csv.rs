// src/csv.rs
use std::borrow::Cow;
use std::io::{self, Write};

/// Quoting policy for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    /// Always wrap in double quotes (card names: `name | subtitle` may hold commas).
    Always,
    /// Only when the content would break the row.
    Needed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    pub text: Cow<'a, str>,
    pub quote: Quote,
}

impl<'a> Cell<'a> {
    pub fn quoted(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into(), quote: Quote::Always }
    }

    pub fn plain(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into(), quote: Quote::Needed }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, `\n` terminated.
pub fn write_row<W: Write>(mut w: W, row: &[Cell<'_>], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }

        let quote = match cell.quote {
            Quote::Always => true,
            Quote::Needed => needs_quotes(&cell.text, sep),
        };
        if quote {
            let escaped = cell.text.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell.text)?;
        }
    }
    writeln!(w)
}
