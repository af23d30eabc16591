use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::fs::write_in_place;
use crate::line::read_lines;
use crate::markup::{decorate, Markup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// A missing path argument means standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::Path(path),
            None => Self::Stdin,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub in_place: bool,
    pub markup: Markup,
}

#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source: Source,
    pub options: ConvertOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

#[derive(Debug)]
pub struct ConvertOutcome {
    pub text: String,
    pub sink: Sink,
    pub line_count: usize,
}

impl ConvertOutcome {
    /// Writes the converted text to its sink. Stdout gets one trailing
    /// newline; files get the text as-is.
    pub fn commit<W: Write>(&self, stdout: &mut W) -> ConvertResult<()> {
        match &self.sink {
            Sink::File(path) => {
                write_in_place(path, &self.text).map_err(|source| ConvertError::Write {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = self.text.len(), "rewrote file");
                Ok(())
            }
            Sink::Stdout => {
                writeln!(stdout, "{}", self.text).map_err(ConvertError::Stdout)?;
                stdout.flush().map_err(ConvertError::Stdout)
            }
        }
    }
}

/// Reads the whole source and converts it. Nothing is written yet, so a
/// failure here leaves the sink untouched.
pub fn convert(request: &ConvertRequest) -> ConvertResult<ConvertOutcome> {
    let markup = &request.options.markup;

    let lines = match &request.source {
        Source::Path(path) => {
            debug!(path = %path.display(), "reading file");
            let file = File::open(path).map_err(|source| ConvertError::FileOpen {
                path: path.clone(),
                source,
            })?;
            read_lines(&mut BufReader::new(file)).map_err(ConvertError::Read)?
        }
        Source::Stdin => {
            debug!("reading stdin");
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            read_lines(&mut reader).map_err(ConvertError::Read)?
        }
    };

    let line_count = lines.len();
    let text = transform_lines(&lines, markup);

    let sink = match (&request.source, request.options.in_place) {
        (Source::Path(path), true) => Sink::File(path.clone()),
        _ => Sink::Stdout,
    };
    debug!(lines = line_count, sink = ?sink, "converted input");

    Ok(ConvertOutcome {
        text,
        sink,
        line_count,
    })
}

pub fn convert_reader<R: BufRead>(reader: &mut R, markup: &Markup) -> ConvertResult<String> {
    let lines = read_lines(reader).map_err(ConvertError::Read)?;
    Ok(transform_lines(&lines, markup))
}

fn transform_lines(lines: &[String], markup: &Markup) -> String {
    lines
        .iter()
        .map(|line| decorate(line, markup))
        .collect::<Vec<_>>()
        .join("\n")
}
