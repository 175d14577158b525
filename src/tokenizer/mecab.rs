//! MeCab support: a parser for its default (IPADIC) text output and a
//! tokenizer that drives the `mecab` executable.
//!
//! Each output line is `surface\tfeatures` where the comma-separated
//! features are:
//!
//! | # | field                 |
//! |---|-----------------------|
//! | 0 | part of speech        |
//! | 1–3 | POS subclasses      |
//! | 4 | inflection type       |
//! | 5 | inflection form       |
//! | 6 | base (dictionary) form |
//! | 7 | reading (katakana)    |
//! | 8 | pronunciation         |
//!
//! `*` marks an empty feature. Sentences end with an `EOS` line.

use crate::token::{Token, Tokenizer};
use smallvec::SmallVec;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
    thread,
};
use thiserror::Error;
use tracing::{debug, warn};

const EMPTY_FEATURE: &str = "*";
const END_OF_SENTENCE: &str = "EOS";

#[derive(Debug, Error)]
pub enum MecabError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("i/o error talking to `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("malformed mecab output on line {line}: {reason}")]
    Parse { line: usize, reason: &'static str },
}

/// One fully parsed MeCab output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MecabNode {
    pub surface: String,
    pub part_of_speech: String,
    pub pos_subclasses: [String; 3],
    pub inflection_type: String,
    pub inflection_form: String,
    /// Base form; the surface when MeCab has none.
    pub headword: String,
    /// Katakana reading; empty when MeCab has none.
    pub reading: String,
    pub pronunciation: String,
}

impl From<MecabNode> for Token {
    fn from(node: MecabNode) -> Self {
        Token {
            surface: node.surface,
            reading: node.reading,
            category: node.part_of_speech,
            lemma: Some(node.headword),
        }
    }
}

#[inline]
fn non_empty(feature: &str) -> &str {
    if feature == EMPTY_FEATURE { "" } else { feature }
}

/// Parses one `surface\tfeatures` line. `line_no` (1-based) is only used in
/// the error.
pub fn parse_line(line: &str, line_no: usize) -> Result<MecabNode, MecabError> {
    let (surface, features) = line.split_once('\t').ok_or(MecabError::Parse {
        line: line_no,
        reason: "missing tab",
    })?;
    if features.is_empty() {
        return Err(MecabError::Parse {
            line: line_no,
            reason: "no features",
        });
    }

    let fields: SmallVec<[&str; 9]> = features.split(',').collect();
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let headword = match field(6) {
        "" | EMPTY_FEATURE => surface,
        base => base,
    };

    Ok(MecabNode {
        surface: surface.to_owned(),
        part_of_speech: field(0).to_owned(),
        pos_subclasses: [
            field(1).to_owned(),
            field(2).to_owned(),
            field(3).to_owned(),
        ],
        inflection_type: field(4).to_owned(),
        inflection_form: field(5).to_owned(),
        headword: headword.to_owned(),
        reading: non_empty(field(7)).to_owned(),
        pronunciation: non_empty(field(8)).to_owned(),
    })
}

/// Parses MeCab output into sentences of nodes.
///
/// Every `EOS` closes a sentence (possibly empty); trailing nodes without an
/// `EOS` form a last sentence. Blank lines are ignored and malformed lines
/// are skipped with a warning.
pub fn parse_output(output: &str) -> Vec<Vec<MecabNode>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for (idx, line) in output.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line == END_OF_SENTENCE {
            sentences.push(std::mem::take(&mut current));
            continue;
        }
        match parse_line(line, idx + 1) {
            Ok(node) => current.push(node),
            Err(e) => warn!("skipping mecab line: {e}"),
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Tokenizer backed by the `mecab` command-line program.
#[derive(Debug, Clone)]
pub struct MecabProcess {
    program: PathBuf,
    dictionary: Option<PathBuf>,
}

impl Default for MecabProcess {
    fn default() -> Self {
        Self::new("mecab")
    }
}

impl MecabProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dictionary: None,
        }
    }

    /// Passes `-d <dir>` to MeCab.
    pub fn with_dictionary(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn dictionary(&self) -> Option<&Path> {
        self.dictionary.as_deref()
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        if let Some(dir) = &self.dictionary {
            command.arg("-d").arg(dir);
        }
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    /// Runs MeCab over `text` and returns its raw output.
    ///
    /// Input is fed from a helper thread while output is collected, so
    /// neither pipe can fill up and stall the other side.
    pub fn run(&self, text: &str) -> Result<String, MecabError> {
        let program = self.program.display().to_string();
        let mut child = self.command().spawn().map_err(|source| MecabError::Spawn {
            program: program.clone(),
            source,
        })?;
        let stdin = child.stdin.take();

        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let Some(mut stdin) = stdin {
                    stdin.write_all(text.as_bytes())?;
                    stdin.write_all(b"\n")?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|source| MecabError::Io {
            program: program.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(MecabError::Exit {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        written.map_err(|source| MecabError::Io { program, source })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Tokenizer for MecabProcess {
    type Error = MecabError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let output = self.run(text)?;
        let tokens: Vec<Token> = parse_output(&output)
            .into_iter()
            .flatten()
            .map(Token::from)
            .collect();
        debug!(program = %self.program.display(), tokens = tokens.len(), "mecab tokenized");
        Ok(tokens)
    }
}
