//! Section-structuring state machine that turns classified lines into a document.
//!
//! The builder tracks which block is open in an explicit [`State`]. Each incoming line is
//! classified and looked up in [`transition`], which yields the ordered list of
//! [`Action`]s to perform and the next state. Every state other than [`State::Idle`]
//! owns exactly one open block, so the block markers balance as long as every transition
//! that leaves a non-idle state for a new section starts with [`Action::CloseBlock`] and
//! [`DocumentBuilder::finish`] closes whatever is still open.
//!
//! # Public API
//! - [`DocumentBuilder`]: Incremental builder fed one line at a time
//! - [`RenderSummary`]: Counts collected while rendering
//! - [`render`]: Render a whole input with the LaTeX schema
//! - [`render_with`]: Render with any [`Markup`] implementation

use crate::render::classify::{classify, file_label, short_commit_id, LineClass, Mode};
use crate::render::markup::{style_for, HeadingLevel, Latex, Markup};

/// Which section, if any, currently has an open block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing open, lines are dropped
    Idle,
    /// Commit section open, its metadata block collects lines
    Commit,
    /// File section open inside a commit section
    CommitFile,
    /// Top-level file section open
    File,
}

/// One step performed while handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CloseBlock,
    PageBreak,
    OpenCommit,
    OpenFile,
    Emit,
}

/// Result of looking up a `(state, class)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub actions: &'static [Action],
    pub next: State,
}

const fn step(actions: &'static [Action], next: State) -> Transition {
    Transition { actions, next }
}

/// Transition table keyed on the current state and the class of the incoming line
pub fn transition(state: State, class: LineClass) -> Transition {
    use Action::*;

    match (state, class) {
        (State::Idle, LineClass::CommitHeader) => step(&[OpenCommit, Emit], State::Commit),
        (State::File, LineClass::CommitHeader) => {
            step(&[CloseBlock, OpenCommit, Emit], State::Commit)
        }
        (State::Commit | State::CommitFile, LineClass::CommitHeader) => {
            step(&[CloseBlock, PageBreak, OpenCommit, Emit], State::Commit)
        }

        (State::Idle, LineClass::FileDiffHeader) => step(&[OpenFile, Emit], State::File),
        (State::File, LineClass::FileDiffHeader) => {
            step(&[CloseBlock, OpenFile, Emit], State::File)
        }
        (State::Commit | State::CommitFile, LineClass::FileDiffHeader) => {
            step(&[CloseBlock, OpenFile, Emit], State::CommitFile)
        }

        (State::Idle, _) => step(&[], State::Idle),
        (open, _) => step(&[Emit], open),
    }
}

/// Counts collected while rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub commits: usize,
    pub files: usize,
    pub additions: usize,
    pub deletions: usize,
    pub dropped: usize,
}

/// Finished document and its summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: String,
    pub summary: RenderSummary,
}

/// Incremental document builder
pub struct DocumentBuilder<'m, M: Markup> {
    markup: &'m M,
    mode: Mode,
    state: State,
    current_file: String,
    output: String,
    summary: RenderSummary,
}

impl<'m, M: Markup> DocumentBuilder<'m, M> {
    /// Start a document, writing the preamble immediately
    pub fn new(markup: &'m M, mode: Mode) -> Self {
        Self {
            markup,
            mode,
            state: State::Idle,
            current_file: String::new(),
            output: markup.preamble(mode),
            summary: RenderSummary::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Classify one line and apply the resulting transition
    pub fn push_line(&mut self, line: &str) {
        let class = classify(line, self.mode);
        let Transition { actions, next } = transition(self.state, class);

        if actions.is_empty() {
            log::trace!("Dropping line outside any section: {line:?}");
            self.summary.dropped += 1;
        }

        for action in actions {
            match action {
                Action::CloseBlock => self.output.push_str(self.markup.block_close()),
                Action::PageBreak => self.output.push_str(self.markup.page_break()),
                Action::OpenCommit => self.open_commit(line),
                Action::OpenFile => self.open_file(line, next),
                Action::Emit => self.emit(class, line),
            }
        }

        self.state = next;
    }

    /// Close any open block and terminate the document
    pub fn finish(mut self) -> Rendered {
        if self.state != State::Idle {
            self.output.push_str(self.markup.block_close());
            self.state = State::Idle;
        }
        self.output.push_str(self.markup.terminator());

        log::debug!(
            "Rendered {} document: {} commit(s), {} file(s), +{} -{}",
            self.mode.description(),
            self.summary.commits,
            self.summary.files,
            self.summary.additions,
            self.summary.deletions
        );

        Rendered {
            document: self.output,
            summary: self.summary,
        }
    }

    fn open_commit(&mut self, line: &str) {
        self.summary.commits += 1;
        let label = format!("Commit {}: {}", self.summary.commits, short_commit_id(line));
        log::debug!("Opening commit section '{label}'");

        self.output
            .push_str(&self.markup.heading(HeadingLevel::Top, &label));
        self.output.push_str(self.markup.block_open());
    }

    fn open_file(&mut self, line: &str, next: State) {
        match file_label(line) {
            Some(label) => self.current_file = label,
            None => log::warn!(
                "Malformed diff header, keeping label '{}': {line:?}",
                self.current_file
            ),
        }
        self.summary.files += 1;

        let level = match next {
            State::CommitFile => HeadingLevel::Nested,
            _ => HeadingLevel::Top,
        };
        log::debug!("Opening file section '{}' ({level:?})", self.current_file);

        self.output
            .push_str(&self.markup.heading(level, &self.current_file));
        self.output.push_str(self.markup.block_open());
    }

    fn emit(&mut self, class: LineClass, line: &str) {
        match class {
            LineClass::Addition => self.summary.additions += 1,
            LineClass::Deletion => self.summary.deletions += 1,
            _ => {}
        }

        let escaped = self.markup.escape(line);
        self.output
            .push_str(&self.markup.line(style_for(class), &escaped));
    }
}

/// Render `input` with any markup schema
pub fn render_with<M: Markup>(markup: &M, input: &str, mode: Mode) -> Rendered {
    let mut builder = DocumentBuilder::new(markup, mode);
    for line in input.lines() {
        builder.push_line(line);
    }
    builder.finish()
}

/// Render `input` as a LaTeX document
///
/// # Examples
/// ```
/// use git_latex::render::{render, Mode};
///
/// let doc = render("diff --git a/foo.go b/foo.go\n+added line\n", Mode::DiffOnly);
/// assert!(doc.contains("\\section{foo.go}"));
/// assert!(doc.contains("\\textcolor{diffadd}{+added line}"));
/// assert!(doc.ends_with("\\end{document}\n"));
/// ```
pub fn render(input: &str, mode: Mode) -> String {
    render_with(&Latex, input, mode).document
}
