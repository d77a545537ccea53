//! Output schema: style table and LaTeX markup.
//!
//! The builder never writes markup directly. It asks a [`Markup`] implementation for
//! each fragment, so the classifier and state machine stay independent of the output
//! format. [`Latex`] is the only schema shipped.
//!
//! # Style Table
//! - **Commit**: commit headers and author/date metadata
//! - **File**: `diff --git` headers and `---`/`+++` path lines
//! - **Hunk**: `@@` hunk markers
//! - **Addition** / **Deletion**: changed lines
//! - Context lines carry no style

use crate::render::classify::{LineClass, Mode};
use crate::render::escape::escape_latex;

/// Visual style applied to a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Commit,
    File,
    Hunk,
    Addition,
    Deletion,
}

/// Fixed mapping from line classification to style. `None` means unstyled.
pub const CLASS_STYLES: &[(LineClass, Option<Style>)] = &[
    (LineClass::CommitHeader, Some(Style::Commit)),
    (LineClass::AuthorOrDate, Some(Style::Commit)),
    (LineClass::FileDiffHeader, Some(Style::File)),
    (LineClass::FileHeaderPath, Some(Style::File)),
    (LineClass::HunkMarker, Some(Style::Hunk)),
    (LineClass::Addition, Some(Style::Addition)),
    (LineClass::Deletion, Some(Style::Deletion)),
    (LineClass::Context, None),
];

/// Look up the style for a classification in [`CLASS_STYLES`]
pub fn style_for(class: LineClass) -> Option<Style> {
    CLASS_STYLES
        .iter()
        .find(|(c, _)| *c == class)
        .and_then(|(_, style)| *style)
}

/// Heading depth of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Top,
    Nested,
}

/// Fragments of an output document
pub trait Markup {
    /// Everything before the first heading
    fn preamble(&self, mode: Mode) -> String;

    /// Neutralize characters with special meaning in this markup
    fn escape(&self, text: &str) -> String;

    /// Heading for a section, `label` is raw and escaped by the implementation
    fn heading(&self, level: HeadingLevel, label: &str) -> String;

    /// Opens the block holding a section's lines
    fn block_open(&self) -> &str;

    /// Closes the block opened by [`Markup::block_open`]
    fn block_close(&self) -> &str;

    /// Hard break between commit sections
    fn page_break(&self) -> &str;

    /// A line of already escaped text, optionally styled
    fn line(&self, style: Option<Style>, escaped: &str) -> String;

    /// Everything after the last section
    fn terminator(&self) -> &str;
}

/// `xcolor` color name and RGB value for every style
pub const LATEX_COLORS: &[(Style, &str, (u8, u8, u8))] = &[
    (Style::Addition, "diffadd", (0, 128, 0)),
    (Style::Deletion, "diffrem", (128, 0, 0)),
    (Style::Hunk, "diffinfo", (0, 0, 128)),
    (Style::File, "difffile", (128, 0, 128)),
    (Style::Commit, "diffcommit", (184, 134, 11)),
];

const LATEX_PACKAGES: &str = r"\documentclass[11pt,a4paper]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{listings}
\usepackage{xcolor}
\usepackage{fancyvrb}
\usepackage[margin=1in]{geometry}
\usepackage{hyperref}
";

const LATEX_LISTING_STYLE: &str = r"% Custom listing style for diffs
\lstdefinestyle{diffstyle}{
    basicstyle=\ttfamily\small,
    breaklines=true,
    columns=fullflexible,
    keepspaces=true,
    showspaces=false,
    showstringspaces=false,
    breakatwhitespace=false,
    tabsize=4,
}
";

/// LaTeX document built on `fancyvrb` Verbatim blocks and `xcolor`
#[derive(Debug, Default, Clone, Copy)]
pub struct Latex;

impl Latex {
    fn color_name(style: Style) -> &'static str {
        LATEX_COLORS
            .iter()
            .find(|(s, _, _)| *s == style)
            .map_or("black", |(_, name, _)| name)
    }
}

impl Markup for Latex {
    fn preamble(&self, mode: Mode) -> String {
        let mut preamble = String::from(LATEX_PACKAGES);

        preamble.push_str("\n% Define colors for diff output\n");
        for (_, name, (r, g, b)) in LATEX_COLORS {
            preamble.push_str(&format!("\\definecolor{{{name}}}{{RGB}}{{{r},{g},{b}}}\n"));
        }

        preamble.push('\n');
        preamble.push_str(LATEX_LISTING_STYLE);

        let title = match mode {
            Mode::DiffOnly => "Git Diff Output",
            Mode::FullHistory => "Git History Output",
        };
        preamble.push_str(&format!(
            "\n\\title{{{title}}}\n\\author{{Generated from Git Repository}}\n\\date{{\\today}}\n"
        ));
        preamble.push_str("\n\\begin{document}\n\\maketitle\n\\tableofcontents\n\\newpage\n");

        preamble
    }

    fn escape(&self, text: &str) -> String {
        escape_latex(text)
    }

    fn heading(&self, level: HeadingLevel, label: &str) -> String {
        let command = match level {
            HeadingLevel::Top => "section",
            HeadingLevel::Nested => "subsection",
        };
        format!("\\{command}{{{}}}\n\n", self.escape(label))
    }

    fn block_open(&self) -> &str {
        "\\begin{Verbatim}[commandchars=\\\\\\{\\},codes={\\catcode`$=3}]\n"
    }

    fn block_close(&self) -> &str {
        "\\end{Verbatim}\n\n"
    }

    fn page_break(&self) -> &str {
        "\\newpage\n\n"
    }

    fn line(&self, style: Option<Style>, escaped: &str) -> String {
        match style {
            Some(style) => format!("\\textcolor{{{}}}{{{escaped}}}\n", Self::color_name(style)),
            None => format!("{escaped}\n"),
        }
    }

    fn terminator(&self) -> &str {
        "\\end{document}\n"
    }
}
