//! Conversion of captured git output into a typeset document.
//!
//! This module is the part of git-latex that does real work. It classifies each line of
//! `git diff` or `git log --patch` output, tracks which commit and file section is open,
//! and emits a LaTeX document with color-coded lines. It never fails: any text renders
//! to a well-formed document.
//!
//! # Public API
//! - [`render`] / [`render_with`]: One-shot rendering of a whole input
//! - [`DocumentBuilder`]: Line-at-a-time rendering
//! - [`classify`], [`LineClass`], [`Mode`]: Line classification
//! - [`escape_latex`]: LaTeX text escaping
//! - [`Markup`], [`Latex`]: Output schema

pub mod builder;
pub mod classify;
pub mod escape;
pub mod markup;

pub use builder::{
    render, render_with, transition, Action, DocumentBuilder, RenderSummary, Rendered, State,
    Transition,
};
pub use classify::{classify, file_label, short_commit_id, LineClass, Mode, SHORT_ID_WIDTH};
pub use escape::{escape_latex, escape_with, LATEX_ESCAPES};
pub use markup::{style_for, HeadingLevel, Latex, Markup, Style, CLASS_STYLES, LATEX_COLORS};
