//! Line buffering and indentation
//!
//! Output is collected one line at a time. The pending line is only written when a line break
//! is requested ([`LineState::lb`]) or when the buffer has to be committed mid-line
//! ([`LineState::flush`]), and that is the point where its indentation is decided:
//!
//! ```text
//! indent + tab * min(depth, start_level)
//! ```
//!
//! `depth` is the number of open tags at write time and `start_level` is the depth at which
//! the previous line was written. Taking the minimum keeps a line that closes several
//! elements at the shallower of the two levels.
//!
//! Inside a preformatted region no indentation is written at all.

use super::formatting_rules::FormattingRules;
use log::trace;
use std::fmt;

pub const LINE_TERMINATOR: &str = "\n";

#[derive(Debug, Clone)]
pub struct LineState {
    indent: String,
    tab: String,
    line: String,
    stack: Vec<String>,
    start_level: usize,
    newline: bool,
    preformatted: bool,
}

impl LineState {
    pub fn new(rules: &FormattingRules) -> Self {
        LineState {
            indent: rules.indent.clone(),
            tab: rules.tab.clone(),
            line: String::new(),
            stack: Vec::new(),
            start_level: 0,
            newline: true,
            preformatted: false,
        }
    }

    /// Number of open tags
    pub fn level(&self) -> usize {
        self.stack.len()
    }

    pub fn push_tag(&mut self, tag: &str) {
        self.stack.push(tag.to_string());
    }

    pub fn pop_tag(&mut self) -> Option<String> {
        self.stack.pop()
    }

    pub fn current_tag(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn is_preformatted(&self) -> bool {
        self.preformatted
    }

    pub fn set_preformatted(&mut self, preformatted: bool) {
        self.preformatted = preformatted;
    }

    /// At the start of a fresh output line
    pub fn at_line_start(&self) -> bool {
        self.newline
    }

    pub fn has_pending(&self) -> bool {
        !self.line.is_empty()
    }

    pub fn append(&mut self, text: &str) {
        self.line.push_str(text);
    }

    /// Indentation for the current depth
    pub fn current_indent(&self) -> String {
        let depth = self.level().min(self.start_level);
        let mut indent = String::with_capacity(self.indent.len() + self.tab.len() * depth);
        indent.push_str(&self.indent);
        for _ in 0..depth {
            indent.push_str(&self.tab);
        }
        indent
    }

    /// Separator placed between the strings of multi-line content
    pub fn line_separator(&self) -> String {
        if self.preformatted {
            LINE_TERMINATOR.to_string()
        } else {
            format!("{}{}", LINE_TERMINATOR, self.current_indent())
        }
    }

    /// Append several strings joined by [`line_separator`](Self::line_separator)
    pub fn append_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        let separator = self.line_separator();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.line.push_str(&separator);
            }
            self.line.push_str(line.as_ref());
        }
    }

    /// End the current line. A no-op at the start of a line with nothing pending.
    pub fn lb<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        if self.newline && self.line.is_empty() {
            return Ok(());
        }
        self.write_pending(out)?;
        out.write_str(LINE_TERMINATOR)?;
        self.newline = true;
        Ok(())
    }

    /// Write the pending text without ending the line
    pub fn flush<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        if self.line.is_empty() {
            return Ok(());
        }
        self.write_pending(out)?;
        self.newline = false;
        Ok(())
    }

    /// Make sure the output ends on a complete line
    pub fn finish<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        if !self.newline || !self.line.is_empty() {
            self.lb(out)?;
        }
        Ok(())
    }

    /// Record that text was written to the sink directly, bypassing the buffer
    pub fn mark_written(&mut self, ends_line: bool) {
        self.newline = ends_line;
        self.start_level = self.level();
    }

    fn write_pending<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        if self.newline && !self.preformatted {
            out.write_str(&self.current_indent())?;
        }
        trace!("line at depth {}: {:?}", self.level(), self.line);
        out.write_str(&self.line)?;
        self.line.clear();
        self.start_level = self.level();
        Ok(())
    }
}
