//! Streaming writer
//!
//! Produces markup call by call without building a tree. It runs on the same [`LineState`] as
//! the serializer, so a sequence of `start`/`txt`/`end` calls writes exactly what serializing
//! the equivalent tree writes (with end-tag elision off: at `start` time the writer cannot
//! know that an element will stay childless).
//!
//! Every operation returns `Result<&mut Self, MarkupError>` so calls chain with `?`:
//!
//! ```ignore
//! let mut w = HtmlWriter::new(&FormattingRules::default());
//! w.start("ul")?.element("li", &["one"])?.element("li", &["two"])?.end()?;
//! let html = w.close()?;
//! ```

use super::formatting_rules::FormattingRules;
use super::line_state::LineState;
use super::markup::{childless_close, open_tag, wraps};
use crate::ast::Attributes;
use crate::error::MarkupError;
use crate::escape::{esc_text, esc_xml, quote_attr};
use crate::tags::{classify, TagInfo};
use log::debug;
use std::fmt;

/// Markup flavour of a [`HtmlWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterDialect {
    /// HTML tag semantics: block tags get their own line, void tags have no end tag,
    /// preformatted tags are written verbatim
    #[default]
    Html5,
    /// Plain XML: no tag table, childless elements always close with `/>`
    Xml,
}

pub struct HtmlWriter<W: fmt::Write = String> {
    out: W,
    state: LineState,
    rules: FormattingRules,
    dialect: WriterDialect,
    saved_preformatted: Vec<bool>,
}

impl HtmlWriter<String> {
    /// Writer collecting into a `String`
    pub fn new(rules: &FormattingRules) -> Self {
        HtmlWriter::with_output(String::new(), rules)
    }
}

impl<W: fmt::Write> HtmlWriter<W> {
    pub fn with_output(out: W, rules: &FormattingRules) -> Self {
        HtmlWriter {
            out,
            state: LineState::new(rules),
            rules: rules.clone(),
            dialect: WriterDialect::Html5,
            saved_preformatted: Vec::new(),
        }
    }

    pub fn with_dialect(mut self, dialect: WriterDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> WriterDialect {
        self.dialect
    }

    /// Number of open tags
    pub fn level(&self) -> usize {
        self.state.level()
    }

    fn info(&self, tag: &str) -> TagInfo {
        match self.dialect {
            WriterDialect::Html5 => classify(tag),
            WriterDialect::Xml => TagInfo::UNKNOWN,
        }
    }

    fn break_unless_preformatted(&mut self) -> Result<(), MarkupError> {
        if !self.state.is_preformatted() {
            self.state.lb(&mut self.out)?;
        }
        Ok(())
    }

    pub fn start(&mut self, tag: &str) -> Result<&mut Self, MarkupError> {
        self.start_with(tag, &Attributes::new())
    }

    pub fn start_with(
        &mut self,
        tag: &str,
        attributes: &Attributes,
    ) -> Result<&mut Self, MarkupError> {
        let info = self.info(tag);
        if wraps(&info, tag, &self.rules) {
            self.break_unless_preformatted()?;
        }
        open_tag(&mut self.state, &mut self.out, tag, attributes)?;
        self.state.append(">");
        self.state.push_tag(tag);

        let saved = self.state.is_preformatted();
        self.saved_preformatted.push(saved);
        if !saved && info.preformatted {
            self.state.flush(&mut self.out)?;
        }
        self.state.set_preformatted(saved || info.preformatted);
        Ok(self)
    }

    /// Open several tags, outermost first
    pub fn start_all(&mut self, tags: &[&str]) -> Result<&mut Self, MarkupError> {
        for tag in tags {
            self.start(tag)?;
        }
        Ok(self)
    }

    /// A childless element
    pub fn empty(&mut self, tag: &str) -> Result<&mut Self, MarkupError> {
        self.empty_with(tag, &Attributes::new())
    }

    pub fn empty_with(
        &mut self,
        tag: &str,
        attributes: &Attributes,
    ) -> Result<&mut Self, MarkupError> {
        let info = self.info(tag);
        let wrap = wraps(&info, tag, &self.rules);
        if wrap {
            self.break_unless_preformatted()?;
        }
        open_tag(&mut self.state, &mut self.out, tag, attributes)?;
        let close = match self.dialect {
            WriterDialect::Html5 => childless_close(&info, tag, self.rules.elide_end_tags),
            WriterDialect::Xml => "/>".to_string(),
        };
        self.state.append(&close);
        if wrap {
            self.break_unless_preformatted()?;
        }
        Ok(self)
    }

    /// Close the innermost open tag
    pub fn end(&mut self) -> Result<&mut Self, MarkupError> {
        let tag = self
            .state
            .pop_tag()
            .ok_or_else(|| MarkupError::Unsupported("end() without an open tag".to_string()))?;
        let saved = self.saved_preformatted.pop().unwrap_or(false);
        self.state.set_preformatted(saved);
        self.state.append("</");
        self.state.append(&tag);
        self.state.append(">");

        let info = self.info(&tag);
        if wraps(&info, &tag, &self.rules) {
            self.break_unless_preformatted()?;
        }
        Ok(self)
    }

    /// Close the innermost open tag, which must be `expected`
    pub fn end_expect(&mut self, expected: &str) -> Result<&mut Self, MarkupError> {
        match self.state.current_tag().map(str::to_string) {
            Some(actual) if actual == expected => self.end(),
            Some(actual) => Err(MarkupError::MismatchedEndTag {
                expected: expected.to_string(),
                actual,
            }),
            None => Err(MarkupError::Unsupported(format!(
                "end_expect({}) without an open tag",
                expected
            ))),
        }
    }

    /// Close tags innermost first, checking each name
    pub fn end_expect_all(&mut self, tags: &[&str]) -> Result<&mut Self, MarkupError> {
        for tag in tags {
            self.end_expect(tag)?;
        }
        Ok(self)
    }

    /// Close `count` tags
    pub fn end_n(&mut self, count: usize) -> Result<&mut Self, MarkupError> {
        for _ in 0..count {
            self.end()?;
        }
        Ok(self)
    }

    /// Close tags until only `level` remain open
    pub fn end_till(&mut self, level: usize) -> Result<&mut Self, MarkupError> {
        while self.level() > level {
            self.end()?;
        }
        Ok(self)
    }

    pub fn end_all(&mut self) -> Result<&mut Self, MarkupError> {
        self.end_till(0)
    }

    /// Unescaped text, one entry per line
    pub fn txt<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.state.append_lines(lines);
        Ok(self)
    }

    /// Escaped text, one entry per line
    pub fn esc<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        let escaped: Vec<String> = lines
            .iter()
            .map(|line| match self.dialect {
                WriterDialect::Html5 => esc_text(line.as_ref()).into_owned(),
                WriterDialect::Xml => esc_xml(line.as_ref()).into_owned(),
            })
            .collect();
        self.state.append_lines(&escaped);
        Ok(self)
    }

    /// Unescaped text, one entry per line, with an [`lb`](Self::lb) between entries
    pub fn raw<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.state.lb(&mut self.out)?;
            }
            self.state.append(line.as_ref());
        }
        Ok(self)
    }

    pub fn comment<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.state.append("<!-- ");
        self.state.append_lines(lines);
        self.state.append(" -->");
        Ok(self)
    }

    pub fn cdata<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.state.append("<![CDATA[");
        self.state.append_lines(lines);
        self.state.append("]]>");
        Ok(self)
    }

    /// `start`, `txt`, `end`
    pub fn element<S: AsRef<str>>(
        &mut self,
        tag: &str,
        content: &[S],
    ) -> Result<&mut Self, MarkupError> {
        self.element_with(tag, content, &Attributes::new())
    }

    /// Without content this is [`empty_with`](Self::empty_with)
    pub fn element_with<S: AsRef<str>>(
        &mut self,
        tag: &str,
        content: &[S],
        attributes: &Attributes,
    ) -> Result<&mut Self, MarkupError> {
        if content.is_empty() {
            return self.empty_with(tag, attributes);
        }
        self.start_with(tag, attributes)?.txt(content)?.end()
    }

    /// End the current line
    pub fn lb(&mut self) -> Result<&mut Self, MarkupError> {
        self.state.lb(&mut self.out)?;
        Ok(self)
    }

    /// End the current line only if something is pending on it
    pub fn lb1(&mut self) -> Result<&mut Self, MarkupError> {
        if self.state.has_pending() {
            self.state.lb(&mut self.out)?;
        }
        Ok(self)
    }

    /// Commit the pending line, then write `lines` to the output untouched
    pub fn formatted<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.state.flush(&mut self.out)?;
        let mut last = None;
        for line in lines {
            let line = line.as_ref();
            self.out.write_str(line)?;
            if let Some(c) = line.chars().last() {
                last = Some(c);
            }
        }
        if let Some(c) = last {
            self.state.mark_written(c == '\n');
        }
        Ok(self)
    }

    /// Write out the pending line without ending it
    pub fn flush(&mut self) -> Result<&mut Self, MarkupError> {
        self.state.flush(&mut self.out)?;
        Ok(self)
    }

    /// Flush and hand back the output
    pub fn close(mut self) -> Result<W, MarkupError> {
        if self.level() > 0 {
            debug!("closing writer with {} open tags", self.level());
        }
        self.state.flush(&mut self.out)?;
        Ok(self.out)
    }

    /// `<!DOCTYPE html>` on its own line
    pub fn doctype(&mut self) -> Result<&mut Self, MarkupError> {
        self.state.append("<!DOCTYPE html>");
        self.lb()
    }

    /// `<?xml version="1.0" encoding="UTF-8" ?>` on its own line
    pub fn xml_header(&mut self) -> Result<&mut Self, MarkupError> {
        let header = format!(
            "<?xml version={} encoding={} ?>",
            quote_attr("1.0"),
            quote_attr("UTF-8")
        );
        self.state.append(&header);
        self.lb()
    }

    pub fn content_type(&mut self, charset: &str) -> Result<&mut Self, MarkupError> {
        let attrs = Attributes::new()
            .add("http-equiv", "Content-Type")
            .content(format!("text/html; charset={}", charset));
        self.empty_with("meta", &attrs)
    }

    /// `<title>` with escaped text
    pub fn title(&mut self, text: &str) -> Result<&mut Self, MarkupError> {
        self.element("title", &[esc_text(text)])
    }

    pub fn stylesheet(&mut self, href: &str) -> Result<&mut Self, MarkupError> {
        let attrs = Attributes::new()
            .rel("stylesheet")
            .type_("text/css")
            .href(href);
        self.empty_with("link", &attrs)
    }

    /// External script reference
    pub fn javascript(&mut self, src: &str) -> Result<&mut Self, MarkupError> {
        let attrs = Attributes::new().type_("text/javascript").src(src);
        self.start_with("script", &attrs)?.end()
    }

    /// Inline script, one source line per entry
    pub fn script<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.raw_block("script", "text/javascript", lines)
    }

    /// Inline stylesheet, one rule line per entry
    pub fn style<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&mut Self, MarkupError> {
        self.raw_block("style", "text/css", lines)
    }

    fn raw_block<S: AsRef<str>>(
        &mut self,
        tag: &str,
        mime: &str,
        lines: &[S],
    ) -> Result<&mut Self, MarkupError> {
        let attrs = Attributes::new().type_(mime);
        self.start_with(tag, &attrs)?
            .lb()?
            .txt(lines)?
            .lb()?
            .end_expect(tag)
    }
}
