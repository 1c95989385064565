//! Tag-level output shared by the serializer and the streaming writer

use super::formatting_rules::FormattingRules;
use super::line_state::LineState;
use crate::ast::{AttrItem, Attributes};
use crate::error::MarkupError;
use crate::escape::esc_attr;
use crate::tags::TagInfo;
use std::fmt;

/// Whether a tag starts and ends on its own line
pub(crate) fn wraps(info: &TagInfo, tag: &str, rules: &FormattingRules) -> bool {
    info.block || rules.always_wraps(tag)
}

/// Append `<tag` and its attributes. The caller closes the tag.
pub(crate) fn open_tag<W: fmt::Write>(
    state: &mut LineState,
    out: &mut W,
    tag: &str,
    attributes: &Attributes,
) -> Result<(), MarkupError> {
    state.append("<");
    state.append(tag);
    for item in attributes.items() {
        match item {
            AttrItem::Break => state.lb(out)?,
            AttrItem::Attr(attr) => {
                if attr.name().is_empty() {
                    return Err(MarkupError::EmptyAttributeName);
                }
                state.append(" ");
                state.append(attr.name());
                if let Some(value) = attr.value() {
                    state.append("=\"");
                    state.append(&esc_attr(value));
                    state.append("\"");
                }
            }
        }
    }
    Ok(())
}

/// Text that finishes an opening tag when the element has no children
pub(crate) fn childless_close(info: &TagInfo, tag: &str, elide_end_tags: bool) -> String {
    if info.empty && !info.requires_end_tag {
        ">".to_string()
    } else if elide_end_tags {
        "/>".to_string()
    } else {
        format!("></{}>", tag)
    }
}
