use ahash::AHashSet;

use crate::{
    ast::{
        attr::Attribute,
        el::Element,
        parent::Root,
        template_child::{Comment, TemplateChildNode, Text},
        utils::{Position, SourceLocation},
        Node,
    },
    errors::{CompilerError, ErrorCode},
    options::{CompilerOptions, WhiteSpaceStrategy},
    re::{
        ADVANCE_SPACE_RE, ATTR_NAME_RE, ATTR_VALUE_RE, ATTR_VALUE_SPACE_RE, COMMENT_END_RE,
        END_TAG_OPEN_RE, NEW_LINE_RE, NON_WHITESPACE_RE, CONDENSE_WHITESPACE_RE, TAG_OPEN_RE,
        UNEXPECTED_CHARS_IN_UNQUOTED_RE, UNEXPECTED_CHAR_IN_ATTR_NAME_RE, UNQUOTED_RE,
    },
};

pub enum TagType {
    Start,
    End,
}

pub struct Parser;

impl Parser {
    /// Parse markup into a raw AST. Attribute names are kept verbatim
    /// (binding and directive prefixes included); classification is the
    /// transform pass's job.
    pub fn base_parse(content: &str, options: &CompilerOptions) -> Node<Root> {
        let mut ctx = ParserContext::new(content.to_string(), options);
        let start = ctx.cursor();
        let children = ctx.parse_children(&mut vec![]);

        Node::<Root>::new(children, content.to_string(), Some(ctx.selection(start, None)))
    }
}

struct ParserContext<'a> {
    /// inside a whitespace-preserving tag, e.g. `<pre>`
    in_pre: bool,
    position: Position,
    source: String,
    original_source: String,
    options: &'a CompilerOptions,
}

impl<'a> ParserContext<'a> {
    fn new(content: String, options: &'a CompilerOptions) -> Self {
        ParserContext {
            options,
            original_source: content.clone(),
            source: content,
            position: Position {
                line: 1,
                column: 1,
                offset: 0,
            },
            in_pre: false,
        }
    }

    #[inline]
    fn cursor(&self) -> Position {
        self.position
    }

    fn parse_children(&mut self, ancestors: &mut Vec<String>) -> Vec<TemplateChildNode> {
        let mut nodes: Vec<TemplateChildNode> = vec![];

        while !self.is_end(ancestors) {
            let source = self.source.clone();
            let mut node: Option<TemplateChildNode> = None;

            if source.starts_with('<') {
                if source.len() == 1 {
                    self.emit_error(ErrorCode::EOFBeforeTagName, Some(1), None);
                    self.advance_by(1);
                    continue;
                } else if source.starts_with("<!--") {
                    node = Some(TemplateChildNode::new_comment(self.parse_comment()));
                } else if source.starts_with("<!") {
                    self.emit_error(ErrorCode::IncorrectlyClosedComment, None, None);
                    self.parse_bogus_comment();
                    continue;
                } else if source.starts_with("</") {
                    if source.len() == 2 {
                        self.emit_error(ErrorCode::EOFBeforeTagName, Some(2), None);
                        self.advance_by(2);
                    } else if source[2..].starts_with('>') {
                        self.emit_error(ErrorCode::MissingEndTagName, Some(2), None);
                        self.advance_by(3);
                    } else if source[2..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                        // end tag with no matching open tag on the stack
                        self.emit_error(ErrorCode::XInvalidEndTag, None, None);
                        let _ = self.parse_tag(TagType::End);
                    } else {
                        self.emit_error(
                            ErrorCode::InvalidFirstCharacterOfTagName,
                            Some(2),
                            None,
                        );
                        self.parse_bogus_comment();
                    }
                    continue;
                } else if source[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                    node = self
                        .parse_element(ancestors)
                        .map(TemplateChildNode::new_el);
                } else {
                    self.emit_error(ErrorCode::InvalidFirstCharacterOfTagName, Some(1), None);
                }
            }
            let node = match node {
                Some(node) => node,
                None => TemplateChildNode::new_text(self.parse_text()),
            };
            push_node(&mut nodes, node);
        }

        self.condense_whitespace(nodes)
    }

    fn parse_element(&mut self, ancestors: &mut Vec<String>) -> Option<Node<Element>> {
        let was_in_pre = self.in_pre;
        let mut el = self.parse_tag(TagType::Start)?;
        let is_pre_boundary = self.in_pre && !was_in_pre;

        if el.inner.is_self_closing || (self.options.is_void_tag)(&el.inner.tag) {
            if is_pre_boundary {
                self.in_pre = false;
            }
            return Some(el);
        }

        ancestors.push(el.inner.tag.clone());
        let children = self.parse_children(ancestors);
        ancestors.pop();
        el.inner.children = children;

        if self.starts_with_end_tag_open(&el.inner.tag) {
            let _ = self.parse_tag(TagType::End);
        } else {
            self.emit_error(ErrorCode::XMissingEndTag, Some(0), Some(el.loc.start));
        }

        el.loc = self.selection(el.loc.start, None);

        if is_pre_boundary {
            self.in_pre = false;
        }
        Some(el)
    }

    /// Parse a tag (e.g. `<div id=a>`) with that type (start tag or end tag).
    fn parse_tag(&mut self, tag_type: TagType) -> Option<Node<Element>> {
        let start = self.cursor();
        let source = self.source.clone();
        let matches = TAG_OPEN_RE.captures(&source)?;
        let match0 = matches.get(0)?;
        let tag = matches.get(1)?.as_str().to_string();

        self.advance_by(match0.end());
        self.advance_spaces();

        if (self.options.is_pre_tag)(&tag) {
            self.in_pre = true;
        }

        let attrs = self.parse_attributes(&tag_type);

        let mut is_self_closing = false;
        if self.source.is_empty() {
            self.emit_error(ErrorCode::EOFInTag, None, None);
        } else {
            is_self_closing = self.source.starts_with("/>");
            self.advance_by(if is_self_closing { 2 } else { 1 });
        }

        if let TagType::End = tag_type {
            return None;
        }

        Some(Node::<Element>::new_el(
            tag,
            attrs,
            is_self_closing,
            self.selection(start, None),
        ))
    }

    fn parse_attributes(&mut self, tag_type: &TagType) -> Vec<Node<Attribute>> {
        let mut attrs: Vec<Node<Attribute>> = vec![];
        let mut attr_names: AHashSet<String> = AHashSet::default();
        while !self.source.is_empty()
            && !self.source.starts_with('>')
            && !self.source.starts_with("/>")
        {
            if self.source.starts_with('/') {
                self.emit_error(ErrorCode::UnexpectedSolidusInTag, None, None);
                self.advance_by(1);
                self.advance_spaces();
                continue;
            }

            let mut attr = self.parse_attribute(&mut attr_names);

            // normalize whitespace runs inside class values
            if attr.inner.name == "class" {
                if let Some(value) = &mut attr.inner.value {
                    *value = ATTR_VALUE_SPACE_RE
                        .replace_all(value, " ")
                        .trim()
                        .to_string();
                }
            }

            if let TagType::Start = tag_type {
                attrs.push(attr);
            }

            if !self.source.is_empty() && !END_TAG_OPEN_RE.is_match(&self.source) {
                self.emit_error(ErrorCode::MissingWhitespaceBetweenAttributes, None, None);
            }
            self.advance_spaces();
        }
        attrs
    }

    fn parse_attribute(&mut self, attr_names: &mut AHashSet<String>) -> Node<Attribute> {
        let start = self.cursor();
        let source = self.source.clone();

        let name = match ATTR_NAME_RE.find(&source) {
            Some(matched) => matched.as_str().to_string(),
            None => String::new(),
        };
        if name.is_empty() {
            // cannot make progress on this byte, skip it
            self.advance_by(1);
            return Node::<Attribute>::new(name, None, self.selection(start, None));
        }
        if attr_names.contains(&name) {
            self.emit_error(ErrorCode::DuplicateAttribute, None, None);
        }
        attr_names.insert(name.clone());

        if name.starts_with('=') {
            self.emit_error(
                ErrorCode::UnexpectedEqualsSignBeforeAttributeName,
                None,
                None,
            );
        }
        for matched in UNEXPECTED_CHAR_IN_ATTR_NAME_RE.find_iter(&name) {
            self.emit_error(
                ErrorCode::UnexpectedCharacterInAttributeName,
                Some(matched.start()),
                None,
            );
        }

        self.advance_by(name.len());

        let mut value = None;
        let rest = self.source.clone();
        if let Some(matched) = ATTR_VALUE_RE.find(&rest) {
            self.advance_by(matched.end());
            self.advance_spaces();
            value = self.parse_attribute_value();
            if value.is_none() {
                self.emit_error(ErrorCode::MissingAttributeValue, None, None);
            }
        }

        Node::<Attribute>::new(name, value, self.selection(start, None))
    }

    fn parse_attribute_value(&mut self) -> Option<String> {
        let quote = self.source.chars().next()?;
        if quote == '"' || quote == '\'' {
            self.advance_by(1);
            match self.source.find(quote) {
                Some(end_index) => {
                    let content = self.source[..end_index].to_string();
                    self.advance_by(end_index + 1);
                    Some(content)
                }
                None => {
                    let content = self.source.clone();
                    self.advance_by(self.source.len());
                    Some(content)
                }
            }
        } else {
            let source = self.source.clone();
            let matched = UNQUOTED_RE.find(&source)?;
            for cap in UNEXPECTED_CHARS_IN_UNQUOTED_RE.find_iter(matched.as_str()) {
                self.emit_error(
                    ErrorCode::UnexpectedCharacterInUnquotedAttributeValue,
                    Some(cap.start()),
                    None,
                );
            }
            let content = matched.as_str().to_string();
            self.advance_by(matched.end());
            Some(content)
        }
    }

    fn parse_comment(&mut self) -> Node<Comment> {
        let start = self.cursor();
        let content: String;

        let source = self.source.clone();
        if let Some(matched) = COMMENT_END_RE.find(&source) {
            if matched.as_str().starts_with("--!") || matched.start() < 4 {
                // `<!-->`, `<!--->` and `--!>` closers are all malformed
                self.emit_error(ErrorCode::IncorrectlyClosedComment, None, None);
            }
            content = source[4..matched.start().max(4)].to_string();
            self.advance_by(matched.end());
        } else {
            content = source[4..].to_string();
            self.advance_by(self.source.len());
            self.emit_error(ErrorCode::EOFInComment, None, None);
        }

        Node::<Comment>::new(content, self.selection(start, None))
    }

    /// Skip a malformed `<!...>` / `</%...>` construct up to the next `>`.
    fn parse_bogus_comment(&mut self) {
        match self.source.find('>') {
            Some(close_index) => self.advance_by(close_index + 1),
            None => self.advance_by(self.source.len()),
        }
    }

    /// Text runs up to the next tag open. Interpolation markers stay in the
    /// content; they are split out at codegen time.
    fn parse_text(&mut self) -> Node<Text> {
        let start = self.cursor();
        // skip the leading char so a stray `<` still produces a text node
        let end_index = self
            .source
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '<')
            .map(|(i, _)| i)
            .unwrap_or(self.source.len());
        let content = self.source[..end_index].to_string();
        self.advance_by(end_index);

        Node::<Text>::new(content, self.selection(start, None))
    }

    /// Whitespace handling strategy over a finished sibling list.
    fn condense_whitespace(&mut self, nodes: Vec<TemplateChildNode>) -> Vec<TemplateChildNode> {
        let should_condense = !matches!(self.options.whitespace, WhiteSpaceStrategy::Preserve);
        if self.in_pre {
            return nodes;
        }

        let nodes_len = nodes.len();
        let mut removed: Vec<usize> = vec![];
        let mut nodes = nodes;

        for i in 0..nodes_len {
            match &nodes[i] {
                TemplateChildNode::Text(text) => {
                    let mut text = text.clone();
                    if !NON_WHITESPACE_RE.is_match(&text.inner.content) {
                        // Remove if the whitespace is the first or last node,
                        // borders a comment, or sits between two elements and
                        // contains a newline; otherwise squash to one space.
                        let first_or_last = i == 0 || i + 1 == nodes_len;
                        let should_remove = first_or_last
                            || (should_condense && {
                                let prev = &nodes[i - 1];
                                let next = &nodes[i + 1];
                                match (prev, next) {
                                    (TemplateChildNode::Comment(_), _)
                                    | (_, TemplateChildNode::Comment(_)) => true,
                                    (
                                        TemplateChildNode::Element(_),
                                        TemplateChildNode::Element(_),
                                    ) => NEW_LINE_RE.is_match(&text.inner.content),
                                    _ => false,
                                }
                            });
                        if should_remove {
                            removed.push(i);
                            continue;
                        } else {
                            text.inner.content = " ".to_string();
                        }
                    } else if should_condense {
                        text.inner.content = CONDENSE_WHITESPACE_RE
                            .replace_all(&text.inner.content, " ")
                            .to_string();
                    }
                    nodes[i] = TemplateChildNode::Text(text);
                }
                TemplateChildNode::Comment(_) if !self.options.comments => {
                    removed.push(i);
                }
                _ => {}
            }
        }

        nodes
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !removed.contains(i))
            .map(|(_, node)| node)
            .collect()
    }

    fn advance_by(&mut self, n: usize) {
        let source = &self.source;
        self.position.advance_position_with_mutation(source, n);
        self.source = source[n..].to_string();
    }

    fn advance_spaces(&mut self) {
        let source = self.source.clone();
        if let Some(matched) = ADVANCE_SPACE_RE.find(&source) {
            self.advance_by(matched.end());
        }
    }

    fn selection(&self, start: Position, end: Option<Position>) -> SourceLocation {
        let end = end.unwrap_or(self.cursor());
        let source = self.original_source[start.offset..end.offset].to_string();

        SourceLocation { start, end, source }
    }

    fn emit_error(&self, code: ErrorCode, offset: Option<usize>, loc: Option<Position>) {
        let mut loc = loc.unwrap_or(self.cursor());
        if let Some(offset) = offset {
            loc.offset += offset;
            loc.column += offset;
        }

        (self.options.error_handling.on_error)(CompilerError::new(
            code,
            Some(SourceLocation {
                start: loc,
                end: loc,
                source: "".to_string(),
            }),
        ));
    }

    fn is_end(&self, ancestors: &[String]) -> bool {
        if self.source.starts_with("</") {
            for ancestor in ancestors.iter().rev() {
                if self.starts_with_end_tag_open(ancestor) {
                    return true;
                }
            }
        }
        self.source.is_empty()
    }

    fn starts_with_end_tag_open(&self, tag: &str) -> bool {
        let end_i = 2 + tag.len();
        self.source.starts_with("</")
            && self
                .source
                .get(2..end_i)
                .map(|s| s.eq_ignore_ascii_case(tag))
                .unwrap_or(false)
            && END_TAG_OPEN_RE.is_match(self.source.get(end_i..).unwrap_or(">"))
    }
}

/// Merge if both this and the previous node are text and those are
/// consecutive. This happens for cases like "a < b".
pub fn push_node(nodes: &mut Vec<TemplateChildNode>, node: TemplateChildNode) {
    if let TemplateChildNode::Text(text) = &node {
        if let Some(TemplateChildNode::Text(prev)) = nodes.last_mut() {
            if prev.loc.end.offset == text.loc.start.offset {
                prev.inner.content += &text.inner.content;
                prev.loc.end = text.loc.end;
                prev.loc.source += &text.loc.source;
                return;
            }
        }
    }
    nodes.push(node);
}
