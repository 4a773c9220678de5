use std::cmp::min;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// The node's range. The `start` is inclusive and `end` is exclusive.
/// [start, end)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

/// Nodes synthesized by transforms are never associated with template
/// source, so their locations are just a stub.
pub const LOC_STUB: SourceLocation = SourceLocation {
    source: String::new(),
    start: Position {
        line: 1,
        column: 1,
        offset: 0,
    },
    end: Position {
        line: 1,
        column: 1,
        offset: 0,
    },
};

impl Default for SourceLocation {
    fn default() -> Self {
        LOC_STUB.clone()
    }
}

impl Position {
    /// advance by mutation without cloning (for performance reasons), since this
    /// gets called a lot in the parser
    pub fn advance_position_with_mutation(&mut self, source: &str, n: usize) {
        let mut lines_cnt = 0;
        let mut last_new_line = 0;
        let mut has_new_line = false;

        let source = source.as_bytes();
        for (i, byte) in source.iter().enumerate().take(min(n, source.len())) {
            if *byte == b'\n' {
                lines_cnt += 1;
                last_new_line = i;
                has_new_line = true;
            }
        }

        self.offset += n;
        self.line += lines_cnt;

        if has_new_line {
            self.column = n - last_new_line;
        } else {
            self.column += n;
        }
    }
}
