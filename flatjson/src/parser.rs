//! Single-pass state-machine JSON parser.
//!
//! The parser walks the input bytes exactly once and fills the
//! caller-supplied descriptor slice in pre-order document order. There is
//! no allocation and no recursion: nesting is tracked with a depth counter
//! and a parent index into the descriptor slice, and closing a container
//! rewinds the parent index backwards to the nearest enclosing composite.

use crate::config::{JsonSize, MAX_JSON_STRING_SIZE, MAX_NESTING_LEVEL};
use crate::descriptor::{JsonDescriptor, JsonKind};
use crate::error::{ParseError, ParseErrorKind};
use crate::value::JsonValue;

/// Internal state of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    StartOfMemberName,
    MemberName,
    ValueSeparator,
    StartOfValue,
    MemberSeparator,
}

/// Blank characters skipped at every state boundary.
const fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

struct ParseContext<'json, 'desc> {
    json: &'json [u8],
    descs: &'desc mut [JsonDescriptor],
    state: ParserState,
    nesting_level: u8,
    /// Cursor into the input. Kept as `usize` internally; truncated to
    /// [`JsonSize`] only when reported in an error.
    index: usize,
    /// Descriptor index of the innermost open composite.
    parent: usize,
    /// Next free descriptor slot.
    current: usize,
}

/// Parse a JSON text into `descriptors`.
///
/// On success the returned handle refers to the root value. The
/// descriptor slice then holds the pre-order flat layout of the whole
/// document, followed by an all-zero terminator when a slot is left for
/// one; both the input and the descriptor slice must outlive every handle
/// derived from the result.
///
/// The root of the text must be an object or an array. Whitespace around
/// and inside the document is skipped; anything else after the root value
/// is a [`TrailingChars`](ParseErrorKind::TrailingChars) fault.
///
/// # Errors
///
/// The first fault aborts the parse and is returned with the byte index
/// of the offending input; the descriptor slice content is then
/// unspecified.
///
/// # Examples
///
/// ```
/// use flatjson::{parse, JsonDescriptor, JsonKind};
///
/// let mut descriptors = [JsonDescriptor::default(); 4];
/// let root = parse(br#"{"a":1}"#, &mut descriptors).unwrap();
/// let a = root.get(b"a").unwrap();
/// assert_eq!(a.kind(), JsonKind::Integer);
/// assert_eq!(a.as_int(), 1);
/// ```
pub fn parse<'json, 'desc>(
    json: &'json [u8],
    descriptors: &'desc mut [JsonDescriptor],
) -> Result<JsonValue<'json, 'desc>, ParseError> {
    if json.len() > MAX_JSON_STRING_SIZE as usize {
        return Err(ParseError::at(0, ParseErrorKind::JsonTooBig));
    }
    if descriptors.is_empty() {
        return Err(ParseError::at(0, ParseErrorKind::NotEnoughMemory));
    }

    let start_index = json
        .iter()
        .position(|&c| !is_blank(c))
        .ok_or_else(|| ParseError::at(0, ParseErrorKind::NotAJsonString))?;

    let (root_kind, state) = match json[start_index] {
        b'{' => (JsonKind::Object, ParserState::StartOfMemberName),
        b'[' => (JsonKind::Array, ParserState::StartOfValue),
        _ => return Err(ParseError::at(start_index, ParseErrorKind::NotAJsonString)),
    };
    descriptors[0] = JsonDescriptor {
        nesting_level: 0,
        kind: root_kind,
        name_start: 0,
        name_size: 0,
        value_start: start_index as JsonSize,
        value_size: 0,
    };

    let mut ctxt = ParseContext {
        json,
        descs: descriptors,
        state,
        nesting_level: 1,
        index: start_index + 1,
        parent: 0,
        current: 1,
    };

    while ctxt.index < json.len() && ctxt.nesting_level > 0 {
        match ctxt.state {
            ParserState::StartOfMemberName => ctxt.start_of_member_name()?,
            ParserState::MemberName => ctxt.member_name()?,
            ParserState::ValueSeparator => ctxt.value_separator()?,
            ParserState::StartOfValue => ctxt.start_of_value()?,
            ParserState::MemberSeparator => ctxt.member_separator()?,
        }
        if ctxt.current == ctxt.descs.len() && ctxt.nesting_level > 0 {
            return Err(ParseError::at(ctxt.index, ParseErrorKind::NotEnoughMemory));
        }
    }

    if ctxt.index < json.len()
        && let Some(rel) = json[ctxt.index..].iter().position(|&c| !is_blank(c))
    {
        return Err(ParseError::at(
            ctxt.index + rel,
            ParseErrorKind::TrailingChars,
        ));
    }

    // Terminator sentinel, when a slot is left for one.
    if let Some(sentinel) = ctxt.descs.get_mut(ctxt.current) {
        *sentinel = JsonDescriptor::default();
    }

    let descs: &'desc [JsonDescriptor] = ctxt.descs;
    Ok(JsonValue::new(json, descs, 0))
}

impl ParseContext<'_, '_> {
    fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(self.index, kind)
    }

    /// Next non-blank byte at or after the cursor, with its offset from
    /// the cursor.
    fn next_not_blank(&self) -> Option<(u8, usize)> {
        self.json[self.index..]
            .iter()
            .position(|&c| !is_blank(c))
            .map(|rel| (self.json[self.index + rel], rel))
    }

    fn parent_kind(&self) -> JsonKind {
        self.descs[self.parent].kind
    }

    fn parent_len(&self) -> JsonSize {
        self.descs[self.parent].value_size
    }

    fn start_of_member_name(&mut self) -> Result<(), ParseError> {
        match self.next_not_blank() {
            Some((c, rel)) => {
                self.index += rel + 1;
                match c {
                    b'}' if self.parent_len() == 0 => {
                        self.finalize_composite();
                        Ok(())
                    },
                    b'}' => Err(self.err(ParseErrorKind::ExpectedMemberName)),
                    b'"' => {
                        self.state = ParserState::MemberName;
                        Ok(())
                    },
                    _ => Err(self.err(ParseErrorKind::UnexpectedChar)),
                }
            },
            None => {
                self.index = self.json.len() + 1;
                Err(self.err(ParseErrorKind::UnexpectedEndOfJsonString))
            },
        }
    }

    fn member_name(&mut self) -> Result<(), ParseError> {
        let start = self.index;
        let (size, consumed) = self.scan_string(start)?;
        let current = self.current;
        match self.descs.get_mut(current) {
            Some(desc) => {
                desc.name_start = start as JsonSize;
                desc.name_size = size as JsonSize;
                self.index = start + consumed;
                self.state = ParserState::ValueSeparator;
                Ok(())
            },
            None => Err(ParseError::at(start, ParseErrorKind::NotEnoughMemory)),
        }
    }

    fn value_separator(&mut self) -> Result<(), ParseError> {
        match self.next_not_blank() {
            Some((c, rel)) => {
                self.index += rel + 1;
                if c == b':' {
                    self.state = ParserState::StartOfValue;
                    Ok(())
                } else {
                    Err(self.err(ParseErrorKind::MissingValueSeparator))
                }
            },
            None => {
                self.index = self.json.len() + 1;
                Err(self.err(ParseErrorKind::MissingValueSeparator))
            },
        }
    }

    fn start_of_value(&mut self) -> Result<(), ParseError> {
        let Some((c, rel)) = self.next_not_blank() else {
            self.index = self.json.len();
            return Err(self.err(ParseErrorKind::UnexpectedEndOfJsonString));
        };
        self.index += rel;
        match c {
            b'n' => self.literal_value(b"null", JsonKind::Null),
            b't' => self.literal_value(b"true", JsonKind::Bool),
            b'f' => self.literal_value(b"false", JsonKind::Bool),
            b'"' => self.string_value(),
            b'[' => self.open_composite(JsonKind::Array, ParserState::StartOfValue),
            b'{' => self.open_composite(JsonKind::Object, ParserState::StartOfMemberName),
            b']' => {
                if self.parent_kind() == JsonKind::Array && self.parent_len() == 0 {
                    self.index += 1;
                    self.finalize_composite();
                    Ok(())
                } else {
                    Err(self.err(ParseErrorKind::UnexpectedChar))
                }
            },
            b'-' | b'0'..=b'9' => self.number_value(),
            _ => Err(self.err(ParseErrorKind::InvalidValue)),
        }
    }

    fn member_separator(&mut self) -> Result<(), ParseError> {
        match self.next_not_blank() {
            Some((c, rel)) => {
                self.index += rel + 1;
                match c {
                    b',' => {
                        self.state = if self.parent_kind() == JsonKind::Array {
                            ParserState::StartOfValue
                        } else {
                            ParserState::StartOfMemberName
                        };
                        Ok(())
                    },
                    b'}' if self.parent_kind() == JsonKind::Object => {
                        self.finalize_composite();
                        Ok(())
                    },
                    b']' if self.parent_kind() == JsonKind::Array => {
                        self.finalize_composite();
                        Ok(())
                    },
                    _ => Err(self.err(ParseErrorKind::UnexpectedChar)),
                }
            },
            None => {
                self.index = self.json.len() + 1;
                Err(self.err(ParseErrorKind::UnexpectedEndOfJsonString))
            },
        }
    }

    /// Scan a string body starting just after the opening quote. Returns
    /// the content length and the number of bytes consumed including the
    /// closing quote; escape sequences are validated but kept raw.
    fn scan_string(&self, start: usize) -> Result<(usize, usize), ParseError> {
        let json = self.json;
        let mut i = start;
        loop {
            let Some(rel) = json[i..].iter().position(|&c| c == b'"' || c == b'\\') else {
                return Err(ParseError::at(i, ParseErrorKind::MissingEndOfString));
            };
            let pos = i + rel;
            if json[pos] == b'"' {
                return Ok((pos - start, pos - start + 1));
            }
            if pos + 1 == json.len() {
                return Err(ParseError::at(pos, ParseErrorKind::MissingEndOfString));
            }
            match json[pos + 1] {
                b'\\' | b'/' | b'"' | b'n' | b'r' | b'b' | b'f' | b't' => i = pos + 2,
                _ => return Err(ParseError::at(pos, ParseErrorKind::InvalidEscapedChar)),
            }
        }
    }

    fn literal_value(&mut self, literal: &'static [u8], kind: JsonKind) -> Result<(), ParseError> {
        // At least one byte must remain after the literal.
        let end = self.index + literal.len();
        if end < self.json.len() && &self.json[self.index..end] == literal {
            self.record_value(kind, self.index, literal.len())?;
            self.index = end;
            self.state = ParserState::MemberSeparator;
            Ok(())
        } else {
            Err(self.err(ParseErrorKind::InvalidValue))
        }
    }

    fn string_value(&mut self) -> Result<(), ParseError> {
        let start = self.index + 1;
        if start >= self.json.len() {
            return Err(self.err(ParseErrorKind::MissingEndOfString));
        }
        let (size, consumed) = self.scan_string(start)?;
        self.record_value(JsonKind::String, start, size)?;
        self.index = start + consumed;
        self.state = ParserState::MemberSeparator;
        Ok(())
    }

    fn number_value(&mut self) -> Result<(), ParseError> {
        let start = self.index;
        let rest = &self.json[start..];
        // The number must be terminated by a structural character.
        let Some(len) = rest
            .iter()
            .position(|&c| !matches!(c, b'0'..=b'9' | b'.' | b'-'))
        else {
            return Err(self.err(ParseErrorKind::InvalidValue));
        };
        let digits = match rest[..len].split_first() {
            Some((&b'-', tail)) => tail,
            _ => &rest[..len],
        };
        if digits.is_empty() {
            return Err(self.err(ParseErrorKind::InvalidValue));
        }
        let mut is_integer = true;
        for &c in digits {
            match c {
                b'.' if is_integer => is_integer = false,
                b'.' | b'-' => return Err(self.err(ParseErrorKind::InvalidValue)),
                _ => {},
            }
        }
        let kind = if is_integer {
            JsonKind::Integer
        } else {
            JsonKind::Decimal
        };
        self.record_value(kind, start, len)?;
        self.index = start + len;
        self.state = ParserState::MemberSeparator;
        Ok(())
    }

    fn open_composite(&mut self, kind: JsonKind, next_state: ParserState) -> Result<(), ParseError> {
        if self.nesting_level == MAX_NESTING_LEVEL {
            return Err(self.err(ParseErrorKind::MaxNestingLevel));
        }
        self.index += 1;
        self.record_value(kind, self.index, 0)?;
        // The new composite becomes the parent of everything that follows.
        self.parent = self.current - 1;
        self.nesting_level += 1;
        self.state = next_state;
        Ok(())
    }

    /// Write a value descriptor at the current slot and advance. The
    /// member name, if any, was already stored in the slot by the
    /// member-name state; array elements get theirs cleared here.
    fn record_value(
        &mut self,
        kind: JsonKind,
        value_start: usize,
        value_size: usize,
    ) -> Result<(), ParseError> {
        let in_array = self.parent_kind() == JsonKind::Array;
        let nesting_level = self.nesting_level;
        let Some(desc) = self.descs.get_mut(self.current) else {
            return Err(ParseError::at(self.index, ParseErrorKind::NotEnoughMemory));
        };
        desc.nesting_level = nesting_level;
        desc.kind = kind;
        if in_array {
            desc.name_start = 0;
            desc.name_size = 0;
        }
        desc.value_start = value_start as JsonSize;
        desc.value_size = value_size as JsonSize;
        self.current += 1;
        self.descs[self.parent].value_size += 1;
        Ok(())
    }

    /// Close the innermost composite: drop one nesting level and rewind
    /// the parent index to the nearest still-open ancestor.
    fn finalize_composite(&mut self) {
        self.nesting_level -= 1;
        while self.descs[self.parent].nesting_level != 0
            && self.descs[self.parent].nesting_level >= self.nesting_level
        {
            self.parent -= 1;
        }
        self.state = ParserState::MemberSeparator;
    }
}
