//! Compact JSON generation into a caller-supplied buffer.

use crate::config::{JsonFloat, JsonInt};
use crate::convert;

/// Token appender producing compact JSON into a borrowed byte buffer.
///
/// Every value operation appends a trailing `,`, and the closing
/// operations and [`finish`](Self::finish) trim a pending one, so members
/// can be appended without tracking first-element state. Member names are
/// passed per call; an empty name emits a bare element (for array
/// elements and the root).
///
/// The first token that does not fit puts the generator into overflow:
/// bytes already written stay in place (a string token may be cut short),
/// every later operation is a no-op, and `finish` returns `None`.
///
/// Names and string values are raw bytes; the eight JSON escapes
/// (`\ / " \n \r \b \f \t`) are applied on output, everything else passes
/// through unvalidated.
///
/// # Examples
///
/// ```
/// use flatjson::JsonGenerator;
///
/// let mut buf = [0u8; 64];
/// let mut out = JsonGenerator::new(&mut buf);
/// out.object_begin(b"");
/// out.value_bool(b"val1", true);
/// out.value_str(b"val2", b"string");
/// out.object_end();
/// let len = out.finish().unwrap();
/// assert_eq!(&buf[..len], br#"{"val1":true,"val2":"string"}"#);
/// ```
#[derive(Debug)]
pub struct JsonGenerator<'a> {
    buffer: &'a mut [u8],
    cursor: usize,
    overflow: bool,
}

impl<'a> JsonGenerator<'a> {
    /// Create a generator writing from the start of `buffer`.
    #[must_use]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            overflow: false,
        }
    }

    /// `true` once a token failed to fit; the buffer content is then
    /// incomplete.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Bytes written so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cursor
    }

    /// `true` while nothing has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Open an object: `"name":{`, or just `{` when `name` is empty.
    pub fn object_begin(&mut self, name: &[u8]) {
        self.member_name(name);
        self.put(b'{');
    }

    /// Close an object: trims a pending `,`, writes `},`.
    pub fn object_end(&mut self) {
        self.trim_comma();
        self.put(b'}');
        self.put(b',');
    }

    /// Open an array: `"name":[`, or just `[` when `name` is empty.
    pub fn array_begin(&mut self, name: &[u8]) {
        self.member_name(name);
        self.put(b'[');
    }

    /// Close an array: trims a pending `,`, writes `],`.
    pub fn array_end(&mut self) {
        self.trim_comma();
        self.put(b']');
        self.put(b',');
    }

    /// Append a null member or element.
    pub fn value_null(&mut self, name: &[u8]) {
        self.member_name(name);
        self.put_token(b"null");
        self.put(b',');
    }

    /// Append a boolean member or element.
    pub fn value_bool(&mut self, name: &[u8], value: bool) {
        self.member_name(name);
        self.put_token(if value { b"true" } else { b"false" });
        self.put(b',');
    }

    /// Append a string member or element, escaping on the way out.
    pub fn value_str(&mut self, name: &[u8], value: &[u8]) {
        self.member_name(name);
        self.escaped_string(value);
        self.put(b',');
    }

    /// Append an integer member or element.
    pub fn value_int(&mut self, name: &[u8], value: JsonInt) {
        self.member_name(name);
        self.number_token(|buf| convert::format_int(value, buf));
    }

    /// Append a floating point member or element, in its shortest
    /// representation.
    pub fn value_float(&mut self, name: &[u8], value: JsonFloat) {
        self.member_name(name);
        self.number_token(|buf| convert::format_float(value, buf));
    }

    /// Trim the final `,` and return the total bytes written, or `None`
    /// after an overflow.
    #[must_use]
    pub fn finish(mut self) -> Option<usize> {
        if self.overflow {
            return None;
        }
        self.trim_comma();
        Some(self.cursor)
    }

    fn put(&mut self, c: u8) {
        if self.overflow {
            return;
        }
        if self.cursor < self.buffer.len() {
            self.buffer[self.cursor] = c;
            self.cursor += 1;
        } else {
            self.overflow = true;
        }
    }

    /// Write a token all-or-nothing.
    fn put_token(&mut self, token: &[u8]) {
        if self.overflow {
            return;
        }
        match self.buffer.get_mut(self.cursor..self.cursor + token.len()) {
            Some(dst) => {
                dst.copy_from_slice(token);
                self.cursor += token.len();
            },
            None => self.overflow = true,
        }
    }

    /// Format a number straight into the remaining buffer; a 0 count
    /// means it did not fit.
    fn number_token(&mut self, format: impl FnOnce(&mut [u8]) -> usize) {
        if self.overflow {
            return;
        }
        let count = format(&mut self.buffer[self.cursor..]);
        if count == 0 {
            self.overflow = true;
        } else {
            self.cursor += count;
            self.put(b',');
        }
    }

    fn member_name(&mut self, name: &[u8]) {
        if !name.is_empty() {
            self.escaped_string(name);
            self.put(b':');
        }
    }

    fn escaped_string(&mut self, s: &[u8]) {
        self.put(b'"');
        for &c in s {
            match c {
                b'\\' | b'/' | b'"' => {
                    self.put(b'\\');
                    self.put(c);
                },
                b'\n' => self.put_token(br"\n"),
                b'\r' => self.put_token(br"\r"),
                0x08 => self.put_token(br"\b"),
                0x0c => self.put_token(br"\f"),
                b'\t' => self.put_token(br"\t"),
                _ => self.put(c),
            }
        }
        self.put(b'"');
    }

    fn trim_comma(&mut self) {
        if self.overflow {
            return;
        }
        if self.cursor > 0 && self.buffer[self.cursor - 1] == b',' {
            self.cursor -= 1;
        }
    }
}
