//! String literal decoding.

/// Decode the source text of a string literal, quotes included, into the
/// value it denotes.
///
/// The error is a short description of what is wrong with the text.
pub fn decode_string(text: &str) -> Result<String, &'static str> {
    let quote = match text.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err("missing opening quote"),
    };
    if text.len() < 2 || !text.ends_with(quote) {
        return Err("missing closing quote");
    }
    let body = &text[1..text.len() - 1];

    let mut out = String::with_capacity(body.len());
    let mut offset = 0;
    while let Some(ch) = body[offset..].chars().next() {
        match ch {
            '\\' => {
                let after = offset + 1;
                let (consumed, decoded) = decode_escape(&body[after..])?;
                if let Some(c) = decoded {
                    out.push(c);
                }
                offset = after + consumed;
            }
            '\n' | '\r' => return Err("unterminated string literal"),
            c if c == quote => return Err("unescaped quote inside string literal"),
            c => {
                out.push(c);
                offset += c.len_utf8();
            }
        }
    }
    Ok(out)
}

/// Decode one escape sequence; `raw` starts just after the backslash.
///
/// Returns the number of bytes consumed and the character produced. Line
/// continuations produce nothing.
fn decode_escape(raw: &str) -> Result<(usize, Option<char>), &'static str> {
    let Some(first) = raw.chars().next() else {
        return Err("unterminated escape sequence");
    };
    let decoded = match first {
        '\r' => {
            let consumed = if raw[1..].starts_with('\n') { 2 } else { 1 };
            return Ok((consumed, None));
        }
        '\n' | '\u{2028}' | '\u{2029}' => return Ok((first.len_utf8(), None)),
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '0'..='7' => return Ok(decode_legacy_octal(raw)),
        'x' => {
            let hex = raw.get(1..3).ok_or("truncated \\x escape")?;
            let value = parse_hex(hex).ok_or("invalid \\x escape")?;
            // Two hex digits are always a valid scalar value.
            return Ok((3, char::from_u32(value)));
        }
        'u' => return decode_unicode(&raw[1..]).map(|(consumed, c)| (consumed + 1, Some(c))),
        c => c,
    };
    Ok((first.len_utf8(), Some(decoded)))
}

/// `\0` through `\377`: up to three octal digits, value at most 0o377.
fn decode_legacy_octal(raw: &str) -> (usize, Option<char>) {
    let bytes = raw.as_bytes();
    let max_len = if bytes[0] <= b'3' { 3 } else { 2 };
    let mut value = 0u32;
    let mut consumed = 0;
    while consumed < max_len && consumed < bytes.len() && (b'0'..=b'7').contains(&bytes[consumed]) {
        value = value * 8 + (bytes[consumed] - b'0') as u32;
        consumed += 1;
    }
    (consumed, char::from_u32(value))
}

/// `raw` starts just after `\u`.
fn decode_unicode(raw: &str) -> Result<(usize, char), &'static str> {
    if let Some(braced) = raw.strip_prefix('{') {
        let end = braced.find('}').ok_or("unterminated \\u{...} escape")?;
        let value = parse_hex(&braced[..end]).ok_or("invalid \\u{...} escape")?;
        if value > 0x10FFFF {
            return Err("code point out of range");
        }
        // Lone surrogates have no `char`; they decode to U+FFFD.
        return Ok((end + 2, char::from_u32(value).unwrap_or('\u{FFFD}')));
    }

    let hex = raw.get(..4).ok_or("truncated \\u escape")?;
    let value = parse_hex(hex).ok_or("invalid \\u escape")?;
    if (0xD800..=0xDBFF).contains(&value) {
        let low = raw
            .get(4..10)
            .and_then(|rest| rest.strip_prefix("\\u"))
            .and_then(parse_hex)
            .filter(|low| (0xDC00..=0xDFFF).contains(low));
        if let Some(low) = low {
            let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
            if let Some(c) = char::from_u32(combined) {
                return Ok((10, c));
            }
        }
    }
    Ok((4, char::from_u32(value).unwrap_or('\u{FFFD}')))
}

fn parse_hex(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
