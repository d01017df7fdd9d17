use crate::config::PropertyMap;
use crate::error::{PropkitError, Result};
use crate::format::{FormatParser, FormatSerializer};

/// Source name reported by parse errors until the loader rebinds it.
const SOURCE_NAME: &str = "properties";

const MALFORMED_UNICODE: &str = "malformed \\uxxxx encoding";
const UNPAIRED_SURROGATE: &str = "unpaired surrogate in \\u escape";
const UNTERMINATED_CONTINUATION: &str = "unterminated line continuation";

/// Java `.properties` text format.
pub struct PropertiesFormat;

impl FormatParser for PropertiesFormat {
    fn parse(&self, input: &str) -> Result<PropertyMap> {
        let mut map = PropertyMap::new();

        for line in logical_lines(input)? {
            let (raw_key, raw_value) = split_key_value(&line.text);
            let key = unescape(raw_key, line.number)?;
            let value = unescape(raw_value, line.number)?;
            map.insert(key, value);
        }

        Ok(map)
    }
}

impl FormatSerializer for PropertiesFormat {
    fn serialize(&self, map: &PropertyMap) -> Result<String> {
        let mut output = String::new();

        for (key, value) in map.iter() {
            escape_into(&mut output, key, true);
            output.push('=');
            escape_into(&mut output, value, false);
            output.push('\n');
        }

        Ok(output)
    }
}

/// A line after continuations have been joined.
#[derive(Debug)]
struct LogicalLine {
    /// 1-based number of the natural line it starts on.
    number: usize,
    text: String,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Splits on `\n`, `\r` and `\r\n`.
///
/// A trailing terminator yields a final empty line, so a continuation on
/// the last terminated line joins onto it.
fn natural_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            },
            b'\r' => {
                lines.push(&input[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            },
            _ => i += 1,
        }
    }

    if !input.is_empty() {
        lines.push(&input[start..]);
    }

    lines
}

fn ends_with_continuation(segment: &str) -> bool {
    segment.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn logical_lines(input: &str) -> Result<Vec<LogicalLine>> {
    let mut naturals = natural_lines(input).into_iter().enumerate();
    let mut lines = Vec::new();

    while let Some((index, raw)) = naturals.next() {
        let first = raw.trim_start_matches(is_blank);
        // Comment lines never continue, even when they end in a backslash.
        if first.is_empty() || first.starts_with(['#', '!']) {
            continue;
        }

        let mut text = String::with_capacity(first.len());
        let mut segment = first;
        while ends_with_continuation(segment) {
            text.push_str(&segment[..segment.len() - 1]);
            let Some((_, next)) = naturals.next() else {
                return Err(PropkitError::parse_error(
                    SOURCE_NAME,
                    index + 1,
                    UNTERMINATED_CONTINUATION,
                ));
            };
            segment = next.trim_start_matches(is_blank);
        }
        text.push_str(segment);

        lines.push(LogicalLine {
            number: index + 1,
            text,
        });
    }

    Ok(lines)
}

/// Splits a logical line into its raw (still escaped) key and value.
///
/// The key ends at the first unescaped `=`, `:` or blank. Blanks after the
/// key are skipped, then at most one `=`/`:`, then any further blanks.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if !escaped && (c == '=' || c == ':') {
            key_end = i;
            value_start = i + 1;
            has_separator = true;
            break;
        }
        if !escaped && is_blank(c) {
            key_end = i;
            value_start = i + 1;
            break;
        }
        escaped = c == '\\' && !escaped;
    }

    let rest = &line[value_start..];
    let mut skip = rest.len();
    for (i, c) in rest.char_indices() {
        if is_blank(c) {
            continue;
        }
        if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            continue;
        }
        skip = i;
        break;
    }

    (&line[..key_end], &rest[skip..])
}

fn unescape(raw: &str, line: usize) -> Result<String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let error = |message: &str| PropkitError::parse_error(SOURCE_NAME, line, message);
    let mut out = String::with_capacity(raw.len());
    // Consecutive \uXXXX escapes are UTF-16 code units; they are decoded
    // together so surrogate pairs combine.
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out).map_err(|_| error(UNPAIRED_SURROGATE))?;
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('u') => {
                let unit = read_code_unit(&mut chars).ok_or_else(|| error(MALFORMED_UNICODE))?;
                units.push(unit);
            },
            Some(escaped) => {
                flush_units(&mut units, &mut out).map_err(|_| error(UNPAIRED_SURROGATE))?;
                out.push(match escaped {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'f' => '\x0c',
                    other => other,
                });
            },
            None => return Err(error("dangling escape character")),
        }
    }

    flush_units(&mut units, &mut out).map_err(|_| error(UNPAIRED_SURROGATE))?;
    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Option<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars.next()?.to_digit(16)?;
        unit = (unit << 4) | digit as u16;
    }
    Some(unit)
}

fn flush_units(
    units: &mut Vec<u16>,
    out: &mut String,
) -> std::result::Result<(), std::char::DecodeUtf16Error> {
    for decoded in char::decode_utf16(units.drain(..)) {
        out.push(decoded?);
    }
    Ok(())
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            },
            _ => out.push(c),
        }
    }
}
