use super::*;

/// Returns every `open ... close` group of `line`, delimiters included, in
/// the order they are encountered. Each group ends at the first `close`
/// following its `open`; an unterminated group ends the search.
pub fn find_groups(line: &str, open: char, close: char) -> Vec<&str> {
    let mut groups = vec![];
    let mut position = 0;

    while let Some(start) = line[position..].find(open).map(|offset| position + offset) {
        let body = start + open.len_utf8();
        match line[body..].find(close) {
            Some(offset) => {
                let end = body + offset + close.len_utf8();
                groups.push(&line[start..end]);
                position = end;
            },
            None => break,
        }
    }
    groups
}

/// Removes one enclosing pair of delimiters if present.
pub fn trim_delimiters(text: &str, open: char, close: char) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(open).unwrap_or(text);
    text.strip_suffix(close).unwrap_or(text)
}

/// Removes one enclosing pair of delimiters, which must both be present.
pub fn strip_delimiters(text: &str, open: char, close: char) -> Result<&str, ParseError> {
    text.trim()
        .strip_prefix(open)
        .and_then(|inner| inner.strip_suffix(close))
        .ok_or_else(|| ParseError::MissingDelimiters {
            text: text.to_string(),
            open,
            close,
        })
}

pub fn parse_float(token: &str) -> Result<f64, ParseError> {
    token.trim().parse::<f64>().map_err(|_| ParseError::InvalidFloat {
        token: token.to_string(),
    })
}

pub fn parse_floats<'a, I>(tokens: I) -> Result<Vec<f64>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(parse_float).collect()
}

/// Longest prefix of `text` shaped like `-?[0-9.]+`, optionally followed by
/// an exponent `[eE][+-]?[0-9]+`.
pub fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let is_mantissa = |b: u8| b.is_ascii_digit() || b == b'.';

    let mut end = if bytes.first() == Some(&b'-') { 1 } else { 0 };
    let mantissa_start = end;
    while end < bytes.len() && is_mantissa(bytes[end]) {
        end += 1;
    }
    if end == mantissa_start {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-') {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }
    Some(&text[..end])
}

/// `(x,y,z)` at the very start of `text`, with no blanks inside.
fn leading_triplet(text: &str) -> Option<[&str; 3]> {
    let rest = text.strip_prefix('(')?;
    let x = leading_number(rest)?;
    let rest = rest[x.len()..].strip_prefix(',')?;
    let y = leading_number(rest)?;
    let rest = rest[y.len()..].strip_prefix(',')?;
    let z = leading_number(rest)?;
    rest[z.len()..].strip_prefix(')')?;
    Some([x, y, z])
}

/// Text following each occurrence of `label`, with leading blanks removed.
fn after_label<'a>(line: &'a str, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    line.match_indices(label)
        .map(move |(index, _)| line[index + label.len()..].trim_start_matches(' '))
}

/// Finds `<label> <number>` anywhere in `line`, e.g. `integral so far: 0.25`.
pub fn find_labelled_number(line: &str, label: &str) -> Result<Option<f64>, ParseError> {
    match after_label(line, label).find_map(leading_number) {
        Some(token) => parse_float(token).map(Some),
        None => Ok(None),
    }
}

/// Finds `<label> (x,y,z)` anywhere in `line`, e.g. `coordinates of end: (1,2,3)`.
pub fn find_labelled_point(line: &str, label: &str) -> Result<Option<Point>, ParseError> {
    match after_label(line, label).find_map(leading_triplet) {
        Some([x, y, z]) => Ok(Some(Point::new(parse_float(x)?, parse_float(y)?, parse_float(z)?))),
        None => Ok(None),
    }
}
