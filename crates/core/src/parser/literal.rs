//! Decoding of Rust string literals into the value they represent

/// The value of a plain string literal (`"..."`) or raw string literal
/// (`r"..."`, `r#"..."#`).
///
/// Byte strings, C strings and literals with malformed escapes yield `None`.
pub fn string_literal_value(literal: &str) -> Option<String> {
    if literal.starts_with('r') {
        return raw_string_value(literal);
    }
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    unescape(body)
}

fn raw_string_value(literal: &str) -> Option<String> {
    let rest = literal.strip_prefix('r')?;
    let hashes = rest.len() - rest.trim_start_matches('#').len();
    let rest = &rest[hashes..];
    let body = rest.strip_prefix('"')?;
    let closing = format!("\"{}", "#".repeat(hashes));
    let body = body.strip_suffix(closing.as_str())?;
    Some(body.to_string())
}

fn unescape(body: &str) -> Option<String> {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            // Bare carriage returns are not allowed in string literals
            if c == '\r' && chars.peek() != Some(&'\n') {
                return None;
            }
            value.push(c);
            continue;
        }

        match chars.next()? {
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            '\\' => value.push('\\'),
            '0' => value.push('\0'),
            '\'' => value.push('\''),
            '"' => value.push('"'),
            'x' => {
                let hi = chars.next()?.to_digit(16)?;
                let lo = chars.next()?.to_digit(16)?;
                let code = hi * 16 + lo;
                if code > 0x7F {
                    return None;
                }
                value.push(char::from_u32(code)?);
            }
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }
                let mut code = 0u32;
                let mut digits = 0;
                loop {
                    match chars.next()? {
                        '}' => break,
                        '_' if digits > 0 => continue,
                        d => {
                            code = code.checked_mul(16)?.checked_add(d.to_digit(16)?)?;
                            digits += 1;
                            if digits > 6 {
                                return None;
                            }
                        }
                    }
                }
                if digits == 0 {
                    return None;
                }
                value.push(char::from_u32(code)?);
            }
            // Line continuation: drop the newline and leading whitespace of the next line
            '\n' => skip_continuation(&mut chars),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                skip_continuation(&mut chars);
            }
            _ => return None,
        }
    }

    Some(value)
}

fn skip_continuation(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while matches!(chars.peek(), Some(' ' | '\t' | '\n' | '\r')) {
        chars.next();
    }
}
