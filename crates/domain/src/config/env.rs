/// Expands `$VAR` and `${VAR}` references in `input`.
///
/// Unset variables expand to the empty string and `$$` yields a literal `$`.
/// A `$` followed by anything that cannot start a name is kept as is.
pub fn expand_env<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some((_, '$')) => {
                chars.next();
                out.push('$');
            }
            Some((start, '{')) => {
                chars.next();
                let rest = &input[start + 1..];
                match rest.find('}') {
                    Some(end) => {
                        let key = &rest[..end];
                        out.push_str(&lookup(key).unwrap_or_default());
                        for _ in 0..=key.chars().count() {
                            chars.next();
                        }
                    }
                    None => {
                        out.push_str("${");
                    }
                }
            }
            Some((start, n)) if n == '_' || n.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, ch)) = chars.peek() {
                    if ch == '_' || ch.is_ascii_alphanumeric() {
                        end = i + ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(&lookup(&input[start..end]).unwrap_or_default());
            }
            _ => out.push('$'),
        }
    }

    out
}
