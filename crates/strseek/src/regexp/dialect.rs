// Source rewriting from the Ruby-flavoured surface syntax to the syntax the
// engine parses.
//
// - `\G` is only recognised as the very first token; it is stripped and turns
//   the pattern into an anchored one. Anywhere else it is rejected.
// - `\Z` becomes `(?:\n?\z)`: the match start is exact, the match may
//   additionally cover the final newline.
// - `\h` / `\H` become hex-digit classes.
// - With the `x` option, `#` comments outside a class are copied verbatim up
//   to the end of the line; nothing inside them is interpreted.
// Everything else is passed through untouched, escapes included.

use super::RegexpError;

const HEX_SET: &str = "0-9A-Fa-f";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Translated {
    pub pattern: String,
    pub anchored: bool,
}

pub(crate) fn translate(source: &str, extended: bool) -> Result<Translated, RegexpError> {
    let (anchored, body, base) = match source.strip_prefix(r"\G") {
        Some(rest) => (true, rest, 2),
        None => (false, source, 0),
    };

    let mut out = String::with_capacity(body.len() + 8);
    let mut chars = body.char_indices().peekable();
    let mut class_depth = 0usize;

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    // dangling backslash: let the engine report it
                    out.push('\\');
                    break;
                };
                match (escaped, class_depth) {
                    ('G', 0) => {
                        return Err(RegexpError::MisplacedAnchor {
                            position: base + pos,
                        });
                    }
                    ('Z', 0) => out.push_str(r"(?:\n?\z)"),
                    ('h', 0) => {
                        out.push('[');
                        out.push_str(HEX_SET);
                        out.push(']');
                    }
                    ('H', _) => {
                        out.push_str("[^");
                        out.push_str(HEX_SET);
                        out.push(']');
                    }
                    ('h', _) => out.push_str(HEX_SET),
                    _ => {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
            }
            '[' => {
                class_depth += 1;
                out.push('[');
                if let Some(&(_, '^')) = chars.peek() {
                    out.push('^');
                    chars.next();
                }
                // a leading `]` is a literal member, not the close
                if let Some(&(_, ']')) = chars.peek() {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                out.push(']');
            }
            '#' if extended && class_depth == 0 => {
                out.push('#');
                for (_, comment) in chars.by_ref() {
                    out.push(comment);
                    if comment == '\n' {
                        break;
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(Translated {
        pattern: out,
        anchored,
    })
}
