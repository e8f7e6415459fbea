//! Shader source to declaration transform

use crate::error::{GenError, Result};
use crate::model::{GeneratedDeclaration, ShaderFile};

/// Derive the declaration name: every `.` becomes `_`, then `suffix` is appended.
///
/// `pbr.frag` with suffix `_c_str` becomes `pbr_frag_c_str`.
pub fn declaration_name(filename: &str, suffix: &str) -> String {
    let mut name = filename.replace('.', "_");
    name.push_str(suffix);
    name
}

/// Read a shader and turn it into a declaration.
pub fn transform(
    shader: &ShaderFile,
    preamble: &[String],
    suffix: &str,
) -> Result<GeneratedDeclaration> {
    let content = std::fs::read_to_string(&shader.path).map_err(|source| GenError::FileRead {
        path: shader.path.clone(),
        source,
    })?;

    let lines = replace_version_line(&content, preamble).ok_or_else(|| {
        GenError::MalformedShaderFile {
            path: shader.path.clone(),
            lines: split_lines(&content).len(),
        }
    })?;

    Ok(GeneratedDeclaration {
        name: declaration_name(&shader.filename, suffix),
        lines,
    })
}

/// Drop the first line (the version directive) and put `preamble` in its place.
///
/// Returns `None` when the source has fewer than two lines, since there would
/// be no shader body left after the version directive.
pub fn replace_version_line(content: &str, preamble: &[String]) -> Option<Vec<String>> {
    let source = split_lines(content);
    if source.len() < 2 {
        return None;
    }

    let mut lines = Vec::with_capacity(preamble.len() + source.len() - 1);
    lines.extend(preamble.iter().cloned());
    lines.extend(source[1..].iter().map(|line| line.to_string()));
    Some(lines)
}

/// Split on every line boundary shaders are saved with: `\n`, `\r\n` and a
/// lone `\r`, plus `\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}` and
/// `\u{2029}`.
///
/// A terminator at the very end does not start an extra empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some(&(j, '\n')) => {
                    chars.next();
                    j + 1
                }
                _ => i + 1,
            },
            '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&content[start..i]);
        start = end;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}
