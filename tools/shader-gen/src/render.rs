//! C++ header generator

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::model::{GeneratedDeclaration, OutputDocument};

/// Render one declaration.
///
/// Each line becomes its own `"...\n"` literal joined by a trailing backslash,
/// blank lines included, so GLSL compiler errors keep their line numbers.
pub fn render_declaration(declaration: &GeneratedDeclaration) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "static const char* {} =", declaration.name)?;
    for line in &declaration.lines {
        writeln!(output, "\t\"{}\\n\"\\", line)?;
    }
    writeln!(output, "\t\"\\n\";")?;

    Ok(output)
}

/// Render the complete header
pub fn render_document(document: &OutputDocument) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "#pragma once")?;
    writeln!(output, "namespace {} {{", document.namespace)?;
    writeln!(output)?;

    for declaration in &document.declarations {
        output.push_str(&render_declaration(declaration)?);
        writeln!(output)?;
    }

    writeln!(output, "}} // namespace {}", document.namespace)?;

    Ok(output)
}
