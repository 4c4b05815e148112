//! Interactive prompts

use crate::error::Result;
use std::io::{BufRead, Write};

/// Ask for the output file base name
///
/// A blank answer (or end of input) falls back to `default`.
pub fn file_base_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: &str,
) -> Result<String> {
    write!(output, "File name (without extension) [{}]: ", default)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let name = line.trim();
    Ok(if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_uses_answer() {
        let mut input = Cursor::new("  vitoria_lote1 \n");
        let mut output = Vec::new();

        let name = file_base_name(&mut input, &mut output, "enderecos_formatados").unwrap();

        assert_eq!(name, "vitoria_lote1");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "File name (without extension) [enderecos_formatados]: "
        );
    }

    #[test]
    fn test_blank_uses_default() {
        let mut output = Vec::new();
        let name = file_base_name(&mut Cursor::new("\n"), &mut output, "padrao").unwrap();
        assert_eq!(name, "padrao");

        let name = file_base_name(&mut Cursor::new(""), &mut output, "padrao").unwrap();
        assert_eq!(name, "padrao");
    }
}
