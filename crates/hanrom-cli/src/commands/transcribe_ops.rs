use std::io::{self, BufRead, BufWriter, Write};

use hanrom_core::romanize::{explain, CharClass, CharExplanation, Transcriber};
use unicode_width::UnicodeWidthStr;

use super::die;

pub fn transcribe_cmd(text: Option<&str>, transcriber: &Transcriber) {
    match text {
        Some(text) => println!("{}", transcriber.transcribe(text)),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            die!(
                transcribe_lines(stdin.lock(), stdout.lock(), transcriber),
                "Error transcribing stdin: {}"
            );
        }
    }
}

/// Transcribe line by line. Each line's terminator (`\n`, `\r\n` or none on
/// the last line) is written back as it was read and never sees the boundary.
pub fn transcribe_lines<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    transcriber: &Transcriber,
) -> io::Result<()> {
    let mut out = BufWriter::new(output);
    let mut buf = String::new();
    loop {
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        let (line, terminator) = split_terminator(&buf);
        out.write_all(transcriber.transcribe(line).as_bytes())?;
        out.write_all(terminator.as_bytes())?;
    }
    out.flush()
}

fn split_terminator(s: &str) -> (&str, &str) {
    let body = s
        .strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s);
    s.split_at(body.len())
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = explain(text);
    if json {
        let s = die!(
            serde_json::to_string_pretty(&result),
            "Error serializing JSON: {}"
        );
        println!("{s}");
    } else {
        print!("{}", format_text(text, &result));
    }
}

/// Format an explanation as an aligned table, one row per character.
pub fn format_text(text: &str, result: &[CharExplanation]) -> String {
    let mut out = format!(
        "=== Transcription of \"{}\" ({} chars) ===\n",
        text,
        result.len()
    );

    for e in result {
        let source = if e.source.is_control() {
            e.source.escape_default().to_string()
        } else {
            e.source.to_string()
        };
        let class = match e.class {
            CharClass::Component => "component".to_string(),
            CharClass::Syllable(s) => {
                format!("syllable[{},{},{}]", s.onset(), s.nucleus(), s.coda())
            }
            CharClass::Other => "other".to_string(),
        };
        let parts = match e.parts {
            Some([onset, nucleus, coda]) => format!("{onset}+{nucleus}+{coda}"),
            None => String::new(),
        };
        out.push_str(&format!(
            "  {} U+{:04X}  {:<20} {:<12} -> {}\n",
            pad(&source, 4),
            e.codepoint,
            class,
            parts,
            e.output,
        ));
    }

    out
}

/// Right-pad to a display width; Hangul renders two columns wide.
fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}
