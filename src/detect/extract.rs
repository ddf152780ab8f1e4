//! Balanced-brace block extraction.
//!
//! Given the line a `useEffect(`-style declaration starts on, finds the
//! smallest line range that closes the block: a running counter adds the
//! opening braces and subtracts the closing braces on each line, and the
//! block ends on the first line where the counter is back at zero and a
//! brace was closed. Unbalanced input degrades to end-of-file rather than
//! erroring.
//!
//! Only structural braces count: a small line lexer skips string literals,
//! template literals, and comments, so `"{"` in a string or a commented-out
//! `}` cannot desynchronize the counter. Braces inside template
//! interpolations (`${...}`) are skipped along with the literal; they are
//! balanced, so skipping them is safe. Regex literals are not recognized.

/// One extracted effect declaration.
///
/// Line numbers are 1-based and inclusive. Ephemeral: built per occurrence
/// and dropped after classification.
#[derive(Debug, Clone)]
pub struct EffectBlock {
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Lexer state that can span line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    Str(char),
    Template,
    BlockComment,
}

/// Count structural open/close braces on one line, advancing the lexer
/// state across string, template, and comment spans.
fn structural_braces(line: &str, state: &mut LexState) -> (usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    let mut escaped = false;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match *state {
            LexState::Str(quote) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == quote {
                    *state = LexState::Code;
                }
            }
            LexState::Template => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '`' {
                    *state = LexState::Code;
                }
            }
            LexState::BlockComment => {
                if ch == '*' && chars.get(i + 1) == Some(&'/') {
                    *state = LexState::Code;
                    i += 1;
                }
            }
            LexState::Code => match ch {
                '{' => opens += 1,
                '}' => closes += 1,
                '"' | '\'' => *state = LexState::Str(ch),
                '`' => *state = LexState::Template,
                '/' if chars.get(i + 1) == Some(&'/') => break,
                '/' if chars.get(i + 1) == Some(&'*') => {
                    *state = LexState::BlockComment;
                    i += 1;
                }
                _ => {}
            },
        }
        i += 1;
    }

    // Quoted strings do not span lines; an unterminated one ends here.
    if matches!(*state, LexState::Str(_)) {
        *state = LexState::Code;
    }

    (opens, closes)
}

/// Extract the balanced-brace block starting at `start_idx` (0-based).
///
/// The caller guarantees `start_idx < lines.len()`.
pub fn extract_block(lines: &[&str], start_idx: usize) -> EffectBlock {
    let mut depth: i64 = 0;
    let mut state = LexState::Code;
    let mut end_idx = lines.len() - 1;

    for (idx, line) in lines.iter().enumerate().skip(start_idx) {
        let (opens, closes) = structural_braces(line, &mut state);
        depth += opens as i64;
        depth -= closes as i64;
        // <= 0 so a line closing more braces than were opened still
        // terminates the block instead of running to end-of-file.
        if depth <= 0 && closes > 0 {
            end_idx = idx;
            break;
        }
    }

    EffectBlock {
        text: lines[start_idx..=end_idx].join("\n"),
        start_line: start_idx + 1,
        end_line: end_idx + 1,
    }
}
