//! Word wrapping by character count
//!
//! Follows the rules of Python's `textwrap.wrap` with default settings: tabs
//! expand to 8 columns, other whitespace characters become spaces, hyphenated
//! words may break after a hyphen, whitespace inside a line is kept, and
//! whitespace at a line break is dropped.

const TAB_SIZE: usize = 8;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Characters after which an em-dash (`--`) may start a new chunk
fn is_word_punct(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Expand tabs and turn every other whitespace character into a space
fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c => {
                out.push(if is_space(c) { ' ' } else { c });
                column += 1;
            }
        }
    }
    out
}

/// Whether a word may break right after the hyphen at `i`
fn hyphen_break(s: &[char], i: usize) -> bool {
    let at = |j: usize| s.get(j).copied();
    let letter = |j: usize| at(j).is_some_and(is_letter);

    let before = (i >= 2 && letter(i - 2) && letter(i - 1))
        || (i >= 3 && letter(i - 3) && at(i - 2) == Some('-') && letter(i - 1));
    let after = letter(i + 1)
        && (letter(i + 2) || (at(i + 2) == Some('-') && letter(i + 3)));
    before && after
}

/// Length of the `--` run starting at `i` if it is followed by a word character
fn em_dash_at(s: &[char], i: usize) -> Option<usize> {
    let run = s[i..].iter().take_while(|&&c| c == '-').count();
    (run >= 2 && s.get(i + run).copied().is_some_and(is_word_char)).then_some(run)
}

/// Split into whitespace runs, em-dashes and words, breaking words after
/// hyphens where allowed.
fn chunks(s: &[char]) -> Vec<Vec<char>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < s.len() {
        let start = i;
        if s[i] == ' ' {
            while i < s.len() && s[i] == ' ' {
                i += 1;
            }
        } else if let Some(run) = (i > 0 && is_word_punct(s[i - 1]))
            .then(|| em_dash_at(s, i))
            .flatten()
        {
            i += run;
        } else {
            i += 1;
            while i < s.len() && s[i] != ' ' {
                if s[i - 1] == '-' && hyphen_break(s, i - 1) {
                    break;
                }
                if is_word_punct(s[i - 1]) && em_dash_at(s, i).is_some() {
                    break;
                }
                i += 1;
            }
            if i < s.len() && s[i] == '-' && hyphen_break(s, i) {
                i += 1;
            }
        }
        out.push(s[start..i].to_vec());
    }
    out
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

/// Wrap `text` into lines of at most `width` characters.
///
/// A `width` of 0 is treated as 1. Words that cannot fit on a line are
/// split, preferring a break after a hyphen. Blank input yields no lines.
///
/// # Examples
/// ```
/// use weekgrid::render::text::wrap;
///
/// assert_eq!(wrap("Intro to Algorithms", 10), vec!["Intro to", "Algorithms"]);
/// assert_eq!(wrap("well-known thing", 6), vec!["well-", "known", "thing"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let normalized = normalize(text);
    let mut pending = chunks(&normalized);
    pending.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !pending.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0usize;

        // Leading whitespace survives only on the first line
        if !lines.is_empty() && pending.last().is_some_and(|c| is_blank(c)) {
            pending.pop();
        }

        while let Some(chunk) = pending.last() {
            if len + chunk.len() > width {
                break;
            }
            len += chunk.len();
            line.extend(pending.pop());
        }

        if let Some(chunk) = pending.last_mut() {
            if chunk.len() > width {
                let room = width - len;
                let mut end = room;
                if let Some(hyphen) = chunk[..room.min(chunk.len())].iter().rposition(|&c| c == '-') {
                    if hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-') {
                        end = hyphen + 1;
                    }
                }
                let rest = chunk.split_off(end);
                line.push(std::mem::replace(chunk, rest));
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }
    lines
}

/// Wrap each explicit line separately and concatenate the results.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| wrap(line.as_ref(), width))
        .collect()
}
