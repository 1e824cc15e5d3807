//! Tolerant G-code line parser.
//!
//! Only `G0`/`G1` words introduce a motion command; the word must stand
//! alone as the first token of the line (so `G01` or `G1F1500` pass
//! through untouched). Field letters are case-sensitive uppercase, matching
//! slicer output. A field whose number does not parse is not an error: the
//! token is preserved verbatim among the extras and the rest of the line
//! still transforms.

use crate::command::{GcodeLine, MotionCommand, MotionMode};

/// Parse one line of G-code.
pub fn parse_line(line: &str) -> GcodeLine {
    let (code, comment) = split_comment(line);

    let mut tokens = code.split_whitespace();
    let mode = match tokens.next() {
        Some("G0") => MotionMode::Rapid,
        Some("G1") => MotionMode::Feed,
        _ => return GcodeLine::Other(line.to_string()),
    };

    let mut cmd = MotionCommand::new(mode);
    cmd.comment = comment.map(|c| c.to_string());

    for token in tokens {
        let value = token
            .get(1..)
            .and_then(|rest| rest.parse::<f64>().ok())
            .filter(|v| v.is_finite());
        let slot = match (token.as_bytes()[0], value) {
            (b'X', Some(_)) => &mut cmd.x,
            (b'Y', Some(_)) => &mut cmd.y,
            (b'Z', Some(_)) => &mut cmd.z,
            (b'E', Some(_)) => &mut cmd.e,
            (b'U', Some(_)) => &mut cmd.u,
            _ => {
                cmd.extras.push(token.to_string());
                continue;
            }
        };
        if slot.is_none() {
            *slot = value;
        } else {
            // Duplicate field letter: first one wins, the rest stay opaque.
            cmd.extras.push(token.to_string());
        }
    }

    GcodeLine::Move(cmd)
}

/// Split a line at the first `;` into code and comment (comment keeps the
/// semicolon).
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find(';') {
        Some(idx) => (&line[..idx], Some(&line[idx..])),
        None => (line, None),
    }
}
