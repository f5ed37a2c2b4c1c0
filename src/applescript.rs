//! AppleScript rendering for iTerm2.
//!
//! Turns an operation sequence into a script for `osascript`. Splits and
//! focus changes are sent as keyboard shortcuts through System Events, so
//! iTerm2 is activated first to make sure it receives them:
//!
//! | operation         | shortcut        |
//! |-------------------|-----------------|
//! | `SplitVertical`   | `cmd-d`         |
//! | `SplitHorizontal` | `cmd-shift-d`   |
//! | `FocusNext`       | `cmd-]`         |

use crate::script::Operation;

const INDENT: &str = "    ";

/// Escape text for use inside an AppleScript string literal.
///
/// # Examples
///
/// ```
/// use it2grid::applescript::escape;
///
/// assert_eq!(escape(r#"echo "hi""#), r#"echo \"hi\""#);
/// assert_eq!(escape(r"C:\tmp"), r"C:\\tmp");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

fn keystroke(key: &str, modifiers: &str) -> String {
    format!(
        "tell application \"System Events\" to keystroke \"{}\" using {}",
        key, modifiers
    )
}

/// Render a single operation as one AppleScript statement.
pub fn statement(op: &Operation) -> String {
    match op {
        Operation::NewTab => "create tab with default profile".to_string(),
        Operation::SplitVertical => keystroke("d", "command down"),
        Operation::SplitHorizontal => keystroke("d", "{command down, shift down}"),
        Operation::FocusNext => keystroke("]", "command down"),
        Operation::Delay(d) => format!("delay {}", d.as_secs_f64()),
        Operation::WriteText(text) => {
            format!("tell current session to write text \"{}\"", escape(text))
        }
    }
}

/// Render the full script for `ops`.
pub fn render(ops: &[Operation]) -> String {
    let mut script = String::new();
    script.push_str("tell application \"iTerm2\"\n");
    script.push_str(INDENT);
    script.push_str("activate\n");
    script.push_str(INDENT);
    script.push_str("tell current window\n");
    for op in ops {
        script.push_str(&format!("{}{}{}\n", INDENT, INDENT, statement(op)));
    }
    script.push_str(INDENT);
    script.push_str("end tell\n");
    script.push_str("end tell\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("npm run dev"), "npm run dev");
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(
            escape(r#"grep "a\b" log"#),
            r#"grep \"a\\b\" log"#
        );
    }

    #[test]
    fn test_statements() {
        assert_eq!(
            statement(&Operation::SplitVertical),
            r#"tell application "System Events" to keystroke "d" using command down"#
        );
        assert_eq!(
            statement(&Operation::SplitHorizontal),
            r#"tell application "System Events" to keystroke "d" using {command down, shift down}"#
        );
        assert_eq!(
            statement(&Operation::FocusNext),
            r#"tell application "System Events" to keystroke "]" using command down"#
        );
        assert_eq!(
            statement(&Operation::Delay(Duration::from_millis(250))),
            "delay 0.25"
        );
        assert_eq!(
            statement(&Operation::Delay(Duration::from_secs(1))),
            "delay 1"
        );
    }

    #[test]
    fn test_render_wraps_operations() {
        let ops = vec![
            Operation::NewTab,
            Operation::WriteText("echo \"hi\"".into()),
        ];
        let expected = "tell application \"iTerm2\"\n\
                        \x20   activate\n\
                        \x20   tell current window\n\
                        \x20       create tab with default profile\n\
                        \x20       tell current session to write text \"echo \\\"hi\\\"\"\n\
                        \x20   end tell\n\
                        end tell\n";
        assert_eq!(render(&ops), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let ops = vec![Operation::SplitVertical, Operation::FocusNext];
        assert_eq!(render(&ops), render(&ops));
    }
}
