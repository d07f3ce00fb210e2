use std::io::BufRead;
use std::thread;
use tokio::sync::mpsc;

/// Reads stdin on a dedicated thread so a pending read never holds up
/// runtime shutdown. The thread exits on EOF or once the receiver is gone.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    line_rx
}

/// Key name for a typed line. A line of only spaces means the space bar.
pub fn line_to_key(line: &str) -> &str {
    let trimmed = line.trim();
    if trimmed.is_empty() && line.contains(' ') {
        " "
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_to_key() {
        assert_eq!(line_to_key("  w \r"), "w");
        assert_eq!(line_to_key(" "), " ");
        assert_eq!(line_to_key(""), "");
        assert_eq!(line_to_key("ArrowUp"), "ArrowUp");
    }
}
