// File: hostbot-cli/src/console.rs

use std::io::BufRead;
use hostbot_common::models::{Notification, NotificationKind};
use hostbot_common::traits::Notifier;

/// Prints notifications the way a toast would show them: success on stdout,
/// errors on stderr, description on its own indented line.
#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let text = render(&notification);
        match notification.kind {
            NotificationKind::Success => println!("{}", text),
            NotificationKind::Error => eprintln!("{}", text),
        }
    }
}

fn render(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✘",
    };
    match &notification.description {
        Some(d) => format!("{} {}\n  {}", marker, notification.message, d),
        None => format!("{} {}", marker, notification.message),
    }
}

/// Reads a single line (the token) from stdin, without the line ending.
pub fn read_secret_line() -> std::io::Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_puts_description_on_its_own_line() {
        assert_eq!(
            render(&Notification::submitted()),
            "✔ Bot request submitted!\n  Check your Discord DM for confirmation."
        );
        assert_eq!(render(&Notification::error("Bot token is required")), "✘ Bot token is required");
    }
}
