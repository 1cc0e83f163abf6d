//! Line-based fallback mode: word commands on a prompt instead of the
//! full-screen remote. Handy over slow links or inside scripts.

use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use strum::IntoEnumIterator;
use yansi::Paint;

use crate::domain::models::DeviceClientBox;
use crate::domain::models::RemoteCommand;

/// Word aliases accepted on top of the kebab-case command names.
fn word_command(word: &str) -> Option<RemoteCommand> {
    match word {
        "pause" => Some(RemoteCommand::Play),
        "ok" | "enter" => Some(RemoteCommand::Select),
        _ => RemoteCommand::parse(word),
    }
}

fn help_words() -> String {
    let mut words: Vec<String> = RemoteCommand::iter().map(|c| c.to_string()).collect();
    words.extend(["pause", "ok", "enter"].map(str::to_string));
    return words.join("  ");
}

pub async fn start(device_client: DeviceClientBox) -> Result<()> {
    let info = device_client
        .device_info()
        .await
        .context("device did not answer; check the configured address")?;

    println!("~*~*~ {} remote ~*~*~", Paint::green(&info.model_name));
    println!("type '?' for help, 'q' to quit");

    let stdin = std::io::stdin();
    loop {
        print!("roku> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let word = line.trim();
        match word {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "help" => println!("{}", help_words()),
            _ => match word_command(word) {
                Some(command) => {
                    if let Err(err) = device_client.keypress(command.endpoint()).await {
                        println!("{}", Paint::red(&format!("request failed: {err}")));
                    }
                }
                None => println!("unknown command: {word} (type '?' for help)"),
            },
        }
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_map_to_documented_endpoints() {
        assert_eq!(word_command("pause"), Some(RemoteCommand::Play));
        assert_eq!(word_command("pause").unwrap().endpoint(), "keypress/play");
        assert_eq!(word_command("ok"), Some(RemoteCommand::Select));
        assert_eq!(word_command("enter"), Some(RemoteCommand::Select));
    }

    #[test]
    fn test_command_names_parse_directly() {
        assert_eq!(word_command("home"), Some(RemoteCommand::Home));
        assert_eq!(word_command("instant-replay"), Some(RemoteCommand::InstantReplay));
        assert_eq!(word_command("volume-up"), Some(RemoteCommand::VolumeUp));
    }

    #[test]
    fn test_unknown_words_are_rejected() {
        assert_eq!(word_command("warp"), None);
        assert_eq!(word_command(""), None);
    }

    #[test]
    fn test_help_lists_aliases() {
        let words = help_words();
        assert!(words.contains("home"));
        assert!(words.contains("pause"));
        assert!(words.contains("ok"));
    }
}
