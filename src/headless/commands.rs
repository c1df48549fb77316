//! Stdin command parsing for headless mode

use std::str::FromStr;

use apiguide_app::labs::Resource;
use apiguide_app::Message;
use apiguide_core::Section;

/// Parse one stdin line into a message.
///
/// Blank lines parse to `Ok(None)`. Anything unrecognised is an `Err`
/// carrying the reason, reported as an `ignored` event.
pub fn parse_command(line: &str) -> Result<Option<Message>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }

    let message = match (command, argument) {
        ("section", Some(id)) => {
            Message::GoToSection(Section::from_id(id).map_err(|e| e.to_string())?)
        }
        ("method", Some(name)) => Message::SelectMethod(name.to_ascii_uppercase()),
        ("send", None) => Message::SendRequest,
        ("resource", Some(name)) => Message::SetResource(Resource::from_str(name)?),
        ("toggle", Some("id")) => Message::ToggleIdSegment,
        ("toggle", Some("query")) => Message::ToggleQuerySegment,
        ("toggle", Some(other)) => return Err(format!("unknown toggle '{other}'")),
        ("trigger", Some(id)) => Message::TriggerScenario(id.to_string()),
        ("q" | "quit", None) => Message::Quit,
        ("section" | "method" | "resource" | "toggle" | "trigger", None) => {
            return Err(format!("'{command}' needs an argument"))
        }
        ("send" | "q" | "quit", Some(_)) => {
            return Err(format!("'{command}' takes no argument"))
        }
        _ => return Err(format!("unknown command '{command}'")),
    };

    Ok(Some(message))
}
