//! Event Scripts
//!
//! One command per line; `#` starts a comment.
//!
//! ```text
//! load 125            # metadata with a 125 s duration
//! click play          # click/enter/over/leave <element id>
//! move 50 60          # pointer over the seek bar: offsetX pageX
//! input volume 0.4    # slider input: <element id> <value>
//! key k               # document keyup
//! tick 2000           # let 2000 ms pass
//! pip ok              # settle the pending PiP request
//! pip fail denied
//! print
//! ```

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use fos_controls::{EventType, Target, UiEvent};
use fos_media::PipError;

/// Script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(f64),
    Event(UiEvent),
    Tick(Duration),
    Pip(Result<(), PipError>),
    Print,
}

fn target(word: Option<&str>) -> Result<Target> {
    let id = word.context("missing element id")?;
    Target::from_id(id).ok_or_else(|| anyhow!("unknown element '{id}'"))
}

fn number(word: Option<&str>, what: &str) -> Result<f64> {
    let word = word.with_context(|| format!("missing {what}"))?;
    word.parse()
        .with_context(|| format!("invalid {what} '{word}'"))
}

/// Parse one line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb {
        "load" => Command::Load(number(words.next(), "duration")?),
        "click" => Command::Event(UiEvent::click(target(words.next())?)),
        "enter" => Command::Event(UiEvent::new(target(words.next())?, EventType::MouseEnter)),
        "over" => Command::Event(UiEvent::new(target(words.next())?, EventType::MouseOver)),
        "leave" => Command::Event(UiEvent::new(target(words.next())?, EventType::MouseLeave)),
        "move" => {
            let offset_x = number(words.next(), "offsetX")?;
            let page_x = number(words.next(), "pageX")?;
            Command::Event(UiEvent::pointer_move(Target::Seek, offset_x, page_x))
        }
        "input" => {
            let target = target(words.next())?;
            Command::Event(UiEvent::input(target, number(words.next(), "value")?))
        }
        "key" => {
            let key = match words.next().context("missing key")? {
                "space" => " ",
                key => key,
            };
            Command::Event(UiEvent::key_up(key))
        }
        "tick" => {
            let ms = number(words.next(), "milliseconds")?;
            let elapsed = Duration::try_from_secs_f64(ms / 1000.0)
                .with_context(|| format!("invalid tick '{ms}'"))?;
            Command::Tick(elapsed)
        }
        "pip" => match words.next() {
            Some("ok") => Command::Pip(Ok(())),
            Some("fail") => {
                let reason = words.collect::<Vec<_>>().join(" ");
                Command::Pip(Err(PipError::NotAllowed(reason)))
            }
            other => bail!("expected 'pip ok' or 'pip fail <reason>', got {other:?}"),
        },
        "print" => Command::Print,
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(command))
}
