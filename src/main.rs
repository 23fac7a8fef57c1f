use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

use waymark::config::Config;
use waymark::error::{unexpected_error, Error};
use waymark::external::HttpRouteService;
use waymark::map::memory::MemoryMap;
use waymark::navigator::{Action, Event, Navigator};
use waymark::ui::memory::MemoryPanel;
use waymark::ui::{Input, Toggle};

const USAGE: &str = "commands: route <start> <end> [distance|time] [avoid] | reset | quit";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let service = HttpRouteService::new(&config)?;
    let mut navigator = Navigator::new(config, service, MemoryMap::new(), MemoryPanel::new());

    let (tx, rx) = async_channel::unbounded();
    tx.send(Event::Trigger(Action::Initialize))
        .await
        .map_err(|_| unexpected_error())?;
    tokio::spawn(read_commands(tx));

    println!("{}", USAGE);

    navigator
        .run_with(rx, |navigator, _, result| {
            if let Err(err) = result {
                println!("! {}", err.message);
            }
            print!("{}", navigator.ui());
        })
        .await;

    Ok(())
}

async fn read_commands(tx: Sender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!("failed to read stdin: {}", err);
                break;
            }
        };

        if line.trim() == "quit" {
            break;
        }

        match parse_command(&line) {
            Some(events) => {
                for event in events {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
            None => println!("{}", USAGE),
        }
    }
}

fn parse_command(line: &str) -> Option<Vec<Event>> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["reset"] => Some(vec![Event::Trigger(Action::Reset)]),
        ["route", start, end, options @ ..] => {
            let optimize_for = options
                .iter()
                .find(|o| **o != "avoid")
                .copied()
                .unwrap_or("distance");
            let avoid_highways = options.contains(&"avoid");

            Some(vec![
                Event::Edit {
                    input: Input::Start,
                    value: start.to_string(),
                },
                Event::Edit {
                    input: Input::End,
                    value: end.to_string(),
                },
                Event::Edit {
                    input: Input::OptimizeFor,
                    value: optimize_for.into(),
                },
                Event::Check {
                    toggle: Toggle::AvoidHighways,
                    checked: avoid_highways,
                },
                Event::Trigger(Action::FindRoute),
            ])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_command_fills_the_form_then_triggers() {
        let events = parse_command("route A C time avoid").unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(
            events[2],
            Event::Edit {
                input: Input::OptimizeFor,
                value: "time".into()
            }
        );
        assert_eq!(
            events[3],
            Event::Check {
                toggle: Toggle::AvoidHighways,
                checked: true
            }
        );
        assert_eq!(events[4], Event::Trigger(Action::FindRoute));
    }

    #[test]
    fn route_defaults_to_distance() {
        let events = parse_command("route A C").unwrap();

        assert_eq!(
            events[2],
            Event::Edit {
                input: Input::OptimizeFor,
                value: "distance".into()
            }
        );
    }

    #[test]
    fn unknown_commands_are_ignored() {
        assert_eq!(parse_command("fly A B"), None);
        assert_eq!(parse_command("route A"), None);
        assert_eq!(parse_command("reset"), Some(vec![Event::Trigger(Action::Reset)]));
    }
}
