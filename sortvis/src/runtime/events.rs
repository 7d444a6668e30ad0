use std::str::FromStr;
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// Requests a shell sends to the run controller between ticks
#[derive(Clone, Debug, PartialEq)]
pub enum RunCommand {
    Quit,
    Reset,
    SetCount(usize),
    /// User-facing speed, before the speed multiplier is applied
    SetSpeed(f32),
    /// Step to a neighbouring entry of the speed table
    StepSpeed { faster: bool },
    /// Step to a neighbouring entry of the bar count table
    StepCount { more: bool },
    SwitchDriver(String),
    TogglePause,
}

pub type RunCommandSender = Sender<RunCommand>;
pub type RunCommandReceiver = Receiver<RunCommand>;

pub fn command_channel() -> (RunCommandSender, RunCommandReceiver) {
    mpsc::channel()
}

impl FromStr for RunCommand {
    type Err = String;

    /// Parses one line of viewer input, e.g. `speed 2.5` or `n 40`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        if parts.next().is_some() {
            return Err(format!("too many arguments: '{}'", line.trim()));
        }

        match (command, argument) {
            ("q" | "quit", None) => Ok(Self::Quit),
            ("r" | "reset", None) => Ok(Self::Reset),
            ("p" | "pause", None) => Ok(Self::TogglePause),
            ("+", None) => Ok(Self::StepSpeed { faster: true }),
            ("-", None) => Ok(Self::StepSpeed { faster: false }),
            (">", None) => Ok(Self::StepCount { more: true }),
            ("<", None) => Ok(Self::StepCount { more: false }),
            ("n" | "count", Some(count)) => count
                .parse()
                .map(Self::SetCount)
                .map_err(|e| format!("invalid count '{}': {}", count, e)),
            ("s" | "speed", Some(speed)) => speed
                .parse()
                .map(Self::SetSpeed)
                .map_err(|e| format!("invalid speed '{}': {}", speed, e)),
            ("a" | "algorithm", Some(name)) => {
                Ok(Self::SwitchDriver(name.to_string()))
            }
            ("", _) => Err("empty command".to_string()),
            _ => Err(format!("unknown command: '{}'", line.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        let parse = |line: &str| line.parse::<RunCommand>();

        assert_eq!(parse("q"), Ok(RunCommand::Quit));
        assert_eq!(parse(" reset "), Ok(RunCommand::Reset));
        assert_eq!(parse("pause"), Ok(RunCommand::TogglePause));
        assert_eq!(parse("n 40"), Ok(RunCommand::SetCount(40)));
        assert_eq!(parse("speed 2.5"), Ok(RunCommand::SetSpeed(2.5)));
        assert_eq!(parse("+"), Ok(RunCommand::StepSpeed { faster: true }));
        assert_eq!(parse(" - "), Ok(RunCommand::StepSpeed { faster: false }));
        assert_eq!(parse(">"), Ok(RunCommand::StepCount { more: true }));
        assert_eq!(parse("<"), Ok(RunCommand::StepCount { more: false }));
        assert_eq!(
            parse("a merge"),
            Ok(RunCommand::SwitchDriver("merge".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<RunCommand>().is_err());
        assert!("n".parse::<RunCommand>().is_err());
        assert!("n lots".parse::<RunCommand>().is_err());
        assert!("q now".parse::<RunCommand>().is_err());
        assert!("speed 1 2".parse::<RunCommand>().is_err());
        assert!("shuffle".parse::<RunCommand>().is_err());
        assert!("+ 2".parse::<RunCommand>().is_err());
    }

    #[test]
    fn channel_delivers_in_order() {
        let (tx, rx) = command_channel();
        tx.send(RunCommand::Reset).unwrap();
        tx.send(RunCommand::Quit).unwrap();

        assert_eq!(rx.recv(), Ok(RunCommand::Reset));
        assert_eq!(rx.recv(), Ok(RunCommand::Quit));
    }
}
