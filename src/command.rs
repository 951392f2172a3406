//! Interactive command parser
//!
//! Parses one line of session input into a [`Command`] using a pest grammar.
//! Everything after the keyword is taken verbatim as the argument, so regex
//! patterns may contain spaces.

use pest::Parser;
use pest_derive::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "command_grammar.pest"]
struct CommandParser;

/// Error type for command parsing failures
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),

    #[error("Command error: Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Command error: `{0}` needs an argument")]
    MissingArgument(String),

    #[error("Command error: `{0}` takes no argument")]
    UnexpectedArgument(String),

    #[error("Command error: Invalid sentence number: {0}")]
    InvalidNumber(String),
}

/// A session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Stats,
    /// Stats of the last result
    Last,
    Tags(Option<String>),
    FindWord { pattern: String, case_sensitive: bool },
    Find { pattern: String, case_sensitive: bool },
    Lookup(String),
    LookupC(String),
    Search(String),
    SearchC(String),
    /// 1-indexed sentence of the last result
    Show(usize),
    Load(PathBuf),
    Quit,
}

/// Parse one line of input
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let mut pairs = CommandParser::parse(Rule::command, input.trim()).map_err(Box::new)?;

    let mut keyword = None;
    let mut argument = None;
    if let Some(command) = pairs.next() {
        for pair in command.into_inner() {
            match pair.as_rule() {
                Rule::keyword => keyword = Some(pair.as_str()),
                Rule::argument => argument = Some(pair.as_str().to_string()),
                _ => {}
            }
        }
    }

    let Some(keyword) = keyword else {
        return Err(CommandError::UnknownCommand(input.trim().to_string()));
    };

    build_command(keyword, argument)
}

fn build_command(keyword: &str, argument: Option<String>) -> Result<Command, CommandError> {
    let required = |argument: Option<String>| {
        argument.ok_or_else(|| CommandError::MissingArgument(keyword.to_string()))
    };
    let none = |argument: Option<String>, command: Command| match argument {
        Some(_) => Err(CommandError::UnexpectedArgument(keyword.to_string())),
        None => Ok(command),
    };

    match keyword {
        "help" | "h" => none(argument, Command::Help),
        "stats" => none(argument, Command::Stats),
        "last" => none(argument, Command::Last),
        "quit" | "exit" | "q" => none(argument, Command::Quit),
        "tags" => Ok(Command::Tags(argument)),
        "find_word" | "ifind_word" => Ok(Command::FindWord {
            pattern: required(argument)?,
            case_sensitive: !keyword.starts_with('i'),
        }),
        "find" | "ifind" => Ok(Command::Find {
            pattern: required(argument)?,
            case_sensitive: !keyword.starts_with('i'),
        }),
        "lookup" => Ok(Command::Lookup(required(argument)?)),
        "lookup_c" => Ok(Command::LookupC(required(argument)?)),
        "search" => Ok(Command::Search(required(argument)?)),
        "search_c" => Ok(Command::SearchC(required(argument)?)),
        "show" => {
            let arg = required(argument)?;
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Show(n)),
                _ => Err(CommandError::InvalidNumber(arg)),
            }
        }
        "load" => Ok(Command::Load(PathBuf::from(required(argument)?))),
        _ => Err(CommandError::UnknownCommand(keyword.to_string())),
    }
}

/// Help text for the interactive session
pub const HELP: &str = "\
Commands:
  stats              summary of the loaded corpus
  last               summary of the last result
  tags [CODE]        POS tagset reference, or one tag
  find_word RE       tokens whose text starts with RE (ifind_word: lowercased)
  find RE            sentences containing such a token (ifind: lowercased)
  lookup RE          sentences whose lowercased text/tag form starts with RE
  lookup_c RE        sentences whose tag sequence starts with RE
  search RE          like lookup, RE may match anywhere
  search_c RE        like lookup_c, RE may match anywhere
  show N             sentence N of the last result
  load PATH          load another corpus
  help               this text
  quit               leave the session
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_command("stats").unwrap(), Command::Stats);
        assert_eq!(parse_command("  help  ").unwrap(), Command::Help);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
        assert_eq!(parse_command("tags").unwrap(), Command::Tags(None));
        assert_eq!(
            parse_command("tags NEG").unwrap(),
            Command::Tags(Some("NEG".to_string()))
        );
    }

    #[test]
    fn test_argument_keeps_spaces() {
        assert_eq!(
            parse_command(r"lookup aku/prp \w+/vb").unwrap(),
            Command::Lookup(r"aku/prp \w+/vb".to_string())
        );
        assert_eq!(
            parse_command("lookup_c PRP VB").unwrap(),
            Command::LookupC("PRP VB".to_string())
        );
    }

    #[test]
    fn test_find_variants() {
        assert_eq!(
            parse_command("find_word mem.+").unwrap(),
            Command::FindWord {
                pattern: "mem.+".to_string(),
                case_sensitive: true
            }
        );
        assert_eq!(
            parse_command("ifind dia").unwrap(),
            Command::Find {
                pattern: "dia".to_string(),
                case_sensitive: false
            }
        );
    }

    #[test]
    fn test_show_number() {
        assert_eq!(parse_command("show 3").unwrap(), Command::Show(3));
        assert!(matches!(
            parse_command("show 0"),
            Err(CommandError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_command("show x"),
            Err(CommandError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_command_errors() {
        assert!(matches!(
            parse_command("frobnicate"),
            Err(CommandError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command("lookup"),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            parse_command("stats now"),
            Err(CommandError::UnexpectedArgument(_))
        ));
        assert!(matches!(
            parse_command("42"),
            Err(CommandError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_path() {
        assert_eq!(
            parse_command("load data/test.tsv").unwrap(),
            Command::Load(PathBuf::from("data/test.tsv"))
        );
    }
}
