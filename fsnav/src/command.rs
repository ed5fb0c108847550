//! Line-oriented commands understood by the session.
//!
//! One command per line, arguments separated by whitespace. Names therefore
//! cannot contain spaces. Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MakeDirectory(String),
    Touch { name: String, size: Option<u64> },
    Find(String),
    Extension(String),
    SizeRange { min: u64, max: u64 },
    Largest(usize),
    Total,
    Remove(String),
    Tree,
    Levels,
    Stats,
    Sample,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  mkdir <name>          create a directory
  touch <name> [size]   create a file (size in bytes)
  find <name>           look an entry up by name
  ext <extension>       list files with an extension (txt, .txt)
  size <min> <max>      list files whose size is within [min, max]
  largest <n>           list the n largest files
  total                 total size of all entries
  rm <name>             delete a file or directory
  tree                  draw the tree
  levels                show the tree level by level
  stats                 show statistics
  sample                load sample data
  help                  show this message
  quit                  leave";

impl Command {
    /// Parses one input line. `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = match words.next() {
            Some(verb) => verb.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.as_str() {
            "mkdir" => Command::MakeDirectory(single(&verb, &args)?),
            "touch" => match args.as_slice() {
                [name] => Command::Touch {
                    name: name.to_string(),
                    size: None,
                },
                [name, size] => Command::Touch {
                    name: name.to_string(),
                    size: Some(parse_u64("size", size)?),
                },
                _ => return Err(usage("touch <name> [size]")),
            },
            "find" => Command::Find(single(&verb, &args)?),
            "ext" => Command::Extension(single(&verb, &args)?),
            "size" => match args.as_slice() {
                [min, max] => Command::SizeRange {
                    min: parse_u64("min", min)?,
                    max: parse_u64("max", max)?,
                },
                _ => return Err(usage("size <min> <max>")),
            },
            "largest" => match args.as_slice() {
                [count] => {
                    let count: i64 = count.parse().map_err(|_| {
                        Error::CommandError(format!("count must be a whole number, got '{}'", count))
                    })?;
                    // zero or negative counts simply select nothing
                    Command::Largest(usize::try_from(count.max(0)).unwrap_or(usize::MAX))
                }
                _ => return Err(usage("largest <n>")),
            },
            "total" => no_args(&verb, &args, Command::Total)?,
            "rm" | "delete" => Command::Remove(single("rm", &args)?),
            "tree" => no_args(&verb, &args, Command::Tree)?,
            "levels" => no_args(&verb, &args, Command::Levels)?,
            "stats" => no_args(&verb, &args, Command::Stats)?,
            "sample" => no_args(&verb, &args, Command::Sample)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(Error::CommandError(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };
        Ok(Some(command))
    }

    /// Whether the command goes through the index (and counts as an operation).
    pub fn is_index_operation(&self) -> bool {
        !matches!(
            self,
            Command::Tree | Command::Levels | Command::Stats | Command::Help | Command::Quit
        )
    }
}

fn single(verb: &str, args: &[&str]) -> Result<String> {
    match args {
        [value] => Ok(value.to_string()),
        _ => Err(usage(&format!("{} <name>", verb))),
    }
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(verb))
    }
}

fn parse_u64(what: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| {
        Error::CommandError(format!("{} must be a non-negative number, got '{}'", what, raw))
    })
}

fn usage(form: &str) -> Error {
    Error::CommandError(format!("usage: {}", form))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("mkdir Docs"), Command::MakeDirectory("Docs".into()));
        assert_eq!(
            parse("touch readme.txt 2048"),
            Command::Touch {
                name: "readme.txt".into(),
                size: Some(2048)
            }
        );
        assert_eq!(
            parse("  TOUCH a.txt "),
            Command::Touch {
                name: "a.txt".into(),
                size: None
            }
        );
        assert_eq!(parse("size 10 20"), Command::SizeRange { min: 10, max: 20 });
        assert_eq!(parse("largest 3"), Command::Largest(3));
        assert_eq!(parse("delete x"), Command::Remove("x".into()));
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_non_positive_largest_is_zero() {
        assert_eq!(parse("largest 0"), Command::Largest(0));
        assert_eq!(parse("largest -4"), Command::Largest(0));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# setup").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("frobnicate").is_err());
        assert!(Command::parse("mkdir").is_err());
        assert!(Command::parse("mkdir a b").is_err());
        assert!(Command::parse("touch a big").is_err());
        assert!(Command::parse("size 5").is_err());
        assert!(Command::parse("size -1 5").is_err());
        assert!(Command::parse("total now").is_err());
    }

    #[test]
    fn test_operation_classification() {
        assert!(parse("find x").is_index_operation());
        assert!(parse("sample").is_index_operation());
        assert!(!parse("tree").is_index_operation());
        assert!(!parse("stats").is_index_operation());
    }
}
