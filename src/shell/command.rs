use clap::{Parser, Subcommand};

/// One line typed at the prompt
#[derive(Parser, Debug)]
#[command(
    name = "simplegit",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = r"
Commands:
{subcommands}
"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    #[command(
        name = "credentials",
        about = "Set the author recorded on commits",
        long_about = "Set the author identity used by subsequent commits. \
        Prompts for a username when none is given."
    )]
    Credentials {
        #[arg(index = 1, help = "The author name")]
        name: Option<String>,
    },
    #[command(name = "ls-files", about = "Show the known files and directories")]
    LsFiles,
    #[command(name = "status", about = "Rescan and print the staged/unstaged paths")]
    Status,
    #[command(
        name = "add",
        about = "Stage files or directories",
        long_about = "Stage the given paths. A directory stages its whole subtree, \
        '.' stages everything. Paths may be abbreviated to their trailing components."
    )]
    Add {
        #[arg(required = true, num_args = 1.., help = "Paths to stage")]
        paths: Vec<String>,
    },
    #[command(name = "commit", about = "Commit the staged files")]
    Commit {
        #[arg(
            short,
            long,
            num_args = 0..,
            allow_hyphen_values = true,
            help = "The commit message"
        )]
        message: Option<Vec<String>>,
    },
    #[command(name = "log", about = "List the commit history")]
    Log {
        #[arg(long, help = "Show one commit per line")]
        oneline: bool,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(index = 1, help = "Full or abbreviated object ID")]
        oid: String,
    },
    #[command(name = "ls-tree", about = "List the contents of a tree object")]
    LsTree {
        #[arg(index = 1, help = "Full or abbreviated tree or commit ID")]
        oid: String,
    },
    #[command(name = "exit", visible_alias = "quit", about = "Quit the command loop")]
    Exit,
}

impl ShellCommand {
    /// Parse a prompt line; a leading `git` is accepted and ignored
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let mut words = line.split_whitespace().peekable();
        if words.peek() == Some(&"git") {
            words.next();
        }

        ShellLine::try_parse_from(words).map(|line| line.command)
    }
}

/// Join message words and drop one pair of surrounding quotes
pub fn commit_message(words: &[String]) -> String {
    let message = words.join(" ");
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            message
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(&message);

    unquoted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("status", ShellCommand::Status)]
    #[case("git status", ShellCommand::Status)]
    #[case("ls-files", ShellCommand::LsFiles)]
    #[case("quit", ShellCommand::Exit)]
    #[case("log --oneline", ShellCommand::Log { oneline: true })]
    #[case("add .", ShellCommand::Add { paths: vec![".".to_string()] })]
    #[case("credentials bob", ShellCommand::Credentials { name: Some("bob".to_string()) })]
    #[case("commit", ShellCommand::Commit { message: None })]
    #[case("commit -m", ShellCommand::Commit { message: Some(vec![]) })]
    fn test_parse_line(#[case] line: &str, #[case] expected: ShellCommand) {
        assert_eq!(ShellCommand::parse_line(line).unwrap(), expected);
    }

    #[test]
    fn test_commit_message_words_are_joined() {
        let command = ShellCommand::parse_line("git commit -m \"initial   import -v\"").unwrap();

        match command {
            ShellCommand::Commit {
                message: Some(words),
            } => assert_eq!(commit_message(&words), "initial import -v"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[rstest]
    #[case("frobnicate")]
    #[case("add")]
    #[case("cat-file")]
    fn test_invalid_lines_are_rejected(#[case] line: &str) {
        assert!(ShellCommand::parse_line(line).is_err());
    }
}
