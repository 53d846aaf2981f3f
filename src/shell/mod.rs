//! Interactive command loop
//!
//! Reads one command per line, runs it against the repository and writes a
//! human-readable rendition of the result. Failed commands are reported and
//! the loop carries on; only `exit`, `quit` or end of input stop it.

pub mod command;

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::status_info::{DirectoryContent, StatusInfo};
use crate::artifacts::workspace::repo_path::RepoPath;
use crate::commands::porcelain::log::LogOptions;
use crate::errors::RepositoryError;
use colored::Colorize;
use command::{ShellCommand, commit_message};
use log::debug;
use std::io::{BufRead, Write};

const PROMPT: &str = ">>>  ";

const BANNER: &str = r"simplegit - an in-memory version control shell
Type 'help' to list the commands, 'exit' to quit.";

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R: BufRead, W: Write> {
    repository: Repository,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(repository: Repository, reader: R, writer: W) -> Self {
        Self {
            repository,
            reader,
            writer,
        }
    }

    pub fn into_repository(self) -> Repository {
        self.repository
    }

    /// Run the loop until the user quits or the input ends
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", BANNER)?;
        writeln!(
            self.writer,
            "Working directory: {}",
            self.repository.path().display()
        )?;

        while let Some(line) = self.prompt(PROMPT)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!("shell input: {line}");
            if self.execute(line)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.writer, "Goodbye!")?;
        self.writer.flush()?;

        Ok(())
    }

    /// Print `prompt` and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(line))
    }

    fn execute(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match ShellCommand::parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                write!(self.writer, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        let result = match command {
            ShellCommand::Exit => return Ok(Flow::Exit),
            ShellCommand::Credentials { name } => {
                let name = match name {
                    Some(name) => name,
                    None => self.prompt("Username: ")?.unwrap_or_default(),
                };
                match self.repository.set_credentials(&name) {
                    Ok(author) => {
                        let author = author.name().bold();
                        writeln!(self.writer, "Author set to {}", author)?;
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            ShellCommand::LsFiles => {
                let content = self.repository.ls_files();
                self.print_directory_content(&content)?;
                Ok(())
            }
            ShellCommand::Status => match self.repository.status() {
                Ok(status) => Ok(self.print_status(&status)?),
                Err(err) => Err(err),
            },
            ShellCommand::Add { paths } => self.add(&paths)?,
            ShellCommand::Commit { message } => {
                let message = message.as_deref().map(commit_message);
                let is_root = self.repository.history().head().is_none();
                match self.repository.commit(message.as_deref()) {
                    Ok(commit) => {
                        self.print_commit_summary(&commit, is_root)?;
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            ShellCommand::Log { oneline } => {
                self.print_log(&LogOptions { oneline })?;
                Ok(())
            }
            ShellCommand::CatFile { oid } => match self.repository.cat_file(&oid) {
                Ok(object) => {
                    writeln!(self.writer, "{}", object.display())?;
                    Ok(())
                }
                Err(err) => Err(err),
            },
            ShellCommand::LsTree { oid } => match self.repository.ls_tree(&oid) {
                Ok(tree) => {
                    let listing = tree.display();
                    if !listing.is_empty() {
                        writeln!(self.writer, "{}", listing)?;
                    }
                    Ok(())
                }
                Err(err) => Err(err),
            },
        };

        if let Err(err) = result {
            self.print_error(&err)?;
        }

        Ok(Flow::Continue)
    }

    /// Stage each path in turn, then show the resulting status
    fn add(&mut self, paths: &[String]) -> std::io::Result<Result<(), RepositoryError>> {
        for pathspec in paths {
            match self.repository.add(pathspec) {
                Ok(report) => writeln!(
                    self.writer,
                    "Staged {} ({} new {})",
                    report.target,
                    report.newly_staged,
                    if report.newly_staged == 1 {
                        "path"
                    } else {
                        "paths"
                    }
                )?,
                Err(err) => self.print_error(&err)?,
            }
        }

        match self.repository.status() {
            Ok(status) => self.print_status(&status).map(Ok),
            Err(err) => Ok(Err(err)),
        }
    }

    fn print_error(&mut self, err: &RepositoryError) -> std::io::Result<()> {
        if err.is_informational() {
            return writeln!(self.writer, "{} {}", "note:".yellow(), err);
        }

        writeln!(self.writer, "{} {}", "error:".red().bold(), err)?;
        if let RepositoryError::StagedFileMissing(path) = err {
            writeln!(
                self.writer,
                "{} staged paths cannot be unstaged, restore '{}' before committing again",
                "note:".yellow(),
                path
            )?;
        }

        Ok(())
    }

    fn print_status(&mut self, status: &StatusInfo) -> std::io::Result<()> {
        let mut output = String::new();
        output.push_str(&format_paths("UNSTAGED:", &status.unstaged, |path| {
            path.red().to_string()
        }));
        output.push_str(&format_paths("STAGED:", &status.staged, |path| {
            path.green().to_string()
        }));
        if status.is_clean() {
            output.push_str("nothing left to stage\n");
        }

        write!(self.writer, "{}", output)
    }

    fn print_directory_content(&mut self, content: &DirectoryContent) -> std::io::Result<()> {
        writeln!(self.writer, "Files:")?;
        for file in &content.files {
            writeln!(self.writer, "\t{}", file)?;
        }

        writeln!(self.writer, "Directories:")?;
        for (directory, children) in &content.directories {
            let children = children
                .iter()
                .map(RepoPath::basename)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.writer, "\t{} -> [{}]", directory.to_string().blue(), children)?;
        }

        Ok(())
    }

    fn print_commit_summary(&mut self, commit: &Commit, is_root: bool) -> std::io::Result<()> {
        let root_marker = if is_root { "(root-commit) " } else { "" };

        writeln!(
            self.writer,
            "[{}{}] {}",
            root_marker,
            commit.object_id().to_short_oid(),
            commit.short_message()
        )
    }

    fn print_log(&mut self, options: &LogOptions) -> std::io::Result<()> {
        let commits = self.repository.list_commits();
        if commits.is_empty() {
            return writeln!(self.writer, "No commits yet");
        }

        let mut output = String::new();
        for (position, commit) in commits.iter().enumerate() {
            if options.oneline {
                output.push_str(&format!(
                    "{} {}\n",
                    commit.object_id().to_short_oid().yellow(),
                    commit.short_message()
                ));
            } else {
                if position > 0 {
                    output.push('\n');
                }
                output.push_str(&format_medium(commit));
            }
        }

        write!(self.writer, "{}", output)
    }
}

fn format_paths(title: &str, paths: &[RepoPath], paint: impl Fn(&str) -> String) -> String {
    let mut output = format!("{}\n", title.bold());
    for path in paths {
        output.push_str(&format!("\t{}\n", paint(path.as_ref())));
    }

    output
}

fn format_medium(commit: &Commit) -> String {
    let message = commit
        .message()
        .lines()
        .map(|line| format!("    {}\n", line))
        .collect::<String>();

    format!(
        "{}\nAuthor: {}\nDate:   {}\n\n{}",
        format!("commit {}", commit.object_id()).yellow(),
        commit.author(),
        commit.readable_timestamp(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use rstest::{fixture, rstest};
    use std::io::Cursor;

    #[fixture]
    fn working_dir() -> TempDir {
        colored::control::set_override(false);

        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("alpha").unwrap();
        dir.child("dir").create_dir_all().unwrap();
        dir.child("dir/b.txt").write_str("beta").unwrap();
        dir
    }

    fn run_script(dir: &TempDir, script: &str) -> (String, Repository) {
        let repository = Repository::open(dir.path()).unwrap();
        let mut output = Vec::new();
        let mut shell = Shell::new(repository, Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
        let repository = shell.into_repository();

        (String::from_utf8(output).unwrap(), repository)
    }

    #[rstest]
    fn test_full_session(working_dir: TempDir) {
        let (output, repository) = run_script(
            &working_dir,
            "credentials alice\nadd .\ngit commit -m \"first snapshot\"\nlog --oneline\nexit\n",
        );

        assert!(output.contains("Author set to alice"));
        assert!(output.contains("nothing left to stage"));
        assert!(output.contains("(root-commit)"));
        assert!(output.contains("first snapshot"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(repository.history().len(), 1);
    }

    #[rstest]
    fn test_credentials_prompt_reads_next_line(working_dir: TempDir) {
        let (output, repository) = run_script(&working_dir, "credentials\nbob\n");

        assert!(output.contains("Username: "));
        assert_eq!(repository.author().map(|a| a.name()), Some("bob"));
    }

    #[rstest]
    fn test_errors_do_not_stop_the_loop(working_dir: TempDir) {
        let (output, repository) = run_script(
            &working_dir,
            "commit -m nope\nfrobnicate\nadd missing.txt\nstatus\n",
        );

        assert!(output.contains("error: no author set"));
        assert!(output.contains("UNSTAGED:"));
        assert!(output.ends_with("Goodbye!\n"));
        assert!(repository.history().is_empty());
        assert!(repository.index().staged().is_empty());
    }

    #[rstest]
    fn test_missing_staged_file_is_explained(working_dir: TempDir) {
        let repository = Repository::open(working_dir.path()).unwrap();
        let mut output = Vec::new();
        let mut shell = Shell::new(
            repository,
            Cursor::new("credentials eve\nadd .\n".to_string()),
            &mut output,
        );
        shell.run().unwrap();
        let repository = shell.into_repository();

        std::fs::remove_file(working_dir.path().join("dir").join("b.txt")).unwrap();
        let mut output = Vec::new();
        let mut shell = Shell::new(
            repository,
            Cursor::new("commit -m gone\ncommit -m again\n".to_string()),
            &mut output,
        );
        shell.run().unwrap();
        let repository = shell.into_repository();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output
                .matches("error: staged file '/dir/b.txt' no longer exists on disk")
                .count(),
            2
        );
        assert!(output.contains("note: staged paths cannot be unstaged, restore '/dir/b.txt'"));
        assert!(repository.history().is_empty());
    }

    #[rstest]
    fn test_restaging_is_reported_as_a_note(working_dir: TempDir) {
        let (output, _) = run_script(&working_dir, "add a.txt\nadd a.txt\n");

        assert!(output.contains("note: "));
    }

    #[rstest]
    fn test_log_medium_format(working_dir: TempDir) {
        let (output, repository) =
            run_script(&working_dir, "credentials carol\nadd dir\ncommit -m one\nlog\n");

        let commit = repository.history().head().unwrap();
        assert!(output.contains(&format!("commit {}", commit.object_id())));
        assert!(output.contains("Author: carol"));
        assert!(output.contains("\n    one\n"));
    }

    #[rstest]
    fn test_ls_files_lists_directories_with_children(working_dir: TempDir) {
        let (output, _) = run_script(&working_dir, "ls-files\n");

        assert!(output.contains("\t/a.txt\n"));
        assert!(output.contains("\t/dir/b.txt\n"));
        assert!(output.contains("\t/dir -> [b.txt]\n"));
        assert!(output.contains("\t/ -> [a.txt, dir]\n"));
    }
}
