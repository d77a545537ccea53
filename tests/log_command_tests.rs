use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions::*, repository::*};

#[cfg(test)]
mod log_command_tests {
    use super::*;

    #[test]
    fn test_log_two_commits() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        commit_file(&repo.path, "one.txt", "first\n", "Add one")?;
        commit_file(&repo.path, "two.txt", "second\n", "Add two")?;

        repo.git_latex()?
            .arg("log")
            .arg("-o")
            .arg(repo.out("log.tex"))
            .assert()
            .success()
            .stdout(generated("log.tex"))
            .stdout(predicate::str::contains("2 commit(s), 2 file(s), +2 -0"));

        let document = repo.read_out("log.tex")?;
        assert_document_frame(&document);
        assert_balanced(&document);
        assert_eq!(count(&document, "\\section{Commit "), 2);
        assert_eq!(count(&document, "\\subsection{"), 2);
        assert!(document.contains("\\section{Commit 1: "));
        assert!(document.contains("\\section{Commit 2: "));
        assert!(document.contains("\\textcolor{diffcommit}{Author: Test User <test@example.com>}"));
        assert!(document.contains("    Add two\n"));

        // git log lists the newest commit first
        let newest = document.find("\\subsection{two.txt}").unwrap();
        let break_at = document.rfind("\\newpage").unwrap();
        let oldest = document.find("\\subsection{one.txt}").unwrap();
        assert!(newest < break_at);
        assert!(break_at < oldest);

        Ok(())
    }

    #[test]
    fn test_log_max_count() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        commit_file(&repo.path, "a.txt", "a\n", "a")?;
        commit_file(&repo.path, "b.txt", "b\n", "b")?;
        commit_file(&repo.path, "c.txt", "c\n", "c")?;

        repo.git_latex()?
            .args(["log", "-n", "2", "-o"])
            .arg(repo.out("two.tex"))
            .assert()
            .success();

        let document = repo.read_out("two.tex")?;
        assert_eq!(count(&document, "\\section{Commit "), 2);
        assert!(document.contains("\\subsection{c.txt}"));
        assert!(!document.contains("\\subsection{a.txt}"));

        Ok(())
    }

    #[test]
    fn test_log_revision_range() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        commit_file(&repo.path, "a.txt", "a\n", "a")?;
        commit_file(&repo.path, "b.txt", "b\n", "b")?;

        repo.git_latex()?
            .args(["log", "HEAD~1..HEAD", "-o"])
            .arg(repo.out("range.tex"))
            .assert()
            .success();

        let document = repo.read_out("range.tex")?;
        assert_eq!(count(&document, "\\section{Commit "), 1);
        assert!(!document.contains("\\newpage\n\n\\section"));
        assert!(document.contains("\\subsection{b.txt}"));

        Ok(())
    }

    #[test]
    fn test_log_without_commits_fails() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;

        repo.git_latex()?
            .arg("log")
            .arg("-o")
            .arg(repo.out("none.tex"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("git log"));

        assert!(!repo.out("none.tex").exists());
        Ok(())
    }

    #[test]
    fn test_log_ignores_pretty_configuration() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        git_config(&repo.path, "format.pretty", "oneline")?;
        git_config(&repo.path, "diff.mnemonicPrefix", "true")?;
        commit_file(&repo.path, "foo.go", "package main\n", "Add foo")?;

        repo.git_latex()?
            .arg("log")
            .arg("-o")
            .arg(repo.out("pretty.tex"))
            .assert()
            .success()
            .stdout(predicate::str::contains("1 commit(s), 1 file(s)"));

        let document = repo.read_out("pretty.tex")?;
        assert_eq!(count(&document, "\\section{Commit "), 1);
        assert!(document.contains("\\section{Commit 1: "));
        assert!(document.contains("\\subsection{foo.go}"));

        Ok(())
    }
}
