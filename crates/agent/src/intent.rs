//! Intent classification — keyword routing over user messages.
//!
//! Matching is ordered, first-match-wins: file list, shell, git, file read,
//! else chat. Each check is a plain substring membership test against the
//! lowercased, trimmed message over a fixed bilingual (Russian/English)
//! keyword set. No stemming, no scoring. The ordering is an observable
//! tie-break: a message containing both "run" and "git" is a shell request
//! because the shell check comes first.
//!
//! Argument extraction runs on the *original* text so the extracted command
//! or path keeps its casing.

use regex_lite::Regex;

/// The classified meaning of a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// List the files in the current directory
    FileList,
    /// Run a shell command
    ShellRun { command: String },
    /// Run a git subcommand
    VcsRun { subcommand: String },
    /// Read a file and show its contents
    FileRead { path: String },
    /// Plain conversation — the universal fallback
    Chat,
}

const FILE_LIST_KEYWORDS: &[&str] = &[
    "файлы",
    "файлов",
    "список файлов",
    "что тут",
    "покажи файл",
    "files",
    "list files",
    "show files",
    "what files",
];

const SHELL_KEYWORDS: &[&str] = &["запусти", "выполни", "run", "execute", "команду"];

const FILE_READ_KEYWORDS: &[&str] = &["прочитай", "покажи содержимое", "read", "show content", "cat"];

/// Classify a raw user message into an intent.
///
/// Never fails: every input maps to exactly one intent, with `Chat` as the
/// fallback when no keyword set matches.
pub fn classify(raw: &str) -> Intent {
    let lowered = raw.to_lowercase();
    let msg = lowered.trim();

    if contains_any(msg, FILE_LIST_KEYWORDS) {
        Intent::FileList
    } else if contains_any(msg, SHELL_KEYWORDS) {
        Intent::ShellRun {
            command: extract_command(raw),
        }
    } else if msg.contains("git") {
        Intent::VcsRun {
            subcommand: extract_git_subcommand(raw),
        }
    } else if contains_any(msg, FILE_READ_KEYWORDS) {
        Intent::FileRead {
            path: extract_file_path(raw),
        }
    } else {
        Intent::Chat
    }
}

fn contains_any(msg: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| msg.contains(kw))
}

/// Extract the shell command following a trigger phrase.
///
/// Trigger phrases are tried in order; the first match yields everything
/// after it, trimmed. When none match, the *entire* trimmed message is used
/// verbatim as the command. That fallback is deliberately permissive and
/// security-relevant: an unrecognized message reaching this path runs as-is
/// through the shell tool. It is preserved behavior, not an oversight.
fn extract_command(raw: &str) -> String {
    let patterns = [
        r"[Зз]апусти\s+(.+)",
        r"[Вв]ыполни\s+(.+)",
        r"(?i)run\s+(.+)",
        r"(?i)execute\s+(.+)",
    ];

    for pattern in patterns {
        if let Some(cmd) = capture_first(pattern, raw) {
            return cmd;
        }
    }

    raw.trim().to_string()
}

/// Extract the git subcommand after the literal `git` marker.
/// Defaults to "status" when the marker has no remainder.
fn extract_git_subcommand(raw: &str) -> String {
    capture_first(r"(?i)git\s+(.+)", raw).unwrap_or_else(|| "status".to_string())
}

/// Extract the first token shaped like a file path, optionally quoted.
/// Defaults to "README.md" when nothing matches. This is a heuristic, not a
/// validator: nonexistent paths surface later as tool errors.
fn extract_file_path(raw: &str) -> String {
    capture_first(r#"['"]?([A-Za-z0-9_./-]+\.[A-Za-z]+)['"]?"#, raw)
        .unwrap_or_else(|| "README.md".to_string())
}

fn capture_first(pattern: &str, text: &str) -> Option<String> {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(text).map(|c| c[1].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_english() {
        assert_eq!(classify("list files"), Intent::FileList);
        assert_eq!(classify("what files are here?"), Intent::FileList);
    }

    #[test]
    fn list_files_russian() {
        assert_eq!(classify("покажи файлы"), Intent::FileList);
        assert_eq!(classify("что тут есть"), Intent::FileList);
    }

    #[test]
    fn file_list_wins_over_later_intents() {
        // "files" and "run" both present; the file-list check comes first.
        assert_eq!(classify("run something with my files"), Intent::FileList);
        // "files" and "git" both present.
        assert_eq!(classify("show files in the git repo"), Intent::FileList);
    }

    #[test]
    fn shell_wins_over_git() {
        // Both "run" and "git" present; shell is checked before git.
        let intent = classify("run git status");
        assert_eq!(
            intent,
            Intent::ShellRun {
                command: "git status".into()
            }
        );
    }

    #[test]
    fn shell_command_extraction() {
        assert_eq!(
            classify("run echo hi"),
            Intent::ShellRun {
                command: "echo hi".into()
            }
        );
        assert_eq!(
            classify("запусти ls -la"),
            Intent::ShellRun {
                command: "ls -la".into()
            }
        );
    }

    #[test]
    fn shell_extraction_preserves_case() {
        assert_eq!(
            classify("Execute Echo HELLO"),
            Intent::ShellRun {
                command: "Echo HELLO".into()
            }
        );
    }

    #[test]
    fn shell_fallback_uses_whole_message() {
        // "команду" triggers the shell check but matches no extraction
        // phrase, so the whole message is the command.
        assert_eq!(
            classify("команду ls"),
            Intent::ShellRun {
                command: "команду ls".into()
            }
        );
    }

    #[test]
    fn git_subcommand_extraction() {
        assert_eq!(
            classify("git log --oneline"),
            Intent::VcsRun {
                subcommand: "log --oneline".into()
            }
        );
    }

    #[test]
    fn git_without_remainder_defaults_to_status() {
        assert_eq!(
            classify("git"),
            Intent::VcsRun {
                subcommand: "status".into()
            }
        );
    }

    #[test]
    fn file_read_path_extraction() {
        assert_eq!(
            classify("read src/main.rs"),
            Intent::FileRead {
                path: "src/main.rs".into()
            }
        );
        assert_eq!(
            classify("прочитай 'config/config.toml'"),
            Intent::FileRead {
                path: "config/config.toml".into()
            }
        );
    }

    #[test]
    fn file_read_without_path_defaults_to_readme() {
        assert_eq!(
            classify("прочитай этот файл пожалуйста"),
            Intent::FileRead {
                path: "README.md".into()
            }
        );
    }

    #[test]
    fn unmatched_input_is_chat() {
        assert_eq!(classify("how are you"), Intent::Chat);
        assert_eq!(classify("как дела"), Intent::Chat);
        assert_eq!(classify(""), Intent::Chat);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("LIST FILES"), Intent::FileList);
        assert_eq!(
            classify("RUN echo ok"),
            Intent::ShellRun {
                command: "echo ok".into()
            }
        );
    }
}
