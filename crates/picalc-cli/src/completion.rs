//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate a shell completion script for the `picalc` binary.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "picalc", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completion_is_nonempty() {
        let mut cmd = Command::new("picalc");
        let mut out = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut out);
        assert!(!out.is_empty());
    }

    #[test]
    fn zsh_completion_mentions_binary() {
        let mut cmd = Command::new("picalc");
        let mut out = Vec::new();
        generate_completion(&mut cmd, Shell::Zsh, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("picalc"));
    }
}
