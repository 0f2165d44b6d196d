//! Batch overwrite confirmation.
//!
//! All conflicts in a run are shown together and answered once.

use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::io::IsTerminal;
use svgicon_core::{ConflictPlan, OverwriteDecision, OverwritePolicy};

/// Asks the operator whether existing components may be overwritten.
pub trait Prompter: Send + Sync {
    /// Asks once about every file in `existing`. Returns `true` to overwrite.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn confirm_overwrite(&self, existing: &[String]) -> Result<bool>;
}

/// Interactive prompt on the terminal.
///
/// Declines without asking unless both stdin and stderr are terminals.
#[derive(Debug, Clone, Copy)]
pub struct DialoguerPrompter {
    interactive: bool,
}

impl DialoguerPrompter {
    /// Creates a prompter that asks only when `interactive` is set.
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Creates a prompter for the current process's terminals.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(std::io::stdin().is_terminal() && console::user_attended_stderr())
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm_overwrite(&self, existing: &[String]) -> Result<bool> {
        if !self.interactive {
            tracing::warn!("Not a terminal; keeping {} existing components", existing.len());
            return Ok(false);
        }

        eprintln!("These components already exist:");
        for name in existing {
            eprintln!("  {name}");
        }

        Confirm::new()
            .with_prompt(format!("Overwrite {} existing components?", existing.len()))
            .default(false)
            .interact()
            .context("Failed to get confirmation")
    }
}

/// Decides the single batch answer for every unresolved conflict in `plan`.
///
/// `Always` and `Never` answer without prompting. `Prompt` asks `prompter`
/// only when there is something to ask.
///
/// # Errors
///
/// Returns an error if the prompt fails.
pub fn decide_overwrite(
    policy: OverwritePolicy,
    plan: &ConflictPlan,
    prompter: &dyn Prompter,
) -> Result<OverwriteDecision> {
    let accept = match policy {
        OverwritePolicy::Always => true,
        OverwritePolicy::Never => false,
        OverwritePolicy::Prompt => {
            let existing: Vec<String> = plan
                .conflicts()
                .map(|item| item.target().display().to_string())
                .collect();
            !existing.is_empty() && prompter.confirm_overwrite(&existing)?
        }
    };

    Ok(if accept {
        OverwriteDecision::Accept
    } else {
        OverwriteDecision::Decline
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::fs;
    use svgicon_core::{PendingSource, derive_identity};
    use tempfile::TempDir;

    mock! {
        Prompt {}
        impl Prompter for Prompt {
            fn confirm_overwrite(&self, existing: &[String]) -> Result<bool>;
        }
    }

    fn plan_with_conflict(dir: &TempDir) -> ConflictPlan {
        fs::write(dir.path().join("Star.svelte"), "old").unwrap();
        let sources = ["star", "moon"]
            .iter()
            .map(|label| PendingSource::direct("<svg/>", derive_identity(label).unwrap()));
        ConflictPlan::classify(sources, dir.path(), "svelte", false)
    }

    #[test]
    fn test_prompt_lists_conflicts_only() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with_conflict(&dir);

        let mut prompter = MockPrompt::new();
        prompter
            .expect_confirm_overwrite()
            .withf(|existing| existing.len() == 1 && existing[0].ends_with("Star.svelte"))
            .times(1)
            .returning(|_| Ok(true));

        let decision = decide_overwrite(OverwritePolicy::Prompt, &plan, &prompter).unwrap();
        assert_eq!(decision, OverwriteDecision::Accept);
    }

    #[test]
    fn test_prompt_declined() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with_conflict(&dir);

        let mut prompter = MockPrompt::new();
        prompter
            .expect_confirm_overwrite()
            .times(1)
            .returning(|_| Ok(false));

        let decision = decide_overwrite(OverwritePolicy::Prompt, &plan, &prompter).unwrap();
        assert_eq!(decision, OverwriteDecision::Decline);
    }

    #[test]
    fn test_policies_never_prompt() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with_conflict(&dir);

        let mut prompter = MockPrompt::new();
        prompter.expect_confirm_overwrite().never();

        assert_eq!(
            decide_overwrite(OverwritePolicy::Always, &plan, &prompter).unwrap(),
            OverwriteDecision::Accept
        );
        assert_eq!(
            decide_overwrite(OverwritePolicy::Never, &plan, &prompter).unwrap(),
            OverwriteDecision::Decline
        );
    }

    #[test]
    fn test_no_conflicts_no_prompt() {
        let dir = TempDir::new().unwrap();
        let plan = ConflictPlan::classify(Vec::new(), dir.path(), "svelte", false);

        let mut prompter = MockPrompt::new();
        prompter.expect_confirm_overwrite().never();

        assert_eq!(
            decide_overwrite(OverwritePolicy::Prompt, &plan, &prompter).unwrap(),
            OverwriteDecision::Decline
        );
    }

    #[test]
    fn test_prompt_error_propagates() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with_conflict(&dir);

        let mut prompter = MockPrompt::new();
        prompter
            .expect_confirm_overwrite()
            .returning(|_| Err(anyhow::anyhow!("interrupted")));

        assert!(decide_overwrite(OverwritePolicy::Prompt, &plan, &prompter).is_err());
    }

    #[test]
    fn test_unattended_terminal_declines_without_asking() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with_conflict(&dir);
        let prompter = DialoguerPrompter::new(false);

        assert!(!prompter.confirm_overwrite(&["Star.svelte".to_string()]).unwrap());
        assert_eq!(
            decide_overwrite(OverwritePolicy::Prompt, &plan, &prompter).unwrap(),
            OverwriteDecision::Decline
        );
    }
}
