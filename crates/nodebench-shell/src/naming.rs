//! Identifier validation for new custom node definitions.
//!
//! A new reusable definition needs a (name, category) pair that collides
//! with neither the existing custom definitions nor the built-in type
//! display names, and whose category is non-empty. The prompt dialog is an
//! injected strategy, so the retry loop runs headless in tests. The loop
//! has no attempt limit; the prompt must always offer a cancel affordance,
//! and cancellation is terminal.

use std::collections::HashSet;

/// Error shown when the name collides with an existing custom definition.
pub const ERR_DUPLICATE_CUSTOM: &str = "A custom node with the given name already exists.";

/// Error shown when the name collides with a built-in type's display name.
pub const ERR_DUPLICATE_BUILTIN: &str = "A built-in node with the given name already exists.";

/// Error shown when the category field is empty.
pub const ERR_EMPTY_CATEGORY: &str =
    "You must enter a new category or choose one from the existing categories.";

/// A proposed (name, category) pair exchanged with the prompt dialog.
///
/// Created once per "define new custom node" command, mutated in place by
/// each validation round, and consumed (success) or discarded (cancelled)
/// at loop exit.
#[derive(Debug, Clone, Default)]
pub struct IdentifierProposal {
    /// Proposed definition name.
    pub name: String,
    /// Proposed category.
    pub category: String,
    /// Error message of the most recent failed round, empty otherwise.
    pub error: String,
    /// Whether the proposal was accepted.
    pub success: bool,
}

impl IdentifierProposal {
    /// Create a fresh proposal with no error and no success.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            error: String::new(),
            success: false,
        }
    }
}

/// What the prompt dialog returned for one round.
#[derive(Debug, Clone)]
pub struct PromptResponse {
    /// Possibly user-edited name.
    pub name: String,
    /// Possibly user-edited category.
    pub category: String,
    /// Whether the dialog was accepted (false = cancelled).
    pub accepted: bool,
}

impl PromptResponse {
    /// An accepted response carrying the given pair.
    pub fn accepted(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            accepted: true,
        }
    }

    /// A cancelled response.
    pub fn cancelled() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            accepted: false,
        }
    }
}

/// Phase of the prompt-validate state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPhase {
    /// Waiting for the dialog.
    Prompting,
    /// Checking the returned pair.
    Validating,
    /// Proposal accepted; loop finished.
    Accepted,
    /// User cancelled; loop finished.
    Cancelled,
}

/// Validate a (name, category) pair against the two namespaces.
///
/// Checks run in fixed priority order: duplicate custom name, then
/// duplicate built-in name, then empty category. The same error class
/// always yields the same literal message.
pub fn check_identifier(
    name: &str,
    category: &str,
    existing_custom: &HashSet<String>,
    builtin: &HashSet<String>,
) -> Result<(), &'static str> {
    if existing_custom.contains(name) {
        Err(ERR_DUPLICATE_CUSTOM)
    } else if builtin.contains(name) {
        Err(ERR_DUPLICATE_BUILTIN)
    } else if category.is_empty() {
        Err(ERR_EMPTY_CATEGORY)
    } else {
        Ok(())
    }
}

/// The prompt-retry loop as an explicit state machine.
pub struct NamePromptSession {
    proposal: IdentifierProposal,
    phase: PromptPhase,
}

impl NamePromptSession {
    /// Start a session around an initial proposal.
    pub fn new(initial: IdentifierProposal) -> Self {
        Self {
            proposal: initial,
            phase: PromptPhase::Prompting,
        }
    }

    /// Current phase
    pub fn phase(&self) -> PromptPhase {
        self.phase
    }

    /// The proposal in its current state
    pub fn proposal(&self) -> &IdentifierProposal {
        &self.proposal
    }

    /// Drive the loop to completion.
    ///
    /// `prompt` receives the current proposal and the previous round's
    /// error text ("" on the first round) and returns the dialog outcome.
    /// The loop terminates only on cancellation or success.
    pub fn run<F>(
        mut self,
        existing_custom: &HashSet<String>,
        builtin: &HashSet<String>,
        mut prompt: F,
    ) -> IdentifierProposal
    where
        F: FnMut(&IdentifierProposal, &str) -> PromptResponse,
    {
        let mut error: &str = "";
        loop {
            self.phase = PromptPhase::Prompting;
            let response = prompt(&self.proposal, error);

            if !response.accepted {
                // Cancellation is terminal: no further validation.
                self.proposal.success = false;
                self.phase = PromptPhase::Cancelled;
                tracing::debug!(name = %self.proposal.name, "definition prompt cancelled");
                return self.proposal;
            }

            self.proposal.name = response.name;
            self.proposal.category = response.category;
            self.phase = PromptPhase::Validating;

            match check_identifier(
                &self.proposal.name,
                &self.proposal.category,
                existing_custom,
                builtin,
            ) {
                Err(e) => {
                    error = e;
                    self.proposal.error = e.to_string();
                    tracing::debug!(
                        name = %self.proposal.name,
                        error = %e,
                        "definition name rejected, re-prompting"
                    );
                }
                Ok(()) => {
                    self.proposal.error.clear();
                    self.proposal.success = true;
                    self.phase = PromptPhase::Accepted;
                    return self.proposal;
                }
            }
        }
    }
}

/// Run the identifier prompt loop over an initial proposal.
///
/// Convenience wrapper around [`NamePromptSession::run`].
pub fn propose_identifier<F>(
    initial: IdentifierProposal,
    existing_custom: &HashSet<String>,
    builtin: &HashSet<String>,
    prompt: F,
) -> IdentifierProposal
where
    F: FnMut(&IdentifierProposal, &str) -> PromptResponse,
{
    NamePromptSession::new(initial).run(existing_custom, builtin, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_pair_accepted_first_round() {
        let result = propose_identifier(
            IdentifierProposal::new("Smooth", "Geometry"),
            &names(&[]),
            &names(&[]),
            |p, error| {
                assert!(error.is_empty());
                PromptResponse::accepted(p.name.clone(), p.category.clone())
            },
        );
        assert!(result.success);
        assert!(result.error.is_empty());
    }

    #[test]
    fn test_duplicate_custom_name_blocks_until_renamed() {
        let existing = names(&["Smooth"]);
        let mut rounds = 0;
        let result = propose_identifier(
            IdentifierProposal::new("Smooth", "Geometry"),
            &existing,
            &names(&[]),
            |p, error| {
                rounds += 1;
                match rounds {
                    1 => {
                        assert!(error.is_empty());
                        PromptResponse::accepted("Smooth", p.category.clone())
                    }
                    2 => {
                        assert_eq!(error, ERR_DUPLICATE_CUSTOM);
                        // User keeps the colliding name once more.
                        PromptResponse::accepted("Smooth", p.category.clone())
                    }
                    _ => {
                        assert_eq!(error, ERR_DUPLICATE_CUSTOM);
                        PromptResponse::accepted("Smooth2", p.category.clone())
                    }
                }
            },
        );
        assert_eq!(rounds, 3);
        assert!(result.success);
        assert_eq!(result.name, "Smooth2");
    }

    #[test]
    fn test_builtin_collision_has_its_own_message() {
        let mut seen_error = String::new();
        let result = propose_identifier(
            IdentifierProposal::new("Point.ByCoordinates", "Geometry"),
            &names(&[]),
            &names(&["Point.ByCoordinates"]),
            |p, error| {
                if error.is_empty() {
                    PromptResponse::accepted(p.name.clone(), p.category.clone())
                } else {
                    seen_error = error.to_string();
                    PromptResponse::cancelled()
                }
            },
        );
        assert_eq!(seen_error, ERR_DUPLICATE_BUILTIN);
        assert!(!result.success);
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut seen_error = String::new();
        propose_identifier(
            IdentifierProposal::new("Foo", ""),
            &names(&[]),
            &names(&[]),
            |p, error| {
                if error.is_empty() {
                    PromptResponse::accepted(p.name.clone(), "")
                } else {
                    seen_error = error.to_string();
                    PromptResponse::cancelled()
                }
            },
        );
        assert_eq!(seen_error, ERR_EMPTY_CATEGORY);
    }

    #[test]
    fn test_cancellation_is_terminal_regardless_of_prior_error() {
        let existing = names(&["Smooth"]);
        let mut rounds = 0;
        let result = propose_identifier(
            IdentifierProposal::new("Smooth", "Geometry"),
            &existing,
            &names(&[]),
            |p, _| {
                rounds += 1;
                if rounds == 1 {
                    PromptResponse::accepted(p.name.clone(), p.category.clone())
                } else {
                    PromptResponse::cancelled()
                }
            },
        );
        assert_eq!(rounds, 2);
        assert!(!result.success);
    }

    #[test]
    fn test_priority_order_custom_before_builtin_before_category() {
        let both = names(&["Foo"]);
        // Name collides in both namespaces and category is empty: the
        // custom-name error wins.
        assert_eq!(
            check_identifier("Foo", "", &both, &both),
            Err(ERR_DUPLICATE_CUSTOM)
        );
        assert_eq!(
            check_identifier("Foo", "", &names(&[]), &both),
            Err(ERR_DUPLICATE_BUILTIN)
        );
        assert_eq!(
            check_identifier("Foo", "", &names(&[]), &names(&[])),
            Err(ERR_EMPTY_CATEGORY)
        );
    }
}
