//! The `Operation` metadata trait and the synchronous `Execute` trait

/// Static metadata describing a command.
///
/// Implemented through the [`operation!`](crate::operation) macro so the verb,
/// noun and description live next to the struct definition.
pub trait Operation {
    /// The action, e.g. `"move"`
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. `"card"`
    fn noun(&self) -> &'static str;

    /// Human readable summary
    fn description(&self) -> &'static str;

    /// Canonical op string used in log entries (e.g. `"move card"`)
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A command that runs to completion against a mutable state draft.
///
/// Implementations must either apply all of their changes or return an error;
/// callers rely on this to discard the draft on failure.
pub trait Execute<S, E>: Operation {
    /// Value handed back to the caller on success
    type Output;

    /// Apply the command to `state`
    fn execute(&self, state: &mut S) -> Result<Self::Output, E>;

    /// Whether a successful run changes state and belongs in the audit trail
    fn is_mutation(&self) -> bool {
        true
    }
}

/// Implement [`Operation`] for a command struct.
///
/// ```
/// pub struct DeleteCard;
/// taskboard_operations::operation!(
///     DeleteCard,
///     verb = "delete",
///     noun = "card",
///     description = "Delete a card"
/// );
///
/// use taskboard_operations::Operation;
/// assert_eq!(DeleteCard.op_string(), "delete card");
/// ```
#[macro_export]
macro_rules! operation {
    ($name:ident, verb = $verb:literal, noun = $noun:literal, description = $description:literal $(,)?) => {
        impl $crate::Operation for $name {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}
