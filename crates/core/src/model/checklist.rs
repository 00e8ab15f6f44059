use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error("a token rule needs at least one alternative")]
    EmptyRule,

    #[error("token alternatives cannot be empty strings")]
    EmptyToken,
}

//
// ─── TOKEN RULE ────────────────────────────────────────────────────────────────
//

/// One required token in an exercise checklist.
///
/// A rule is satisfied when any of its alternative spellings occurs verbatim
/// in the submitted text (e.g. `"% 3"` or `"%3"` both count as a modulo-3
/// check). Matching is plain case-sensitive substring search; this is a
/// deliberate stand-in for executing learner code, not an approximation of a
/// parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRule {
    alternatives: Vec<String>,
}

impl TokenRule {
    /// Creates a rule requiring a single literal token.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::EmptyToken` if the token is empty.
    pub fn literal(token: impl Into<String>) -> Result<Self, ChecklistError> {
        Self::any_of([token.into()])
    }

    /// Creates a rule satisfied by any of the given alternatives.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::EmptyRule` if no alternatives are given and
    /// `ChecklistError::EmptyToken` if any alternative is an empty string.
    pub fn any_of<I, S>(alternatives: I) -> Result<Self, ChecklistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let alternatives: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        if alternatives.is_empty() {
            return Err(ChecklistError::EmptyRule);
        }
        if alternatives.iter().any(String::is_empty) {
            return Err(ChecklistError::EmptyToken);
        }
        Ok(Self { alternatives })
    }

    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns true if any alternative occurs in `text`.
    #[must_use]
    pub fn is_satisfied_by(&self, text: &str) -> bool {
        self.alternatives.iter().any(|token| text.contains(token))
    }
}

//
// ─── CHECKLIST ─────────────────────────────────────────────────────────────────
//

/// The full set of required tokens for one interactive exercise.
///
/// Satisfied only when every rule is satisfied. An empty checklist is valid
/// and accepts any submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    rules: Vec<TokenRule>,
}

impl Checklist {
    #[must_use]
    pub fn new(rules: Vec<TokenRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Returns true if every rule matches the submitted text.
    #[must_use]
    pub fn is_satisfied_by(&self, text: &str) -> bool {
        self.rules.iter().all(|rule| rule.is_satisfied_by(text))
    }

    /// Rules the submitted text does not yet satisfy, in checklist order.
    #[must_use]
    pub fn unsatisfied_rules<'a>(&'a self, text: &str) -> Vec<&'a TokenRule> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(text))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn fizzbuzz_checklist() -> Checklist {
        Checklist::new(vec![
            TokenRule::literal("for").unwrap(),
            TokenRule::literal("range").unwrap(),
            TokenRule::any_of(["% 3", "%3"]).unwrap(),
            TokenRule::any_of(["% 5", "%5"]).unwrap(),
            TokenRule::literal("FizzBuzz").unwrap(),
            TokenRule::literal("Fizz").unwrap(),
            TokenRule::literal("Buzz").unwrap(),
        ])
    }

    #[test]
    fn rule_rejects_empty_alternatives() {
        let err = TokenRule::any_of(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ChecklistError::EmptyRule);

        let err = TokenRule::literal("").unwrap_err();
        assert_eq!(err, ChecklistError::EmptyToken);
    }

    #[test]
    fn rule_accepts_any_alternative() {
        let rule = TokenRule::any_of(["% 3", "%3"]).unwrap();
        assert!(rule.is_satisfied_by("if i % 3 == 0:"));
        assert!(rule.is_satisfied_by("if i%3 == 0:"));
        assert!(!rule.is_satisfied_by("if i / 3 == 0:"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let rule = TokenRule::literal("Fizz").unwrap();
        assert!(!rule.is_satisfied_by("print(\"fizz\")"));
        assert!(rule.is_satisfied_by("print(\"Fizz\")"));
    }

    #[test]
    fn checklist_requires_all_rules() {
        let checklist = fizzbuzz_checklist();
        let solution = "for i in range(1, 16):\n    if i % 3 == 0 and i % 5 == 0:\n        print(\"FizzBuzz\")";
        assert!(checklist.is_satisfied_by(solution));

        let missing_range = "for i in [1, 2, 3]:\n    print(\"FizzBuzz\" if i % 3 == 0 and i % 5 == 0 else i)";
        assert!(!checklist.is_satisfied_by(missing_range));
        assert_eq!(checklist.unsatisfied_rules(missing_range).len(), 1);
    }

    #[test]
    fn empty_checklist_accepts_anything() {
        let checklist = Checklist::default();
        assert!(checklist.is_satisfied_by(""));
        assert!(checklist.is_satisfied_by("anything at all"));
    }
}
