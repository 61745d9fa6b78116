/// A parsed policy document.
///
/// A bare statement object has already been wrapped into a one-element list by the parser;
/// the engine never sees the unwrapped form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyDocument {
    pub statements: Vec<StatementEntry>,
}

/// One element of the `Statement` list as it arrived from the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatementEntry {
    Mapping(Statement),
    /// The element was not a mapping; `found` names the JSON type that was there instead.
    Malformed { found: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statement {
    pub effect: Option<Effect>,
    pub action: Option<PolicyValue>,
    pub resource: Option<PolicyValue>,
    pub condition: ConditionPresence,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
    Unrecognized(String),
}

/// `Action` / `Resource` values: a string, a list of strings, or something else entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyValue {
    Single(String),
    /// String elements only; non-string elements are dropped by the parser.
    List(Vec<String>),
    Other,
}

/// Whether a `Condition` block guards the statement.
///
/// `Empty` covers a key that is present but carries nothing (`null`, `{}`, `[]`, `""`,
/// `false`, `0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConditionPresence {
    #[default]
    Absent,
    Empty,
    Present,
}

impl PolicyValue {
    pub fn is_exactly(&self, literal: &str) -> bool {
        matches!(self, PolicyValue::Single(s) if s == literal)
    }

    pub fn contains(&self, literal: &str) -> bool {
        matches!(self, PolicyValue::List(items) if items.iter().any(|i| i == literal))
    }
}

impl ConditionPresence {
    pub fn is_unconditioned(&self) -> bool {
        matches!(self, ConditionPresence::Absent | ConditionPresence::Empty)
    }
}

impl Statement {
    pub fn is_allow(&self) -> bool {
        matches!(self.effect, Some(Effect::Allow))
    }

    pub fn action_is(&self, literal: &str) -> bool {
        self.action.as_ref().is_some_and(|a| a.is_exactly(literal))
    }

    pub fn resource_is(&self, literal: &str) -> bool {
        self.resource.as_ref().is_some_and(|r| r.is_exactly(literal))
    }
}

impl PolicyDocument {
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self {
            statements: statements.into_iter().map(StatementEntry::Mapping).collect(),
        }
    }
}
