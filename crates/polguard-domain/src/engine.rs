use crate::checks;
use crate::model::{PolicyDocument, StatementEntry};
use polguard_types::Finding;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("statement {index} is not an object (found {found})")]
    MalformedStatement { index: u32, found: &'static str },
}

/// Evaluate every statement of `doc` in document order.
///
/// Findings are not sorted or deduplicated: statement order first, then check order.
pub fn evaluate(doc: &PolicyDocument) -> Result<Vec<Finding>, EvalError> {
    let mut findings: Vec<Finding> = Vec::new();

    for (index, entry) in doc.statements.iter().enumerate() {
        let index = index as u32;
        match entry {
            StatementEntry::Mapping(stmt) => checks::run_all(index, stmt, &mut findings),
            StatementEntry::Malformed { found } => {
                return Err(EvalError::MalformedStatement {
                    index,
                    found: *found,
                });
            }
        }
    }

    Ok(findings)
}
