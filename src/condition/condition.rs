//! Boolean condition trees over result rows
//!
//! A [`Condition`] is an immutable tree. Composing two conditions builds a
//! new node that shares both operands through `Arc`; nothing is copied and
//! nothing is mutated, so trees can be handed to any number of readers.

use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::result::Row;

use super::errors::ConditionResult;

/// A leaf test supplied by the caller
pub trait RowPredicate: fmt::Debug + Send + Sync {
    /// Evaluates the predicate against one row
    fn check(&self, row: &Row<'_>) -> ConditionResult<bool>;

    /// Short label used when rendering a tree
    fn describe(&self) -> String {
        "LEAF".to_string()
    }
}

/// Closure-backed leaf, see [`Condition::leaf_fn`]
struct FnPredicate<F> {
    name: String,
    f: F,
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate").field("name", &self.name).finish()
    }
}

impl<F> RowPredicate for FnPredicate<F>
where
    F: Fn(&Row<'_>) -> ConditionResult<bool> + Send + Sync,
{
    fn check(&self, row: &Row<'_>) -> ConditionResult<bool> {
        (self.f)(row)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Predicate over a row, composable with AND / OR / NOT
#[derive(Debug, Clone, Default)]
pub enum Condition {
    /// Matches every row
    #[default]
    Always,
    /// Caller-supplied predicate
    Leaf(Arc<dyn RowPredicate>),
    /// All sub-conditions hold; an empty list holds
    And(Arc<[Condition]>),
    /// At least one sub-condition holds; an empty or absent list never holds
    Or(Option<Arc<[Condition]>>),
    /// The wrapped condition does not hold
    Not(Arc<Condition>),
}

impl Condition {
    pub fn leaf(predicate: impl RowPredicate + 'static) -> Self {
        Condition::Leaf(Arc::new(predicate))
    }

    /// Leaf from a closure, labelled `name` when displayed
    pub fn leaf_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Row<'_>) -> ConditionResult<bool> + Send + Sync + 'static,
    {
        Condition::Leaf(Arc::new(FnPredicate {
            name: name.into(),
            f,
        }))
    }

    /// Conjunction of `conditions`
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(conditions.into_iter().collect())
    }

    /// Disjunction of `conditions`
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(Some(conditions.into_iter().collect()))
    }

    /// Evaluates the tree against `row`.
    ///
    /// Sub-conditions run left to right; AND stops at the first false and
    /// OR at the first true. Leaf errors are returned as-is.
    pub fn check(&self, row: &Row<'_>) -> ConditionResult<bool> {
        match self {
            Condition::Always => Ok(true),
            Condition::Leaf(predicate) => predicate.check(row),
            Condition::And(conditions) => {
                for condition in conditions.iter() {
                    if !condition.check(row)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Or(None) => Ok(false),
            Condition::Or(Some(conditions)) => {
                for condition in conditions.iter() {
                    if condition.check(row)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::Not(condition) => Ok(!condition.check(row)?),
        }
    }

    /// New AND node over `[self, other]`
    pub fn and(&self, other: Condition) -> Condition {
        Condition::And(Arc::from(vec![self.clone(), other]))
    }

    /// New OR node over `[self, other]`
    pub fn or(&self, other: Condition) -> Condition {
        Condition::Or(Some(Arc::from(vec![self.clone(), other])))
    }

    /// New NOT node wrapping `self`
    pub fn negate(&self) -> Condition {
        Condition::Not(Arc::new(self.clone()))
    }

    /// Immediate sub-conditions, in order
    pub fn children(&self) -> &[Condition] {
        match self {
            Condition::And(conditions) | Condition::Or(Some(conditions)) => &conditions[..],
            Condition::Not(condition) => std::slice::from_ref(condition.as_ref()),
            Condition::Always | Condition::Leaf(_) | Condition::Or(None) => &[],
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Condition::depth)
            .max()
            .unwrap_or(0)
    }

    /// True when some root-to-leaf path has more than `max` nodes
    ///
    /// Walks with an explicit stack and stops at the first node past
    /// `max`, so arbitrarily deep trees are answered without recursion.
    pub fn exceeds_depth(&self, max: usize) -> bool {
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            if level > max {
                return true;
            }
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        false
    }

    /// Number of caller-supplied leaves, counting shared subtrees once per use
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::Leaf(_) => 1,
            _ => self.children().iter().map(Condition::leaf_count).sum(),
        }
    }
}

impl ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        self.and(rhs)
    }
}

impl ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        self.or(rhs)
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.negate()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, items: &[Condition], op: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                write!(f, "{}", item)?;
            }
            f.write_str(")")
        }

        match self {
            Condition::Always => f.write_str("TRUE"),
            Condition::Leaf(predicate) => f.write_str(&predicate.describe()),
            Condition::And(conditions) if conditions.is_empty() => f.write_str("AND[]"),
            Condition::And(conditions) => join(f, conditions, "AND"),
            Condition::Or(None) => f.write_str("OR[null]"),
            Condition::Or(Some(conditions)) if conditions.is_empty() => f.write_str("OR[]"),
            Condition::Or(Some(conditions)) => join(f, conditions, "OR"),
            Condition::Not(condition) => write!(f, "NOT({})", condition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionError;
    use crate::result::{MetaInfo, QueryResult, ResultSet, ServerResponse};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn one_row() -> QueryResult {
        QueryResult::from_server_response(
            MetaInfo::new("FI"),
            ServerResponse::from_json(json!([[1]])).unwrap(),
        )
    }

    fn constant(value: bool) -> Condition {
        Condition::leaf_fn(if value { "T" } else { "F" }, move |_| Ok(value))
    }

    fn counting(value: bool, calls: Arc<AtomicUsize>) -> Condition {
        Condition::leaf_fn("counted", move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(value)
        })
    }

    #[test]
    fn test_always_matches() {
        let result = one_row();
        let row = result.row_at(0).unwrap();
        assert!(Condition::Always.check(&row).unwrap());
        assert!(Condition::default().check(&row).unwrap());
    }

    #[test]
    fn test_empty_and_or_identities() {
        let result = one_row();
        let row = result.row_at(0).unwrap();

        assert!(Condition::all([]).check(&row).unwrap());
        assert!(!Condition::any([]).check(&row).unwrap());
        assert!(!Condition::Or(None).check(&row).unwrap());
    }

    #[test]
    fn test_and_short_circuits_on_false() {
        let result = one_row();
        let row = result.row_at(0).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let cond = Condition::all([constant(false), counting(true, calls.clone())]);
        assert!(!cond.check(&row).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_short_circuits_on_true() {
        let result = one_row();
        let row = result.row_at(0).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let cond = Condition::any([constant(true), counting(false, calls.clone())]);
        assert!(cond.check(&row).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_leaf_error_propagates_through_nodes() {
        let result = one_row();
        let row = result.row_at(0).unwrap();
        let failing = Condition::leaf_fn("boom", |_| Err(ConditionError::predicate("boom")));

        let tree = constant(true).and(failing.negate()).or(constant(false));
        let err = tree.check(&row).unwrap_err();
        assert!(matches!(err, ConditionError::Predicate(ref m) if m == "boom"));
    }

    #[test]
    fn test_composition_does_not_mutate_operands() {
        let result = one_row();
        let row = result.row_at(0).unwrap();
        let c = constant(true);
        let d = constant(false);

        let combined = c.and(d.clone());
        let _ = c.or(d.clone());
        let _ = c.negate();

        assert!(!combined.check(&row).unwrap());
        assert!(c.check(&row).unwrap());
        assert!(!d.check(&row).unwrap());
        assert!(matches!(c, Condition::Leaf(_)));
    }

    #[test]
    fn test_operator_sugar() {
        let result = one_row();
        let row = result.row_at(0).unwrap();

        assert!((constant(true) & !constant(false)).check(&row).unwrap());
        assert!((constant(false) | constant(true)).check(&row).unwrap());
    }

    #[test]
    fn test_subtrees_are_shared() {
        let leaf = constant(true);
        let tree = leaf.and(constant(false));
        if let (Condition::Leaf(a), Condition::And(children)) = (&leaf, &tree) {
            match &children[0] {
                Condition::Leaf(b) => assert!(Arc::ptr_eq(a, b)),
                other => panic!("unexpected node {:?}", other),
            }
        } else {
            panic!("unexpected shapes");
        }
    }

    #[test]
    fn test_depth_and_leaf_count() {
        assert_eq!(Condition::Always.depth(), 1);
        assert_eq!(Condition::all([]).depth(), 1);

        let tree = constant(true).and(constant(false).negate());
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_exceeds_depth() {
        let tree = constant(true).and(constant(false).negate());
        assert!(!tree.exceeds_depth(3));
        assert!(tree.exceeds_depth(2));
        assert!(Condition::Always.exceeds_depth(0));
        assert!(!Condition::any([]).exceeds_depth(1));
    }

    #[test]
    fn test_display() {
        let tree = constant(true).and(constant(false).negate());
        assert_eq!(tree.to_string(), "(T AND NOT(F))");
        assert_eq!(Condition::Or(None).to_string(), "OR[null]");
        assert_eq!(Condition::any([]).to_string(), "OR[]");
        assert_eq!(Condition::all([]).to_string(), "AND[]");
    }
}
