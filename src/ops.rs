//! Textual operation scripts: parsing `verb:arg[:arg]` tokens into typed
//! operations and applying them to a tree or a list.
//!
//! This is the validation layer in front of the structures. The structures
//! themselves never fail; everything that can go wrong with user input is
//! reported here as an [`OpError`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::binary_tree::Tree;
use crate::linked_list::LinkedList;
use crate::tree::TreeOps;

pub type Value = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Tree,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(Value),
    Remove(Value),
    Search(Value),
    PushFront(Value),
    PushBack(Value),
    InsertAfter { target: Value, value: Value },
    Delete(Value),
}

/// What an operation did. Searches carry the values visited on the way,
/// ending at the match when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    Found { path: Vec<Value> },
    NotFound { path: Vec<Value> },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpError {
    #[error("empty operation")]
    Empty,

    #[error("unknown operation: {0}")]
    UnknownVerb(String),

    #[error("{verb} expects {expected} argument(s), got {got}")]
    Arity {
        verb: String,
        expected: usize,
        got: usize,
    },

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{op} cannot be applied to a {structure}")]
    NotApplicable { op: Op, structure: Structure },
}

pub type OpResult<T> = Result<T, OpError>;

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Tree => f.write_str("tree"),
            Structure::List => f.write_str("list"),
        }
    }
}

impl Op {
    pub fn verb(&self) -> &'static str {
        match self {
            Op::Insert(_) => "insert",
            Op::Remove(_) => "remove",
            Op::Search(_) => "search",
            Op::PushFront(_) => "push-front",
            Op::PushBack(_) => "push-back",
            Op::InsertAfter { .. } => "after",
            Op::Delete(_) => "delete",
        }
    }

    pub fn applies_to(&self, structure: Structure) -> bool {
        match self {
            Op::Search(_) => true,
            Op::Insert(_) | Op::Remove(_) => structure == Structure::Tree,
            Op::PushFront(_) | Op::PushBack(_) | Op::InsertAfter { .. } | Op::Delete(_) => {
                structure == Structure::List
            }
        }
    }

    fn check(self, structure: Structure) -> OpResult<Self> {
        if self.applies_to(structure) {
            Ok(self)
        } else {
            Err(OpError::not_applicable(self, structure))
        }
    }
}

impl OpError {
    fn not_applicable(op: Op, structure: Structure) -> Self {
        OpError::NotApplicable { op, structure }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Insert(v)
            | Op::Remove(v)
            | Op::Search(v)
            | Op::PushFront(v)
            | Op::PushBack(v)
            | Op::Delete(v) => write!(f, "{}:{}", self.verb(), v),
            Op::InsertAfter { target, value } => write!(f, "{}:{}:{}", self.verb(), target, value),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (text, path) = match self {
            Outcome::Changed => return f.write_str("changed"),
            Outcome::Unchanged => return f.write_str("unchanged"),
            Outcome::Found { path } => ("found", path),
            Outcome::NotFound { path } => ("not found", path),
        };
        f.write_str(text)?;
        if !path.is_empty() {
            let steps: Vec<String> = path.iter().map(|value| value.to_string()).collect();
            write!(f, " via {}", steps.join(" -> "))?;
        }
        Ok(())
    }
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

fn parse_value(raw: &str) -> OpResult<Value> {
    raw.trim()
        .parse()
        .map_err(|_| OpError::NotANumber(raw.to_string()))
}

impl FromStr for Op {
    type Err = OpError;

    fn from_str(token: &str) -> OpResult<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(OpError::Empty);
        }

        let mut parts = token.split(':');
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let expected = match verb.as_str() {
            "after" => 2,
            "insert" | "remove" | "search" | "push-front" | "push-back" | "delete" => 1,
            _ => return Err(OpError::UnknownVerb(verb)),
        };
        if args.len() != expected {
            return Err(OpError::Arity {
                verb,
                expected,
                got: args.len(),
            });
        }

        let first = parse_value(args[0])?;
        let op = match verb.as_str() {
            "insert" => Op::Insert(first),
            "remove" => Op::Remove(first),
            "search" => Op::Search(first),
            "push-front" => Op::PushFront(first),
            "push-back" => Op::PushBack(first),
            "delete" => Op::Delete(first),
            _ => Op::InsertAfter {
                target: first,
                value: parse_value(args[1])?,
            },
        };
        Ok(op)
    }
}

/// Parses every token and checks that it makes sense for `structure`.
/// Stops at the first invalid token.
pub fn parse_script<I, S>(tokens: I, structure: Structure) -> OpResult<Vec<Op>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| token.as_ref().parse::<Op>()?.check(structure))
        .collect()
}

pub fn apply_to_tree(tree: &mut Tree<Value>, ops: &[Op]) -> OpResult<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(ops.len());
    for &op in ops {
        let outcome = match op {
            Op::Insert(value) => Outcome::from(tree.insert(value)),
            Op::Remove(value) => Outcome::from(tree.remove(&value)),
            Op::Search(value) => found(tree.search_path(&value)),
            other => return Err(OpError::not_applicable(other, Structure::Tree)),
        };
        debug!(%op, %outcome, "applied to tree");
        outcomes.push(outcome);
    }
    info!(ops = ops.len(), len = tree.len(), "tree script done");
    Ok(outcomes)
}

pub fn apply_to_list(list: &mut LinkedList<Value>, ops: &[Op]) -> OpResult<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(ops.len());
    for &op in ops {
        let outcome = match op {
            Op::PushFront(value) => {
                list.insert_at_beginning(value);
                Outcome::Changed
            }
            Op::PushBack(value) => {
                list.insert_at_end(value);
                Outcome::Changed
            }
            Op::InsertAfter { target, value } => Outcome::from(list.insert_after(&target, value)),
            Op::Delete(value) => Outcome::from(list.delete(&value)),
            Op::Search(value) => found(list_path(list, value)),
            other => return Err(OpError::not_applicable(other, Structure::List)),
        };
        debug!(%op, %outcome, "applied to list");
        outcomes.push(outcome);
    }
    info!(ops = ops.len(), len = list.len(), "list script done");
    Ok(outcomes)
}

fn found((path, hit): (Vec<Value>, bool)) -> Outcome {
    if hit {
        Outcome::Found { path }
    } else {
        Outcome::NotFound { path }
    }
}

// Values walked from the head up to and including the first match.
fn list_path(list: &LinkedList<Value>, value: Value) -> (Vec<Value>, bool) {
    let mut path = Vec::new();
    for &item in list {
        path.push(item);
        if item == value {
            return (path, true);
        }
    }
    (path, false)
}
