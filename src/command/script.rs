//! Command scripts
//!
//! One command per line (or `;`-separated):
//!
//! ```text
//! # climb past the piston
//! right
//! repeat obstacle-right stay
//! repeat !obstacle-up up
//! ```
//!
//! The call forms `moveRight()`, `stay()` and `isObstacleRight()` are
//! accepted as aliases. `repeat` is the only loop; `while` and `for` are
//! rejected at parse time.

use crate::core::error::{GridError, Result};
use crate::core::types::{Direction, Operation};

/// Condition evaluated before each repeat iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub direction: Direction,
    pub negated: bool,
}

impl Predicate {
    pub fn obstacle(direction: Direction) -> Self {
        Self {
            direction,
            negated: false,
        }
    }

    pub fn clear(direction: Direction) -> Self {
        Self {
            direction,
            negated: true,
        }
    }

    /// Apply the negation to a raw obstacle answer
    pub fn holds(&self, is_obstacle: bool) -> bool {
        is_obstacle != self.negated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Op(Operation),
    Repeat { predicate: Predicate, action: Operation },
}

/// A parsed script, ready to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Parse a whole script. Errors carry the 1-based line number.
pub fn parse_script(source: &str) -> Result<Script> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        for statement in strip_comment(raw).split(';') {
            let statement = statement.trim();
            if statement.is_empty() {
                continue;
            }
            steps.push(parse_statement(statement).map_err(|message| GridError::Script {
                line,
                message,
            })?);
        }
    }
    tracing::debug!(steps = steps.len(), "Parsed command script");
    Ok(Script::new(steps))
}

fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

fn parse_statement(statement: &str) -> std::result::Result<ScriptStep, String> {
    let mut words = statement.split_whitespace();
    let head = words.next().unwrap_or_default();

    match head {
        "while" | "for" | "loop" => Err(format!(
            "unbounded loop `{}` is not allowed, use `repeat`",
            head
        )),
        "repeat" => {
            let predicate = words
                .next()
                .ok_or_else(|| "repeat needs a predicate".to_string())
                .and_then(parse_predicate)?;
            let action = words
                .next()
                .ok_or_else(|| "repeat needs a command".to_string())
                .and_then(parse_operation)?;
            if let Some(extra) = words.next() {
                return Err(format!("unexpected `{}` after repeat command", extra));
            }
            Ok(ScriptStep::Repeat { predicate, action })
        }
        _ => {
            if let Some(extra) = words.next() {
                return Err(format!("unexpected `{}` after `{}`", extra, head));
            }
            parse_operation(head).map(ScriptStep::Op)
        }
    }
}

fn strip_call(word: &str) -> &str {
    word.strip_suffix("()").unwrap_or(word)
}

fn parse_operation(word: &str) -> std::result::Result<Operation, String> {
    match strip_call(word) {
        "right" | "moveRight" => Ok(Operation::Right),
        "left" | "moveLeft" => Ok(Operation::Left),
        "up" | "moveUp" => Ok(Operation::Up),
        "down" | "moveDown" => Ok(Operation::Down),
        "stay" => Ok(Operation::Stay),
        other => Err(format!("unknown command `{}`", other)),
    }
}

fn parse_predicate(word: &str) -> std::result::Result<Predicate, String> {
    let (negated, body) = match word.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    let body = strip_call(body);
    let direction = body
        .strip_prefix("obstacle-")
        .and_then(Direction::from_name)
        .or_else(|| {
            body.strip_prefix("isObstacle")
                .and_then(|name| Direction::from_name(&name.to_ascii_lowercase()))
        })
        .ok_or_else(|| format!("unknown predicate `{}`", body))?;
    Ok(Predicate { direction, negated })
}
