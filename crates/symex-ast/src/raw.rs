//! Wire layer: a `serde`-deserializable mirror of the analysis-layer AST,
//! one-to-one with the JSON an AST producer hands across the boundary.

use std::rc::Rc;

use crate::{ArithOp, AstError, AstNode, AstNodeKind, CompareOp, Expression, Function};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<RawStmt>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum RawStmt {
    Return { line: u32, value: RawExpr },
    Assert { line: u32, test: RawExpr },
    Assign { line: u32, target: String, value: RawExpr },
    While { line: u32, test: RawExpr, body: Vec<RawStmt> },
    If {
        line: u32,
        test: RawExpr,
        body: Vec<RawStmt>,
        orelse: Vec<RawStmt>,
    },
    Break { line: u32 },
    Continue { line: u32 },
    Pass { line: u32 },
    Call { line: u32, name: String },
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum RawExpr {
    Name { id: String },
    IntConst { value: i64 },
    BoolConst { value: bool },
    BinOp {
        op: String,
        left: Box<RawExpr>,
        right: Box<RawExpr>,
    },
    Not { operand: Box<RawExpr> },
    Compare {
        left: Box<RawExpr>,
        op: String,
        right: Box<RawExpr>,
    },
}

impl TryFrom<RawExpr> for Rc<Expression> {
    type Error = AstError;

    fn try_from(raw: RawExpr) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawExpr::Name { id } => Expression::name(id),
            RawExpr::IntConst { value } => Expression::int(value),
            RawExpr::BoolConst { value } => Expression::boolean(value),
            RawExpr::BinOp { op, left, right } => {
                let op = match op.as_str() {
                    "+" => ArithOp::Add,
                    "-" => ArithOp::Sub,
                    "*" => ArithOp::Mul,
                    "/" => ArithOp::Div,
                    other => {
                        return Err(AstError::MalformedInput(format!(
                            "unknown arithmetic operator {other:?}"
                        )));
                    }
                };
                Expression::bin(op, (*left).try_into()?, (*right).try_into()?)
            }
            RawExpr::Not { operand } => Expression::not((*operand).try_into()?),
            RawExpr::Compare { left, op, right } => {
                let op = match op.as_str() {
                    ">" => CompareOp::Gt,
                    "<" => CompareOp::Lt,
                    "==" => CompareOp::Eq,
                    "!=" => CompareOp::Ne,
                    other => {
                        return Err(AstError::MalformedInput(format!(
                            "unknown comparison operator {other:?}"
                        )));
                    }
                };
                Expression::compare((*left).try_into()?, op, (*right).try_into()?)
            }
        })
    }
}

fn convert_body(body: Vec<RawStmt>) -> Result<Vec<Rc<AstNode>>, AstError> {
    body.into_iter().map(Rc::<AstNode>::try_from).collect()
}

impl TryFrom<RawStmt> for Rc<AstNode> {
    type Error = AstError;

    fn try_from(raw: RawStmt) -> Result<Self, Self::Error> {
        let (line, kind) = match raw {
            RawStmt::Return { line, value } => (line, AstNodeKind::Return(value.try_into()?)),
            RawStmt::Assert { line, test } => (line, AstNodeKind::Assert(test.try_into()?)),
            RawStmt::Assign { line, target, value } => {
                (line, AstNodeKind::Assign(target, value.try_into()?))
            }
            RawStmt::While { line, test, body } => {
                (line, AstNodeKind::While(test.try_into()?, convert_body(body)?))
            }
            RawStmt::If {
                line,
                test,
                body,
                orelse,
            } => (
                line,
                AstNodeKind::If(test.try_into()?, convert_body(body)?, convert_body(orelse)?),
            ),
            RawStmt::Break { line } => (line, AstNodeKind::Break),
            RawStmt::Continue { line } => (line, AstNodeKind::Continue),
            RawStmt::Pass { line } => (line, AstNodeKind::Pass),
            RawStmt::Call { line, name } => (line, AstNodeKind::Call(name)),
        };
        Ok(AstNode::new(line, kind))
    }
}

impl TryFrom<RawFunction> for Function {
    type Error = AstError;

    fn try_from(raw: RawFunction) -> Result<Self, Self::Error> {
        if raw.name.is_empty() {
            return Err(AstError::MalformedInput("function name is empty".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for p in &raw.params {
            if !seen.insert(p.as_str()) {
                return Err(AstError::MalformedInput(format!(
                    "duplicate parameter name {p:?}"
                )));
            }
        }
        Ok(Function {
            name: raw.name,
            params: raw.params,
            body: convert_body(raw.body)?,
        })
    }
}
