//! Concrete re-execution of the original AST over integer inputs, used to
//! validate an SMT-derived witness end to end (§8's "Condition soundness"
//! property). Shares no state with the symbolic scheduler.

use std::collections::HashMap;

use symex_ast::{ArithOp, AstNodeKind, CompareOp, Expression, Function, UnaryOp};

use crate::error::EngineError;

/// Outcome of concretely interpreting a function on fixed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteRun {
    pub hit_target: bool,
    pub returned: Option<i64>,
}

enum Flow {
    Normal,
    Returned(i64),
    Broke,
    Continued,
}

struct Interpreter<'a> {
    vars: HashMap<String, i64>,
    target_name: &'a str,
    hit_target: bool,
}

impl<'a> Interpreter<'a> {
    fn eval_expr(&self, expr: &Expression) -> Result<i64, EngineError> {
        match expr {
            Expression::Name(n) => self.vars.get(n).copied().ok_or_else(|| {
                EngineError::UnsupportedConstruct(format!("read of unassigned variable {n:?}"))
            }),
            Expression::IntConst(v) => Ok(*v),
            Expression::BinOp(op, l, r) => {
                let l = self.eval_expr(l)?;
                let r = self.eval_expr(r)?;
                Ok(match op {
                    ArithOp::Add => l + r,
                    ArithOp::Sub => l - r,
                    ArithOp::Mul => l * r,
                    ArithOp::Div => l.div_euclid(r),
                })
            }
            other => Err(EngineError::UnsupportedConstruct(format!(
                "{other:?} is not an arithmetic expression"
            ))),
        }
    }

    fn eval_cond(&self, expr: &Expression) -> Result<bool, EngineError> {
        match expr {
            Expression::BoolConst(b) => Ok(*b),
            Expression::UnaryOp(UnaryOp::Not, x) => Ok(!self.eval_cond(x)?),
            Expression::Compare(l, op, r) => {
                let l = self.eval_expr(l)?;
                let r = self.eval_expr(r)?;
                Ok(match op {
                    CompareOp::Gt => l > r,
                    CompareOp::Lt => l < r,
                    CompareOp::Eq => l == r,
                    CompareOp::Ne => l != r,
                })
            }
            other => Err(EngineError::UnsupportedConstruct(format!(
                "{other:?} is not a condition expression"
            ))),
        }
    }

    fn run_body(&mut self, body: &[std::rc::Rc<symex_ast::AstNode>]) -> Result<Flow, EngineError> {
        for node in body {
            match &node.kind {
                AstNodeKind::Return(e) => return Ok(Flow::Returned(self.eval_expr(e)?)),
                AstNodeKind::Assert(c) => {
                    if !self.eval_cond(c)? {
                        return Err(EngineError::UnsupportedConstruct(format!(
                            "assertion failed at line {}",
                            node.line
                        )));
                    }
                }
                AstNodeKind::Assign(name, e) => {
                    let v = self.eval_expr(e)?;
                    self.vars.insert(name.clone(), v);
                }
                AstNodeKind::While(cond, inner_body) => {
                    while self.eval_cond(cond)? {
                        match self.run_body(inner_body)? {
                            Flow::Returned(v) => return Ok(Flow::Returned(v)),
                            Flow::Broke => break,
                            Flow::Continued | Flow::Normal => continue,
                        }
                    }
                }
                AstNodeKind::If(cond, then_body, else_body) => {
                    let branch = if self.eval_cond(cond)? { then_body } else { else_body };
                    match self.run_body(branch)? {
                        Flow::Normal => {}
                        other => return Ok(other),
                    }
                }
                AstNodeKind::Break => return Ok(Flow::Broke),
                AstNodeKind::Continue => return Ok(Flow::Continued),
                AstNodeKind::Pass => {}
                AstNodeKind::Call(name) if name == self.target_name => {
                    self.hit_target = true;
                }
                AstNodeKind::Call(_) => {}
            }
        }
        Ok(Flow::Normal)
    }
}

/// Interprets `function` over `inputs` (matched positionally to its formal
/// parameters), reporting whether `target_name` was called and what, if
/// anything, was returned.
pub fn run_concrete(
    function: &Function,
    inputs: &[i64],
    target_name: &str,
) -> Result<ConcreteRun, EngineError> {
    if inputs.len() != function.params.len() {
        return Err(EngineError::UnsupportedConstruct(format!(
            "expected {} inputs, got {}",
            function.params.len(),
            inputs.len()
        )));
    }
    let vars = function
        .params
        .iter()
        .cloned()
        .zip(inputs.iter().copied())
        .collect();
    let mut interp = Interpreter {
        vars,
        target_name,
        hit_target: false,
    };
    let flow = interp.run_body(&function.body)?;
    let returned = match flow {
        Flow::Returned(v) => Some(v),
        _ => None,
    };
    Ok(ConcreteRun {
        hit_target: interp.hit_target,
        returned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symex_ast::builder;

    #[test]
    fn runs_simple_return() {
        let f = builder::function("f", &["a"], vec![builder::ret(1, builder::add(builder::name("a"), builder::int(1)))]);
        let run = run_concrete(&f, &[4], "target").unwrap();
        assert_eq!(run.returned, Some(5));
        assert!(!run.hit_target);
    }

    #[test]
    fn detects_target_hit_inside_loop() {
        let inner_if = builder::if_(
            3,
            builder::gt(builder::name("a"), builder::int(10)),
            vec![builder::call(4, "target"), builder::ret(5, builder::name("a"))],
            vec![],
        );
        let while_loop = builder::while_(
            2,
            builder::boolean(true),
            vec![
                builder::assign(2, "a", builder::add(builder::name("a"), builder::int(1))),
                inner_if,
            ],
        );
        let f = builder::function("f", &["a"], vec![while_loop]);
        let run = run_concrete(&f, &[4], "target").unwrap();
        assert!(run.hit_target);
        assert_eq!(run.returned, Some(11));
    }

    #[test]
    fn assert_failure_is_an_error() {
        let f = builder::function(
            "f",
            &["a"],
            vec![
                builder::assert_(1, builder::gt(builder::name("a"), builder::int(10))),
                builder::ret(2, builder::name("a")),
            ],
        );
        assert!(run_concrete(&f, &[1], "target").is_err());
    }
}
