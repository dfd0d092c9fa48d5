//! Pure, environment-parameterized translation from AST expressions to SMT
//! terms. Reads `env` but never mutates it (assignment happens in the
//! stepper, not here).

use symex_ast::{ArithOp, CompareOp, Expression, UnaryOp};
use symex_smt::VersionedEnv;
use z3::ast::{Ast, Bool, Int};

use crate::error::EngineError;

/// Integer division/modulo follow the SMT backend's native semantics (floor
/// division, non-negative remainder) rather than emulating truncation; no
/// construct in the supported language distinguishes the two conventions.
pub fn translate_expr(expr: &Expression, env: &VersionedEnv) -> Result<Int, EngineError> {
    match expr {
        Expression::Name(n) => Ok(env.current(n)?),
        Expression::IntConst(v) => Ok(Int::from_i64(*v)),
        Expression::BinOp(op, l, r) => {
            let l = translate_expr(l, env)?;
            let r = translate_expr(r, env)?;
            Ok(match op {
                ArithOp::Add => l + r,
                ArithOp::Sub => l - r,
                ArithOp::Mul => l * r,
                ArithOp::Div => l / r,
            })
        }
        Expression::BoolConst(_) | Expression::UnaryOp(..) | Expression::Compare(..) => {
            Err(EngineError::UnsupportedConstruct(format!(
                "{expr:?} is a boolean expression, not arithmetic"
            )))
        }
    }
}

pub fn translate_cond(expr: &Expression, env: &VersionedEnv) -> Result<Bool, EngineError> {
    match expr {
        Expression::BoolConst(b) => Ok(Bool::from_bool(*b)),
        Expression::UnaryOp(UnaryOp::Not, x) => Ok(translate_cond(x, env)?.not()),
        Expression::Compare(l, op, r) => {
            let l = translate_expr(l, env)?;
            let r = translate_expr(r, env)?;
            Ok(match op {
                CompareOp::Gt => l.gt(&r),
                CompareOp::Lt => l.lt(&r),
                CompareOp::Eq => l._eq(&r),
                CompareOp::Ne => l._eq(&r).not(),
            })
        }
        Expression::Name(..) | Expression::IntConst(..) | Expression::BinOp(..) => {
            Err(EngineError::UnsupportedConstruct(format!(
                "{expr:?} is an arithmetic expression, not a condition"
            )))
        }
    }
}
