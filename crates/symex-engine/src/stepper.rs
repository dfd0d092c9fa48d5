//! Per-node transition semantics (§4.4): pop one continuation node off a
//! state, produce one or two successors. The *then*/*enter* successor is
//! always emitted before the *else*/*exit* successor when a node branches.

use std::rc::Rc;

use symex_ast::{AstNode, AstNodeKind};
use z3::ast::Ast;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::state::SymState;
use crate::translate::{translate_cond, translate_expr};

/// Outcome of stepping one state by one node.
pub struct StepOutcome {
    pub successors: Vec<SymState>,
    /// `true` if one of the successors just fired the sentinel call and
    /// belongs in the scheduler's reaching pool immediately.
    pub reached_target: bool,
}

fn single(state: SymState) -> StepOutcome {
    StepOutcome {
        successors: vec![state],
        reached_target: false,
    }
}

/// Pop entries off `stack` until a `While` node is popped. When `keep_loop`
/// is `true` (Continue), the popped `While` is pushed back on top so the
/// loop guard is re-evaluated next step. When `false` (Break), it stays
/// discarded.
fn unwind_to_enclosing_while(mut stack: Vec<Rc<AstNode>>, keep_loop: bool) -> Vec<Rc<AstNode>> {
    while let Some(node) = stack.pop() {
        if matches!(node.kind, AstNodeKind::While(..)) {
            if keep_loop {
                stack.push(node);
            }
            break;
        }
    }
    stack
}

/// Advance `state` by its top node. `state.stack` must be non-empty —
/// callers are responsible for routing terminated states to the terminated
/// pool before calling `step`.
pub fn step(mut state: SymState, config: &EngineConfig) -> Result<StepOutcome, EngineError> {
    let node = state.stack.pop().expect("step called on terminated state");
    match &node.kind {
        AstNodeKind::Return(expr) => {
            let term = translate_expr(expr, &state.env)?;
            let ret = state.env.assign("fn_ret");
            state.push_condition(ret._eq(&term));
            state.push_trace(node.line, "return");
            state.stack.clear();
            Ok(single(state))
        }
        AstNodeKind::Assert(cond) => {
            let term = translate_cond(cond, &state.env)?;
            state.push_condition(term);
            state.push_trace(node.line, "assert");
            Ok(single(state))
        }
        AstNodeKind::Assign(name, expr) => {
            let rhs = translate_expr(expr, &state.env)?;
            let lhs = state.env.assign(name);
            state.push_condition(lhs._eq(&rhs));
            state.push_trace(node.line, format!("assign {name}"));
            Ok(single(state))
        }
        AstNodeKind::While(cond, body) => {
            let enter_cond = translate_cond(cond, &state.env)?;
            let exit_cond = enter_cond.not();

            let mut enter = state.clone();
            enter.push_trace(node.line, "while: enter");
            enter.stack.push(Rc::clone(&node));
            enter.stack.extend(body.iter().rev().cloned());
            enter.push_condition(enter_cond);

            let mut exit = state;
            exit.push_trace(node.line, "while: exit");
            exit.push_condition(exit_cond);

            Ok(StepOutcome {
                successors: vec![enter, exit],
                reached_target: false,
            })
        }
        AstNodeKind::If(cond, then_body, else_body) => {
            let then_cond = translate_cond(cond, &state.env)?;
            let else_cond = then_cond.not();

            let mut then_state = state.clone();
            then_state.push_trace(node.line, "if: then");
            then_state.stack.extend(then_body.iter().rev().cloned());
            then_state.push_condition(then_cond);

            let mut else_state = state;
            else_state.push_trace(node.line, "if: else");
            else_state.stack.extend(else_body.iter().rev().cloned());
            else_state.push_condition(else_cond);

            Ok(StepOutcome {
                successors: vec![then_state, else_state],
                reached_target: false,
            })
        }
        AstNodeKind::Break => {
            state.push_trace(node.line, "break");
            state.stack = unwind_to_enclosing_while(state.stack, false);
            Ok(single(state))
        }
        AstNodeKind::Continue => {
            state.push_trace(node.line, "continue");
            state.stack = unwind_to_enclosing_while(state.stack, true);
            Ok(single(state))
        }
        AstNodeKind::Pass => {
            state.push_trace(node.line, "pass");
            Ok(single(state))
        }
        AstNodeKind::Call(name) if name == &config.target_name => {
            state.push_trace(node.line, format!("call {name}: target reached"));
            Ok(StepOutcome {
                successors: vec![state],
                reached_target: true,
            })
        }
        AstNodeKind::Call(name) => {
            state.push_trace(node.line, format!("call {name}: ignored"));
            Ok(single(state))
        }
    }
}
