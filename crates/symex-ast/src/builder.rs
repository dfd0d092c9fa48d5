//! Fluent AST construction, used by demos and tests that want to build a
//! [`Function`] directly without going through the JSON wire layer.

use std::rc::Rc;

use crate::{ArithOp, AstNode, AstNodeKind, CompareOp, Expression, Function};

pub fn function(name: &str, params: &[&str], body: Vec<Rc<AstNode>>) -> Function {
    Function {
        name: name.to_string(),
        params: params.iter().map(|s| s.to_string()).collect(),
        body,
    }
}

pub fn ret(line: u32, value: Rc<Expression>) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Return(value))
}

pub fn assert_(line: u32, test: Rc<Expression>) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Assert(test))
}

pub fn assign(line: u32, target: &str, value: Rc<Expression>) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Assign(target.to_string(), value))
}

pub fn while_(line: u32, test: Rc<Expression>, body: Vec<Rc<AstNode>>) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::While(test, body))
}

pub fn if_(
    line: u32,
    test: Rc<Expression>,
    body: Vec<Rc<AstNode>>,
    orelse: Vec<Rc<AstNode>>,
) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::If(test, body, orelse))
}

pub fn break_(line: u32) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Break)
}

pub fn continue_(line: u32) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Continue)
}

pub fn pass(line: u32) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Pass)
}

pub fn call(line: u32, name: &str) -> Rc<AstNode> {
    AstNode::new(line, AstNodeKind::Call(name.to_string()))
}

pub fn name(n: &str) -> Rc<Expression> {
    Expression::name(n)
}

pub fn int(v: i64) -> Rc<Expression> {
    Expression::int(v)
}

pub fn boolean(v: bool) -> Rc<Expression> {
    Expression::boolean(v)
}

pub fn add(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::bin(ArithOp::Add, l, r)
}

pub fn sub(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::bin(ArithOp::Sub, l, r)
}

pub fn mul(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::bin(ArithOp::Mul, l, r)
}

pub fn not(x: Rc<Expression>) -> Rc<Expression> {
    Expression::not(x)
}

pub fn gt(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::compare(l, CompareOp::Gt, r)
}

pub fn lt(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::compare(l, CompareOp::Lt, r)
}

pub fn eq(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::compare(l, CompareOp::Eq, r)
}

pub fn ne(l: Rc<Expression>, r: Rc<Expression>) -> Rc<Expression> {
    Expression::compare(l, CompareOp::Ne, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_simple_function() {
        let f = function(
            "f",
            &["a"],
            vec![ret(1, add(name("a"), int(1)))],
        );
        assert_eq!(f.params, vec!["a".to_string()]);
        assert_eq!(f.body.len(), 1);
    }
}
