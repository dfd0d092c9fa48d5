//! Built-in demo functions, ported from the original project's `exampleN.py`
//! driver scripts, used by the `demo` subcommand and by integration tests.

use symex_ast::builder::*;
use symex_ast::Function;

/// `example1.py`: reachability through a loop guarded by the branch that
/// enters it.
pub fn non_reachable_loop() -> Function {
    let inner_if = if_(
        4,
        gt(name("a"), int(10)),
        vec![call(5, "target"), ret(6, name("a"))],
        vec![],
    );
    let while_loop = while_(
        2,
        boolean(true),
        vec![assign(3, "a", add(name("a"), int(1))), inner_if],
    );
    function(
        "non_reachable",
        &["a"],
        vec![if_(1, lt(name("a"), int(5)), vec![while_loop], vec![ret(8, name("a"))])],
    )
}

/// `example2.py`: a loop bounded by `b > a`, with an ignored `trace()` call
/// and a dead `continue; return a` tail.
pub fn non_reachable_bounded_loop() -> Function {
    let loop_body = vec![
        assign(3, "a", add(name("a"), int(1))),
        call(4, "trace"),
        if_(
            5,
            gt(name("a"), int(15)),
            vec![call(6, "target"), ret(7, name("a"))],
            vec![continue_(9), ret(10, name("a"))],
        ),
    ];
    function(
        "non_reachable",
        &["a", "b"],
        vec![
            assert_(1, lt(name("a"), int(5))),
            while_(2, gt(name("b"), name("a")), loop_body),
        ],
    )
}

/// `example3.py`: six sequential, independent branches, all converging on
/// the same target call.
pub fn many_branches() -> Function {
    let names = ["a", "b", "c", "d", "e", "f"];
    fn nest(names: &[&str], line: u32, tail: Vec<std::rc::Rc<symex_ast::AstNode>>) -> Vec<std::rc::Rc<symex_ast::AstNode>> {
        match names.split_first() {
            None => tail,
            Some((head, rest)) => {
                let inner = nest(rest, line + 1, tail);
                vec![if_(line, eq(name(head), int(1)), inner.clone(), inner)]
            }
        }
    }
    let body = nest(&names, 1, vec![call(7, "target")]);
    function("many_branches", &names, body)
}

/// `example4.py`: nested loops accumulating a counter past an assertion.
pub fn nested_loops() -> Function {
    let inner_while = while_(
        7,
        ne(name("inner"), int(0)),
        vec![
            assign(8, "c", add(name("c"), int(1))),
            assign(9, "inner", sub(name("inner"), int(1))),
        ],
    );
    let outer_body = vec![assign(6, "inner", name("b")), inner_while, assign(10, "a", sub(name("a"), int(1)))];
    function(
        "nested_loops",
        &["a", "b"],
        vec![
            assign(1, "c", int(0)),
            assert_(2, gt(name("a"), int(3))),
            assert_(3, gt(name("b"), int(0))),
            while_(5, ne(name("a"), int(0)), outer_body),
            assert_(11, gt(name("c"), int(12))),
            call(12, "target"),
            ret(13, name("c")),
        ],
    )
}

/// A dead branch under `if False`, to exercise unreachable-pool classification.
pub fn dead_branch() -> Function {
    function(
        "dead_branch",
        &["a"],
        vec![
            assign(0, "i", int(0)),
            if_(
                1,
                lt(name("a"), int(10)),
                vec![while_(2, boolean(true), vec![assign(3, "a", add(name("a"), int(1)))])],
                vec![call(4, "target")],
            ),
            if_(5, boolean(false), vec![call(6, "target")], vec![]),
            ret(7, name("a")),
        ],
    )
}

/// A loop exited by `break` before the target call, to exercise
/// break-discards-`While` stack unwinding.
pub fn break_before_target() -> Function {
    function(
        "break_before_target",
        &["x"],
        vec![
            assign(1, "x", int(0)),
            while_(
                2,
                boolean(true),
                vec![
                    assign(3, "x", add(name("x"), int(1))),
                    if_(4, gt(name("x"), int(19)), vec![break_(5)], vec![]),
                ],
            ),
            call(6, "target"),
        ],
    )
}

pub const DEMO_NAMES: &[&str] = &[
    "non-reachable-loop",
    "bounded-loop",
    "many-branches",
    "nested-loops",
    "dead-branch",
    "break-before-target",
];

pub fn by_name(name: &str) -> Option<Function> {
    match name {
        "non-reachable-loop" => Some(non_reachable_loop()),
        "bounded-loop" => Some(non_reachable_bounded_loop()),
        "many-branches" => Some(many_branches()),
        "nested-loops" => Some(nested_loops()),
        "dead-branch" => Some(dead_branch()),
        "break-before-target" => Some(break_before_target()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_demo_names_resolve() {
        for name in DEMO_NAMES {
            assert!(by_name(name).is_some(), "missing demo {name}");
        }
    }
}
