//! Integration tests for zen-core.

use predicates::prelude::*;
use zen_core::prelude::*;

#[test]
fn toolchain_greeting_has_versioned_first_line() {
    let greeter = Greeter::from_toolchain().unwrap();
    let out = greeter.render();
    let first = out.lines().next().unwrap();

    let pattern = predicate::str::is_match(r"^Runtime Version: \d+\.\d+\.\d+$").unwrap();
    assert!(pattern.eval(first), "unexpected first line: {first:?}");
}

#[test]
fn greeting_after_first_line_is_exact_banner() {
    let mut buf = Vec::new();
    Greeter::from_toolchain().unwrap().run(&mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();

    let (_, rest) = out.split_once('\n').unwrap();
    assert_eq!(
        rest,
        "  _  _(o)_(o)_  _\n\
         ._\\`:_ F S M _:' \\_,\n    \
         / (`---'\\ `-.\n\
         ,-`  _)    (_, \n\
         \n"
    );
}

#[test]
fn pinned_version_scenario() {
    let out = Greeter::from_source(&VersionTriple::new(3, 11, 2))
        .unwrap()
        .render();
    assert!(out.starts_with("Runtime Version: 3.11.2\n"));
}

#[test]
fn greeting_is_repeatable() {
    let greeter = Greeter::from_toolchain().unwrap();
    assert_eq!(greeter.render(), greeter.render());
    assert_eq!(
        Greeter::from_toolchain().unwrap(),
        Greeter::from_toolchain().unwrap()
    );
}
