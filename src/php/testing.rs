//! Fixer test harness
//!
//! Every fixer test has the same shape: lex an input, apply the fixer once, compare with
//! the expected output. On top of the comparison the harness checks what every fixer must
//! guarantee, so individual tests don't have to:
//!
//! - the fixed sequence is what lexing the fixed text would produce
//! - applying the fixer again changes nothing
//!
//! Failures panic with the fixer name and input, like the assertions in `std`.

use crate::php::fixers::{Fixer, RuleOptions};
use crate::php::lexing::tokenize;
use crate::php::pipeline::{apply_fixer, Advisory, HostVersion};

/// Fix `input` with default options on the default host and expect `expected`.
pub fn assert_fix(fixer: &dyn Fixer, input: &str, expected: &str) -> Vec<Advisory> {
    assert_fix_with(
        fixer,
        &RuleOptions::new(),
        HostVersion::default(),
        input,
        expected,
    )
}

/// Expect `input` to come out unchanged.
pub fn assert_unchanged(fixer: &dyn Fixer, input: &str) {
    assert_fix(fixer, input, input);
}

pub fn assert_fix_with(
    fixer: &dyn Fixer,
    options: &RuleOptions,
    host_version: HostVersion,
    input: &str,
    expected: &str,
) -> Vec<Advisory> {
    let name = fixer.name();
    let mut tokens = tokenize(input);
    let advisories = apply_fixer(&mut tokens, fixer, options, host_version)
        .unwrap_or_else(|e| panic!("{name} failed on {input:?}: {e}"));

    let output = tokens.render();
    assert_eq!(output, expected, "{name} on {input:?}");
    assert_eq!(
        tokens,
        tokenize(&output),
        "{name} left a sequence that does not match a fresh lex of {output:?}"
    );

    apply_fixer(&mut tokens, fixer, options, host_version)
        .unwrap_or_else(|e| panic!("{name} failed on its own output {output:?}: {e}"));
    assert_eq!(tokens.render(), output, "{name} is not idempotent on {input:?}");

    advisories
}
