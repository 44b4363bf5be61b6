//! Runner behavior across the whole catalog.

use phpfix::php::batch::{fix_all, SourceInput};
use phpfix::php::fixers::{FixContext, Fixer, FixerRegistry};
use phpfix::php::pipeline::{FixError, HostVersion, RunConfig, Runner};
use phpfix::php::token::{Token, TokenKind};
use phpfix::php::tokens::{Changeset, IndexError, Tokens};

fn full_runner() -> Runner {
    let registry = FixerRegistry::with_defaults();
    Runner::build(&registry, &RunConfig::all(&registry)).expect("runner to build")
}

/// Appends a comment to every statement, forever.
struct Grow;

impl Fixer for Grow {
    fn name(&self) -> &'static str {
        "grow"
    }

    fn description(&self) -> &'static str {
        "Never converges"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.has_kind(TokenKind::Semicolon)
    }

    fn fix(&self, tokens: &Tokens, _: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        for index in tokens.find_kinds(&[TokenKind::Semicolon]) {
            changeset.insert(index + 1, vec![Token::new(TokenKind::Comment, "/**/")]);
        }
        Ok(changeset)
    }
}

#[test]
fn untouched_source_is_byte_identical() {
    let source = "<html>\r\n<?php\r\n/** doc */\r\nfunction foo(int $a): int\r\n{\r\n    return $a;\r\n}\r\n?>\r\n</html>";
    let report = full_runner().run(source).expect("converges");
    assert_eq!(report.output, source);
    assert!(!report.changed);
    assert!(report.applied.is_empty());
    assert_eq!(report.passes, 1);
}

#[test]
fn whole_catalog() {
    let source = "<?php\nIF (!!$a) {   \n    $b = (INTEGER)$c; // note \n    ECHO ( real )  $d;\n}\n";
    let registry = FixerRegistry::with_defaults();
    let config = RunConfig::all(&registry).with_host_version(HostVersion::PHP_7_4);
    let runner = Runner::build(&registry, &config).expect("runner to build");
    let report = runner.run(source).expect("converges");
    assert_eq!(
        report.output,
        "<?php\nif ((bool) $a) {\n    $b = (int) $c; // note\n    echo ( float ) $d;\n}\n"
    );
    assert_eq!(report.advisories.len(), 1);
    assert_eq!(report.passes, 2);
}

#[test]
fn non_convergence_carries_partial_result() {
    let mut registry = FixerRegistry::with_defaults();
    registry.register(Grow);
    let config = RunConfig::new()
        .with_rule("grow")
        .with_rule("lowercase_keywords")
        .with_max_passes(2);
    let runner = Runner::build(&registry, &config).expect("runner to build");
    match runner.run("<?php ECHO 1;") {
        Err(FixError::NonConvergence {
            passes,
            applied,
            partial,
        }) => {
            assert_eq!(passes, 2);
            assert_eq!(applied, vec!["grow", "lowercase_keywords"]);
            assert_eq!(partial, "<?php echo 1;/**//**/");
        }
        other => panic!("expected non-convergence, got {:?}", other),
    }
}

#[test]
fn report_serializes_to_json() {
    let report = full_runner().run("<?php $a = (boolean)$b;").expect("converges");
    let json = report.to_json().expect("serializable");
    assert!(json.contains("\"output\": \"<?php $a = (bool) $b;\""));
    assert!(json.contains("\"short_scalar_cast\""));
}

#[test]
fn batch_runs_every_source() {
    let runner = full_runner();
    let inputs = vec![
        SourceInput::new("a.php", "<?php $a = (double)$b;"),
        SourceInput::new("b.php", "<?php echo 1;"),
        SourceInput::new("c.php", "<p>no code</p>"),
    ];
    let outcomes = fix_all(&runner, &inputs);
    let outputs: Vec<_> = outcomes
        .iter()
        .map(|o| (o.name.as_str(), o.result.as_ref().map(|r| r.output.as_str()).ok()))
        .collect();
    assert_eq!(
        outputs,
        vec![
            ("a.php", Some("<?php $a = (float) $b;")),
            ("b.php", Some("<?php echo 1;")),
            ("c.php", Some("<p>no code</p>")),
        ]
    );
}
