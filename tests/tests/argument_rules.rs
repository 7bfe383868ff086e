//! Per-rule scenarios run through the whole-call entry point.

use vet_tests::prelude::*;

mod type_rule {
    use super::*;

    #[test]
    fn test_record_fields_are_checked_in_caller_order() {
        // GIVEN: the record stands in for (5, "x")
        let args = record! { "a" => 5, "b" => "x" };
        let checks = [
            Value::from(Check::new().typ("int")),
            Value::from(Check::new().typ("int")),
        ];

        // WHEN
        let violations = check(&args, &checks);

        // THEN: exactly one violation, at position 1
        assert_violations(
            &violations,
            &[violation(Position::Arg(1), Rule::Type, "int", "string")],
        );
    }

    #[test]
    fn test_example_values_stand_in_for_type_names() {
        // GIVEN: examples instead of names
        let args = Value::List(vec![Value::Int(3), Value::Bool(false)]);
        let checks = [
            Value::from(Check::new().typ(Value::Int(0))),
            Value::from(Check::new().typ(Value::Int(0))),
        ];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[violation(Position::Arg(1), Rule::Type, "int", "bool")],
        );
    }

    #[test]
    fn test_sequences_only_match_the_array_sentinel() {
        // GIVEN
        let args = Value::List(vec![Value::List(vec![Value::Int(1)])]);

        // WHEN/THEN
        assert_clean(&check(&args, &[Value::from(Check::new().typ("array"))]));
        assert_violations(
            &check(&args, &[Value::from(Check::new().typ("object"))]),
            &[violation(Position::Arg(0), Rule::Type, "object", "array")],
        );
    }
}

mod presence_rule {
    use super::*;

    #[test]
    fn test_required_by_default() {
        // GIVEN
        let args = Value::List(vec![Value::Null]);

        // WHEN
        let violations = check(&args, &[record! {}]);

        // THEN
        assert_violations(
            &violations,
            &[violation(Position::Arg(0), Rule::Optional, "present", "null")],
        );
    }

    #[test]
    fn test_optional_suppresses_the_presence_check() {
        // GIVEN
        let args = Value::List(vec![Value::Null]);

        // WHEN/THEN
        assert_clean(&check(&args, &[Value::from(Check::new().optional())]));
    }

    #[test]
    fn test_malformed_opt_field_reports_and_suppresses() {
        // GIVEN: opt carries a string
        let args = Value::List(vec![Value::Null]);
        let checks = [record! { "opt" => "yes" }];

        // WHEN
        let violations = check(&args, &checks);

        // THEN: the meta-violation only; the presence rule stays quiet
        assert_violations(
            &violations,
            &[violation(
                Position::DescriptorOpt(0),
                Rule::Type,
                "bool",
                "string",
            )],
        );
    }

    #[test]
    fn test_malformed_opt_field_leaves_other_rules_running() {
        // GIVEN: a malformed opt next to a failing type rule
        let args = Value::List(vec![Value::Null]);
        let checks = [record! { "typ" => "int", "opt" => "yes" }];

        // WHEN
        let violations = check(&args, &checks);

        // THEN: the type rule still reports
        assert_violations(
            &violations,
            &[
                violation(Position::Arg(0), Rule::Type, "int", "null"),
                violation(Position::DescriptorOpt(0), Rule::Type, "bool", "string"),
            ],
        );
    }
}

mod forbidden_rule {
    use super::*;

    #[test]
    fn test_bare_forbidden_value() {
        // GIVEN
        let args = Value::List(vec![Value::Int(-1)]);
        let checks = [Value::from(Check::new().not(-1))];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[violation(Position::Arg(0), Rule::Forbidden, "not -1", "-1")],
        );
    }

    #[test]
    fn test_forbidden_list_matches_strictly() {
        // GIVEN: the string "0" against forbidden [0, ""]
        let args = Value::List(vec![Value::String("0".into())]);
        let checks = [Value::from(Check::new().not(0).not(""))];

        // WHEN/THEN: no coercion, so nothing matches
        assert_clean(&check(&args, &checks));
    }

    #[test]
    fn test_forbidden_string_value() {
        // GIVEN
        let args = Value::List(vec![Value::String("admin".into())]);
        let checks = [Value::from(Check::new().not("admin").not("root"))];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[violation(
                Position::Arg(0),
                Rule::Forbidden,
                "not \"admin\"",
                "\"admin\"",
            )],
        );
    }
}

mod required_fields_rule {
    use super::*;

    #[test]
    fn test_bare_field_name() {
        // GIVEN
        let args = Value::List(vec![record! { "id" => 7 }]);

        // WHEN/THEN
        assert_clean(&check(&args, &[Value::from(Check::new().has("id"))]));
        assert_violations(
            &check(&args, &[Value::from(Check::new().has("name"))]),
            &[violation(
                Position::Arg(0),
                Rule::RequiredField,
                "has name",
                "missing name",
            )],
        );
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        // GIVEN
        let args = Value::List(vec![record! { "id" => Value::Null, "name" => "x" }]);
        let checks = [Value::from(Check::new().has("id").has("name"))];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[violation(
                Position::Arg(0),
                Rule::RequiredField,
                "has id",
                "missing id",
            )],
        );
    }
}

mod accumulation {
    use super::*;

    #[test]
    fn test_one_argument_can_fail_several_rules() {
        // GIVEN: null fails the type rule and the presence rule
        let args = Value::List(vec![Value::Null]);
        let checks = [Value::from(Check::new().typ("string"))];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[
                violation(Position::Arg(0), Rule::Type, "string", "null"),
                violation(Position::Arg(0), Rule::Optional, "present", "null"),
            ],
        );
    }

    #[test]
    fn test_violations_keep_argument_order() {
        // GIVEN: failures at positions 0 and 2
        let args = Value::List(vec![Value::Null, Value::Int(1), Value::Int(-1)]);
        let checks = [
            Value::from(Check::new()),
            Value::from(Check::new().typ("int")),
            Value::from(Check::new().not(-1)),
        ];

        // WHEN
        let violations = check(&args, &checks);

        // THEN
        assert_violations(
            &violations,
            &[
                violation(Position::Arg(0), Rule::Optional, "present", "null"),
                violation(Position::Arg(2), Rule::Forbidden, "not -1", "-1"),
            ],
        );
    }
}
