//! Tests for malformed input handling in the assembler

use vm13_assembler::{assemble, AssemblerError};

// ============================================================================
// Invalid Instruction Tests
// ============================================================================

#[test]
fn test_unknown_instruction() {
    let result = assemble("halt");
    match result {
        Err(err) => match err.root() {
            AssemblerError::UnknownInstruction(name) => assert_eq!(name, "halt"),
            other => panic!("Expected UnknownInstruction, got {:?}", other),
        },
        Ok(_) => panic!("Expected error"),
    }
}

#[test]
fn test_instruction_typo() {
    assert!(assemble("listsumm r00, r01").is_err());
}

#[test]
fn test_empty_lines_and_comments() {
    let source = r#"

        ; header comment
        # alternate comment
        stop ; trailing comment

    "#;
    let program = assemble(source).unwrap();
    assert_eq!(program.len(), 1);
}

// ============================================================================
// Invalid Operand Tests
// ============================================================================

#[test]
fn test_three_register_missing_operand() {
    assert!(matches!(
        assemble("add r00, r01").unwrap_err().root(),
        AssemblerError::OperandCount { expected: 3, found: 2, .. }
    ));
}

#[test]
fn test_three_register_extra_operand() {
    assert!(assemble("mul r00, r01, r10, r11").is_err());
}

#[test]
fn test_invalid_register_name() {
    for source in ["in r2", "out x0", "listinit r100"] {
        assert!(
            matches!(
                assemble(source).unwrap_err().root(),
                AssemblerError::InvalidRegister(_)
            ),
            "{} should fail with InvalidRegister",
            source
        );
    }
}

#[test]
fn test_register_where_immediate_expected() {
    assert!(assemble("incr r00, r01").is_err());
}

#[test]
fn test_immediate_where_register_expected() {
    assert!(matches!(
        assemble("out 3").unwrap_err().root(),
        AssemblerError::InvalidRegister(_)
    ));
}

#[test]
fn test_immediate_too_large() {
    assert!(matches!(
        assemble("incr r00, 0x40").unwrap_err().root(),
        AssemblerError::InvalidImmediate { value: 64, .. }
    ));
}

#[test]
fn test_negative_immediate() {
    assert!(matches!(
        assemble("incr r00, -1").unwrap_err().root(),
        AssemblerError::SyntaxError { .. }
    ));
}

#[test]
fn test_list_literal_sizes_that_alias_indirect() {
    for size in [0, 16, 32, 48] {
        let source = format!("list r00, {}", size);
        assert!(matches!(
            assemble(&source).unwrap_err().root(),
            AssemblerError::UnencodableListSize(s) if *s as u32 == size
        ));
    }
}

#[test]
fn test_error_line_number() {
    let source = "incr r00, 1\nincr r00, 2\nbogus\n";
    let err = assemble(source).unwrap_err();
    assert!(err.to_string().starts_with("line 3:"));
}
