/*!
 * Tests for code-fence stripping
 */

use codeshift::strip_code_fences;

#[test]
fn test_stripCodeFences_withFencedPython_shouldReturnInnerCode() {
    assert_eq!(strip_code_fences("```python\nprint(1)\n```"), "print(1)");
}

#[test]
fn test_stripCodeFences_withUntaggedFence_shouldReturnInnerCode() {
    assert_eq!(strip_code_fences("```\nprint(1)\n```"), "print(1)");
}

#[test]
fn test_stripCodeFences_withPlusAndDashInTag_shouldStripTag() {
    assert_eq!(strip_code_fences("```c++\nint x;\n```"), "int x;");
    assert_eq!(strip_code_fences("```objective-c\nint x;\n```"), "int x;");
}

#[test]
fn test_stripCodeFences_withMultilineBody_shouldPreserveInnerNewlines() {
    let raw = "```java\nclass A {\n    int x;\n}\n```";
    assert_eq!(strip_code_fences(raw), "class A {\n    int x;\n}");
}

#[test]
fn test_stripCodeFences_withNoFences_shouldOnlyTrim() {
    assert_eq!(strip_code_fences("  print(1)  \n"), "print(1)");
    assert_eq!(strip_code_fences("print(1)"), "print(1)");
}

#[test]
fn test_stripCodeFences_withSurroundingProse_shouldDropFencesOnly() {
    let raw = "Here is the translation:\n```python\nprint(1)\n```\n";
    assert_eq!(
        strip_code_fences(raw),
        "Here is the translation:\nprint(1)"
    );
}

#[test]
fn test_stripCodeFences_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(strip_code_fences(""), "");
    assert_eq!(strip_code_fences("``````"), "");
}

#[test]
fn test_stripCodeFences_withInnerBackticksInCode_shouldKeepSingleBackticks() {
    // Single backticks are not fences
    assert_eq!(strip_code_fences("let s = `tpl`;"), "let s = `tpl`;");
}
