//! Integration tests for vimend
//!
//! End-to-end checks of the rewriting engine on whole scripts.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{BufReader, Cursor};

use vimend::append_end_statements;
use vimend::process::rewrite_file;

fn rewrite(input: &str) -> String {
    append_end_statements(input.as_bytes()).unwrap()
}

fn rewrite_err(input: &str) -> String {
    append_end_statements(input.as_bytes())
        .unwrap_err()
        .to_string()
}

#[test]
fn test_function_if_while_for() {
    let input = concat!(
        "function X()\n",
        "  if 0\n",
        "    echo\n",
        "\n",
        "\n",
        "function! X()\n",
        "  while 1\n",
        "    for i in [1,2,3]\n",
        "      echo i\n",
        "\n",
        "\" vim:sw=4\n",
    );
    // The endif/endfunction for the first function appear before the blank
    // lines that follow it; the second function closes at end of input,
    // before the trailing modeline.
    let expected = concat!(
        "function X()\n",
        "  if 0\n",
        "    echo\n",
        "  endif\n",
        "endfunction\n",
        "\n",
        "\n",
        "function! X()\n",
        "  while 1\n",
        "    for i in [1,2,3]\n",
        "      echo i\n",
        "    endfor\n",
        "  endwhile\n",
        "endfunction\n",
        "\n",
        "\" vim:sw=4\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_if_statement_and_body_on_same_line() {
    assert_eq!(rewrite("if 1 | echo\n"), "if 1 | echo\nendif\n");
}

#[test]
fn test_else_elseif() {
    let input = concat!(
        "if 0\n",
        "  echo\n",
        "else\n",
        "  echo\n",
        "  while 1\n",
        "    echo\n",
        "elseif 0\n",
        " echo\n",
    );
    // else/elseif keep the if open; the while still closes at the elseif.
    let expected = concat!(
        "if 0\n",
        "  echo\n",
        "else\n",
        "  echo\n",
        "  while 1\n",
        "    echo\n",
        "  endwhile\n",
        "elseif 0\n",
        " echo\n",
        "endif\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_nested_if_with_else() {
    let input = concat!(
        "echo 'if'\n", // no endif for a line merely containing "if"
        "if 1\n",
        "  if 1\n",
        "    echo\n",
        "else\n",
        "  echo\n",
    );
    let expected = concat!(
        "echo 'if'\n",
        "if 1\n",
        "  if 1\n",
        "    echo\n",
        "  endif\n",
        "else\n",
        "  echo\n",
        "endif\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_try_catch_finally() {
    let input = concat!(
        "try\n",
        "  echo\n",
        "catch /1/\n",
        "  echo\n",
        "finally\n",
        "  echo\n",
        "\n",
        "try\n",
        " echo\n",
    );
    let expected = concat!(
        "try\n",
        "  echo\n",
        "catch /1/\n",
        "  echo\n",
        "finally\n",
        "  echo\n",
        "endtry\n",
        "\n",
        "try\n",
        " echo\n",
        "endtry\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_augroup() {
    let input = concat!(
        "augroup X\n",
        "  autocmd!\n",
        "  autocmd BufWritePost ~/.vimrc  so ~/.vimrc\n",
    );
    let expected = concat!(
        "augroup X\n",
        "  autocmd!\n",
        "  autocmd BufWritePost ~/.vimrc  so ~/.vimrc\n",
        "augroup end\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_vim9script_def() {
    let input = concat!(
        "vim9script\n",
        "\n",
        "def EchoHi()\n",
        "  echo 'Hi'\n",
        "\n",
        "EchoHi()\n",
    );
    let expected = concat!(
        "vim9script\n",
        "\n",
        "def EchoHi()\n",
        "  echo 'Hi'\n",
        "enddef\n",
        "\n",
        "EchoHi()\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_dos_line_endings() {
    // The `.` terminator is recognized despite the \r\n; the \r\n-only line
    // is blank trivia, not a statement; output uses \n only, and the final
    // unterminated line gains a terminator.
    let input = "insert!\r\ntext\r\n.\r\nif 1\r\n\r\n  echo\r\necho";
    let expected = "insert!\ntext\n.\nif 1\n\n  echo\nendif\necho\n";
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_line_continuation_and_continuation_comment() {
    // Neither the "\ comment form nor the \ continuation closes the if,
    // even though neither line is indented.
    let input = concat!(
        "if\n",
        "\"\\ Comment.\n",
        "\\ 1\n",
        "  let a =\n",
        "\\       42\n",
    );
    let expected = concat!(
        "if\n",
        "\"\\ Comment.\n",
        "\\ 1\n",
        "  let a =\n",
        "\\       42\n",
        "endif\n",
    );
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_continuation_at_start_of_file_fails() {
    assert_eq!(
        rewrite_err("\\if 1\n echo\n"),
        "Unexpected line continuation symbol."
    );
}

#[test]
fn test_continuation_following_blank_line_fails() {
    assert_eq!(
        rewrite_err("if\n\n\\ 1\n echo\n"),
        "Unexpected line continuation symbol."
    );
}

#[test]
fn test_already_delimited_script_is_unchanged() {
    let input = "if 0\n  echo\nelse\n  echo\nendif\n";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_rewriting_own_output_is_stable() {
    let input = concat!(
        "function X()\n",
        "  try\n",
        "    for i in [1]\n",
        "      echo i\n",
        "  catch\n",
        "    echo\n",
        "\n",
        "augroup Y\n",
        "  autocmd!\n",
    );
    let once = rewrite(input);
    assert_eq!(rewrite(&once), once);
}

#[test]
fn test_trailing_comment_stays_last() {
    let output = rewrite("if 1\n  echo\n\n\" vim:sw=4\n");
    assert!(output.ends_with("endif\n\n\" vim:sw=4\n"));
}

#[test]
fn test_rewrite_file_streams_result() {
    let reader = BufReader::new(Cursor::new("while 1\n  echo\n"));
    let mut output = Vec::new();
    rewrite_file(reader, &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "while 1\n  echo\nendwhile\n"
    );
}

#[test]
fn test_empty_input_produces_empty_output() {
    assert_eq!(rewrite(""), "");
}

#[test]
fn test_blank_only_input() {
    // Trailing blank lines survive; all-space lines normalize to empty ones
    assert_eq!(rewrite("\n   \n"), "\n\n");
}
