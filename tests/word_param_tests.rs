// Table driven tests of the dispatcher and the built-in words.  Each case runs a snippet of source
// on a fresh interpreter and compares the rendered data stack, bottom first.

use senary::runtime::error::Result;
use senary::runtime::interpreter::forth_interpreter::ForthInterpreter;
use senary::runtime::interpreter::{CodeManagement, InterpreterStack};
use test_case::test_case;

fn eval_and_stack(source: &str) -> Result<Vec<String>> {
    let mut interp = ForthInterpreter::with_builtin_words();
    interp.set_output(std::sync::Arc::new(std::sync::Mutex::new(std::io::sink())));

    interp.process_source("<test>", source)?;

    let stack = interp.stack().iter().map(|v| v.to_string()).collect();
    Ok(stack)
}

#[test_case("", &[]; "empty input")]
#[test_case("0", &["0"]; "zero")]
#[test_case("5", &["5"]; "single digit")]
#[test_case("10", &["10"]; "six")]
#[test_case("-13", &["-13"]; "negative numeral")]
#[test_case("5 3 +", &["12"]; "add carries into the next place")]
#[test_case("5 1 +", &["10"]; "add to six")]
#[test_case("-1 1 +", &["0"]; "add negative")]
#[test_case("5 3 + 12 =", &["1"]; "sum equals senary eight")]
#[test_case("4 dup", &["4", "4"]; "dup")]
#[test_case("4 5 pop", &["4"]; "pop")]
#[test_case("pop", &[]; "pop on empty stack does nothing")]
#[test_case("0 !", &["1"]; "not zero")]
#[test_case("1 !", &["0"]; "not one")]
#[test_case("5 !", &["0"]; "not nonzero")]
#[test_case("3 3 =", &["1"]; "equal")]
#[test_case("3 4 =", &["0"]; "not equal")]
#[test_case("0 sleep", &[]; "sleep zero")]
#[test_case("-1 sleep", &[]; "sleep negative")]
fn stack_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case("( 1 2 ) 3", &["3"]; "comment is skipped")]
#[test_case("( + dup : ; ] ) 3", &["3"]; "words in a comment are not run")]
#[test_case("( ( 1 ) 2", &["2"]; "comments do not nest")]
#[test_case("1 ( 2", &["1"]; "unclosed comment runs to the end")]
#[test_case("[ 1 ( 2 ) 3 ]", &["[ 1 3 ]"]; "comment inside a literal")]
#[test_case(": a ( 1 2 dup ) dup ; 3 a", &["3", "3"]; "comment inside a definition")]
fn comment_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case("[ 1 2 ]", &["[ 1 2 ]"]; "literal of numbers")]
#[test_case("[ ]", &["[  ]"]; "empty literal")]
#[test_case("[ 1 dup + ]", &["[ 1 dup + ]"]; "words are not run inside a literal")]
#[test_case("[ 1 2 ] [ 1 2 ] =", &["1"]; "literals compare by content")]
#[test_case("[ 1 2 ] [ 2 1 ] =", &["0"]; "literal order matters")]
#[test_case("[ 1 2 ] run", &["1", "2"]; "run a literal")]
#[test_case("[ 2 3 + ] run", &["5"]; "run a literal with words")]
#[test_case("[ ] run", &[]; "run an empty literal")]
#[test_case("[ [ 1 ]", &["[ [ 1 ]"]; "open bracket inside a literal is a plain word")]
fn literal_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case("5 & dup run", &["5", "5"]; "run a reference")]
#[test_case("& dup", &["& dup"]; "reference renders with an ampersand")]
#[test_case("& missing", &["& missing"]; "reference to an unknown word")]
#[test_case("5 & dup 1 if", &["5", "5"]; "if runs on nonzero")]
#[test_case("5 & dup 3 if", &["5", "5"]; "if treats any nonzero as true")]
#[test_case("5 & dup 0 if", &["5", "& dup"]; "if leaves the executable on zero")]
#[test_case("[ 4 ] 1 if", &["4"]; "if runs a literal")]
#[test_case("& dup & dup =", &["1"]; "references to the same word are equal")]
#[test_case("& dup & pop =", &["0"]; "references to different words differ")]
fn reference_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case(": double dup + ; 3 double", &["10"]; "define and call")]
#[test_case(": twice dup dup ; 2 twice", &["2", "2", "2"]; "body runs in order")]
#[test_case(": inc 1 + ; 4 inc", &["5"]; "numbers are pushed while compiling")]
#[test_case(": nothing ; 1 nothing", &["1"]; "empty body")]
#[test_case(": a dup ; : b a ; : a pop ; 3 4 b", &["3"]; "body words resolve when run")]
#[test_case("5 : a dup ; & a : a pop ; run", &[]; "references resolve when run")]
#[test_case(": double dup + ; [ 3 double ] run", &["10"]; "user word inside a literal")]
#[test_case(": : ; 1", &["1"]; "colon can be redefined")]
#[test_case(": open [ ; open 1 dup ]", &["[ 1 dup ]"]; "user word opens a literal")]
#[test_case("& dup [ & dup ] run =", &["& dup", "& =", "& ="]; "ampersand in a literal reads the next input token")]
fn definition_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case(": show dup ; 3 go show", &["3", "3"]; "task shares the stack")]
#[test_case(": nap sleep ; 0 go nap", &[]; "task pops from the shared stack")]
#[test_case(": grow dup ; 2 go grow go grow", &["2", "2", "2"]; "several tasks")]
fn task_cases(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[should_panic]
#[test_case("+"; "add on empty stack")]
#[test_case("1 +"; "add with one value")]
#[test_case("[ 1 ] 2 +"; "add a literal")]
#[test_case("dup"; "dup on empty stack")]
#[test_case("print"; "print on empty stack")]
#[test_case("!"; "not on empty stack")]
#[test_case("1 ="; "equal with one value")]
#[test_case("sleep"; "sleep on empty stack")]
#[test_case("run"; "run on empty stack")]
#[test_case("1 run"; "run an integer")]
#[test_case("& missing run"; "run a reference to an unknown word")]
#[test_case("if"; "if on empty stack")]
#[test_case("& dup & dup if"; "if with a reference condition")]
#[test_case("foo"; "bad word")]
#[test_case("7"; "seven is not a senary digit")]
#[test_case("16"; "six is not a senary digit")]
#[test_case(";"; "semicolon outside a definition")]
#[test_case("]"; "close bracket without a literal")]
#[test_case("[ 1 ; ]"; "immediate word inside a literal")]
#[test_case("[ [ 1 ] ]"; "brackets do not nest")]
#[test_case("[ foo ]"; "bad word inside a literal")]
#[test_case(": broken foo ;"; "bad word inside a definition")]
#[test_case(": w [ dup ] ;"; "close bracket runs while compiling")]
#[test_case(":"; "colon at end of input")]
#[test_case("&"; "ampersand at end of input")]
#[test_case("go"; "go at end of input")]
#[test_case("go missing"; "task running an unknown word")]
fn error_cases(source: &str) {
    let _ = eval_and_stack(source).unwrap();
}
