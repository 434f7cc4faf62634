use super::Machine;
use crate::parser::parse;
use crate::RuntimeError;

/// Assembles `source` (panicking on a parse failure, since these are fixtures, not
/// cases under test) and runs it to completion against `inputs`.
pub fn run(source: &str, inputs: Vec<i16>) -> (Machine, Result<Vec<(i32, i16)>, RuntimeError>) {
    let (program, _) = parse(source).expect("fixture program should assemble");
    let mut machine = Machine::new(program, inputs);
    let result = machine.run_logged();
    (machine, result)
}

/// Same as [`run`] but for fixtures that are expected to halt cleanly, collapsing
/// the log down to bare output values.
pub fn outputs(source: &str, inputs: Vec<i16>) -> Vec<i16> {
    let (_, result) = run(source, inputs);
    result
        .unwrap()
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}
