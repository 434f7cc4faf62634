use super::support::{outputs, run};
use crate::RuntimeError;

#[test]
fn cmp_sets_flags_without_writing_a_register() {
    let (machine, result) = run("MOV R0, 5\nCMP R0, 5\nHLT\n", vec![]);
    result.unwrap();
    assert_eq!(machine.register(0), 5);
    assert_eq!(machine.flags().0, true);
}

#[test]
fn jz_is_taken_when_zero_flag_is_set() {
    let out = outputs(
        "CMP 1, 1\nJZ skip\nMOV R0, 0\nWRITE 0, R0\nHLT\nskip:\nMOV R0, 1\nWRITE 0, R0\nHLT\n",
        vec![],
    );
    assert_eq!(out, vec![1]);
}

#[test]
fn jnz_is_taken_when_zero_flag_is_clear() {
    let out = outputs(
        "CMP 1, 2\nJNZ skip\nMOV R0, 0\nWRITE 0, R0\nHLT\nskip:\nMOV R0, 1\nWRITE 0, R0\nHLT\n",
        vec![],
    );
    assert_eq!(out, vec![1]);
}

#[test]
fn jn_is_taken_when_negative_flag_is_set() {
    let out = outputs(
        "CMP 1, 2\nJN skip\nMOV R0, 0\nWRITE 0, R0\nHLT\nskip:\nMOV R0, 1\nWRITE 0, R0\nHLT\n",
        vec![],
    );
    assert_eq!(out, vec![1]);
}

#[test]
fn jc_is_taken_when_carry_flag_is_set() {
    let out = outputs(
        "SUB R0, 1, 2\nJC skip\nMOV R0, 0\nWRITE 0, R0\nHLT\nskip:\nMOV R0, 1\nWRITE 0, R0\nHLT\n",
        vec![],
    );
    assert_eq!(out, vec![1]);
}

#[test]
fn call_and_ret_round_trip_through_the_stack() {
    let out = outputs(
        "CALL add_one\nWRITE 0, R0\nHLT\nadd_one:\nMOV R0, 41\nADD R0, R0, 1\nRET\n",
        vec![],
    );
    assert_eq!(out, vec![42]);
}

#[test]
fn ret_with_empty_stack_is_underflow() {
    let (_, result) = run("RET\n", vec![]);
    assert_eq!(result.unwrap_err(), RuntimeError::StackUnderflow);
}

#[test]
fn running_off_the_end_without_hlt_is_an_error() {
    let (_, result) = run("NOP\n", vec![]);
    assert_eq!(result.unwrap_err(), RuntimeError::FellOffEnd { ip: 1 });
}
