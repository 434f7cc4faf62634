use super::support::run;
use crate::RuntimeError;

#[test]
fn store_then_load_round_trips_through_a_direct_address() {
    let (machine, result) = run("MOV R0, 99\nSTORE 10, R0\nLOAD R1, 10\nHLT\n", vec![]);
    result.unwrap();
    assert_eq!(machine.memory(10), 99);
    assert_eq!(machine.register(1), 99);
}

#[test]
fn load_through_an_indirect_register_address() {
    let (machine, result) = run(
        "MOV R0, 7\nMOV R1, 200\nSTORE 7, R1\nLOAD R2, [R0]\nHLT\n",
        vec![],
    );
    result.unwrap();
    assert_eq!(machine.register(2), 200);
}

#[test]
fn load_out_of_bounds_is_a_runtime_error() {
    let (_, result) = run("LOAD R0, 500\nHLT\n", vec![]);
    assert_eq!(
        result.unwrap_err(),
        RuntimeError::MemoryOutOfBounds { address: 500 }
    );
}

#[test]
fn store_out_of_bounds_is_a_runtime_error() {
    let (_, result) = run("STORE -1, R0\nHLT\n", vec![]);
    assert_eq!(
        result.unwrap_err(),
        RuntimeError::MemoryOutOfBounds { address: -1 }
    );
}

#[test]
fn load_does_not_touch_flags() {
    let (machine, result) = run("CMP 1, 2\nLOAD R0, 5\nHLT\n", vec![]);
    result.unwrap();
    assert_eq!(machine.flags(), (false, true, true));
}
