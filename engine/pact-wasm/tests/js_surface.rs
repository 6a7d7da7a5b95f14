#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Uint8Array};
use pact_wasm::{OpCodeComparator, OpCodeConjunction, OpCompJs, OpConjJs, OpLoadJs, PactHandle};
use wasm_bindgen::{JsCast, JsError, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!();

fn table(entries: &[&str]) -> Array {
    entries.iter().map(|entry| JsValue::from_str(entry)).collect()
}

fn error_message(err: JsError) -> String {
    JsValue::from(err)
        .unchecked_into::<js_sys::Error>()
        .message()
        .into()
}

fn ok<T>(result: Result<T, JsError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("unexpected throw: {}", error_message(err)),
    }
}

fn comparator(load: OpLoadJs, lhs: u8, rhs: u8, invert: bool) -> Vec<u8> {
    let comp = ok(OpCodeComparator::new(
        load as u8,
        OpCompJs::EQ as u8,
        lhs,
        rhs,
        invert,
    ));
    comp.encode().to_vec()
}

fn conjunction(op: OpConjJs, invert: bool) -> Vec<u8> {
    ok(OpCodeConjunction::new(op as u8, invert)).encode().to_vec()
}

#[wasm_bindgen_test]
fn bytecode_accessor_returns_constructor_input() {
    let mut bytecode = comparator(OpLoadJs::INPUT_VS_USER, 0, 0, false);
    bytecode.extend(conjunction(OpConjJs::AND, false));

    let pact = ok(PactHandle::new(
        table(&["10", "20"]),
        Uint8Array::from(bytecode.as_slice()),
    ));
    assert_eq!(pact.bytecode().to_vec(), bytecode);
    assert_eq!(
        pact.encode().to_vec(),
        vec![0, 64, 128, 16, 80, 0, 0, 0, 0, 0, 0, 0, 128, 16, 40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 32]
    );
}

#[wasm_bindgen_test]
fn flags_change_only_the_bytecode_section() {
    let mut bytecode = comparator(OpLoadJs::INPUT_VS_USER, 0, 0, true);
    bytecode.extend(comparator(OpLoadJs::INPUT_VS_INPUT, 1, 1, false));

    let pact = ok(PactHandle::new(
        table(&["10", "hello, world"]),
        Uint8Array::from(bytecode.as_slice()),
    ));
    let expected = vec![
        0, 64, 128, 16, 80, 0, 0, 0, 0, 0, 0, 0, 0, 48, 104, 101, 108, 108, 111, 44, 32, 119,
        111, 114, 108, 100, 16, 0, 8, 17,
    ];
    assert_eq!(pact.encode().to_vec(), expected);
}

#[wasm_bindgen_test]
fn conjunction_encodes_to_a_byte_array() {
    assert_eq!(conjunction(OpConjJs::AND, false), vec![32]);
    assert_eq!(conjunction(OpConjJs::OR, false), vec![33]);
    assert_eq!(conjunction(OpConjJs::XOR, true), vec![50]);
}

#[wasm_bindgen_test]
fn non_string_table_entry_throws() {
    let entries: Array = [JsValue::from_str("10"), JsValue::from_f64(20.0)]
        .iter()
        .collect();
    let err = match PactHandle::new(entries, Uint8Array::new_with_length(0)) {
        Err(err) => err,
        Ok(_) => panic!("expected non-string entry to throw"),
    };
    assert_eq!(error_message(err), "data table entries must be strings");
}

#[wasm_bindgen_test]
fn unknown_opcodes_throw() {
    let err = match OpCodeComparator::new(0, 7, 0, 0, false) {
        Err(err) => err,
        Ok(_) => panic!("expected unknown comparator to throw"),
    };
    assert_eq!(error_message(err), "unknown comparator opcode 7");

    let err = match OpCodeConjunction::new(3, false) {
        Err(err) => err,
        Ok(_) => panic!("expected unknown conjunction to throw"),
    };
    assert_eq!(error_message(err), "unknown conjunction opcode 3");
}

#[wasm_bindgen_test]
fn wide_operand_throws() {
    let err = match OpCodeComparator::new(OpLoadJs::INPUT_VS_USER as u8, 0, 16, 0, false) {
        Err(err) => err,
        Ok(_) => panic!("expected wide operand to throw"),
    };
    assert_eq!(error_message(err), "lhs operand index 16 does not fit in 4 bits");
}
