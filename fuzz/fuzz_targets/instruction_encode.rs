#![no_main]

use libfuzzer_sys::fuzz_target;
use pact::opcode::{Comparator, Conjunction, OpCode, CONJUNCTION_TAG};
use pact::{encode_bytecode, Contract, DataTable, PactType, MAX_STRING_LEN};

const LITERAL_CHUNK: usize = 7;

fuzz_target!(|data: &[u8]| {
    let ops = build_program(data);
    let bytecode = encode_bytecode(&ops);

    let literals: Vec<String> = data
        .chunks(LITERAL_CHUNK)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    let Ok(table) = DataTable::from_literals(literals.as_slice()) else {
        return;
    };
    check_contract(&Contract::new(table, bytecode));
});

/// Each instruction starts with a selector byte. Odd selectors read one raw
/// conjunction code, even ones read four raw comparator fields. Bit 1 of the
/// selector is the invert flag.
fn build_program(data: &[u8]) -> Vec<OpCode> {
    let mut ops = Vec::new();
    let mut rest = data;
    while let Some((&selector, tail)) = rest.split_first() {
        let invert = selector & 2 != 0;
        if selector & 1 == 1 {
            let Some((&code, tail)) = tail.split_first() else { break };
            rest = tail;
            if let Ok(conj) = Conjunction::from_raw(code & 0x0F, invert) {
                assert!(conj.tag_byte() >= CONJUNCTION_TAG);
                ops.push(OpCode::from(conj));
            }
        } else {
            let Some((&[load, op, lhs, rhs], tail)) = tail.split_first_chunk::<4>() else {
                break;
            };
            rest = tail;
            match Comparator::from_raw(load, op, lhs, rhs, invert) {
                Ok(comp) => {
                    assert!(comp.control_byte() < CONJUNCTION_TAG);
                    ops.push(OpCode::from(comp));
                }
                Err(_) => assert!(load > 1 || op > 3 || lhs > 15 || rhs > 15),
            }
        }
    }
    ops
}

fn check_contract(contract: &Contract) {
    let payload = contract.encode();
    assert_eq!(payload, contract.encode());
    assert_eq!(payload.len(), contract.encoded_len());
    assert!(payload.ends_with(contract.bytecode()));
    for value in contract.data_table() {
        if let PactType::StringLike(text) = value {
            assert!(text.len() <= MAX_STRING_LEN);
        }
    }
}
