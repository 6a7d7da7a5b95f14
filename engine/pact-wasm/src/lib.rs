//! JavaScript bindings for building and encoding Pact contracts.

use js_sys::{Array, Uint8Array};
use pact::opcode::{Comparator, Conjunction};
use pact::{Contract, PactError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = OpLoad)]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpLoadJs {
    INPUT_VS_USER = 0,
    INPUT_VS_INPUT = 1,
}

#[wasm_bindgen(js_name = OpComp)]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpCompJs {
    EQ = 0,
    GT = 1,
    GTE = 2,
    IN = 3,
}

#[wasm_bindgen(js_name = OpConj)]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpConjJs {
    AND = 0,
    OR = 1,
    XOR = 2,
}

/// A contract built from a string data table and raw bytecode.
#[wasm_bindgen(js_name = Pact)]
pub struct PactHandle {
    contract: Contract,
}

#[wasm_bindgen(js_class = Pact)]
impl PactHandle {
    /// Entries that parse as unsigned 64-bit integers become numeric
    /// constants; everything else is stored as text. Throws on non-string
    /// entries and on values that do not fit the table encoding.
    #[wasm_bindgen(constructor)]
    pub fn new(data_table: Array, bytecode: Uint8Array) -> Result<PactHandle, JsError> {
        let literals = data_table
            .iter()
            .map(|entry| {
                entry
                    .as_string()
                    .ok_or_else(|| JsError::new("data table entries must be strings"))
            })
            .collect::<Result<Vec<String>, JsError>>()?;
        let bytecode = uint8_array_to_vec(&bytecode);
        let contract = Contract::from_literals(literals.as_slice(), &bytecode).map_err(js_error)?;
        Ok(PactHandle { contract })
    }

    #[wasm_bindgen(js_name = getBytecode)]
    pub fn bytecode(&self) -> Uint8Array {
        Uint8Array::from(self.contract.bytecode())
    }

    pub fn encode(&self) -> Uint8Array {
        Uint8Array::from(self.contract.encode().as_slice())
    }
}

#[wasm_bindgen]
pub struct OpCodeComparator(Comparator);

#[wasm_bindgen]
impl OpCodeComparator {
    #[wasm_bindgen(constructor)]
    pub fn new(
        load: u8,
        op: u8,
        lhs: u8,
        rhs: u8,
        invert: bool,
    ) -> Result<OpCodeComparator, JsError> {
        Comparator::from_raw(load, op, lhs, rhs, invert)
            .map(OpCodeComparator)
            .map_err(js_error)
    }

    pub fn encode(&self) -> Uint8Array {
        Uint8Array::from(self.0.encode().as_slice())
    }
}

#[wasm_bindgen]
pub struct OpCodeConjunction(Conjunction);

#[wasm_bindgen]
impl OpCodeConjunction {
    #[wasm_bindgen(constructor)]
    pub fn new(op: u8, invert: bool) -> Result<OpCodeConjunction, JsError> {
        Conjunction::from_raw(op, invert)
            .map(OpCodeConjunction)
            .map_err(js_error)
    }

    pub fn encode(&self) -> Uint8Array {
        Uint8Array::from(self.0.encode().as_slice())
    }
}

fn uint8_array_to_vec(bytes: &Uint8Array) -> Vec<u8> {
    let mut out = vec![0u8; bytes.length() as usize];
    bytes.copy_to(&mut out);
    out
}

fn js_error(err: PactError) -> JsError {
    JsError::new(&err.to_string())
}
