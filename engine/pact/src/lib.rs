/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Pact: bytecode encoder for predicate contracts.
//!
//! A contract is an ordered table of constants plus a stream of comparator
//! and conjunction instructions that reference it. This crate builds the
//! instructions and produces the binary payload consumed by Pact
//! interpreters. The payload layout is frozen and must stay byte-identical
//! to the reference encoder.
//!
//! # Examples
//! ```
//! use pact::opcode::{Comparator, Conjunction, OpCode, OpComp, OpConj, OpLoad};
//! use pact::{encode_bytecode, Contract, DataTable};
//!
//! let table = DataTable::from_literals(&["10", "20"]).unwrap();
//! let comp = Comparator::new(OpLoad::InputVsUser, OpComp::Eq, 0, 0, false).unwrap();
//! let bytecode = encode_bytecode(&[
//!     OpCode::from(comp),
//!     OpCode::from(Conjunction::new(OpConj::And, false)),
//! ]);
//!
//! let contract = Contract::new(table, bytecode);
//! let payload = contract.encode();
//! assert_eq!(payload.last(), Some(&32));
//! ```

mod contract;
mod convert;
mod data_table;
mod error;
mod value;

pub mod binary;
pub mod conformance;
pub mod opcode;

pub use binary::encode_bytecode;
pub use contract::Contract;
pub use data_table::DataTable;
pub use error::{PactError, PactResult};
pub use value::{Numeric, PactType, StringLike, MAX_STRING_LEN};

pub mod traits {
    pub use super::convert::IntoPact;
}
