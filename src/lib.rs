//! # Sales Ledger
//!
//! A streaming reader for comma-delimited sales transaction files. Instead of
//! loading the whole file into an in-memory collection, it yields one parsed
//! record per line, so files larger than available memory can be processed.
//!
//! ## Design Principles
//!
//! - **Exact decimal arithmetic**: prices and totals use `rust_decimal`,
//!   never floats
//! - **Lazy production**: a record is parsed only when requested
//! - **Scoped resource release**: the reader owns the file handle and closes
//!   it on drop, on every exit path
//! - **Exhaustion is not an error**: end of stream yields `None`, a malformed
//!   row yields an error and fuses the iterator
//!
//! ## Example
//!
//! ```
//! use sales_ledger::SalesReader;
//! use std::io::Cursor;
//!
//! let csv = "data,miasto,sklep,kategoria,towar,cena,sztuk\n\
//!            2024-01-01,Warszawa,SklepA,Spozywka,Chleb,4.50,2\n";
//! for result in SalesReader::from_reader(Cursor::new(csv)) {
//!     println!("{}", result.unwrap());
//! }
//! ```

pub mod error;
pub mod money;
pub mod reader;
pub mod transaction;

pub use error::{LedgerError, Result};
pub use money::Money;
pub use reader::SalesReader;
pub use transaction::Transaction;
