//! eipwire - Binary cursors untuk EtherNet/IP wire structures
//!
//! Arsitektur:
//! - Reader/Writer: cursor sekuensial, bounds-checked, di atas view milik caller
//! - Wire: nilai fixed-size dengan layout in-memory sebagai wire format
//! - SockAddrIn: satu-satunya struktur dengan konversi network byte order
//!
//! Tidak ada I/O dan tidak ada interpretasi protokol di crate ini.

pub mod config;
pub mod error;
pub mod serialization;

pub use config::{CursorConfig, SockAddrOrder};
pub use error::{Error, Result};
pub use serialization::{
    BytesWriter, Decode, Encode, Reader, SliceReader, SliceWriter, SockAddrIn, Wire, Writer,
};
