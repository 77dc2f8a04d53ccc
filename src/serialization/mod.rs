//! Serialization Layer: Bounds-Checked Binary Cursors
//!
//! Prinsip desain:
//! - Reader/Writer sebagai trait, message code hanya bergantung pada interface
//! - Fixed layout: nilai ditulis persis sesuai layout in-memory
//! - No overrun: setiap operasi dicek dulu, gagal tanpa memindah cursor

mod codec;
mod reader;
mod sockaddr;
mod wire;
mod writer;

pub use codec::{Decode, Encode};
pub use reader::{Reader, SliceReader};
pub use sockaddr::{SockAddrIn, AF_INET, SOCKADDR_SIZE};
pub use wire::Wire;
pub use writer::{BytesWriter, SliceWriter, Writer};
