//! `sockaddr_in` dengan override byte order
//!
//! Di memori semua field host byte order; di wire `family` selalu big-endian.
//! `port` dan `addr` hanya dikonversi bila `SockAddrOrder::Full`.
//!
//! Layout (16 bytes, sama dengan `struct sockaddr_in` Linux):
//! ┌────────┬──────┬──────┬──────────┐
//! │ family │ port │ addr │ zero (8) │
//! │   2    │  2   │  4   │    8     │
//! └────────┴──────┴──────┴──────────┘

use std::net::{Ipv4Addr, SocketAddrV4};

use crate::config::SockAddrOrder;

/// Ukuran `sockaddr_in` di wire
pub const SOCKADDR_SIZE: usize = 16;

#[cfg(unix)]
pub const AF_INET: u16 = libc::AF_INET as u16;
#[cfg(not(unix))]
pub const AF_INET: u16 = 2;

/// IPv4 socket address, host byte order di semua field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SockAddrIn {
    pub family: u16,
    pub port: u16,
    pub addr: u32,
    pub zero: [u8; 8],
}

impl SockAddrIn {
    pub fn new(family: u16, port: u16, addr: u32) -> Self {
        Self {
            family,
            port,
            addr,
            zero: [0; 8],
        }
    }

    /// Konversi ke `SocketAddrV4` (field dibaca sebagai host order)
    pub fn to_socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::from(self.addr), self.port)
    }

    /// Bytes untuk wire: scratch copy, nilai asli tidak disentuh
    pub(crate) fn to_wire(&self, order: SockAddrOrder) -> [u8; SOCKADDR_SIZE] {
        let mut raw = [0u8; SOCKADDR_SIZE];
        raw[0..2].copy_from_slice(&self.family.to_be_bytes());
        if order.converts_endpoint() {
            raw[2..4].copy_from_slice(&self.port.to_be_bytes());
            raw[4..8].copy_from_slice(&self.addr.to_be_bytes());
        } else {
            raw[2..4].copy_from_slice(&self.port.to_ne_bytes());
            raw[4..8].copy_from_slice(&self.addr.to_ne_bytes());
        }
        raw[8..16].copy_from_slice(&self.zero);

        tracing::trace!(family = self.family, ?order, "sockaddr host -> network");
        raw
    }

    /// Rekonstruksi dari bytes wire (raw copy lalu swap in place)
    pub(crate) fn from_wire(raw: [u8; SOCKADDR_SIZE], order: SockAddrOrder) -> Self {
        let family = u16::from_be_bytes([raw[0], raw[1]]);
        let port_bytes = [raw[2], raw[3]];
        let addr_bytes = [raw[4], raw[5], raw[6], raw[7]];
        let (port, addr) = if order.converts_endpoint() {
            (
                u16::from_be_bytes(port_bytes),
                u32::from_be_bytes(addr_bytes),
            )
        } else {
            (
                u16::from_ne_bytes(port_bytes),
                u32::from_ne_bytes(addr_bytes),
            )
        };
        let mut zero = [0u8; 8];
        zero.copy_from_slice(&raw[8..16]);

        tracing::trace!(family, ?order, "sockaddr network -> host");
        Self {
            family,
            port,
            addr,
            zero,
        }
    }
}

impl From<SocketAddrV4> for SockAddrIn {
    fn from(sa: SocketAddrV4) -> Self {
        Self::new(AF_INET, sa.port(), u32::from(*sa.ip()))
    }
}
