//! Konfigurasi cursor
//!
//! Satu-satunya knob saat ini: field mana dari `sockaddr_in` yang dikonversi
//! ke network byte order.

/// Field socket address yang dikonversi host <-> network byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SockAddrOrder {
    /// Hanya `family` yang di-swap; `port` dan `addr` disalin apa adanya.
    ///
    /// Ini wire contract yang dipakai stack saat ini.
    #[default]
    FamilyOnly,
    /// `family`, `port`, dan `addr` semuanya big-endian di wire.
    Full,
}

impl SockAddrOrder {
    /// Apakah `port` dan `addr` ikut dikonversi
    #[inline(always)]
    pub fn converts_endpoint(self) -> bool {
        matches!(self, SockAddrOrder::Full)
    }
}

/// Cursor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorConfig {
    pub sockaddr_order: SockAddrOrder,
}

impl CursorConfig {
    pub fn new(sockaddr_order: SockAddrOrder) -> Self {
        Self { sockaddr_order }
    }
}
