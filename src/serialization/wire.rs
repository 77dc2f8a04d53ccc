//! Fixed-size wire values
//!
//! Nilai `Wire` ditulis persis seperti layout in-memory-nya (native byte order).
//! Tidak ada konversi endianness di jalur generic ini; field yang memang
//! big-endian di wire harus ditangani oleh tipe khusus (lihat `sockaddr`).

use std::mem;

/// Tipe dengan representasi wire berukuran tetap `SIZE` bytes.
///
/// Pengganti aman untuk "copy `sizeof(T)` bytes": tiap tipe mendeklarasikan
/// sendiri bagaimana ia menjadi bytes, tanpa reinterpretasi pointer.
pub trait Wire: Sized {
    /// Scratch buffer tepat `SIZE` bytes
    type Raw: AsRef<[u8]> + AsMut<[u8]>;

    /// Ukuran di wire dalam bytes
    const SIZE: usize;

    /// Scratch buffer kosong (zero-filled) untuk dibaca ke dalamnya
    fn blank() -> Self::Raw;

    /// Bytes in-memory dari nilai ini
    fn to_raw(&self) -> Self::Raw;

    /// Rekonstruksi nilai dari bytes in-memory
    fn from_raw(raw: Self::Raw) -> Self;
}

macro_rules! impl_wire_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Wire for $ty {
                type Raw = [u8; mem::size_of::<$ty>()];

                const SIZE: usize = mem::size_of::<$ty>();

                #[inline(always)]
                fn blank() -> Self::Raw {
                    [0u8; mem::size_of::<$ty>()]
                }

                #[inline(always)]
                fn to_raw(&self) -> Self::Raw {
                    self.to_ne_bytes()
                }

                #[inline(always)]
                fn from_raw(raw: Self::Raw) -> Self {
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_wire_native!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

impl<const N: usize> Wire for [u8; N] {
    type Raw = [u8; N];

    const SIZE: usize = N;

    #[inline(always)]
    fn blank() -> Self::Raw {
        [0u8; N]
    }

    #[inline(always)]
    fn to_raw(&self) -> Self::Raw {
        *self
    }

    #[inline(always)]
    fn from_raw(raw: Self::Raw) -> Self {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_memory_layout() {
        assert_eq!(<u8 as Wire>::SIZE, 1);
        assert_eq!(<u16 as Wire>::SIZE, 2);
        assert_eq!(<i32 as Wire>::SIZE, 4);
        assert_eq!(<f64 as Wire>::SIZE, 8);
        assert_eq!(<u128 as Wire>::SIZE, 16);
        assert_eq!(<[u8; 6] as Wire>::SIZE, 6);
    }

    #[test]
    fn test_native_layout_preserved() {
        let value: u32 = 0x1122_3344;
        assert_eq!(value.to_raw(), value.to_ne_bytes());
        assert_eq!(u32::from_raw(value.to_raw()), value);
    }

    #[test]
    fn test_float_bits_preserved() {
        let value = f32::from_bits(0x7fc0_1234);
        let back = f32::from_raw(value.to_raw());
        assert_eq!(back.to_bits(), 0x7fc0_1234);
    }
}
