//! Bounds-checked Reader
//!
//! Baca sekuensial dari view yang sudah diterima dari network.
//! Setiap operasi dicek dulu terhadap sisa bytes; jika gagal, cursor tidak bergerak.

use super::sockaddr::{SockAddrIn, SOCKADDR_SIZE};
use super::wire::Wire;
use crate::config::{CursorConfig, SockAddrOrder};
use crate::error::{Error, Result};

/// Interface generic untuk membaca data binary
pub trait Reader {
    /// Copy tepat `dst.len()` bytes dari posisi cursor ke `dst`.
    ///
    /// Primitive yang dipakai semua operasi baca lainnya.
    fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()>;

    /// Maju `n` bytes tanpa copy (padding / reserved field)
    fn skip(&mut self, n: usize) -> Result<()>;

    /// Jumlah bytes yang sudah dibaca
    fn byte_count(&self) -> usize;

    /// Sisa bytes yang belum dibaca
    fn remaining(&self) -> usize;

    /// Field `sockaddr_in` mana yang dikonversi dari network byte order
    fn sockaddr_order(&self) -> SockAddrOrder {
        SockAddrOrder::default()
    }

    /// Baca satu nilai fixed-size, byte order tidak diubah
    #[inline]
    fn read<T: Wire>(&mut self) -> Result<T>
    where
        Self: Sized,
    {
        let mut raw = T::blank();
        self.read_bytes(raw.as_mut())?;
        Ok(T::from_raw(raw))
    }

    /// Isi seluruh buffer tujuan; panjangnya menentukan jumlah bytes
    #[inline]
    fn read_buffer<B>(&mut self, buf: &mut B) -> Result<()>
    where
        Self: Sized,
        B: AsMut<[u8]> + ?Sized,
    {
        self.read_bytes(buf.as_mut())
    }

    /// Baca `sockaddr_in`: raw copy lalu `family` dikonversi big-endian -> host
    fn read_sockaddr(&mut self) -> Result<SockAddrIn>
    where
        Self: Sized,
    {
        let raw: [u8; SOCKADDR_SIZE] = self.read()?;
        Ok(SockAddrIn::from_wire(raw, self.sockaddr_order()))
    }
}

impl<R: Reader + ?Sized> Reader for &mut R {
    #[inline]
    fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        (**self).read_bytes(dst)
    }

    #[inline]
    fn skip(&mut self, n: usize) -> Result<()> {
        (**self).skip(n)
    }

    #[inline]
    fn byte_count(&self) -> usize {
        (**self).byte_count()
    }

    #[inline]
    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn sockaddr_order(&self) -> SockAddrOrder {
        (**self).sockaddr_order()
    }
}

/// Reader di atas byte slice milik caller
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    buffer: &'a [u8],
    read_pos: usize,
    config: CursorConfig,
}

impl<'a> SliceReader<'a> {
    /// Membuat reader dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, CursorConfig::default())
    }

    pub fn with_config(buffer: &'a [u8], config: CursorConfig) -> Self {
        Self {
            buffer,
            read_pos: 0,
            config,
        }
    }

    /// Posisi cursor saat ini
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Bagian view yang belum dibaca (zero-copy)
    #[inline(always)]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.buffer[self.read_pos..]
    }

    /// Reserve `n` bytes berikutnya, atau length error tanpa memindah cursor
    #[inline(always)]
    fn take(&mut self, n: usize) -> Result<std::ops::Range<usize>> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::length(n, remaining, self.read_pos));
        }
        let start = self.read_pos;
        self.read_pos += n;
        Ok(start..self.read_pos)
    }
}

impl Reader for SliceReader<'_> {
    #[inline]
    fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        let range = self.take(dst.len())?;
        dst.copy_from_slice(&self.buffer[range]);
        Ok(())
    }

    #[inline]
    fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    #[inline(always)]
    fn byte_count(&self) -> usize {
        self.read_pos
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }

    fn sockaddr_order(&self) -> SockAddrOrder {
        self.config.sockaddr_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances_cursor() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0x1234u16.to_ne_bytes());
        buf.extend_from_slice(&0xDEAD_BEEFu32.to_ne_bytes());
        buf.push(0x7F);

        let mut reader = SliceReader::new(&buf);
        assert_eq!(reader.read::<u16>().unwrap(), 0x1234);
        assert_eq!(reader.byte_count(), 2);
        assert_eq!(reader.read::<u32>().unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read::<u8>().unwrap(), 0x7F);
        assert_eq!(reader.byte_count(), 7);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_short_read_leaves_cursor() {
        let buf = [1u8, 2, 3];
        let mut reader = SliceReader::new(&buf);
        reader.skip(1).unwrap();

        let err = reader.read::<u32>().unwrap_err();
        assert_eq!(
            err,
            Error::Length {
                requested: 4,
                remaining: 2,
                position: 1
            }
        );
        assert_eq!(reader.byte_count(), 1);
        assert_eq!(reader.read::<[u8; 2]>().unwrap(), [2, 3]);
    }

    #[test]
    fn test_skip_then_read() {
        let buf = [0xAAu8, 0xBB, 0xCC, 0xDD];
        let mut reader = SliceReader::new(&buf);
        reader.skip(3).unwrap();
        assert_eq!(reader.byte_count(), 3);
        assert_eq!(reader.read::<u8>().unwrap(), 0xDD);
        assert!(reader.skip(1).is_err());
        assert_eq!(reader.byte_count(), 4);
        assert_eq!(buf, [0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_read_buffer_uses_destination_len() {
        let buf = *b"HelloWorld";
        let mut reader = SliceReader::new(&buf);

        let mut hello = [0u8; 5];
        reader.read_buffer(&mut hello).unwrap();
        assert_eq!(&hello, b"Hello");

        let mut too_big = vec![0u8; 6];
        assert!(reader.read_buffer(&mut too_big).is_err());
        assert_eq!(reader.remaining_bytes(), b"World");
    }

    #[test]
    fn test_empty_view_fails() {
        let mut reader = SliceReader::new(&[]);
        assert!(reader.read::<u8>().is_err());
        assert!(reader.skip(1).is_err());
        let mut one = [0u8; 1];
        assert!(reader.read_bytes(&mut one).is_err());
        assert_eq!(reader.byte_count(), 0);
    }

    #[test]
    fn test_read_through_mut_ref() {
        fn decode_pair<R: Reader>(mut r: R) -> Result<(u8, u8)> {
            Ok((r.read()?, r.read()?))
        }

        let buf = [9u8, 8, 7];
        let mut reader = SliceReader::new(&buf);
        assert_eq!(decode_pair(&mut reader).unwrap(), (9, 8));
        assert_eq!(reader.byte_count(), 2);
    }

    #[test]
    fn test_read_sockaddr_converts_family() {
        let mut buf = [0u8; 16];
        buf[0..2].copy_from_slice(&[0x00, 0x02]);
        let mut reader = SliceReader::new(&buf);
        let sa = reader.read_sockaddr().unwrap();
        assert_eq!(sa.family, 2);
        assert_eq!(reader.byte_count(), SOCKADDR_SIZE);
    }

    #[test]
    fn test_truncated_sockaddr() {
        let buf = [0u8; 15];
        let mut reader = SliceReader::new(&buf);
        assert!(reader.read_sockaddr().is_err());
        assert_eq!(reader.byte_count(), 0);
    }
}
