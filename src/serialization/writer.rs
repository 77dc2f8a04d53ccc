//! Bounds-checked Writer
//!
//! Tulis sekuensial ke buffer output milik caller. Dua implementasi:
//! - `SliceWriter`: kapasitas tetap (mis. frame buffer network)
//! - `BytesWriter`: growable di atas `BytesMut`, dengan batas keras `limit`

use bytes::{BufMut, Bytes, BytesMut};

use super::sockaddr::SockAddrIn;
use super::wire::Wire;
use crate::config::{CursorConfig, SockAddrOrder};
use crate::error::{Error, Result};

/// Interface generic untuk menulis data binary
pub trait Writer {
    /// Copy seluruh `src` ke posisi cursor.
    ///
    /// Primitive yang dipakai semua operasi tulis lainnya.
    fn write_bytes(&mut self, src: &[u8]) -> Result<()>;

    /// Jumlah bytes yang sudah ditulis
    fn byte_count(&self) -> usize;

    /// Sisa ruang dalam bytes
    fn remaining(&self) -> usize;

    /// Field `sockaddr_in` mana yang dikonversi ke network byte order
    fn sockaddr_order(&self) -> SockAddrOrder {
        SockAddrOrder::default()
    }

    /// Tulis satu nilai fixed-size, byte order tidak diubah
    #[inline]
    fn write<T: Wire>(&mut self, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        self.write_bytes(value.to_raw().as_ref())
    }

    /// Tulis seluruh isi buffer sumber
    #[inline]
    fn write_buffer<B>(&mut self, buf: &B) -> Result<()>
    where
        Self: Sized,
        B: AsRef<[u8]> + ?Sized,
    {
        self.write_bytes(buf.as_ref())
    }

    /// Tulis `sockaddr_in` lewat scratch copy dengan `family` big-endian.
    ///
    /// Nilai milik caller tidak diubah.
    fn write_sockaddr(&mut self, sa: &SockAddrIn) -> Result<()>
    where
        Self: Sized,
    {
        let raw = sa.to_wire(self.sockaddr_order());
        self.write_bytes(&raw)
    }
}

impl<W: Writer + ?Sized> Writer for &mut W {
    #[inline]
    fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        (**self).write_bytes(src)
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

/// Writer kapasitas tetap di atas slice milik caller
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buffer: &'a mut [u8],
    write_pos: usize,
    config: CursorConfig,
}

impl<'a> SliceWriter<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::with_config(buffer, CursorConfig::default())
    }

    pub fn with_config(buffer: &'a mut [u8], config: CursorConfig) -> Self {
        Self {
            buffer,
            write_pos: 0,
            config,
        }
    }

    /// Bagian buffer yang sudah ditulis
    #[inline(always)]
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }
}

impl Writer for SliceWriter<'_> {
    #[inline]
    fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        let remaining = self.remaining();
        if src.len() > remaining {
            return Err(Error::length(src.len(), remaining, self.write_pos));
        }
        let end = self.write_pos + src.len();
        self.buffer[self.write_pos..end].copy_from_slice(src);
        self.write_pos = end;
        Ok(())
    }

    #[inline(always)]
    fn byte_count(&self) -> usize {
        self.write_pos
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.write_pos)
    }

    fn sockaddr_order(&self) -> SockAddrOrder {
        self.config.sockaddr_order
    }
}

/// Growable writer untuk pesan outbound.
///
/// Buffer boleh tumbuh, tapi tidak pernah melewati `limit`.
#[derive(Debug)]
pub struct BytesWriter {
    buffer: BytesMut,
    limit: usize,
    config: CursorConfig,
}

impl BytesWriter {
    /// Membuat writer kosong dengan batas `limit` bytes
    pub fn new(limit: usize) -> Self {
        Self::with_capacity(0, limit)
    }

    /// Pre-allocate `capacity` bytes (dipotong ke `limit`)
    pub fn with_capacity(capacity: usize, limit: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity.min(limit)),
            limit,
            config: CursorConfig::default(),
        }
    }

    pub fn config(mut self, config: CursorConfig) -> Self {
        self.config = config;
        self
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Reset untuk reuse; alokasi dipertahankan
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Selesai menulis, ambil hasilnya sebagai `Bytes`
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

impl Writer for BytesWriter {
    #[inline]
    fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        let remaining = self.remaining();
        if src.len() > remaining {
            return Err(Error::length(src.len(), remaining, self.buffer.len()));
        }
        self.buffer.put_slice(src);
        Ok(())
    }

    #[inline(always)]
    fn byte_count(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.buffer.len())
    }

    fn sockaddr_order(&self) -> SockAddrOrder {
        self.config.sockaddr_order
    }
}
