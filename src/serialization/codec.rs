//! Encode/Decode contract untuk message layer
//!
//! Message type mendefinisikan encode/decode murni lewat `Writer`/`Reader`,
//! tidak pernah menyentuh raw pointer.

use bytes::Bytes;

use super::reader::Reader;
use super::sockaddr::{SockAddrIn, SOCKADDR_SIZE};
use super::wire::Wire;
use super::writer::{BytesWriter, Writer};
use crate::error::Result;

pub trait Encode {
    /// Ukuran hasil encode dalam bytes
    fn encoded_len(&self) -> usize;

    fn encode_to<W: Writer>(&self, dst: &mut W) -> Result<()>;

    /// Encode ke buffer baru berukuran tepat `encoded_len()`
    fn to_bytes(&self) -> Result<Bytes> {
        let len = self.encoded_len();
        let mut writer = BytesWriter::with_capacity(len, len);
        self.encode_to(&mut writer)?;
        Ok(writer.freeze())
    }
}

pub trait Decode: Sized {
    fn decode_from<R: Reader>(src: &mut R) -> Result<Self>;
}

impl<T: Wire> Encode for T {
    #[inline]
    fn encoded_len(&self) -> usize {
        T::SIZE
    }

    #[inline]
    fn encode_to<W: Writer>(&self, dst: &mut W) -> Result<()> {
        dst.write(self)
    }
}

impl<T: Wire> Decode for T {
    #[inline]
    fn decode_from<R: Reader>(src: &mut R) -> Result<Self> {
        src.read()
    }
}

impl Encode for SockAddrIn {
    fn encoded_len(&self) -> usize {
        SOCKADDR_SIZE
    }

    fn encode_to<W: Writer>(&self, dst: &mut W) -> Result<()> {
        dst.write_sockaddr(self)
    }
}

impl Decode for SockAddrIn {
    fn decode_from<R: Reader>(src: &mut R) -> Result<Self> {
        src.read_sockaddr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::reader::SliceReader;
    use crate::serialization::sockaddr::AF_INET;

    #[test]
    fn test_primitive_to_bytes() {
        let bytes = 0xCAFEu16.to_bytes().unwrap();
        assert_eq!(&bytes[..], &0xCAFEu16.to_ne_bytes());
    }

    #[test]
    fn test_sockaddr_goes_through_override() {
        let sa = SockAddrIn::new(AF_INET, 2222, 0x0102_0304);
        let bytes = sa.to_bytes().unwrap();
        assert_eq!(bytes.len(), SOCKADDR_SIZE);
        assert_eq!(&bytes[0..2], &[0x00, 0x02]);

        let mut reader = SliceReader::new(&bytes);
        assert_eq!(SockAddrIn::decode_from(&mut reader).unwrap(), sa);
    }
}
