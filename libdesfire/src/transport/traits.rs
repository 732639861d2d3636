// libdesfire/src/transport/traits.rs

use crate::Result;

/// Half-duplex exchange primitive supplied by the host's contactless stack.
///
/// One call sends one frame and blocks until the card's reply (trailer
/// included) arrives or the transport gives up. Timeouts and tag loss are
/// the transport's to report; the engine passes them through untouched.
pub trait Transport {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(frame)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(frame)
    }
}

/// Adapter turning a closure into a [`Transport`].
pub struct FnTransport<F>(F);

impl<F> Transport for FnTransport<F>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (self.0)(frame)
    }
}

/// Wrap a `FnMut(&[u8]) -> Result<Vec<u8>>` as a transport, e.g. a thin
/// shim over a platform `IsoDep::transceive` binding.
pub fn from_fn<F>(f: F) -> FnTransport<F>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    FnTransport(f)
}
