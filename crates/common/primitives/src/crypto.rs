use crate::{
    bytes::ByteVector,
    constants::{BYTES_PER_COMMITMENT, BYTES_PER_PUBKEY, BYTES_PER_SIGNATURE},
};

/// Compressed BLS12-381 public key.
pub type BLSPubkey = ByteVector<BYTES_PER_PUBKEY>;

/// Compressed BLS12-381 signature.
pub type BLSSignature = ByteVector<BYTES_PER_SIGNATURE>;

/// KZG commitment to an EIP-4844 blob.
pub type KZGCommitment = ByteVector<BYTES_PER_COMMITMENT>;

/// Signature verification is an opaque capability handed to the core by its caller.
pub trait SignatureVerifier {
    type Error: std::error::Error;

    /// Verifies ``signature`` over ``message`` by ``pubkey``.
    ///
    /// # Returns
    /// * `Ok(true)` if the signature is valid, `Ok(false)` if verification fails, or `Err` if the
    ///   key or signature bytes cannot be decoded by the backend
    fn verify(
        &self,
        pubkey: &BLSPubkey,
        message: &[u8],
        signature: &BLSSignature,
    ) -> Result<bool, Self::Error>;
}
