//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! prepends it to the ciphertext.  `decrypt` splits the IV back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 16-byte IV | ciphertext (multiple of 16 bytes) ]

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::crypto::kdf::KEY_LEN;
use crate::errors::{PassVaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes.
const IV_LEN: usize = 16;

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext).
/// PKCS#7 always pads, so even an empty plaintext produces one full
/// ciphertext block.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    // Generate a random 16-byte IV. Never reused: a repeated IV under
    // the same key leaks plaintext structure in CBC mode.
    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext =
        Aes256CbcEnc::new(key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    // Prepend the IV so the caller only needs to store one blob.
    let mut container = Vec::with_capacity(IV_LEN + ciphertext.len());
    container.extend_from_slice(&iv);
    container.extend_from_slice(&ciphertext);
    container
}

/// Decrypt data that was produced by `encrypt`.
///
/// Expects the first 16 bytes to be the IV, followed by ciphertext
/// whose length is a multiple of the block size.  A container that is
/// structurally impossible (too short, ragged length) is reported as
/// `CorruptVault`; a padding failure — the wrong key and damaged
/// ciphertext are indistinguishable here — as `WrongPassword`.
pub fn decrypt(key: &[u8; KEY_LEN], container: &[u8]) -> Result<Vec<u8>> {
    // Minimum valid container: IV plus at least one ciphertext block.
    if container.len() < IV_LEN + BLOCK_LEN {
        return Err(PassVaultError::CorruptVault);
    }

    let (iv, ciphertext) = container.split_at(IV_LEN);

    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(PassVaultError::CorruptVault);
    }

    Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| PassVaultError::CorruptVault)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PassVaultError::WrongPassword)
}
