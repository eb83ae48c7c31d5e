//! AES-256-GCM sealing of the stored bearer token
//!
//! The key is derived with Argon2id from a fingerprint of the current
//! machine, so a copied database is useless elsewhere.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use argon2::Argon2;
use loyalty_core::{Error, Result};
use rand::RngCore;

const MACHINE_KEY_SALT: &[u8] = b"loyalty-profile-session-v1";

/// Ciphertext plus the nonce it was sealed with
#[derive(Debug, Clone)]
pub struct SealedToken {
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; 12],
}

/// Seals and opens session tokens
pub struct SessionCipher {
    cipher: Aes256Gcm,
}

impl SessionCipher {
    /// `key` must be exactly 32 bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| {
            Error::EncryptionError(format!("Key must be 32 bytes, got {}", key.len()))
        })?;
        Ok(Self { cipher })
    }

    /// Cipher keyed from a passphrase instead of the machine fingerprint
    pub fn from_passphrase(passphrase: &str, salt: &[u8]) -> Result<Self> {
        let key = stretch_key(passphrase, salt)?;
        Self::new(&key)
    }

    /// Seal `token` under a fresh random nonce
    pub fn seal(&self, token: &str) -> Result<SealedToken> {
        let mut nonce = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), token.as_bytes())
            .map_err(|e| Error::EncryptionError(e.to_string()))?;

        Ok(SealedToken { ciphertext, nonce })
    }

    pub fn open(&self, sealed: &SealedToken) -> Result<String> {
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&sealed.nonce), sealed.ciphertext.as_ref())
            .map_err(|e| Error::EncryptionError(e.to_string()))?;

        String::from_utf8(plaintext).map_err(|e| Error::EncryptionError(e.to_string()))
    }
}

fn stretch_key(secret: &str, salt: &[u8]) -> Result<[u8; 32]> {
    let mut key = [0u8; 32];
    Argon2::default()
        .hash_password_into(secret.as_bytes(), salt, &mut key)
        .map_err(|e| Error::EncryptionError(format!("Argon2 key derivation failed: {}", e)))?;
    Ok(key)
}

/// Machine id combined with the host name.
///
/// Falls back to fixed strings when either is unavailable.
pub fn machine_fingerprint() -> String {
    let machine_id = machine_uid::get().unwrap_or_else(|_| "no-machine-id".to_string());

    let hostname = std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "unknown-host".to_string());

    format!("loyalty-{}-{}", machine_id, hostname)
}

/// 32-byte key that is stable on this machine and differs on others
pub fn derive_machine_key() -> Result<[u8; 32]> {
    stretch_key(&machine_fingerprint(), MACHINE_KEY_SALT)
}
