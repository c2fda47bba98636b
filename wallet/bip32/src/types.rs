/// Size of a secret scalar and of a chain code in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a compressed group element in bytes.
pub const PUBLIC_KEY_SIZE: usize = 48;

/// Shortest accepted seed, 128 bits.
pub const MIN_SEED_BYTES: usize = 16;

/// Longest accepted seed, 512 bits.
pub const MAX_SEED_BYTES: usize = 64;

/// HMAC key used to turn a seed into the master key.
pub const MASTER_KEY_DOMAIN: &[u8] = b"Olympus seed";

/// Chain code: extension for both private and public keys which provides an
/// additional 256 bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// RIPEMD160(SHA256(..)) digest.
pub type Hash160 = [u8; 20];

/// Bytes which represent a private key.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Bytes which represent a compressed public key.
pub type PublicKeyBytes = [u8; PUBLIC_KEY_SIZE];

/// HMAC with SHA-512
pub type HmacSha512 = hmac::Hmac<sha2::Sha512>;
