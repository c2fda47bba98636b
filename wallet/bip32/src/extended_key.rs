//! Extended keys and the derivation engine

use crate::{
    Bls12381, ChainCode, ChildNumber, Depth, DerivationPath, Error, ExtendedKeyAttrs, Group, HmacSha512, KEY_SIZE, KeyFingerprint,
    MASTER_KEY_DOMAIN, MAX_SEED_BYTES, MIN_SEED_BYTES, PrivateKey, PrivateKeyBytes, PublicKey, PublicKeyBytes, Result,
    address::{encode_address, encode_wif},
    network::Prefixes,
    xkey::{KeyBytes, SerializedKey},
};
use hmac::Mac;
use rayon::prelude::*;
use std::fmt::{self, Debug, Display};
use std::ops::Range;
use std::str::FromStr;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Key material of an extended key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Key<G: Group> {
    Private(PrivateKey<G>),
    Public(PublicKey<G>),
}

impl<G: Group> Key<G> {
    pub fn public_key(&self) -> &PublicKey<G> {
        match self {
            Key::Private(private_key) => private_key.public_key(),
            Key::Public(public_key) => public_key,
        }
    }
}

/// Node of a hierarchical deterministic key tree.
///
/// Keys are immutable values: derivation and neutering return new keys and
/// leave the receiver untouched. A child only records its parent's
/// fingerprint, never the parent itself.
#[derive(Clone)]
pub struct ExtendedKey<G: Group = Bls12381> {
    key: Key<G>,
    attrs: ExtendedKeyAttrs,
    prefixes: Prefixes,
}

impl<G: Group> ExtendedKey<G> {
    /// Maximum derivation depth.
    pub const MAX_DEPTH: Depth = u8::MAX;

    /// Create the root extended private key for the given seed value.
    ///
    /// Fails with [`Error::UnusableSeed`] when the seed does not produce a
    /// valid scalar. The seed is not altered or retried.
    pub fn new_master<S>(seed: S, prefixes: &Prefixes) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        let seed = seed.as_ref();
        if !(MIN_SEED_BYTES..=MAX_SEED_BYTES).contains(&seed.len()) {
            return Err(Error::SeedLength(seed.len()));
        }

        let mut hmac = HmacSha512::new_from_slice(MASTER_KEY_DOMAIN)?;
        hmac.update(seed);

        let result = hmac.finalize().into_bytes();
        let (secret_key, chain_code) = result.split_at(KEY_SIZE);
        let secret_key = Zeroizing::new(PrivateKeyBytes::try_from(secret_key)?);

        if G::scalar_from_bytes(&secret_key).is_none() {
            log::debug!("seed rejected, master key material is outside the scalar range");
            return Err(Error::UnusableSeed);
        }
        let private_key = PrivateKey::from_scalar(G::derive_secret(&secret_key)?);

        Ok(ExtendedKey { key: Key::Private(private_key), attrs: ExtendedKeyAttrs::root(chain_code.try_into()?), prefixes: *prefixes })
    }

    /// Derive the child key at `child_number`.
    ///
    /// Fails with [`Error::InvalidChild`] when the index yields no valid key;
    /// the caller decides whether to move on to the next index.
    pub fn child(&self, child_number: ChildNumber) -> Result<Self> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        match (&self.key, child_number.is_hardened()) {
            (Key::Public(_), true) => return Err(Error::HardenedFromPublic),
            (Key::Private(private_key), true) => {
                hmac.update(&[0]);
                hmac.update(&private_key.to_bytes()[..]);
            }
            (key, false) => hmac.update(&key.public_key().to_bytes()),
        }
        hmac.update(&child_number.to_bytes());

        let result = hmac.finalize().into_bytes();
        let (child_key, chain_code) = result.split_at(KEY_SIZE);

        let tweak = G::scalar_from_bytes(child_key.try_into()?).ok_or_else(|| {
            log::trace!("child {child_number} of {} is outside the scalar range", hex::encode(self.fingerprint()));
            Error::InvalidChild
        })?;

        let key = match &self.key {
            Key::Private(private_key) => Key::Private(private_key.derive_child(&tweak)?),
            Key::Public(public_key) => Key::Public(public_key.derive_child(&tweak)?),
        };

        let attrs = ExtendedKeyAttrs { depth, parent_fingerprint: self.fingerprint(), child_number, chain_code: chain_code.try_into()? };

        Ok(ExtendedKey { key, attrs, prefixes: self.prefixes })
    }

    /// Derive every step of `path` in turn, stopping at the first failure.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self.clone(), |key, child_number| key.child(child_number))
    }

    /// Derive the children at every index in `range` in parallel.
    ///
    /// Each index keeps its own result, failed indices are neither skipped nor retried.
    pub fn derive_children(&self, range: Range<u32>) -> Vec<(ChildNumber, Result<Self>)> {
        range.into_par_iter().map(ChildNumber).map(|child_number| (child_number, self.child(child_number))).collect()
    }

    /// Public-only copy of this key. A public key is returned unchanged.
    pub fn neuter(&self) -> Self {
        match &self.key {
            Key::Public(_) => self.clone(),
            Key::Private(private_key) => ExtendedKey {
                key: Key::Public(private_key.public_key().clone()),
                attrs: self.attrs.clone(),
                prefixes: self.prefixes,
            },
        }
    }

    /// Bech32 text form under the network's extended private or public tag.
    pub fn serialize(&self) -> Result<Zeroizing<String>> {
        let key_bytes = match &self.key {
            Key::Private(private_key) => KeyBytes::Private(private_key.to_bytes()),
            Key::Public(public_key) => KeyBytes::Public(public_key.to_bytes()),
        };
        SerializedKey { attrs: self.attrs.clone(), key_bytes }.encode(&self.prefixes)
    }

    /// Parse a key serialized for the network described by `prefixes`.
    pub fn from_string(text: &str, prefixes: &Prefixes) -> Result<Self> {
        Self::from_serialized(SerializedKey::decode(text, prefixes)?, prefixes)
    }

    fn from_serialized(serialized: SerializedKey, prefixes: &Prefixes) -> Result<Self> {
        let key = match &serialized.key_bytes {
            KeyBytes::Private(secret) => Key::Private(PrivateKey::from_bytes(secret)?),
            KeyBytes::Public(public) => Key::Public(PublicKey::from_bytes(public)?),
        };
        Ok(ExtendedKey { key, attrs: serialized.attrs, prefixes: *prefixes })
    }

    /// Address of the public key: Hash160 with a payload checksum.
    pub fn address(&self) -> Result<String> {
        encode_address(&self.public_key().hash160(), &self.prefixes)
    }

    /// Wallet import format of the private scalar.
    pub fn wif(&self) -> Result<Zeroizing<String>> {
        encode_wif(&self.private_key()?.to_bytes(), &self.prefixes)
    }

    pub fn key(&self) -> &Key<G> {
        &self.key
    }

    pub fn is_private(&self) -> bool {
        matches!(self.key, Key::Private(_))
    }

    pub fn private_key(&self) -> Result<&PrivateKey<G>> {
        match &self.key {
            Key::Private(private_key) => Ok(private_key),
            Key::Public(_) => Err(Error::NotPrivateKey),
        }
    }

    /// Public key, computed once and cached for private keys.
    pub fn public_key(&self) -> &PublicKey<G> {
        self.key.public_key()
    }

    pub fn private_key_bytes(&self) -> Result<Zeroizing<PrivateKeyBytes>> {
        Ok(self.private_key()?.to_bytes())
    }

    pub fn public_key_bytes(&self) -> PublicKeyBytes {
        self.public_key().to_bytes()
    }

    /// Fingerprint of this key, recorded by its children.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }

    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    pub fn depth(&self) -> Depth {
        self.attrs.depth
    }

    pub fn parent_fingerprint(&self) -> KeyFingerprint {
        self.attrs.parent_fingerprint
    }

    pub fn child_number(&self) -> ChildNumber {
        self.attrs.child_number
    }

    pub fn chain_code(&self) -> &ChainCode {
        &self.attrs.chain_code
    }

    pub fn network(&self) -> &Prefixes {
        &self.prefixes
    }
}

impl<G: Group> ConstantTimeEq for ExtendedKey<G> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let key = match (&self.key, &other.key) {
            (Key::Private(a), Key::Private(b)) => a.ct_eq(b),
            (Key::Public(a), Key::Public(b)) => a.to_bytes()[..].ct_eq(&b.to_bytes()[..]),
            _ => Choice::from(0),
        };

        key & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint[..].ct_eq(&other.attrs.parent_fingerprint[..])
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code[..].ct_eq(&other.attrs.chain_code[..])
            & Choice::from((self.prefixes == other.prefixes) as u8)
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<G: Group> PartialEq for ExtendedKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<G: Group> Eq for ExtendedKey<G> {}

impl<G: Group> Debug for ExtendedKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key: &dyn Debug = match &self.key {
            Key::Private(_) => &"...",
            Key::Public(public_key) => public_key,
        };
        f.debug_struct("ExtendedKey").field("key", key).field("attrs", &self.attrs).field("prefixes", &self.prefixes).finish()
    }
}

impl<G: Group> Display for ExtendedKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.serialize().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Parses a key of any registered network.
impl<G: Group> FromStr for ExtendedKey<G> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (serialized, prefixes) = SerializedKey::decode_registered(text)?;
        Self::from_serialized(serialized, prefixes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Network, decode_address, decode_wif, toy::ToyGroup};
    use hex_literal::hex;

    const SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const HARDENED: u32 = ChildNumber::HARDENED_FLAG;

    // cspell:disable
    const MASTER_XPRV: &str = "xprv1qqqqqqqqqqqqqqp98sty9l9tkryvgcl8q8h6ahfp4lmr8mrxcflsd7pz30yr7vedhcqr58tq6tazq8r9m03dmyp7cz9c0z0q7rgc42s58tjllus7hwqnd9qv08jdt";
    const MASTER_XPUB: &str = "xpub1qqqqqqqqqqqqqqp98sty9l9tkryvgcl8q8h6ahfp4lmr8mrxcflsd7pz30yr7vedh6p6fdg9ms39rtexlr4krjx29nkp8fu5f6jd2le5tyrjjhvvyyze9hy9f9jxh0g36dfdqt02gcksgfqkns0ds";
    const MASTER_TPRV: &str = "tprv1qqqqqqqqqqqqqqp98sty9l9tkryvgcl8q8h6ahfp4lmr8mrxcflsd7pz30yr7vedhcqr58tq6tazq8r9m03dmyp7cz9c0z0q7rgc42s58tjllus7hwqnd9qk39y6w";

    /// m/0'/0/3'/2/1000000001 on SEED
    const PATH_VECTORS: [(&str, &str); 5] = [
        (
            "xprv1qx3tpq9msqqqqq95h0saddfr2stu267qjynkjlvmlpflhq3yc3g40r3ffxjsq43ggcqq5apswf4gc6gayjt6q436zpk3jutxfn3dus6l9ydphzud3p8lp4cgs4ucr",
            "xpub1qx3tpq9msqqqqq95h0saddfr2stu267qjynkjlvmlpflhq3yc3g40r3ffxjsq43gg697p5gh38u6vrhk538ntjfch0lr5rvfhwj8tgp3vxgqurs84feq42dx7ckdr7a9ye8w503x49twjdc43qjyy",
        ),
        (
            "xprv1qtyf475hqqqqqq8drvrq238zrc88nsgyz8n9a5raaepk009jrtdvevqadxfcpua3myqquj996vvrrnnkpzkvk92cupm67w250p46jph63ru7tmxsd5zeepsv9hwll",
            "xpub1qtyf475hqqqqqq8drvrq238zrc88nsgyz8n9a5raaepk009jrtdvevqadxfcpua3mxce8q8nm0v05aken5vvetw5r04yzqsru6xjezhd7xls9kay7z8339hxtpfsesttrg78fah56r0wvfcsylp6p",
        ),
        (
            "xprv1qdp6ppf5sqqqqqc5d36esk5t8h7fj5ed9fuc5pvsgku080cw2eye79sqvpshyadkdyq905scqp32hgs48j58gegk4q78cdk0as9m69nmhf69m3gxrw7e03c6kpg5q",
            "xpub1qdp6ppf5sqqqqqc5d36esk5t8h7fj5ed9fuc5pvsgku080cw2eye79sqvpshyadkdxydref0lfpu6ldwgvqwmkplfarzfwpu8qxxp3c0w6u64lh8daszn0wur0m7c2mtmzpms6gq69l7u4suw4wlu",
        ),
        (
            "xprv1qn023glsqqqqqqssgndwf2zzz6jgczn7vunp8u80k3z5xqygjn4ed2e2styvxcuxdyqqpu83v9l00tgvcuw0zs05qxfr4wunx3q8tmyp2w3c6d4n89h2kzs4jf9aw",
            "xpub1qn023glsqqqqqqssgndwf2zzz6jgczn7vunp8u80k3z5xqygjn4ed2e2styvxcuxdxqevln3r44m0ywug9ehxddng5t2wxyj596ns662mgngg67du92r3pchhuwd6hs8ykmye9d4na2jr8sdeks8t",
        ),
        (
            "xprv1qklduzsg8wdv5qtrvt9rvxeffsmpzk0nqc2cm6zmmjqv7zkrd7t5znaep972qupt5qqpfr3ptrssqhqpf0xvxf604w279ak7tycavgprwtqfkluhr3ffc3sdn5fpz",
            "xpub1qklduzsg8wdv5qtrvt9rvxeffsmpzk0nqc2cm6zmmjqv7zkrd7t5znaep972qupt5zv26hk9pdt3snp9rt0lzd0238xujc8cq4wxh4n4q89gv0j8t0nzt5psmrwcwxtnjd3l58fdl8wyx7ga7nxek",
        ),
    ];
    // cspell:enable

    fn master() -> ExtendedKey {
        ExtendedKey::new_master(SEED, Network::Mainnet.prefixes()).unwrap()
    }

    #[test]
    fn test_master_vector() {
        let master = master();
        assert!(master.is_private());
        assert_eq!(master.depth(), 0);
        assert_eq!(master.parent_fingerprint(), [0u8; 4]);
        assert_eq!(master.child_number(), ChildNumber(0));
        assert_eq!(master.chain_code(), &hex!("253c1642fcabb0c8c463e701efaedd21aff633ec66c27f06f8228bc83f332dbe"));
        assert_eq!(*master.private_key_bytes().unwrap(), hex!("3a1d60d2fa201c65dbe2dd903ec08b8789e0f0d18aaa143ae5fff21ebb813694"));
        assert_eq!(
            master.public_key_bytes(),
            hex!("83a4b505dc2251af26f8eb61c8ca2cec13a7944ea4d57f345907295d8c210592dc8549646bbd11d352d02dea462d0424")
        );
        assert_eq!(master.fingerprint(), hex!("a2b080bb"));

        assert_eq!(master.serialize().unwrap().as_str(), MASTER_XPRV);
        assert_eq!(master.to_string(), MASTER_XPRV);
        assert_eq!(master.neuter().serialize().unwrap().as_str(), MASTER_XPUB);

        // cspell:disable
        assert_eq!(master.address().unwrap(), "bc152cgpwcyjvrvfhryvjczfwey6htctr092cmqx0c89amtq");
        assert_eq!(master.wif().unwrap().as_str(), "wif18gwkp5h6yqwxtklzmkgrasyts7y7pux3324pgwh9llepawupx62xxft39u3pa3tp");
        // cspell:enable
    }

    #[test]
    fn test_master_is_deterministic() {
        assert_eq!(master(), master());

        // same seed, same children
        let hardened = ChildNumber(HARDENED);
        let (a, b) = (master().child(hardened).unwrap(), master().child(hardened).unwrap());
        assert_eq!(*a.private_key_bytes().unwrap(), *b.private_key_bytes().unwrap());
        assert_eq!(a.chain_code(), b.chain_code());
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());

        let seed = hex!(
            "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2"
            "9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542"
        );
        let other = ExtendedKey::<Bls12381>::new_master(seed, Network::Mainnet.prefixes()).unwrap();
        assert_ne!(master(), other);
        assert_ne!(master().chain_code(), other.chain_code());
    }

    #[test]
    fn test_custom_prefixes_display() {
        let custom = Prefixes::new("oprv", "opub", "ob", "owif").unwrap();
        let master = ExtendedKey::<Bls12381>::new_master(SEED, &custom).unwrap();

        let text = master.to_string();
        assert!(text.starts_with("oprv1"));
        assert_eq!(ExtendedKey::<Bls12381>::from_string(&text, &custom).unwrap(), master);
        assert!(master.neuter().to_string().starts_with("opub1"));
        assert!(master.address().unwrap().starts_with("ob1"));
        // unregistered prefixes are not picked up by plain parsing
        assert!(text.parse::<ExtendedKey>().is_err());
    }

    #[test]
    fn test_master_64_byte_seed() {
        let seed = hex!(
            "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2"
            "9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542"
        );
        let master = ExtendedKey::<Bls12381>::new_master(seed, Network::Mainnet.prefixes()).unwrap();
        // cspell:disable
        assert_eq!(
            master.to_string(),
            "xprv1qqqqqqqqqqqqqqy2dh9kldreyy8jhmvg9qsq7nmy9avv95ha9vd8nnwn045dqdgj4qq99md3h5yfhkcmacruswkexnnynpkdtr8n625ymn0g78a5h08xdeqhrj46h"
        );
        assert_eq!(
            master.neuter().to_string(),
            "xpub1qqqqqqqqqqqqqqy2dh9kldreyy8jhmvg9qsq7nmy9avv95ha9vd8nnwn045dqdgj4zxkgvnr9zps4a27z5xdfx6ldxa67z679apmkc7pkstnzfmwwmhpkn7ck55zkkam23hlk994u25llvgnx8ucg"
        );
        // cspell:enable
    }

    #[test]
    fn test_master_rejects_seeds() {
        let mainnet = Network::Mainnet.prefixes();
        assert_eq!(ExtendedKey::<Bls12381>::new_master([0u8; 15], mainnet).err(), Some(Error::SeedLength(15)));
        assert_eq!(ExtendedKey::<Bls12381>::new_master([0u8; 65], mainnet).err(), Some(Error::SeedLength(65)));

        // HMAC output of this seed lies above the scalar field order
        let seed = hex!(
            "4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4ac"
            "ba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be"
        );
        assert_eq!(ExtendedKey::<Bls12381>::new_master(seed, mainnet).err(), Some(Error::UnusableSeed));
    }

    #[test]
    fn test_path_vectors() {
        let path: DerivationPath = "m/0'/0/3'/2/1000000001".parse().unwrap();
        let mut key = master();
        for (child_number, (xprv, xpub)) in path.iter().zip(PATH_VECTORS) {
            let parent_fingerprint = key.fingerprint();
            key = key.child(child_number).unwrap();
            assert_eq!(key.child_number(), child_number);
            assert_eq!(key.parent_fingerprint(), parent_fingerprint);
            assert_eq!(key.to_string(), xprv);
            assert_eq!(key.neuter().to_string(), xpub);
        }
        assert_eq!(key.depth(), 5);
        assert_eq!(master().derive_path(&path).unwrap(), key);
    }

    #[test]
    fn test_first_hardened_child_vector() {
        let child = master().child(ChildNumber(HARDENED)).unwrap();
        assert_eq!(child.to_string(), PATH_VECTORS[0].0);
        assert_eq!(child.parent_fingerprint(), hex!("a2b080bb"));
        // cspell:disable
        assert_eq!(child.address().unwrap(), "bc1ezd049cygkw8t39gam6a59xtw8q36w3qxw59czc35sgav");
        // cspell:enable
    }

    #[test]
    fn test_public_derivation_matches_private() {
        // m/1 from the private and from the public master
        let master = master();
        let private_child = master.child(ChildNumber(1)).unwrap();
        let public_child = master.neuter().child(ChildNumber(1)).unwrap();
        assert!(!public_child.is_private());
        assert_eq!(private_child.neuter(), public_child);
        // cspell:disable
        assert_eq!(
            public_child.to_string(),
            "xpub1qx3tpq9mqqqqqqwps0z324a6gzk3jyaa2mmrs96cn87nnea4wru72tqx5tet8pcx2wqhhpkqhh4naga4eewm3cetzq6nmslqaaaave36yt27qtanlwaksqppqf0a8u5hfu6ndaw45d55p4gzjaa86"
        );
        // cspell:enable

        // m/0'/0 from the m/0' xpub
        let hardened: ExtendedKey = PATH_VECTORS[0].1.parse().unwrap();
        assert_eq!(hardened.child(ChildNumber(0)).unwrap().to_string(), PATH_VECTORS[1].1);
    }

    #[test]
    fn test_invalid_children() {
        let master = master();
        assert_eq!(master.child(ChildNumber(2)).err(), Some(Error::InvalidChild));
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        assert_eq!(master.derive_path(&path).err(), Some(Error::InvalidChild));

        // the engine never moves on to another index by itself
        let children = master.derive_children(0..8);
        let valid: Vec<u32> = children.iter().filter(|(_, child)| child.is_ok()).map(|(child_number, _)| child_number.0).collect();
        assert_eq!(valid, vec![0, 1]);
        for (child_number, child) in children {
            match child {
                Ok(child) => assert_eq!(child, master.child(child_number).unwrap()),
                Err(err) => assert_eq!(err, Error::InvalidChild),
            }
        }

        let hardened = master.derive_children(HARDENED..HARDENED + 8);
        let valid: Vec<u32> = hardened.iter().filter(|(_, child)| child.is_ok()).map(|(child_number, _)| child_number.index()).collect();
        assert_eq!(valid, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_hardened_from_public() {
        let public = master().neuter();
        let before = public.clone();
        assert_eq!(public.child(ChildNumber(HARDENED)).err(), Some(Error::HardenedFromPublic));
        assert_eq!(public, before);
    }

    #[test]
    fn test_neuter() {
        let master = master();
        let public = master.neuter();
        assert!(master.is_private());
        assert_eq!(public.neuter(), public);
        assert_eq!(public.attrs(), master.attrs());
        assert_eq!(public.public_key(), master.public_key());
        assert_eq!(public.wif().err(), Some(Error::NotPrivateKey));
        assert_eq!(public.private_key_bytes().err(), Some(Error::NotPrivateKey));
        assert_eq!(public.address().unwrap(), master.address().unwrap());
    }

    #[test]
    fn test_parse_round_trip() {
        let mainnet = Network::Mainnet.prefixes();
        let master = master();
        let parsed = ExtendedKey::<Bls12381>::from_string(MASTER_XPRV, mainnet).unwrap();
        assert_eq!(parsed, master);
        assert_eq!(ExtendedKey::<Bls12381>::from_string(MASTER_XPUB, mainnet).unwrap(), master.neuter());

        for (xprv, xpub) in PATH_VECTORS {
            let private: ExtendedKey = xprv.parse().unwrap();
            let public: ExtendedKey = xpub.parse().unwrap();
            assert_eq!(private.neuter(), public);
            assert_eq!(private.to_string(), xprv);
            assert_eq!(public.to_string(), xpub);
        }

        // upper case text is the same key
        assert_eq!(MASTER_XPRV.to_uppercase().parse::<ExtendedKey>().unwrap(), master);
    }

    #[test]
    fn test_parse_networks() {
        let master = ExtendedKey::<Bls12381>::new_master(SEED, Network::Testnet.prefixes()).unwrap();
        assert_eq!(master.to_string(), MASTER_TPRV);
        assert_eq!(master.network().network(), Some(Network::Testnet));

        let parsed: ExtendedKey = MASTER_TPRV.parse().unwrap();
        assert_eq!(parsed, master);
        assert_ne!(parsed, MASTER_XPRV.parse::<ExtendedKey>().unwrap());

        let err = ExtendedKey::<Bls12381>::from_string(MASTER_TPRV, Network::Mainnet.prefixes()).unwrap_err();
        assert_eq!(err, Error::NetworkMismatch("tprv".into()));
        assert!(!err.is_checksum_failure());

        // addresses and WIF strings carry the network too
        let wif = master.wif().unwrap();
        assert!(wif.starts_with("twif1"));
        assert_eq!(*decode_wif::<Bls12381>(&wif, Network::Testnet.prefixes()).unwrap(), *master.private_key_bytes().unwrap());
        let address = master.address().unwrap();
        assert_eq!(decode_address(&address, Network::Testnet.prefixes()).unwrap(), master.public_key().hash160());
    }

    #[test]
    fn test_parse_rejects() {
        let mainnet = Network::Mainnet.prefixes();

        // one character changed
        let corrupted = MASTER_XPRV.replacen("xprv1qqqqqqqqqqqqqqp98", "xprv1qqqqqqqqqqqqqqp99", 1);
        let err = ExtendedKey::<Bls12381>::from_string(&corrupted, mainnet).unwrap_err();
        assert_eq!(err, Error::Bech32(olympus_bech32::Error::BadChecksum));
        assert!(err.is_checksum_failure());

        // scalar equal to the group order
        let mut payload = vec![0u8; crate::PRIVATE_PAYLOAD_SIZE - 32];
        payload.extend_from_slice(&hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"));
        assert_eq!(payload.len(), crate::PRIVATE_PAYLOAD_SIZE);
        let text = olympus_bech32::encode("xprv", &payload).unwrap();
        assert_eq!(ExtendedKey::<Bls12381>::from_string(&text, mainnet).err(), Some(Error::InvalidKey));

        // compressed element that is not on the curve
        let mut payload = vec![0u8; crate::PUBLIC_PAYLOAD_SIZE];
        payload[41] = 0x80;
        payload[88] = 0x01;
        let text = olympus_bech32::encode("xpub", &payload).unwrap();
        assert_eq!(ExtendedKey::<Bls12381>::from_string(&text, mainnet).err(), Some(Error::InvalidKey));

        assert!(matches!("xprv1".parse::<ExtendedKey>(), Err(Error::Bech32(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", master());
        assert!(!debug.contains("3a1d60d2"));
        assert!(!debug.contains("58, 29, 96"));
    }

    #[test]
    fn test_depth_limit() {
        let mut key = ExtendedKey::<ToyGroup>::new_master(SEED, Network::Mainnet.prefixes()).unwrap();
        for depth in 1..=255u32 {
            key = key.child(ChildNumber(depth % 2)).unwrap();
        }
        assert_eq!(key.depth(), ExtendedKey::<ToyGroup>::MAX_DEPTH);
        assert_eq!(key.child(ChildNumber(0)).err(), Some(Error::Depth));
        assert_eq!(key.neuter().child(ChildNumber(0)).err(), Some(Error::Depth));

        let round_trip = ExtendedKey::<ToyGroup>::from_string(&key.serialize().unwrap(), Network::Mainnet.prefixes()).unwrap();
        assert_eq!(round_trip, key);
    }

    #[test]
    fn test_toy_public_derivation_matches_private() {
        let master = ExtendedKey::<ToyGroup>::new_master([7u8; 32], Network::Testnet.prefixes()).unwrap();
        let public = master.neuter();
        for index in 0..32 {
            let child_number = ChildNumber(index);
            let private_child = master.child(child_number).unwrap();
            let public_child = public.child(child_number).unwrap();
            assert_eq!(private_child.neuter(), public_child);
            assert_eq!(private_child.address().unwrap(), public_child.address().unwrap());

            let grandchild = ChildNumber(index + 1);
            assert_eq!(private_child.child(grandchild).unwrap().neuter(), public_child.child(grandchild).unwrap());
        }

        let hardened = master.child(ChildNumber(HARDENED)).unwrap();
        assert_ne!(hardened.neuter(), public.child(ChildNumber(0)).unwrap());
    }

    #[test]
    fn test_public_key_cache_is_shared() {
        let master = master();
        let expected = master.neuter().public_key_bytes();

        let fresh = ExtendedKey::<Bls12381>::from_string(MASTER_XPRV, Network::Mainnet.prefixes()).unwrap();
        let observed: Vec<PublicKeyBytes> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| fresh.public_key_bytes())).collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        assert!(observed.iter().all(|bytes| *bytes == expected));
        // every reader got the same cached instance
        assert!(std::ptr::eq(fresh.public_key(), fresh.public_key()));
    }
}
