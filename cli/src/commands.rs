use crate::args::{Args, Cmd};
use crate::error::{Error, Result};
use log::{debug, info, warn};
use olympus_bip32::{ChildNumber, DerivationPath, ExtendedKey, Network, Seed};
use rayon::ThreadPoolBuilder;
use zeroize::Zeroizing;

/// Lines printed on standard output. Several of them carry secrets.
pub type Output = Vec<Zeroizing<String>>;

pub fn run(cmd: &Cmd, args: &Args) -> Result<Output> {
    match cmd {
        Cmd::Seed { length } => seed(*length),
        Cmd::Master { seed } => master(seed, args.network),
        Cmd::Derive { key, path } => derive(key, path),
        Cmd::Inspect { key } => inspect(key),
        Cmd::Addresses { key, start, count } => addresses(key, *start, *count, args.worker_threads()),
        Cmd::Wif { key } => wif(key),
    }
}

fn parse_key(key: &str) -> Result<ExtendedKey> {
    Ok(key.trim().parse::<ExtendedKey>()?)
}

fn seed(length: usize) -> Result<Output> {
    let seed = Seed::generate(length)?;
    Ok(vec![Zeroizing::new(hex::encode(seed.as_bytes()))])
}

fn master(seed: &str, network: Network) -> Result<Output> {
    let seed = Zeroizing::new(hex::decode(seed.trim())?);
    let master: ExtendedKey = match ExtendedKey::new_master(seed.as_slice(), network.prefixes()) {
        Ok(master) => master,
        Err(olympus_bip32::Error::UnusableSeed) => return Err("the seed does not produce a usable master key, generate another seed".into()),
        Err(err) => return Err(err.into()),
    };
    Ok(vec![master.serialize()?, master.neuter().serialize()?])
}

fn derive(key: &str, path: &DerivationPath) -> Result<Output> {
    let key = parse_key(key)?;
    let derived = key.derive_path(path)?;
    debug!("derived {} at depth {}", path, derived.depth());

    let mut lines = vec![derived.serialize()?];
    if derived.is_private() {
        lines.push(derived.neuter().serialize()?);
    }
    Ok(lines)
}

fn inspect(key: &str) -> Result<Output> {
    let key = parse_key(key)?;
    let network = key.network().network().map(|network| network.as_str()).unwrap_or("unknown");
    let lines = vec![
        format!("network: {network}"),
        format!("kind: {}", if key.is_private() { "private" } else { "public" }),
        format!("depth: {}", key.depth()),
        format!("parent fingerprint: {}", hex::encode(key.parent_fingerprint())),
        format!("child number: {}", key.child_number()),
        format!("fingerprint: {}", hex::encode(key.fingerprint())),
        format!("address: {}", key.address()?),
    ];
    Ok(lines.into_iter().map(Zeroizing::new).collect())
}

fn addresses(key: &str, start: u32, count: u32, threads: usize) -> Result<Output> {
    let key = parse_key(key)?;
    let end = start.checked_add(count).filter(|end| *end <= ChildNumber::HARDENED_FLAG).ok_or(Error::IndexRange { start, count })?;

    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    info!("deriving {} addresses from index {} on {} threads", count, start, pool.current_num_threads());
    let children = pool.install(|| key.derive_children(start..end));

    let mut lines = Vec::with_capacity(children.len());
    for (child_number, child) in children {
        match child {
            Ok(child) => lines.push(Zeroizing::new(format!("{}\t{}", child_number, child.address()?))),
            // not retried, the index simply has no key
            Err(olympus_bip32::Error::InvalidChild) => warn!("skipping index {child_number}: no valid key at this index"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(lines)
}

fn wif(key: &str) -> Result<Output> {
    let key = parse_key(key)?;
    Ok(vec![key.wif()?])
}
