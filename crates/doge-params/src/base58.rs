//! Base58 version prefixes

use serde::Serialize;

/// Kinds of base58-encoded data, each with its own version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

impl Base58Type {
    /// Number of kinds
    pub const COUNT: usize = 5;

    /// All kinds, in table order
    pub const ALL: [Base58Type; Self::COUNT] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    const fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::ExtPublicKey => 3,
            Base58Type::ExtSecretKey => 4,
        }
    }
}

/// Version prefix for every [`Base58Type`]
///
/// The table can only be built from a function over all kinds, so no kind is
/// ever left without a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes([Vec<u8>; Base58Type::COUNT]);

impl Base58Prefixes {
    /// Build the table by asking `f` for each kind's prefix
    pub fn from_fn(mut f: impl FnMut(Base58Type) -> Vec<u8>) -> Self {
        Self(Base58Type::ALL.map(&mut f))
    }

    /// Prefix bytes for `kind`
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.0[kind.index()]
    }

    /// `(kind, prefix)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> {
        Base58Type::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Number of entries, always [`Base58Type::COUNT`]
    pub const fn len(&self) -> usize {
        Base58Type::COUNT
    }

    /// Never true
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for Base58Prefixes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Base58Type::COUNT))?;
        for (kind, prefix) in self.iter() {
            map.serialize_entry(&kind, &hex::encode(prefix))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_index() {
        for (i, kind) in Base58Type::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_from_fn_fills_every_kind() {
        let prefixes = Base58Prefixes::from_fn(|kind| vec![kind.index() as u8 + 1]);
        assert_eq!(prefixes.len(), Base58Type::COUNT);
        assert_eq!(prefixes.iter().count(), Base58Type::COUNT);
        assert_eq!(prefixes.get(Base58Type::SecretKey), &[3]);
        assert_eq!(prefixes.get(Base58Type::ExtSecretKey), &[5]);
    }
}
