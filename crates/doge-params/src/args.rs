//! Network selection flags
//!
//! [`NetworkFlags`] derives [`clap::Args`] so a binary can flatten it into its
//! own parser. [`NetworkFlags::from_args`] reads the node's legacy
//! `-name[=value]` argument style directly, and [`NetworkFlags::split_args`]
//! picks the network options out of a mixed command line so the remainder can
//! go to clap.

use crate::network::Network;
use crate::{Error, Result};
use std::collections::HashMap;

/// The `-testnet` / `-regtest` switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::Args)]
pub struct NetworkFlags {
    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,
}

impl NetworkFlags {
    /// Flags for a specific network
    pub const fn for_network(network: Network) -> Self {
        match network {
            Network::Main => Self { testnet: false, regtest: false },
            Network::Testnet => Self { testnet: true, regtest: false },
            Network::Regtest => Self { testnet: false, regtest: true },
        }
    }

    /// Interpret legacy-style arguments (without the program name)
    ///
    /// Parsing stops at the first argument not starting with `-`. `--name` is
    /// the same as `-name`, the last occurrence of an option wins, a bare
    /// option or a non-zero value means true, and `-noname` means false
    /// unless `-name` is also given.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let settings = parse_parameters(args);
        Self {
            testnet: bool_arg(&settings, "testnet"),
            regtest: bool_arg(&settings, "regtest"),
        }
    }

    /// Pull the network options out of a mixed argument list
    ///
    /// Every `-testnet`, `-regtest`, `-notestnet` or `-noregtest` (in any
    /// single- or double-dash spelling, with or without `=value`) is
    /// interpreted as by [`NetworkFlags::from_args`], wherever it appears.
    /// All other arguments are returned in order, so a front end can hand
    /// them to its own parser.
    pub fn split_args<I, S>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (network, rest): (Vec<String>, Vec<String>) = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .partition(|arg| is_network_option(arg));
        (Self::from_args(network), rest)
    }

    /// Network these flags select
    pub fn network(&self) -> Result<Network> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(Error::InvalidNetworkCombination),
            (true, false) => Ok(Network::Testnet),
            (false, true) => Ok(Network::Regtest),
            (false, false) => Ok(Network::Main),
        }
    }
}

fn parse_parameters<I, S>(args: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut settings = HashMap::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some(stripped) = arg.strip_prefix('-') else {
            break;
        };
        let stripped = stripped.strip_prefix('-').unwrap_or(stripped);
        let (name, value) = stripped.split_once('=').unwrap_or((stripped, ""));
        settings.insert(name.to_string(), value.to_string());
    }

    let negated: Vec<(String, bool)> = settings
        .iter()
        .filter_map(|(name, value)| {
            let base = name.strip_prefix("no")?;
            Some((base.to_string(), interpret_bool(value)))
        })
        .collect();
    for (base, negation) in negated {
        settings
            .entry(base)
            .or_insert_with(|| if negation { "0" } else { "1" }.to_string());
    }

    settings
}

fn is_network_option(arg: &str) -> bool {
    let Some(stripped) = arg.strip_prefix('-') else {
        return false;
    };
    let stripped = stripped.strip_prefix('-').unwrap_or(stripped);
    let name = stripped.split_once('=').map_or(stripped, |(name, _)| name);
    matches!(name, "testnet" | "regtest" | "notestnet" | "noregtest")
}

fn bool_arg(settings: &HashMap<String, String>, name: &str) -> bool {
    settings.get(name).is_some_and(|value| interpret_bool(value))
}

fn interpret_bool(value: &str) -> bool {
    value.is_empty() || atoi(value) != 0
}

/// Leading integer of `s`, 0 if there is none
fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
