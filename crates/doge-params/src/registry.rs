//! Active parameter set selection
//!
//! A [`Registry`] starts unselected and moves to selected the first time a
//! network is chosen. Selecting again replaces the active set (last write
//! wins); there is no way back to unselected. Selection is expected to happen
//! during startup, before any thread that reads parameters is spawned.
//!
//! The process-wide registry is reached through the free functions in this
//! module. Code that wants an explicit handle can build its own [`Registry`]
//! or simply keep the `&'static ChainParams` returned by selection.

use crate::args::NetworkFlags;
use crate::chainparams::ChainParams;
use crate::network::Network;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Holder of the currently active parameter set
#[derive(Debug, Default)]
pub struct Registry {
    active: RwLock<Option<&'static ChainParams>>,
}

impl Registry {
    /// Create an unselected registry
    pub fn new() -> Self {
        Self {
            active: RwLock::new(None),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Make `network` the active network
    pub fn select(&self, network: Network) -> &'static ChainParams {
        let params = ChainParams::for_network(network);
        let previous = self.active.write().replace(params);

        match previous {
            Some(old) if old.network_id() != network => {
                debug!("Reselecting chain parameters: {} -> {}", old.network_id(), network);
            }
            Some(_) => debug!("Chain parameters for {} selected again", network),
            None => info!("Selected chain parameters for {}", network),
        }

        params
    }

    /// Select the network named by `flags`
    ///
    /// An invalid combination leaves the active set untouched.
    pub fn select_from_flags(&self, flags: &NetworkFlags) -> Result<&'static ChainParams> {
        let network = flags.network().map_err(|e| {
            warn!("Rejected network selection: {}", e);
            e
        })?;
        Ok(self.select(network))
    }

    /// Currently active parameters
    pub fn params(&self) -> Result<&'static ChainParams> {
        self.active.read().ok_or(Error::ParamsNotSelected)
    }

    /// Currently active network, if any
    pub fn network(&self) -> Option<Network> {
        self.active.read().map(ChainParams::network_id)
    }

    /// Check if a network has been selected
    pub fn is_selected(&self) -> bool {
        self.active.read().is_some()
    }
}

/// Sets the params returned by [`params`] to those for the given network
pub fn select_params(network: Network) -> &'static ChainParams {
    GLOBAL_REGISTRY.select(network)
}

/// Selects the network named by `flags`, or fails on an invalid combination
pub fn select_params_from_flags(flags: &NetworkFlags) -> Result<&'static ChainParams> {
    GLOBAL_REGISTRY.select_from_flags(flags)
}

/// Looks for `-regtest` or `-testnet` in the process arguments and selects
/// accordingly
///
/// The network options are picked out wherever they appear (see
/// [`NetworkFlags::split_args`]), so other arguments in front of them do not
/// hide them. Returns [`Error::InvalidNetworkCombination`] if both are given,
/// in which case nothing is selected.
pub fn select_params_from_command_line() -> Result<&'static ChainParams> {
    let (flags, _) = NetworkFlags::split_args(std::env::args().skip(1));
    select_params_from_flags(&flags)
}

/// Currently selected parameters, or [`Error::ParamsNotSelected`]
pub fn try_params() -> Result<&'static ChainParams> {
    GLOBAL_REGISTRY.params()
}

/// Currently selected parameters
///
/// # Panics
///
/// If no network has been selected yet. Reading parameters before selection
/// is a startup-order bug, never a recoverable condition.
pub fn params() -> &'static ChainParams {
    match try_params() {
        Ok(params) => params,
        Err(e) => panic!("{e}: select_params must run before params()"),
    }
}
